//! Per-session suggestion state.
//!
//! The service backs a single logical UI session: the latest produced text
//! for each transformation kind, overwritten on repeat and cleared when the
//! user clears the working text. Transient by design — only history is
//! persisted.

use std::collections::HashMap;

/// Latest suggestion per transformation kind id.
#[derive(Debug, Default)]
pub struct SuggestionSet {
    suggestions: HashMap<String, String>,
}

impl SuggestionSet {
    /// Stores the latest text for a kind, replacing any prior value.
    pub fn put(&mut self, kind_id: &str, text: String) {
        self.suggestions.insert(kind_id.to_string(), text);
    }

    pub fn all(&self) -> &HashMap<String, String> {
        &self.suggestions
    }

    pub fn clear(&mut self) {
        self.suggestions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_overwrites_prior_suggestion_for_same_kind() {
        let mut set = SuggestionSet::default();
        set.put("improve", "first".to_string());
        set.put("improve", "second".to_string());
        assert_eq!(set.all().len(), 1);
        assert_eq!(set.all()["improve"], "second");
    }

    #[test]
    fn test_clear_empties_all_kinds() {
        let mut set = SuggestionSet::default();
        set.put("improve", "a".to_string());
        set.put("summarize", "b".to_string());
        set.clear();
        assert!(set.all().is_empty());
    }
}
