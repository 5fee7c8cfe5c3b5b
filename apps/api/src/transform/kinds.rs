//! The static table of transformation kinds offered to the user.
//!
//! Eight kinds, each with a base instruction sent to the model. Spelling
//! correction is deliberately not part of this table — it has its own
//! instruction and its own endpoint (see `pipeline::correct_text`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    Improve,
    Reformulate,
    Summarize,
    Expand,
    Creative,
    Professional,
    Accessible,
    Engaging,
}

impl TransformKind {
    pub fn id(&self) -> &'static str {
        match self {
            TransformKind::Improve => "improve",
            TransformKind::Reformulate => "reformulate",
            TransformKind::Summarize => "summarize",
            TransformKind::Expand => "expand",
            TransformKind::Creative => "creative",
            TransformKind::Professional => "professional",
            TransformKind::Accessible => "accessible",
            TransformKind::Engaging => "engaging",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransformKind::Improve => "Improve",
            TransformKind::Reformulate => "Reformulate",
            TransformKind::Summarize => "Summarize",
            TransformKind::Expand => "Expand",
            TransformKind::Creative => "Creative",
            TransformKind::Professional => "Professional",
            TransformKind::Accessible => "Simplify",
            TransformKind::Engaging => "Engaging",
        }
    }

    /// Base instruction for the model, before the platform modifier.
    pub fn instruction(&self) -> &'static str {
        match self {
            TransformKind::Improve => {
                "Improve this text by making it more engaging, professional and fluid \
                 while keeping the same main message"
            }
            TransformKind::Reformulate => {
                "Reformulate this text using different words but keeping exactly the \
                 same meaning and intention"
            }
            TransformKind::Summarize => {
                "Create a concise summary of this text keeping only the most important points"
            }
            TransformKind::Expand => {
                "Expand this text by adding more details, examples and explanations to \
                 make it more complete"
            }
            TransformKind::Creative => {
                "Rewrite this text in a more creative and original way, with a more \
                 captivating and innovative style"
            }
            TransformKind::Professional => {
                "Adapt this text for a professional context with a formal tone \
                 appropriate for business"
            }
            TransformKind::Accessible => {
                "Simplify this text to make it more accessible and easy to understand \
                 for a wide audience"
            }
            TransformKind::Engaging => {
                "Make this text more captivating and engaging to maintain the reader's attention"
            }
        }
    }

    /// Short description shown on the transformation card in the UI.
    pub fn description(&self) -> &'static str {
        match self {
            TransformKind::Improve => "More professional and engaging style",
            TransformKind::Reformulate => "Same ideas, new words",
            TransformKind::Summarize => "Condensed version of key points",
            TransformKind::Expand => "More detailed and complete version",
            TransformKind::Creative => "Creative and original approach",
            TransformKind::Professional => "Formal and business tone",
            TransformKind::Accessible => "Simpler and more accessible",
            TransformKind::Engaging => "More captivating and engaging",
        }
    }
}

/// All transformation kinds, in UI display order.
pub const ALL_KINDS: &[TransformKind] = &[
    TransformKind::Improve,
    TransformKind::Reformulate,
    TransformKind::Summarize,
    TransformKind::Expand,
    TransformKind::Creative,
    TransformKind::Professional,
    TransformKind::Accessible,
    TransformKind::Engaging,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ids_are_unique() {
        let mut ids: Vec<&str> = ALL_KINDS.iter().map(|k| k.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ALL_KINDS.len(), "kind ids must be unique");
    }

    #[test]
    fn test_kind_deserializes_from_wire_id() {
        let k: TransformKind = serde_json::from_str("\"summarize\"").unwrap();
        assert_eq!(k, TransformKind::Summarize);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let r: Result<TransformKind, _> = serde_json::from_str("\"translate\"");
        assert!(r.is_err(), "unknown transformation kinds must be rejected");
    }

    #[test]
    fn test_accessible_kind_is_labeled_simplify() {
        assert_eq!(TransformKind::Accessible.label(), "Simplify");
    }
}
