//! Prompt composer — merges a base instruction with the platform modifier.
//!
//! Pure: output depends only on the inputs and the static profile table.

use crate::profiles::Platform;

/// Builds the final instruction sent to the model.
///
/// `General` contributes no modifier. Every other platform appends an
/// upper-cased header, its style notes, a strict character-limit directive
/// when the platform defines one, and its fixed directive lines.
pub fn compose(instruction: &str, platform: Platform) -> String {
    if platform == Platform::General {
        return instruction.to_string();
    }

    let mut prompt = String::from(instruction);
    prompt.push_str(&format!(
        "\n\nSPECIFIC CONTEXT - {}:\n",
        platform.label().to_uppercase()
    ));
    prompt.push_str(&format!("- {}\n", platform.style_notes()));

    if let Some(limit) = platform.char_limit() {
        prompt.push_str(&format!("- STRICT LIMIT: Maximum {limit} characters\n"));
    }

    for directive in platform.directives() {
        prompt.push_str(&format!("- {directive}\n"));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier_lines(platform: Platform) -> Vec<String> {
        let base = "Improve this text";
        let composed = compose(base, platform);
        composed
            .strip_prefix(base)
            .expect("composed prompt must start with the base instruction")
            .lines()
            .filter(|l| l.starts_with("- "))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_general_appends_nothing() {
        assert_eq!(compose("Improve this text", Platform::General), "Improve this text");
    }

    #[test]
    fn test_twitter_modifier_has_header_limit_and_directives() {
        let composed = compose("Improve this text", Platform::Twitter);
        assert!(composed.contains("SPECIFIC CONTEXT - TWITTER/X:"));
        assert!(composed.contains("- STRICT LIMIT: Maximum 280 characters"));
        assert!(composed.contains("- Use 1-3 relevant hashtags"));
    }

    #[test]
    fn test_modifier_bullet_count_is_notes_plus_limit_plus_directives() {
        // twitter: notes + limit + 3 directives
        assert_eq!(modifier_lines(Platform::Twitter).len(), 5);
        // email: notes + no limit + 4 directives
        assert_eq!(modifier_lines(Platform::Email).len(), 5);
        // linkedin: notes + limit + 4 directives
        assert_eq!(modifier_lines(Platform::Linkedin).len(), 6);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose("Summarize this", Platform::Blog);
        let b = compose("Summarize this", Platform::Blog);
        assert_eq!(a, b);
    }

    #[test]
    fn test_platform_without_limit_has_no_limit_directive() {
        let composed = compose("x", Platform::Chat);
        assert!(!composed.contains("STRICT LIMIT"));
    }
}
