//! Response sanitizer — strips wrapping quotes and boilerplate prefixes the
//! model sometimes adds despite being told not to.

/// Boilerplate prefixes, in priority order. Longer phrases that contain a
/// shorter one ("Here is the improved text:" vs "Here is:") are listed so the
/// first match wins and exactly one prefix is removed.
const BOILERPLATE_PREFIXES: &[&str] = &[
    "Improved message:",
    "Improved text:",
    "Here is the improved text:",
    "Transformed text:",
    "Result:",
    "Here is:",
    "Improved version:",
    "New version:",
];

/// Cleans a raw completion string.
///
/// Steps, in order: strip one leading and one trailing quote character if
/// present; remove the first boilerplate prefix that matches
/// (case-insensitive, anchored at the start); if the remainder is wrapped in
/// a matching quote pair, strip that pair once; trim whitespace. Idempotent
/// on already-clean input. Internal quotes and punctuation are left alone.
pub fn sanitize(raw: &str) -> String {
    let mut text = raw;

    // One leading and one trailing quote, independently.
    if let Some(rest) = text.strip_prefix(['"', '\'']) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(['"', '\'']) {
        text = rest;
    }

    // Exactly one boilerplate prefix, first match in priority order.
    for prefix in BOILERPLATE_PREFIXES {
        let matches = text
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if matches {
            text = text[prefix.len()..].trim_start();
            break;
        }
    }

    // A remaining fully-wrapping matched quote pair.
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            text = &text[1..text.len() - 1];
            break;
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_passes_through() {
        assert_eq!(sanitize("Hello world"), "Hello world");
    }

    #[test]
    fn test_strips_wrapping_double_quotes() {
        assert_eq!(sanitize("\"Hello world\""), "Hello world");
    }

    #[test]
    fn test_strips_wrapping_single_quotes() {
        assert_eq!(sanitize("'Hello world'"), "Hello world");
    }

    #[test]
    fn test_strips_boilerplate_prefix() {
        assert_eq!(sanitize("Improved text: Hello"), "Hello");
        assert_eq!(sanitize("Result: Hello"), "Hello");
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        assert_eq!(sanitize("IMPROVED TEXT: Hello"), "Hello");
        assert_eq!(sanitize("here is: Hello"), "Hello");
    }

    #[test]
    fn test_longest_prefix_wins_over_contained_one() {
        // "Here is the improved text:" must be removed whole, not just "Here is:"
        assert_eq!(sanitize("Here is the improved text: Hello"), "Hello");
    }

    #[test]
    fn test_quoted_text_behind_prefix_is_unwrapped() {
        // Outer quotes go first, then the prefix, then the inner pair.
        assert_eq!(sanitize("\"Transformed text: 'Hello world'\""), "Hello world");
    }

    #[test]
    fn test_internal_quotes_are_preserved() {
        assert_eq!(
            sanitize("She said \"hello\" and left"),
            "She said \"hello\" and left"
        );
    }

    #[test]
    fn test_mismatched_quote_pair_is_not_stripped_as_pair() {
        // Leading " and trailing ' are each stripped once by the first step,
        // but the pair rule never fires on mismatched quotes.
        assert_eq!(sanitize("\"Hello'"), "Hello");
        assert_eq!(sanitize("Result: \"Hello"), "\"Hello");
    }

    #[test]
    fn test_idempotent_on_realistic_outputs() {
        let samples = [
            "Hello world",
            "\"Hello world\"",
            "Improved text: Hello",
            "Here is the improved text: Hello",
            "  padded  ",
            "",
            "Ca va \"bien\" !",
        ];
        for s in samples {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once, "sanitize must be idempotent for {s:?}");
        }
    }

    #[test]
    fn test_non_ascii_input_is_safe() {
        assert_eq!(sanitize("héllo wörld"), "héllo wörld");
        assert_eq!(sanitize("\u{201c}typographic quotes stay\u{201d}"), "\u{201c}typographic quotes stay\u{201d}");
    }

    #[test]
    fn test_only_first_matching_prefix_is_removed() {
        // The second prefix survives; a single pass removes exactly one.
        assert_eq!(sanitize("Result: Improved text: Hello"), "Improved text: Hello");
    }
}
