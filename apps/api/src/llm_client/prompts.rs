// Cross-cutting prompt constants for the completion client.
// Per-kind base instructions live with the kinds table (`transform::kinds`);
// this file holds what every call shares.

/// System prompt for every transformation call. The hard rules mirror the
/// contract the sanitizer assumes: no prefixes, no wrapping quotes, and a
/// reply in the same language as the input.
pub const SYSTEM_PROMPT: &str = "You are an expert in writing and content transformation. \
Your task is to transform texts according to the given instructions.

Important rules:
- Always keep the main message and intention of the original text
- Adapt the style according to the request while remaining coherent
- Ensure the transformed text is of professional quality
- STRICTLY respect character limits if specified
- Return ONLY the transformed text, without explanations, without prefixes, without quotes
- Never start with \"Improved message:\", \"Here is\", \"Transformed text:\" or any other prefix
- Return directly the final content
- ALWAYS respond in the same language as the input text";

/// Instruction for the spelling-correction operation. Deliberately narrow:
/// fixes only spelling, typos and basic grammar, never word choice or style.
pub const CORRECTION_INSTRUCTION: &str = "Fix ONLY spelling errors, typos, and basic grammar \
mistakes in this text. Do NOT change any words, do NOT rephrase anything, do NOT change the \
meaning or style. Keep the exact same vocabulary and sentence structure. Only correct obvious \
spelling mistakes and punctuation errors. If a word is spelled correctly but you think there \
might be a \"better\" word, do NOT change it.";

/// Builds the user message embedding the quoted original text and the task.
pub fn user_message(text: &str, instruction: &str) -> String {
    format!("Original text: \"{text}\"\n\nTask: {instruction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_embeds_text_and_task() {
        let msg = user_message("helo wrold", "Fix spelling");
        assert!(msg.starts_with("Original text: \"helo wrold\""));
        assert!(msg.ends_with("Task: Fix spelling"));
    }

    #[test]
    fn test_system_prompt_mandates_same_language_reply() {
        assert!(SYSTEM_PROMPT.contains("same language as the input text"));
    }
}
