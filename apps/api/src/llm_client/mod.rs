/// Completion client — the single point of entry for all model calls.
///
/// ARCHITECTURAL RULE: no other module may call the completion API directly.
/// All model interactions MUST go through this module.
///
/// Model: gpt-4o-mini (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all completion calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Raised before any network I/O when no credential is configured.
    #[error("API key not configured. Set OPENAI_API_KEY in your environment or .env file")]
    MissingCredential,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Well-formed HTTP response that carried no usable completion text.
    #[error("No transformation generated")]
    EmptyResult,

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    error: UpstreamErrorBody,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

/// The seam between the transformation pipeline and the completion API.
/// `CompletionClient` is the real backend; tests script replies through a
/// stub implementation instead of touching the network.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends one completion request and returns the raw completion text.
    /// The caller is responsible for sanitizing the result.
    async fn complete(&self, instruction: &str, text: &str) -> Result<String, CompletionError>;
}

/// The single completion client shared by all handlers.
/// One outbound request per invocation — no retry, no caching. Every failure
/// surfaces to the user, who decides whether to trigger a new attempt.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl CompletionClient {
    /// The credential is optional here: its absence only fails the individual
    /// call, never startup.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, instruction: &str, text: &str) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingCredential)?;

        let user_message = prompts::user_message(text, instruction);
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompts::SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_message,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the upstream error message; fall back to the status code.
            let message = serde_json::from_str::<UpstreamError>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("API Error: {status}"));
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        extract_content(&body)
    }
}

/// Pulls the completion text out of a response body. Any unexpected shape —
/// bad JSON, no choices, null or blank content — counts as an empty result.
fn extract_content(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|_| CompletionError::EmptyResult)?;

    if let Some(usage) = &parsed.usage {
        debug!(
            "Completion call succeeded: prompt_tokens={}, completion_tokens={}",
            usage.prompt_tokens, usage.completion_tokens
        );
    }

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or(CompletionError::EmptyResult)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_extracted_from_first_choice() {
        let body = r#"{"choices":[{"message":{"content":" Hello world "}}]}"#;
        assert_eq!(extract_content(body).unwrap(), "Hello world");
    }

    #[test]
    fn test_missing_choices_is_empty_result() {
        let body = r#"{"id":"cmpl-1","object":"chat.completion"}"#;
        assert!(matches!(extract_content(body), Err(CompletionError::EmptyResult)));
    }

    #[test]
    fn test_null_content_is_empty_result() {
        let body = r#"{"choices":[{"message":{"content":null}}]}"#;
        assert!(matches!(extract_content(body), Err(CompletionError::EmptyResult)));
    }

    #[test]
    fn test_whitespace_only_content_is_empty_result() {
        let body = r#"{"choices":[{"message":{"content":"   "}}]}"#;
        assert!(matches!(extract_content(body), Err(CompletionError::EmptyResult)));
    }

    #[test]
    fn test_non_json_body_is_empty_result() {
        assert!(matches!(extract_content("<html>"), Err(CompletionError::EmptyResult)));
    }

    #[test]
    fn test_missing_credential_fails_before_network() {
        let client = CompletionClient::new(None);
        let err = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(client.complete("Improve", "text"))
            .unwrap_err();
        assert!(matches!(err, CompletionError::MissingCredential));
    }

    #[test]
    fn test_upstream_error_body_parses() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let e: UpstreamError = serde_json::from_str(body).unwrap();
        assert_eq!(e.error.message, "Incorrect API key provided");
    }
}
