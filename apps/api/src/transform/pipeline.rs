//! Transformation orchestrator.
//!
//! Flow: validate → compose prompt → completion call → sanitize →
//!       update suggestions → append history → return outcome.
//!
//! One request runs at a time from the session's point of view; the UI
//! disables its controls while a request is in flight, so no internal
//! queueing or re-entrancy guard exists here.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::history::{HistoryDraft, HistoryEntry};
use crate::llm_client::prompts::CORRECTION_INSTRUCTION;
use crate::llm_client::CompletionBackend;
use crate::profiles::Platform;
use crate::state::AppState;
use crate::transform::composer::compose;
use crate::transform::kinds::TransformKind;
use crate::transform::sanitizer::sanitize;

/// Input may exceed the platform limit by this factor before the request is
/// rejected locally — the model is asked to shorten, within reason.
const LENGTH_SLACK: f64 = 1.5;

#[derive(Debug, Serialize)]
pub struct TransformOutcome {
    pub transformed: String,
    pub kind: TransformKind,
    pub entry: HistoryEntry,
}

#[derive(Debug, Serialize)]
pub struct CorrectionOutcome {
    pub corrected: String,
    /// False when the model found nothing to fix.
    pub changed: bool,
    /// Recorded only when the correction changed the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<HistoryEntry>,
}

/// Rejects empty input, and over-long input when the platform defines a
/// limit. Runs before any network I/O.
fn validate(text: &str, platform: Platform, enforce_limit: bool, empty_msg: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyInput(empty_msg.to_string()));
    }

    if enforce_limit {
        if let Some(limit) = platform.char_limit() {
            let count = text.chars().count();
            if count as f64 > limit as f64 * LENGTH_SLACK {
                return Err(AppError::LengthExceeded {
                    label: platform.label(),
                    limit,
                });
            }
        }
    }

    Ok(())
}

/// Runs one transformation request end to end.
pub async fn transform_text(
    state: &AppState,
    kind: TransformKind,
    text: &str,
    platform: Platform,
) -> Result<TransformOutcome, AppError> {
    validate(text, platform, true, "No text to transform")?;

    let instruction = compose(kind.instruction(), platform);
    info!("Transforming ({}) for platform {}", kind.id(), platform.id());

    let raw = state.llm.complete(&instruction, text).await?;
    let transformed = sanitize(&raw);

    // Latest suggestion per kind, overwritten on repeat.
    state
        .suggestions
        .lock()
        .await
        .put(kind.id(), transformed.clone());

    let entry = state
        .history
        .append(HistoryDraft {
            original_text: text.to_string(),
            transformed_text: transformed.clone(),
            transformation_id: kind.id().to_string(),
            transformation_label: kind.label().to_string(),
            content_profile_id: platform.id().to_string(),
            content_profile_label: platform.label().to_string(),
        })
        .await?;

    Ok(TransformOutcome {
        transformed,
        kind,
        entry,
    })
}

/// Runs a spelling correction. No length guard, and the prompt always
/// composes with the neutral profile; `platform` is only recorded on the
/// resulting history entry so the UI can show where the user was working.
pub async fn correct_text(
    state: &AppState,
    text: &str,
    platform: Platform,
) -> Result<CorrectionOutcome, AppError> {
    validate(text, platform, false, "No text to correct")?;

    info!("Correcting text ({} chars)", text.chars().count());

    let raw = state
        .llm
        .complete(&compose(CORRECTION_INSTRUCTION, Platform::General), text)
        .await?;
    let corrected = sanitize(&raw);

    if corrected == text {
        return Ok(CorrectionOutcome {
            corrected,
            changed: false,
            entry: None,
        });
    }

    let entry = state
        .history
        .append(HistoryDraft {
            original_text: text.to_string(),
            transformed_text: corrected.clone(),
            transformation_id: "correction".to_string(),
            transformation_label: "Correction".to_string(),
            content_profile_id: platform.id().to_string(),
            content_profile_label: platform.label().to_string(),
        })
        .await?;

    Ok(CorrectionOutcome {
        corrected,
        changed: true,
        entry: Some(entry),
    })
}
