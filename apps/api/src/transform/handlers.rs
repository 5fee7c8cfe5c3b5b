use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::profiles::{Platform, ALL_PLATFORMS};
use crate::state::AppState;
use crate::transform::kinds::{TransformKind, ALL_KINDS};
use crate::transform::pipeline::{correct_text, transform_text, CorrectionOutcome, TransformOutcome};

#[derive(Debug, Deserialize)]
pub struct TransformRequest {
    pub text: String,
    pub kind: TransformKind,
    #[serde(default)]
    pub profile: Platform,
}

#[derive(Debug, Deserialize)]
pub struct CorrectRequest {
    pub text: String,
    #[serde(default)]
    pub profile: Platform,
}

/// POST /api/v1/transform
pub async fn handle_transform(
    State(state): State<AppState>,
    Json(req): Json<TransformRequest>,
) -> Result<Json<TransformOutcome>, AppError> {
    let outcome = transform_text(&state, req.kind, &req.text, req.profile).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/correct
pub async fn handle_correct(
    State(state): State<AppState>,
    Json(req): Json<CorrectRequest>,
) -> Result<Json<CorrectionOutcome>, AppError> {
    let outcome = correct_text(&state, &req.text, req.profile).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/suggestions
pub async fn handle_get_suggestions(
    State(state): State<AppState>,
) -> Json<std::collections::HashMap<String, String>> {
    Json(state.suggestions.lock().await.all().clone())
}

/// DELETE /api/v1/suggestions
/// The UI calls this when the working text is cleared.
pub async fn handle_clear_suggestions(State(state): State<AppState>) -> StatusCode {
    state.suggestions.lock().await.clear();
    StatusCode::NO_CONTENT
}

#[derive(Serialize)]
pub struct PlatformInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub char_limit: Option<u32>,
    pub style_notes: &'static str,
}

#[derive(Serialize)]
pub struct KindInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct Catalog {
    pub profiles: Vec<PlatformInfo>,
    pub transformations: Vec<KindInfo>,
}

/// GET /api/v1/catalog
/// The static tables the UI renders its selectors and cards from.
pub async fn handle_catalog() -> Json<Catalog> {
    Json(Catalog {
        profiles: ALL_PLATFORMS
            .iter()
            .map(|p| PlatformInfo {
                id: p.id(),
                label: p.label(),
                char_limit: p.char_limit(),
                style_notes: p.style_notes(),
            })
            .collect(),
        transformations: ALL_KINDS
            .iter()
            .map(|k| KindInfo {
                id: k.id(),
                label: k.label(),
                description: k.description(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_request_defaults_profile_to_general() {
        let req: TransformRequest =
            serde_json::from_str(r#"{"text":"hello","kind":"improve"}"#).unwrap();
        assert_eq!(req.profile, Platform::General);
    }

    #[test]
    fn test_transform_request_accepts_known_profile() {
        let req: TransformRequest =
            serde_json::from_str(r#"{"text":"hello","kind":"expand","profile":"linkedin"}"#)
                .unwrap();
        assert_eq!(req.profile, Platform::Linkedin);
        assert_eq!(req.kind, TransformKind::Expand);
    }

    #[test]
    fn test_catalog_lists_all_platforms_and_kinds() {
        let catalog = Catalog {
            profiles: ALL_PLATFORMS
                .iter()
                .map(|p| PlatformInfo {
                    id: p.id(),
                    label: p.label(),
                    char_limit: p.char_limit(),
                    style_notes: p.style_notes(),
                })
                .collect(),
            transformations: ALL_KINDS
                .iter()
                .map(|k| KindInfo {
                    id: k.id(),
                    label: k.label(),
                    description: k.description(),
                })
                .collect(),
        };
        assert_eq!(catalog.profiles.len(), 10);
        assert_eq!(catalog.transformations.len(), 8);
    }
}
