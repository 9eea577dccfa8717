//! Handler for phone number inspection.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use osint_core::inspector::parse_inspector_output;
use osint_core::validation::validate_subject;

use crate::error::{AnalysisKind, AppError, AppResult};
use crate::handlers::run_tool;
use crate::response::InspectorResponse;
use crate::state::AppState;

/// Request body for `POST /api/inspector`.
#[derive(Debug, Deserialize)]
pub struct InspectorRequest {
    pub phone: Option<String>,
}

/// POST /api/inspector
pub async fn run_inspector(
    State(state): State<AppState>,
    payload: Result<Json<InspectorRequest>, JsonRejection>,
) -> AppResult<Json<InspectorResponse>> {
    let Json(input) = payload?;
    let phone = validate_subject("Phone number", input.phone.as_deref())
        .map_err(|e| AppError::analysis(AnalysisKind::Inspector, e))?;

    tracing::info!(%phone, "Running phone inspection");

    let output = run_tool(
        AnalysisKind::Inspector,
        &state.inspector,
        std::slice::from_ref(&phone),
    )
    .await?;

    let results = parse_inspector_output(&output.stdout);

    tracing::info!(
        %phone,
        platforms = results.social_media.len(),
        reputation_entries = results.reputation.len(),
        duration_ms = output.duration_ms,
        "Phone inspection complete"
    );

    Ok(Json(InspectorResponse {
        success: true,
        phone,
        timestamp: chrono::Utc::now(),
        results,
        raw_output: output.stdout,
    }))
}
