//! Handler for username enumeration across social sites.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use osint_core::enumeration::parse_enumeration_output;
use osint_core::types::EnumerationSummary;
use osint_core::validation::validate_subject;

use crate::error::{AnalysisKind, AppError, AppResult};
use crate::handlers::run_tool;
use crate::response::SherlockResponse;
use crate::state::AppState;

/// Request body for `POST /api/sherlock`.
#[derive(Debug, Deserialize)]
pub struct SherlockRequest {
    pub username: Option<String>,
}

/// POST /api/sherlock
///
/// Run the enumeration tool for `username` and return one result per
/// checked site plus summary counters.
pub async fn run_sherlock(
    State(state): State<AppState>,
    payload: Result<Json<SherlockRequest>, JsonRejection>,
) -> AppResult<Json<SherlockResponse>> {
    let Json(input) = payload?;
    let username = validate_subject("Username", input.username.as_deref())
        .map_err(|e| AppError::analysis(AnalysisKind::Sherlock, e))?;

    tracing::info!(%username, "Running username enumeration");

    let args = vec![
        username.clone(),
        "--json".to_string(),
        "--timeout".to_string(),
        state.config.sherlock_site_timeout_secs.to_string(),
    ];
    let output = run_tool(AnalysisKind::Sherlock, &state.sherlock, &args).await?;

    let results = parse_enumeration_output(&output.stdout);
    let summary = EnumerationSummary::from_results(&results);

    tracing::info!(
        %username,
        total_sites = summary.total_sites,
        found_profiles = summary.found_profiles,
        duration_ms = output.duration_ms,
        "Username enumeration complete"
    );

    Ok(Json(SherlockResponse {
        success: true,
        username,
        timestamp: chrono::Utc::now(),
        results,
        summary,
    }))
}
