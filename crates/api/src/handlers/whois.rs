//! Handler for domain WHOIS lookups.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use osint_core::validation::{normalize_domain, validate_subject};
use osint_core::whois::parse_whois;

use crate::error::{AnalysisKind, AppError, AppResult};
use crate::response::WhoisResponse;
use crate::state::AppState;

/// Request body for `POST /api/whois`.
#[derive(Debug, Deserialize)]
pub struct WhoisRequest {
    pub domain: Option<String>,
}

/// POST /api/whois
///
/// Accepts a bare domain or a URL; the scheme, a leading `www.` and any
/// path are stripped before the lookup.
pub async fn run_whois(
    State(state): State<AppState>,
    payload: Result<Json<WhoisRequest>, JsonRejection>,
) -> AppResult<Json<WhoisResponse>> {
    let Json(input) = payload?;
    let domain = validate_subject("Domain", input.domain.as_deref())
        .and_then(|d| normalize_domain(&d))
        .map_err(|e| AppError::analysis(AnalysisKind::Whois, e))?;

    tracing::info!(%domain, "Running WHOIS lookup");

    let raw_whois = state
        .whois
        .lookup(&domain)
        .await
        .map_err(|e| AppError::analysis(AnalysisKind::Whois, e))?;

    let whois_data = parse_whois(&raw_whois);

    tracing::info!(
        %domain,
        registrar = %whois_data.registrar,
        response_bytes = raw_whois.len(),
        "WHOIS lookup complete"
    );

    Ok(Json(WhoisResponse {
        success: true,
        domain,
        timestamp: chrono::Utc::now(),
        whois_data,
        raw_whois,
    }))
}
