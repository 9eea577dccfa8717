//! Route definitions for the three analysis endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::{inspector, sherlock, whois};
use crate::state::AppState;

/// Analysis routes mounted at `/api`.
///
/// ```text
/// POST   /sherlock                  -> run_sherlock
/// POST   /whois                     -> run_whois
/// POST   /inspector                 -> run_inspector
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sherlock", post(sherlock::run_sherlock))
        .route("/whois", post(whois::run_whois))
        .route("/inspector", post(inspector::run_inspector))
}
