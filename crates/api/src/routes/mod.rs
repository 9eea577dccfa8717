pub mod analysis;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST /sherlock     username enumeration
/// POST /whois        domain WHOIS lookup
/// POST /inspector    phone number inspection
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(analysis::router())
}
