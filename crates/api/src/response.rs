//! Response envelopes for the analysis endpoints.
//!
//! Every success body carries `success: true` and a UTC `timestamp`; every
//! error body is an [`ErrorResponse`].

use osint_core::types::{EnumerationSummary, InspectorResult, SiteResult, Timestamp, WhoisRecord};
use serde::Serialize;

/// `POST /api/sherlock` success body.
#[derive(Debug, Serialize)]
pub struct SherlockResponse {
    pub success: bool,
    pub username: String,
    pub timestamp: Timestamp,
    pub results: Vec<SiteResult>,
    /// Serialized inline as `total_sites` / `found_profiles`.
    #[serde(flatten)]
    pub summary: EnumerationSummary,
}

/// `POST /api/whois` success body.
#[derive(Debug, Serialize)]
pub struct WhoisResponse {
    pub success: bool,
    /// The normalized domain actually looked up.
    pub domain: String,
    pub timestamp: Timestamp,
    pub whois_data: WhoisRecord,
    /// Unparsed server response; the normalized record is advisory.
    pub raw_whois: String,
}

/// `POST /api/inspector` success body.
#[derive(Debug, Serialize)]
pub struct InspectorResponse {
    pub success: bool,
    pub phone: String,
    pub timestamp: Timestamp,
    pub results: InspectorResult,
    pub raw_output: String,
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: details.into(),
        }
    }
}
