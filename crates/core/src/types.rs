//! Normalized result schema shared by every analysis kind.
//!
//! All values are built fresh per request by the parsers and never mutated
//! after construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Placeholder used for WHOIS fields absent from the source text.
pub const NOT_AVAILABLE: &str = "N/A";

/// Whether a profile or account was detected. Serialized as `found` / `not_found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Found,
    NotFound,
}

impl Presence {
    /// Map a tool-reported status label onto the closed vocabulary.
    ///
    /// `found` and `claimed` (any case) mean the profile exists; every other
    /// label, including an empty one, is treated as not found.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("found") || label.eq_ignore_ascii_case("claimed") {
            Self::Found
        } else {
            Self::NotFound
        }
    }
}

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// One candidate site checked by the enumeration tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteResult {
    /// Canonical site name as reported by the tool.
    pub site: String,
    pub status: Presence,
    /// Profile URL, empty when the tool did not resolve one.
    pub url: String,
    /// Response time in milliseconds, when the tool reports it.
    pub response_time: Option<f64>,
}

/// Counters derived from a sequence of [`SiteResult`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumerationSummary {
    pub total_sites: usize,
    pub found_profiles: usize,
}

impl EnumerationSummary {
    pub fn from_results(results: &[SiteResult]) -> Self {
        Self {
            total_sites: results.len(),
            found_profiles: results
                .iter()
                .filter(|r| r.status == Presence::Found)
                .count(),
        }
    }
}

// ---------------------------------------------------------------------------
// WHOIS
// ---------------------------------------------------------------------------

/// Canonical view of a WHOIS record.
///
/// Every field is always present; text fields default to [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisRecord {
    pub registrar: String,
    pub creation_date: String,
    pub expiration_date: String,
    pub updated_date: String,
    pub name_servers: Vec<String>,
    pub registrant_org: String,
    pub admin_email: String,
    pub tech_email: String,
    pub status: Vec<String>,
}

// ---------------------------------------------------------------------------
// Inspector
// ---------------------------------------------------------------------------

/// Platforms recognised in the inspector's social-media section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Instagram,
    Amazon,
    Snapchat,
    Unknown,
}

/// Kinds of reputation information reported by the lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoType {
    Carrier,
    Location,
    LineType,
    Other,
}

/// Structured view of the inspector's console output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectorResult {
    /// Reserved; the inspector output carries no section for it yet.
    pub phone_info: BTreeMap<String, String>,
    pub social_media: BTreeMap<Platform, Presence>,
    /// Raw descriptive line per info type; later lines overwrite earlier ones.
    pub reputation: BTreeMap<InfoType, String>,
    /// Reserved; the inspector output carries no section for it yet.
    pub carrier_info: BTreeMap<String, String>,
}
