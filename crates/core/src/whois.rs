//! WHOIS text parsing and field normalization.
//!
//! Registrars share no schema, so matching is permissive: each canonical
//! field accepts an ordered list of key spellings, and name servers and
//! status codes are collected by substring match on the key.

use std::collections::HashMap;

use crate::types::{WhoisRecord, NOT_AVAILABLE};

// ---------------------------------------------------------------------------
// Synonym tables
// ---------------------------------------------------------------------------

// Keys are lower-cased with whitespace runs collapsed to `_`.

const REGISTRAR_KEYS: &[&str] = &["registrar", "registrar_name"];

const CREATION_DATE_KEYS: &[&str] = &["creation_date", "created_on", "registered_on", "created"];

const EXPIRATION_DATE_KEYS: &[&str] = &[
    "expiration_date",
    "expires_on",
    "expiry_date",
    "registry_expiry_date",
    "registrar_registration_expiration_date",
];

const UPDATED_DATE_KEYS: &[&str] = &["updated_date", "last_modified", "last_updated"];

const REGISTRANT_ORG_KEYS: &[&str] = &["registrant_organization", "registrant"];

const ADMIN_EMAIL_KEYS: &[&str] = &["admin_email", "administrative_contact_email"];

const TECH_EMAIL_KEYS: &[&str] = &["tech_email", "technical_contact_email"];

/// Key substrings that mark a name-server line.
const NAME_SERVER_NEEDLES: &[&str] = &["name server", "nserver"];

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

/// Split a `key: value` line at its first colon.
///
/// Returns the lower-cased, trimmed key and the trimmed value; colons inside
/// the value are kept.
fn split_field(line: &str) -> Option<(String, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim().to_lowercase(), value.trim()))
}

/// Collapse a lower-cased key to its lookup form (`"creation date"` → `"creation_date"`).
fn normalize_key(key: &str) -> String {
    key.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Flat `key → value` view of a WHOIS response.
///
/// The first non-empty value seen for a key is kept.
#[derive(Debug, Default)]
pub struct WhoisFields {
    fields: HashMap<String, String>,
}

impl WhoisFields {
    pub fn parse(raw: &str) -> Self {
        let mut fields = HashMap::new();
        for (key, value) in raw.lines().filter_map(split_field) {
            let key = normalize_key(&key);
            if key.is_empty() || value.is_empty() {
                continue;
            }
            fields.entry(key).or_insert_with(|| value.to_string());
        }
        Self { fields }
    }

    /// Value under the first of `synonyms` that is present.
    pub fn lookup(&self, synonyms: &[&str]) -> Option<&str> {
        synonyms
            .iter()
            .find_map(|key| self.fields.get(*key))
            .map(String::as_str)
    }

    /// Like [`lookup`](Self::lookup), defaulting to `"N/A"`.
    pub fn lookup_or_default(&self, synonyms: &[&str]) -> String {
        self.lookup(synonyms).unwrap_or(NOT_AVAILABLE).to_string()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize raw WHOIS text into a [`WhoisRecord`]. Never fails; missing
/// fields default to `"N/A"` and missing lists are empty.
pub fn parse_whois(raw: &str) -> WhoisRecord {
    let fields = WhoisFields::parse(raw);

    WhoisRecord {
        registrar: fields.lookup_or_default(REGISTRAR_KEYS),
        creation_date: fields.lookup_or_default(CREATION_DATE_KEYS),
        expiration_date: fields.lookup_or_default(EXPIRATION_DATE_KEYS),
        updated_date: fields.lookup_or_default(UPDATED_DATE_KEYS),
        name_servers: extract_name_servers(raw),
        registrant_org: fields.lookup_or_default(REGISTRANT_ORG_KEYS),
        admin_email: fields.lookup_or_default(ADMIN_EMAIL_KEYS),
        tech_email: fields.lookup_or_default(TECH_EMAIL_KEYS),
        status: extract_domain_status(raw),
    }
}

/// Every value whose key mentions `name server` or `nserver`, in order.
pub fn extract_name_servers(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(split_field)
        .filter(|(key, _)| NAME_SERVER_NEEDLES.iter().any(|needle| key.contains(needle)))
        .filter(|(_, value)| !value.is_empty())
        .map(|(_, value)| value.to_string())
        .collect()
}

/// Every value whose key mentions `status`, skipping registry-level banners.
pub fn extract_domain_status(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(split_field)
        .filter(|(key, _)| key.contains("status") && !key.contains("registry"))
        .filter(|(_, value)| !value.is_empty())
        .map(|(_, value)| value.to_string())
        .collect()
}
