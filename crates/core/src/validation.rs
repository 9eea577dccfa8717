//! Request-subject validation and domain normalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Leading scheme and `www.` label stripped from WHOIS subjects.
static DOMAIN_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(https?://)?(www\.)?").expect("valid regex"));

/// Validate a required request subject and return it trimmed.
///
/// `field` is the human-readable field name used in the error message
/// (e.g. `"Username"`). Missing, empty and whitespace-only values are
/// rejected, as are values starting with `-`, which the external tools would
/// read as an option.
pub fn validate_subject(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    if value.starts_with('-') {
        return Err(CoreError::Validation(format!(
            "{field} must not start with '-'"
        )));
    }
    Ok(value.to_string())
}

/// Reduce a user-supplied domain or URL to the bare host used for lookup.
///
/// Strips a leading `http://` / `https://` and `www.`, then truncates at the
/// first `/`.
pub fn normalize_domain(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    let without_prefix = DOMAIN_PREFIX_RE.replace(trimmed, "");
    let host = without_prefix
        .split('/')
        .next()
        .unwrap_or_default()
        .trim();

    if host.is_empty() {
        return Err(CoreError::Validation(format!(
            "'{trimmed}' does not contain a domain"
        )));
    }
    Ok(host.to_string())
}
