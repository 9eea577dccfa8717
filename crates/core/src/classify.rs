//! Substring classification tables shared by the console-text parsers.
//!
//! Each table is an ordered list of `(needle, category)` rules evaluated
//! first-match-wins against the lower-cased input.

use crate::types::{InfoType, Platform, Presence};

// ---------------------------------------------------------------------------
// Line markers
// ---------------------------------------------------------------------------

/// Prefix tag the tools print in front of a positive hit.
pub const FOUND_MARKER: &str = "[+]";

/// Prefix tag the tools print in front of a negative result.
pub const NOT_FOUND_MARKER: &str = "[-]";

/// A result marker located in a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub presence: Presence,
    /// Byte offset of the marker within the line.
    pub start: usize,
}

impl Marker {
    /// Find the result marker in `line`. The found marker takes precedence
    /// when both appear.
    pub fn find(line: &str) -> Option<Self> {
        if let Some(start) = line.find(FOUND_MARKER) {
            return Some(Self {
                presence: Presence::Found,
                start,
            });
        }
        line.find(NOT_FOUND_MARKER).map(|start| Self {
            presence: Presence::NotFound,
            start,
        })
    }

    /// Text after the marker.
    pub fn rest<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start + self.len()..]
    }

    /// `line` with this marker cut out, trimmed.
    pub fn strip(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        out.push_str(&line[..self.start]);
        out.push_str(self.rest(line));
        out.trim().to_string()
    }

    fn len(&self) -> usize {
        match self.presence {
            Presence::Found => FOUND_MARKER.len(),
            Presence::NotFound => NOT_FOUND_MARKER.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Platforms detected by the inspector's account-existence modules.
pub const PLATFORM_RULES: &[(&str, Platform)] = &[
    ("instagram", Platform::Instagram),
    ("amazon", Platform::Amazon),
    ("snapchat", Platform::Snapchat),
];

/// Reputation line categories. Order matters: "Carrier type" is a carrier line.
pub const INFO_TYPE_RULES: &[(&str, InfoType)] = &[
    ("carrier", InfoType::Carrier),
    ("location", InfoType::Location),
    ("type", InfoType::LineType),
];

/// Return the category of the first rule whose needle occurs in `text`
/// (case-insensitive), or `fallback`.
pub fn classify<T: Copy>(text: &str, rules: &[(&str, T)], fallback: T) -> T {
    let lower = text.to_lowercase();
    rules
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, category)| *category)
        .unwrap_or(fallback)
}

pub fn classify_platform(info: &str) -> Platform {
    classify(info, PLATFORM_RULES, Platform::Unknown)
}

pub fn classify_info_type(info: &str) -> InfoType {
    classify(info, INFO_TYPE_RULES, InfoType::Other)
}
