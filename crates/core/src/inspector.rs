//! Parser for the phone-inspection tool's section-tagged console output.
//!
//! A single pass tracks which report section is active. Result markers are
//! only interpreted inside a recognised section.

use crate::classify::{classify_info_type, classify_platform, Marker};
use crate::types::{InspectorResult, Presence};

/// Report section the scan is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    /// No header seen yet; markers are ignored.
    None,
    /// Account-existence modules.
    SocialMedia,
    /// Reputation lookup service. Terminal.
    Reputation,
}

/// Header substrings and the section each one opens.
pub const SECTION_HEADERS: &[(&str, Section)] = &[
    ("Ignorant Modules", Section::SocialMedia),
    ("Free-lookup.net", Section::Reputation),
];

impl Section {
    /// State after reading `line`. Only forward transitions are taken.
    pub fn next(self, line: &str) -> Self {
        SECTION_HEADERS
            .iter()
            .find(|(header, _)| line.contains(header))
            .map(|(_, section)| *section)
            .filter(|section| *section > self)
            .unwrap_or(self)
    }
}

/// Parse the inspector's stdout into an [`InspectorResult`].
pub fn parse_inspector_output(stdout: &str) -> InspectorResult {
    let mut result = InspectorResult::default();
    let mut section = Section::None;

    for line in stdout.lines().map(str::trim) {
        section = section.next(line);

        let Some(marker) = Marker::find(line) else {
            continue;
        };
        let info = marker.strip(line);

        match (section, marker.presence) {
            (Section::SocialMedia, presence) => {
                result.social_media.insert(classify_platform(&info), presence);
            }
            (Section::Reputation, Presence::Found) => {
                result.reputation.insert(classify_info_type(&info), info);
            }
            _ => {}
        }
    }

    result
}
