//! Parser for the username-enumeration tool's output.
//!
//! The tool is asked for line-delimited JSON, but it interleaves log lines
//! with results and falls back to its human-readable format on some
//! installs. Both shapes are accepted; malformed lines are skipped, never
//! fatal.

use serde_json::{Map, Value};

use crate::classify::Marker;
use crate::types::{Presence, SiteResult};

/// Keys that may carry the site name in a JSON result line, in priority order.
const SITE_KEYS: &[&str] = &["site", "name", "site_name"];

/// Keys that may carry the profile URL.
const URL_KEYS: &[&str] = &["url", "url_user"];

/// Keys that may carry the response time in milliseconds.
const RESPONSE_TIME_KEYS: &[&str] = &["response_time", "response_time_ms"];

/// Parse the enumeration tool's stdout into site results, in emission order.
///
/// JSON lines are preferred. Only when not a single line parses as JSON is
/// the whole output re-read as `[+] Site: url` / `[-] Site: ...` text, so
/// JSON output whose objects carry no site name yields no results.
pub fn parse_enumeration_output(stdout: &str) -> Vec<SiteResult> {
    let values: Vec<Value> = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect();

    if !values.is_empty() {
        return values.iter().filter_map(site_from_json_value).collect();
    }

    let results: Vec<SiteResult> = stdout.lines().filter_map(site_from_text_line).collect();
    tracing::debug!(
        count = results.len(),
        "No JSON lines in enumeration output, used text fallback"
    );
    results
}

/// Interpret one decoded JSON line as a result object. Anything else yields `None`.
fn site_from_json_value(value: &Value) -> Option<SiteResult> {
    let Value::Object(fields) = value else {
        return None;
    };

    let site = first_str(fields, SITE_KEYS)?.trim();
    if site.is_empty() {
        return None;
    }

    Some(SiteResult {
        site: site.to_string(),
        status: Presence::from_label(fields.get("status").and_then(Value::as_str).unwrap_or("")),
        url: first_str(fields, URL_KEYS).unwrap_or_default().trim().to_string(),
        response_time: RESPONSE_TIME_KEYS
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_f64)),
    })
}

/// Interpret one human-readable result line such as
/// `[+] GitHub: https://github.com/alice`.
fn site_from_text_line(line: &str) -> Option<SiteResult> {
    let marker = Marker::find(line)?;
    let rest = marker.rest(line);
    let (name, tail) = rest.split_once(':').unwrap_or((rest, ""));

    let site = name.trim();
    if site.is_empty() {
        return None;
    }

    let url = tail
        .split_whitespace()
        .next()
        .filter(|token| token.contains("://"))
        .unwrap_or_default();

    Some(SiteResult {
        site: site.to_string(),
        status: marker.presence,
        url: url.to_string(),
        response_time: None,
    })
}

/// First string value found under any of `keys`.
fn first_str<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EnumerationSummary;

    const JSON_OUTPUT: &str = r#"[*] Checking username alice on:
{"site": "GitHub", "status": "found", "url": "https://github.com/alice", "response_time": 212.5}
{"site": "Reddit", "status": "not_found", "url": ""}
this is a log line, not json
{"name": "GitLab", "status": "Claimed", "url_user": "https://gitlab.com/alice", "response_time_ms": 98}
[*] Search completed with 2 results
"#;

    const TEXT_OUTPUT: &str = "\
[*] Checking username alice on:
[+] GitHub: https://github.com/alice
[-] Reddit: Not Found!
[+] Keybase: https://keybase.io/alice
[*] Search completed with 2 results
";

    #[test]
    fn json_lines_in_emission_order() {
        let results = parse_enumeration_output(JSON_OUTPUT);
        let sites: Vec<&str> = results.iter().map(|r| r.site.as_str()).collect();
        assert_eq!(sites, ["GitHub", "Reddit", "GitLab"]);

        assert_eq!(results[0].status, Presence::Found);
        assert_eq!(results[0].url, "https://github.com/alice");
        assert_eq!(results[0].response_time, Some(212.5));

        assert_eq!(results[1].status, Presence::NotFound);
        assert_eq!(results[1].url, "");
        assert_eq!(results[1].response_time, None);
    }

    #[test]
    fn json_aliases_are_honoured() {
        let results = parse_enumeration_output(JSON_OUTPUT);
        let gitlab = &results[2];
        assert_eq!(gitlab.status, Presence::Found);
        assert_eq!(gitlab.url, "https://gitlab.com/alice");
        assert_eq!(gitlab.response_time, Some(98.0));
    }

    #[test]
    fn json_lines_without_site_or_not_objects_are_dropped() {
        let out = "42\n[1,2]\n\"GitHub\"\n{\"status\": \"found\"}\n{\"site\": \"  \"}\n{\"site\": \"HN\"}\n";
        let results = parse_enumeration_output(out);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].site, "HN");
        assert_eq!(results[0].status, Presence::NotFound);
    }

    #[test]
    fn json_without_site_names_does_not_trigger_text_fallback() {
        let out = "{\"status\": \"found\", \"url\": \"https://github.com/alice\"}\n[+] GitHub: https://github.com/alice\n";
        assert!(parse_enumeration_output(out).is_empty());
    }

    #[test]
    fn unknown_status_label_maps_to_not_found() {
        let out = r#"{"site": "X", "status": "WAF"}"#;
        assert_eq!(parse_enumeration_output(out)[0].status, Presence::NotFound);
    }

    #[test]
    fn text_fallback_found_line() {
        let results = parse_enumeration_output("[+] GitHub: https://github.com/alice");
        assert_eq!(
            results,
            vec![SiteResult {
                site: "GitHub".to_string(),
                status: Presence::Found,
                url: "https://github.com/alice".to_string(),
                response_time: None,
            }]
        );
    }

    #[test]
    fn text_fallback_mixed_output() {
        let results = parse_enumeration_output(TEXT_OUTPUT);
        assert_eq!(results.len(), 3);
        assert_eq!(results[1].site, "Reddit");
        assert_eq!(results[1].status, Presence::NotFound);
        assert_eq!(results[1].url, "");
        assert_eq!(results[2].url, "https://keybase.io/alice");

        let summary = EnumerationSummary::from_results(&results);
        assert_eq!(summary.total_sites, 3);
        assert_eq!(summary.found_profiles, 2);
    }

    #[test]
    fn text_line_without_colon_uses_whole_remainder_as_site() {
        let results = parse_enumeration_output("[-] Pinterest");
        assert_eq!(results[0].site, "Pinterest");
        assert_eq!(results[0].url, "");
    }

    #[test]
    fn empty_and_garbage_output_yield_nothing() {
        assert!(parse_enumeration_output("").is_empty());
        assert!(parse_enumeration_output("\n\n   \n").is_empty());
        assert!(parse_enumeration_output("Traceback (most recent call last):\n  oops").is_empty());
        assert!(parse_enumeration_output("[+] : https://x.example").is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(
            parse_enumeration_output(JSON_OUTPUT),
            parse_enumeration_output(JSON_OUTPUT)
        );
        assert_eq!(
            parse_enumeration_output(TEXT_OUTPUT),
            parse_enumeration_output(TEXT_OUTPUT)
        );
    }
}
