//! WHOIS lookups through `whois-rust`.
//!
//! The client picks a server per TLD from a JSON server list and follows
//! registrar referrals. This module adds an overall deadline and maps every
//! failure onto [`CoreError`].

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use whois_rust::{WhoIs, WhoIsLookupOptions, WhoIsServerValue};

use crate::error::CoreError;

/// Server list compiled into the binary, used when no readable file is configured.
const EMBEDDED_SERVERS: &str = include_str!("../data/whois_servers.json");

/// WHOIS lookup settings.
#[derive(Debug, Clone)]
pub struct WhoisConfig {
    /// Server list JSON to load instead of the embedded one.
    pub servers_path: Option<PathBuf>,
    /// Server asked for every domain (`host` or `host:port`), bypassing the list.
    pub server: Option<String>,
    /// Referral hops followed after the first answer.
    pub follow: u16,
    /// Connect/read timeout for each server contacted.
    pub timeout: Duration,
    /// Limit on the whole lookup, referrals included.
    pub deadline: Duration,
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            servers_path: None,
            server: None,
            follow: 2,
            timeout: Duration::from_secs(10),
            deadline: Duration::from_secs(30),
        }
    }
}

/// Shared WHOIS client. Built once at startup; lookups hold no state.
pub struct WhoisLookup {
    client: WhoIs,
    server: Option<WhoIsServerValue>,
    config: WhoisConfig,
}

impl WhoisLookup {
    /// Load the server list and validate the server override, if any.
    pub fn new(config: WhoisConfig) -> Result<Self, CoreError> {
        let client = load_server_list(config.servers_path.as_deref())?;
        let server = config
            .server
            .as_deref()
            .map(|host| {
                WhoIsServerValue::from_string(host)
                    .map_err(|e| CoreError::Lookup(format!("Invalid WHOIS server '{host}': {e}")))
            })
            .transpose()?;

        Ok(Self {
            client,
            server,
            config,
        })
    }

    pub fn config(&self) -> &WhoisConfig {
        &self.config
    }

    /// Return the raw WHOIS text for `domain`.
    ///
    /// A domain the client cannot parse is a validation error. Network
    /// failures, empty answers and an expired deadline are lookup errors.
    pub async fn lookup(&self, domain: &str) -> Result<String, CoreError> {
        let mut options = WhoIsLookupOptions::from_string(domain)
            .map_err(|e| CoreError::Validation(format!("'{domain}' is not a valid domain: {e}")))?;
        options.follow = self.config.follow;
        options.timeout = Some(self.config.timeout);
        if let Some(server) = &self.server {
            options.server = Some(server.clone());
        }

        let started = Instant::now();
        let text = tokio::time::timeout(self.config.deadline, self.client.lookup_async(options))
            .await
            .map_err(|_| {
                CoreError::Lookup(format!(
                    "WHOIS lookup for '{domain}' timed out after {}ms",
                    started.elapsed().as_millis()
                ))
            })?
            .map_err(|e| CoreError::Lookup(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(CoreError::Lookup(format!(
                "WHOIS server returned an empty response for '{domain}'"
            )));
        }

        tracing::debug!(
            domain,
            bytes = text.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "WHOIS lookup finished"
        );
        Ok(text)
    }
}

/// Read the server list from `path`, falling back to the embedded list.
fn load_server_list(path: Option<&Path>) -> Result<WhoIs, CoreError> {
    if let Some(path) = path {
        match WhoIs::from_path(path) {
            Ok(client) => return Ok(client),
            Err(e) => tracing::warn!(
                path = %path.display(),
                error = %e,
                "Could not load WHOIS server list, using the embedded one"
            ),
        }
    }
    WhoIs::from_string(EMBEDDED_SERVERS)
        .map_err(|e| CoreError::Lookup(format!("Embedded WHOIS server list is invalid: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
