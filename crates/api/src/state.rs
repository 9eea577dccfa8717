use std::sync::Arc;

use osint_core::error::CoreError;
use osint_core::lookup::WhoisLookup;
use osint_core::process::ProcessInvoker;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Everything inside is read-only configuration; per-request parse state
/// never lives here.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Username-enumeration tool runner.
    pub sherlock: Arc<ProcessInvoker>,
    /// Phone-inspection tool runner.
    pub inspector: Arc<ProcessInvoker>,
    /// WHOIS client with its server list loaded.
    pub whois: Arc<WhoisLookup>,
}

impl AppState {
    /// Build the shared state. Fails if the WHOIS server list or the
    /// configured WHOIS server cannot be loaded.
    pub fn new(config: ServerConfig) -> Result<Self, CoreError> {
        Ok(Self {
            sherlock: Arc::new(ProcessInvoker::new(config.sherlock.clone())),
            inspector: Arc::new(ProcessInvoker::new(config.inspector.clone())),
            whois: Arc::new(WhoisLookup::new(config.whois.clone())?),
            config: Arc::new(config),
        })
    }
}
