use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use osint_core::process::ToolSpec;
use osint_core::lookup::WhoisConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development next to a
/// checkout of the external tools. Tool locations are resolved here once and
/// handed to each invoker at construction.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Outer HTTP request timeout in seconds (default: `90`).
    pub request_timeout_secs: u64,
    /// Username-enumeration tool.
    pub sherlock: ToolSpec,
    /// Per-site timeout forwarded to the enumeration tool (default: `10`).
    pub sherlock_site_timeout_secs: u64,
    /// Phone-inspection tool.
    pub inspector: ToolSpec,
    /// WHOIS lookup settings.
    pub whois: WhoisConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                       |
    /// |------------------------------|-------------------------------|
    /// | `HOST`                       | `0.0.0.0`                     |
    /// | `PORT`                       | `3001`                        |
    /// | `CORS_ORIGINS`               | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS`       | `90`                          |
    /// | `PYTHON_BIN`                 | `python`                      |
    /// | `SHERLOCK_PATH`              | `../referance/sherlock`       |
    /// | `SHERLOCK_TIMEOUT_SECS`      | `60`                          |
    /// | `SHERLOCK_SITE_TIMEOUT_SECS` | `10`                          |
    /// | `INSPECTOR_PATH`             | `../referance/Inspector/core` |
    /// | `INSPECTOR_TIMEOUT_SECS`     | `30`                          |
    /// | `WHOIS_SERVERS_PATH`         | embedded server list          |
    /// | `WHOIS_SERVER`               | per-TLD from the server list  |
    /// | `WHOIS_MAX_REFERRALS`        | `2`                           |
    /// | `WHOIS_TIMEOUT_SECS`         | `10`                          |
    /// | `WHOIS_DEADLINE_SECS`        | `30`                          |
    ///
    /// Panics if a value does not parse or if a tool or WHOIS budget is not
    /// below `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");
        let port: u16 = parse_env("PORT", "3001");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_env("REQUEST_TIMEOUT_SECS", "90");

        let python_bin = env_or("PYTHON_BIN", "python");

        let sherlock = ToolSpec {
            name: "sherlock".to_string(),
            program: python_bin.clone(),
            args_prefix: vec!["-m".to_string(), "sherlock_project".to_string()],
            working_dir: Some(PathBuf::from(env_or("SHERLOCK_PATH", "../referance/sherlock"))),
            timeout: Duration::from_secs(parse_env("SHERLOCK_TIMEOUT_SECS", "60")),
        };
        let sherlock_site_timeout_secs: u64 = parse_env("SHERLOCK_SITE_TIMEOUT_SECS", "10");

        let inspector = ToolSpec {
            name: "inspector".to_string(),
            program: python_bin,
            args_prefix: vec!["inspector.py".to_string()],
            working_dir: Some(PathBuf::from(env_or(
                "INSPECTOR_PATH",
                "../referance/Inspector/core",
            ))),
            timeout: Duration::from_secs(parse_env("INSPECTOR_TIMEOUT_SECS", "30")),
        };

        let whois = WhoisConfig {
            servers_path: env_opt("WHOIS_SERVERS_PATH").map(PathBuf::from),
            server: env_opt("WHOIS_SERVER"),
            follow: parse_env("WHOIS_MAX_REFERRALS", "2"),
            timeout: Duration::from_secs(parse_env("WHOIS_TIMEOUT_SECS", "10")),
            deadline: Duration::from_secs(parse_env("WHOIS_DEADLINE_SECS", "30")),
        };

        let config = Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            sherlock,
            sherlock_site_timeout_secs,
            inspector,
            whois,
        };

        let violations = config.budget_violations();
        if !violations.is_empty() {
            panic!("Invalid timeout configuration: {}", violations.join("; "));
        }
        config
    }

    /// Budgets that would let the outer request timeout fire first.
    ///
    /// Each tool timeout and the WHOIS deadline must be strictly below
    /// `request_timeout_secs`.
    pub fn budget_violations(&self) -> Vec<String> {
        let request_timeout = Duration::from_secs(self.request_timeout_secs);
        [
            ("SHERLOCK_TIMEOUT_SECS", self.sherlock.timeout),
            ("INSPECTOR_TIMEOUT_SECS", self.inspector.timeout),
            ("WHOIS_DEADLINE_SECS", self.whois.deadline),
        ]
        .into_iter()
        .filter(|(_, budget)| *budget >= request_timeout)
        .map(|(key, budget)| {
            format!(
                "{key} ({}s) must be below REQUEST_TIMEOUT_SECS ({}s)",
                budget.as_secs(),
                self.request_timeout_secs
            )
        })
        .collect()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

/// Read an env var, treating unset and blank as absent.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an env var, panicking at startup on an invalid value.
fn parse_env<T>(key: &str, default: &str) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_or(key, default)
        .parse()
        .unwrap_or_else(|e| panic!("{key} must be a valid {}: {e}", std::any::type_name::<T>()))
}
