use std::env;
use std::time::Duration;

use anyhow::Result;

/// Per-call timeout for WHOIS-style API requests.
pub const API_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-call timeout for external enumeration tool invocations.
pub const TOOL_TIMEOUT: Duration = Duration::from_secs(30);

/// Default WHOIS-style registration API endpoint.
pub const DEFAULT_WHOIS_API_URL: &str = "https://whoisjson.com/api/v1/whois";

/// Which exposure backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Deterministic mock generator (default) — no tools, no API keys,
    /// no rate limits
    Mock,
    /// Real lookups: WHOIS API plus external enumeration tools on PATH
    Live,
}

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend selection (PERISCOPE_BACKEND=mock|live, default mock)
    pub backend: BackendKind,
    /// WHOIS API endpoint (WHOIS_API_URL)
    pub whois_api_url: String,
    /// Bearer token for the WHOIS API (WHOIS_API_KEY)
    pub whois_api_key: String,
    /// Username-enumeration tool binary (PERISCOPE_SHERLOCK_BIN)
    pub sherlock_bin: String,
    /// Email-enumeration tool binary (PERISCOPE_HOLEHE_BIN)
    pub holehe_bin: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every field has a default: the mock backend needs nothing, and the
    /// live backend reports its own missing pieces at call time.
    pub fn load() -> Result<Self> {
        let backend = match env::var("PERISCOPE_BACKEND").as_deref() {
            Ok("live") => BackendKind::Live,
            // "mock" or unset both default to the mock generator
            _ => BackendKind::Mock,
        };

        Ok(Self {
            backend,
            whois_api_url: env::var("WHOIS_API_URL")
                .unwrap_or_else(|_| DEFAULT_WHOIS_API_URL.to_string()),
            whois_api_key: env::var("WHOIS_API_KEY").unwrap_or_default(),
            sherlock_bin: env::var("PERISCOPE_SHERLOCK_BIN")
                .unwrap_or_else(|_| "sherlock".to_string()),
            holehe_bin: env::var("PERISCOPE_HOLEHE_BIN").unwrap_or_else(|_| "holehe".to_string()),
        })
    }
}
