// Live exposure backend — real lookups against external collaborators.
//
// Domain records come from a WHOIS-style HTTP API (bearer-token auth).
// Username and email enumeration spawn external tools and parse their
// stdout. Every call is bounded by a timeout; failures map onto the
// CheckError taxonomy and are recovered by the collector, so a missing or
// slow tool can never hang or crash the request pipeline.
//
// Tools are assumed pre-provisioned: a binary that isn't on PATH is
// reported as BackendUnavailable, never installed on demand.

use std::io;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::config::{Config, API_TIMEOUT, TOOL_TIMEOUT};
use crate::error::CheckError;

use super::normalize;
use super::traits::{DomainExposure, DomainRecord, EmailExposure, UsernameExposure};

/// Live exposure backend: WHOIS API client plus external tool invocation.
pub struct LiveBackend {
    client: reqwest::Client,
    whois_api_url: String,
    whois_api_key: String,
    sherlock_bin: String,
    holehe_bin: String,
    api_timeout: Duration,
    tool_timeout: Duration,
}

impl LiveBackend {
    pub fn new(config: &Config) -> Result<Self, CheckError> {
        let client = reqwest::Client::builder()
            .user_agent("periscope/0.1 (privacy-exposure-check)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            whois_api_url: config.whois_api_url.clone(),
            whois_api_key: config.whois_api_key.clone(),
            sherlock_bin: config.sherlock_bin.clone(),
            holehe_bin: config.holehe_bin.clone(),
            api_timeout: API_TIMEOUT,
            tool_timeout: TOOL_TIMEOUT,
        })
    }

    /// Spawn an external tool with a bounded timeout and return its stdout.
    async fn run_tool(&self, bin: &str, args: &[&str]) -> Result<String, CheckError> {
        debug!(bin = bin, "spawning enumeration tool");

        let output = tokio::time::timeout(
            self.tool_timeout,
            Command::new(bin).args(args).kill_on_drop(true).output(),
        )
        .await
        .map_err(|_| CheckError::BackendTimeout(self.tool_timeout))?
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CheckError::BackendUnavailable(format!("{bin} not found on PATH"))
            } else {
                CheckError::BackendUnavailable(format!("failed to run {bin}: {e}"))
            }
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl UsernameExposure for LiveBackend {
    async fn check_username(&self, username: &str) -> Result<Vec<String>, CheckError> {
        let stdout = self
            .run_tool(
                &self.sherlock_bin,
                &[username, "--timeout", "10", "--print-found"],
            )
            .await?;
        Ok(normalize::parse_sherlock_stdout(&stdout))
    }
}

#[async_trait]
impl EmailExposure for LiveBackend {
    async fn check_email(&self, email: &str) -> Result<Vec<String>, CheckError> {
        let stdout = self
            .run_tool(&self.holehe_bin, &[email, "--only-used"])
            .await?;
        Ok(normalize::parse_holehe_stdout(&stdout, email))
    }
}

#[async_trait]
impl DomainExposure for LiveBackend {
    async fn check_domain(&self, domain: &str) -> Result<DomainRecord, CheckError> {
        if self.whois_api_key.is_empty() {
            return Err(CheckError::BackendUnavailable(
                "WHOIS_API_KEY not set".to_string(),
            ));
        }

        let response = self
            .client
            .get(&self.whois_api_url)
            .query(&[("domain", domain)])
            .bearer_auth(&self.whois_api_key)
            .header(header::ACCEPT, "application/json")
            .timeout(self.api_timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CheckError::BackendTimeout(self.api_timeout)
                } else {
                    CheckError::BackendUnavailable(format!("whois request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            return Err(CheckError::BackendUnavailable(format!(
                "whois API returned HTTP {}",
                response.status()
            )));
        }

        let payload: WhoisApiResponse = response.json().await.map_err(|e| {
            CheckError::BackendUnavailable(format!("whois response was not valid JSON: {e}"))
        })?;

        Ok(DomainRecord {
            registered: true,
            registrar: Some(payload.registrar.unwrap_or_else(unknown)),
            creation_date: Some(payload.creation_date.unwrap_or_else(unknown)),
            expiration_date: Some(payload.expiration_date.unwrap_or_else(unknown)),
            status: payload.status,
            error: None,
        })
    }
}

fn unknown() -> String {
    "Unknown".to_string()
}

// --- WHOIS API response shape (fields we read; the rest is ignored) ---

#[derive(Deserialize)]
struct WhoisApiResponse {
    registrar: Option<String>,
    creation_date: Option<String>,
    expiration_date: Option<String>,
    #[serde(default)]
    status: Vec<String>,
}
