// Backend contracts for the three exposure checks.
//
// One trait per check kind, so each can be swapped independently.
// Implementations are selected by configuration at collector construction,
// not by branching inside request handling.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// A domain's registration record, as returned by the domain check.
///
/// An unregistered domain carries only the `error` field — registrar and
/// date fields are never populated alongside `registered: false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainRecord {
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DomainRecord {
    /// Build a record for a domain with no registry entry.
    pub fn unregistered(reason: &str) -> Self {
        Self {
            registered: false,
            error: Some(reason.to_string()),
            ..Self::default()
        }
    }
}

/// Username-presence enumeration: which platforms know this username.
#[async_trait]
pub trait UsernameExposure: Send + Sync {
    /// Return the platform names where the username was found. The raw
    /// list may contain duplicates — the collector normalizes it.
    async fn check_username(&self, username: &str) -> Result<Vec<String>, CheckError>;
}

/// Email-registration enumeration: which services have an account for
/// this address.
#[async_trait]
pub trait EmailExposure: Send + Sync {
    async fn check_email(&self, email: &str) -> Result<Vec<String>, CheckError>;
}

/// Domain registration record lookup.
#[async_trait]
pub trait DomainExposure: Send + Sync {
    async fn check_domain(&self, domain: &str) -> Result<DomainRecord, CheckError>;
}
