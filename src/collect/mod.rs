// Collection — dispatching an identifier to its checks and merging results.
//
// The collector is constructed once (backend selection happens here, from
// config) and passed explicitly into request handlers. Backend failures are
// recovered per check: platform checks resolve to an empty list, domain
// checks fall back to the canned heuristic. A single slow or missing
// backend never aborts the other checks in the same request.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{BackendKind, Config};
use crate::error::CheckError;
use crate::identifier::Identifier;

pub mod live;
pub mod mock;
pub mod normalize;
pub mod traits;

use live::LiveBackend;
use mock::MockBackend;
use normalize::{EMAIL_PLATFORM_CAP, USERNAME_PLATFORM_CAP};
use traits::{DomainExposure, DomainRecord, EmailExposure, UsernameExposure};

/// An email's local-part must be at least this long to be worth a
/// username-exposure check of its own.
const MIN_LOCAL_PART_LEN: usize = 3;

/// The merged results of one request's checks. Only the slots that were
/// actually run are populated. Wire keys keep the names of the tools the
/// checks are equivalent to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultBundle {
    /// Platforms where the username was found.
    #[serde(rename = "sherlock", skip_serializing_if = "Option::is_none")]
    pub username_platforms: Option<Vec<String>>,
    /// Services where the email is registered.
    #[serde(rename = "holehe", skip_serializing_if = "Option::is_none")]
    pub email_platforms: Option<Vec<String>>,
    /// The domain's registration record.
    #[serde(rename = "whois", skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainRecord>,
}

/// Backend-agnostic dispatcher: maps an identifier to its checks and runs
/// them against the configured backends.
pub struct Collector {
    username: Arc<dyn UsernameExposure>,
    email: Arc<dyn EmailExposure>,
    domain: Arc<dyn DomainExposure>,
}

impl Collector {
    /// Build a collector with the backend the config selects.
    pub fn from_config(config: &Config) -> Result<Self, CheckError> {
        match config.backend {
            BackendKind::Mock => Ok(Self::mock()),
            BackendKind::Live => {
                let live = Arc::new(LiveBackend::new(config)?);
                Ok(Self {
                    username: live.clone(),
                    email: live.clone(),
                    domain: live,
                })
            }
        }
    }

    /// Mock backend seeded from OS entropy.
    pub fn mock() -> Self {
        let backend = Arc::new(MockBackend::new());
        Self {
            username: backend.clone(),
            email: backend.clone(),
            domain: backend,
        }
    }

    /// Mock backend with a fixed seed for reproducible results.
    pub fn mock_with_seed(seed: u64) -> Self {
        let backend = Arc::new(MockBackend::with_seed(seed));
        Self {
            username: backend.clone(),
            email: backend.clone(),
            domain: backend,
        }
    }

    /// Wire arbitrary backends per check kind.
    pub fn with_backends(
        username: Arc<dyn UsernameExposure>,
        email: Arc<dyn EmailExposure>,
        domain: Arc<dyn DomainExposure>,
    ) -> Self {
        Self {
            username,
            email,
            domain,
        }
    }

    /// Run the checks this identifier's kind calls for and merge the
    /// normalized results into a bundle. Never fails: every backend
    /// failure resolves to an empty or fallback result.
    pub async fn collect(&self, identifier: &Identifier) -> ResultBundle {
        match identifier {
            Identifier::Email(address) => self.collect_email(address).await,
            Identifier::Username(username) => ResultBundle {
                username_platforms: Some(self.username_check(username).await),
                ..ResultBundle::default()
            },
            Identifier::Domain(domain) => ResultBundle {
                domain: Some(self.domain_check(domain).await),
                ..ResultBundle::default()
            },
        }
    }

    /// Email runs the email-exposure check on the full address and, when the
    /// local-part is long enough to be meaningful, a concurrent
    /// username-exposure check on that local-part.
    async fn collect_email(&self, address: &str) -> ResultBundle {
        let local_part = address.split('@').next().unwrap_or_default();

        if local_part.len() >= MIN_LOCAL_PART_LEN {
            let (email_platforms, username_platforms) = tokio::join!(
                self.email_check(address),
                self.username_check(local_part)
            );
            ResultBundle {
                username_platforms: Some(username_platforms),
                email_platforms: Some(email_platforms),
                domain: None,
            }
        } else {
            ResultBundle {
                email_platforms: Some(self.email_check(address).await),
                ..ResultBundle::default()
            }
        }
    }

    async fn username_check(&self, username: &str) -> Vec<String> {
        match self.username.check_username(username).await {
            Ok(platforms) => normalize::dedupe_and_cap(platforms, USERNAME_PLATFORM_CAP),
            Err(e) => {
                warn!(error = %e, username = %username, "username check failed, recording empty result");
                Vec::new()
            }
        }
    }

    async fn email_check(&self, email: &str) -> Vec<String> {
        match self.email.check_email(email).await {
            Ok(platforms) => normalize::dedupe_and_cap(platforms, EMAIL_PLATFORM_CAP),
            Err(e) => {
                warn!(error = %e, email = %email, "email check failed, recording empty result");
                Vec::new()
            }
        }
    }

    /// Domain lookups fall back to the canned heuristic on failure, so the
    /// bundle always carries a populated record for domain requests.
    async fn domain_check(&self, domain: &str) -> DomainRecord {
        match self.domain.check_domain(domain).await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, domain = %domain, "domain lookup failed, using canned record");
                mock::canned_domain_record(domain)
            }
        }
    }
}
