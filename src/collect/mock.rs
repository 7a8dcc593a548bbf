// Deterministic mock backend — characteristic-dependent sample data.
//
// Used when live lookups are undesirable (cost, reliability, rate limits).
// Platform hits are sampled pseudo-randomly, biased by heuristics on the
// input string; domain records are fully canned. Seed the generator for
// reproducible results in tests.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;

use crate::error::CheckError;

use super::traits::{DomainExposure, DomainRecord, EmailExposure, UsernameExposure};

/// Platforms a username-presence check can report.
const USERNAME_PLATFORMS: [&str; 24] = [
    "GitHub",
    "Twitter",
    "Instagram",
    "Facebook",
    "LinkedIn",
    "Reddit",
    "TikTok",
    "YouTube",
    "Snapchat",
    "Pinterest",
    "Telegram",
    "Discord",
    "Twitch",
    "Steam",
    "PlayStation",
    "Xbox",
    "Behance",
    "DeviantArt",
    "Flickr",
    "SoundCloud",
    "Spotify",
    "Last.fm",
    "Goodreads",
    "Medium",
];

/// Services an email-registration check can report.
const EMAIL_PLATFORMS: [&str; 24] = [
    "Gmail",
    "Yahoo",
    "Outlook",
    "Apple",
    "Facebook",
    "Twitter",
    "Instagram",
    "Netflix",
    "Amazon",
    "Spotify",
    "Adobe",
    "Dropbox",
    "OneDrive",
    "PayPal",
    "eBay",
    "LinkedIn",
    "GitHub",
    "Discord",
    "Telegram",
    "WhatsApp",
    "Signal",
    "Zoom",
    "Skype",
    "Slack",
];

/// Domains that get the well-known corporate registration profile.
const WELL_KNOWN_DOMAINS: [&str; 10] = [
    "google.com",
    "facebook.com",
    "twitter.com",
    "github.com",
    "amazon.com",
    "microsoft.com",
    "apple.com",
    "netflix.com",
    "spotify.com",
    "adobe.com",
];

/// Mock exposure backend with an injectable seed.
pub struct MockBackend {
    rng: Mutex<StdRng>,
}

impl MockBackend {
    /// Sample from OS entropy; results vary call to call.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Sample from a fixed seed; same inputs yield the same results.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    async fn sample(&self, pool: &[&str], min: usize, max: usize) -> Vec<String> {
        let mut rng = self.rng.lock().await;
        let count = rng.random_range(min..=max);
        pool.choose_multiple(&mut *rng, count)
            .map(|name| name.to_string())
            .collect()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsernameExposure for MockBackend {
    async fn check_username(&self, username: &str) -> Result<Vec<String>, CheckError> {
        let (min, max) = if username.len() < 5 {
            // Short usernames are often taken on many platforms
            (8, 15)
        } else if username.starts_with("test") || username.starts_with("demo") {
            (5, 10)
        } else if username.chars().any(|c| c.is_ascii_digit()) {
            (3, 8)
        } else {
            // Distinctive usernames tend to have fewer matches
            (1, 5)
        };
        Ok(self.sample(&USERNAME_PLATFORMS, min, max).await)
    }
}

#[async_trait]
impl EmailExposure for MockBackend {
    async fn check_email(&self, email: &str) -> Result<Vec<String>, CheckError> {
        let provider = email
            .split('@')
            .nth(1)
            .map(str::to_lowercase)
            .unwrap_or_else(|| "unknown".to_string());

        let (min, max) = match provider.as_str() {
            // Popular providers accumulate many registrations
            "gmail.com" | "yahoo.com" | "hotmail.com" | "outlook.com" => (6, 12),
            // Privacy-focused providers tend to have fewer
            "protonmail.com" | "tutanota.com" | "encrypted.com" => (2, 6),
            _ if email.contains("test") || email.contains("demo") => (4, 8),
            _ => (3, 9),
        };
        Ok(self.sample(&EMAIL_PLATFORMS, min, max).await)
    }
}

#[async_trait]
impl DomainExposure for MockBackend {
    async fn check_domain(&self, domain: &str) -> Result<DomainRecord, CheckError> {
        Ok(canned_domain_record(domain))
    }
}

/// Canned WHOIS-like record keyed off heuristics on the domain string.
///
/// Deterministic (no sampling) — also used directly by the collector as the
/// fallback when a live domain lookup fails.
pub fn canned_domain_record(domain: &str) -> DomainRecord {
    let lower = domain.to_lowercase();

    if WELL_KNOWN_DOMAINS.contains(&lower.as_str()) {
        DomainRecord {
            registered: true,
            registrar: Some("MarkMonitor Inc.".to_string()),
            creation_date: Some("1997-09-15".to_string()),
            expiration_date: Some("2028-09-14".to_string()),
            status: vec![
                "clientDeleteProhibited".to_string(),
                "clientTransferProhibited".to_string(),
                "clientUpdateProhibited".to_string(),
            ],
            error: None,
        }
    } else if lower.ends_with(".com") || lower.ends_with(".org") {
        DomainRecord {
            registered: true,
            registrar: Some("GoDaddy.com LLC".to_string()),
            creation_date: Some("2019-03-10".to_string()),
            expiration_date: Some("2025-03-10".to_string()),
            status: vec!["clientTransferProhibited".to_string()],
            error: None,
        }
    } else if lower.contains("test") || lower.contains("demo") {
        DomainRecord {
            registered: true,
            registrar: Some("Namecheap Inc.".to_string()),
            creation_date: Some("2023-01-15".to_string()),
            expiration_date: Some("2024-01-15".to_string()),
            status: vec!["ok".to_string()],
            error: None,
        }
    } else {
        DomainRecord::unregistered("Domain not found in registry")
    }
}
