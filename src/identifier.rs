// Identifier validation — the single gate before any collection work.
//
// A raw (kind, value) pair becomes a typed `Identifier` only if the trimmed
// value matches the format rule for its kind. Everything downstream can
// assume the value is well-formed.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CheckError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]+$").expect("username pattern"));

static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("domain pattern"));

/// Username length bounds (inclusive).
const USERNAME_MIN_LEN: usize = 2;
const USERNAME_MAX_LEN: usize = 50;

/// The kind of identifier a check targets. Matches the wire values of the
/// `type` field on `POST /privacy-check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Email,
    Username,
    Domain,
}

impl IdentifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Email => "email",
            IdentifierKind::Username => "username",
            IdentifierKind::Domain => "domain",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated, typed input value. Created per request and discarded when
/// the request completes — nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Email(String),
    Username(String),
    Domain(String),
}

impl Identifier {
    /// Validate a raw value against the format rule for `kind`.
    ///
    /// The value is trimmed first; an empty post-trim value fails for every
    /// kind. Error messages name the violated rule and are safe to surface
    /// to the caller.
    pub fn parse(kind: IdentifierKind, raw: &str) -> Result<Self, CheckError> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(CheckError::InvalidFormat(
                "Input value cannot be empty".to_string(),
            ));
        }

        match kind {
            IdentifierKind::Email => {
                if !EMAIL_RE.is_match(value) {
                    return Err(CheckError::InvalidFormat("Invalid email format".to_string()));
                }
                Ok(Identifier::Email(value.to_string()))
            }
            IdentifierKind::Username => {
                if !USERNAME_RE.is_match(value)
                    || value.len() < USERNAME_MIN_LEN
                    || value.len() > USERNAME_MAX_LEN
                {
                    return Err(CheckError::InvalidFormat(
                        "Invalid username format (2-50 chars, alphanumeric with ._- allowed)"
                            .to_string(),
                    ));
                }
                Ok(Identifier::Username(value.to_string()))
            }
            IdentifierKind::Domain => {
                if !DOMAIN_RE.is_match(value) {
                    return Err(CheckError::InvalidFormat(
                        "Invalid domain format".to_string(),
                    ));
                }
                Ok(Identifier::Domain(value.to_string()))
            }
        }
    }

    pub fn kind(&self) -> IdentifierKind {
        match self {
            Identifier::Email(_) => IdentifierKind::Email,
            Identifier::Username(_) => IdentifierKind::Username,
            Identifier::Domain(_) => IdentifierKind::Domain,
        }
    }

    /// The validated, trimmed value.
    pub fn value(&self) -> &str {
        match self {
            Identifier::Email(v) | Identifier::Username(v) | Identifier::Domain(v) => v,
        }
    }
}
