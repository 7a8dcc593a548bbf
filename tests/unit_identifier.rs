// Unit tests for identifier validation.
//
// The validator is the single gate in front of collection, so the accept
// and reject sets are pinned down exactly: format rules per kind, length
// bounds, trimming, and the empty-input rule shared by every kind.

use periscope::error::CheckError;
use periscope::identifier::{Identifier, IdentifierKind};

fn parse(kind: IdentifierKind, raw: &str) -> Result<Identifier, CheckError> {
    Identifier::parse(kind, raw)
}

// ============================================================
// Shared: empty input
// ============================================================

#[test]
fn empty_value_fails_for_every_kind() {
    for kind in [
        IdentifierKind::Email,
        IdentifierKind::Username,
        IdentifierKind::Domain,
    ] {
        let err = parse(kind, "").unwrap_err();
        assert_eq!(err.to_string(), "Input value cannot be empty");
    }
}

#[test]
fn whitespace_only_value_fails_for_every_kind() {
    for kind in [
        IdentifierKind::Email,
        IdentifierKind::Username,
        IdentifierKind::Domain,
    ] {
        assert!(parse(kind, "   \t ").is_err());
    }
}

// ============================================================
// Email
// ============================================================

#[test]
fn valid_email_is_accepted_and_trimmed() {
    let identifier = parse(IdentifierKind::Email, "  user@example.com ").unwrap();
    assert_eq!(identifier.value(), "user@example.com");
    assert_eq!(identifier.kind(), IdentifierKind::Email);
}

#[test]
fn email_with_plus_and_dots_is_accepted() {
    assert!(parse(IdentifierKind::Email, "first.last+tag@sub.example.co").is_ok());
}

#[test]
fn email_without_at_sign_is_rejected() {
    let err = parse(IdentifierKind::Email, "not-an-email").unwrap_err();
    assert_eq!(err.to_string(), "Invalid email format");
}

#[test]
fn email_without_tld_is_rejected() {
    assert!(parse(IdentifierKind::Email, "user@host").is_err());
}

#[test]
fn email_with_one_letter_tld_is_rejected() {
    assert!(parse(IdentifierKind::Email, "user@example.c").is_err());
}

#[test]
fn email_with_empty_local_part_is_rejected() {
    assert!(parse(IdentifierKind::Email, "@example.com").is_err());
}

// ============================================================
// Username
// ============================================================

#[test]
fn two_char_username_is_accepted() {
    assert!(parse(IdentifierKind::Username, "ab").is_ok());
}

#[test]
fn fifty_char_username_is_accepted() {
    let name = "a".repeat(50);
    assert!(parse(IdentifierKind::Username, &name).is_ok());
}

#[test]
fn username_full_charset_is_accepted() {
    assert!(parse(IdentifierKind::Username, "user.name_123-x").is_ok());
}

#[test]
fn one_char_username_is_rejected() {
    let err = parse(IdentifierKind::Username, "a").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid username format (2-50 chars, alphanumeric with ._- allowed)"
    );
}

#[test]
fn fifty_one_char_username_is_rejected() {
    let name = "a".repeat(51);
    assert!(parse(IdentifierKind::Username, &name).is_err());
}

#[test]
fn username_with_at_sign_is_rejected() {
    assert!(parse(IdentifierKind::Username, "user@name").is_err());
}

#[test]
fn username_with_space_is_rejected() {
    assert!(parse(IdentifierKind::Username, "user name").is_err());
}

#[test]
fn username_with_non_ascii_is_rejected() {
    assert!(parse(IdentifierKind::Username, "héllo").is_err());
}

// ============================================================
// Domain
// ============================================================

#[test]
fn valid_domain_is_accepted() {
    let identifier = parse(IdentifierKind::Domain, "example.com").unwrap();
    assert_eq!(identifier.value(), "example.com");
    assert_eq!(identifier.kind(), IdentifierKind::Domain);
}

#[test]
fn multi_label_domain_is_accepted() {
    assert!(parse(IdentifierKind::Domain, "sub.domain.co.uk").is_ok());
}

#[test]
fn bare_hostname_without_tld_is_rejected() {
    let err = parse(IdentifierKind::Domain, "localhost").unwrap_err();
    assert_eq!(err.to_string(), "Invalid domain format");
}

#[test]
fn domain_with_space_is_rejected() {
    assert!(parse(IdentifierKind::Domain, "no spaces.com").is_err());
}

#[test]
fn domain_with_numeric_tld_is_rejected() {
    assert!(parse(IdentifierKind::Domain, "example.123").is_err());
}
