// Exposure score formula.
//
// Additive with per-signal caps: each signal type contributes
// independently and is bounded, so no single source can saturate the
// score, while presence across multiple independent signal types pushes
// it up. The result approximates breadth of exposure rather than raw
// hit count.

use crate::collect::ResultBundle;

/// Flat contribution of a publicly visible domain registration.
pub const DOMAIN_REGISTERED_POINTS: u32 = 20;

/// Points per platform the username was found on, and that signal's cap.
pub const USERNAME_PLATFORM_POINTS: u32 = 5;
pub const USERNAME_CONTRIBUTION_CAP: u32 = 40;

/// Points per service the email is registered on, and that signal's cap.
pub const EMAIL_PLATFORM_POINTS: u32 = 4;
pub const EMAIL_CONTRIBUTION_CAP: u32 = 40;

/// Upper bound of the exposure score.
pub const MAX_SCORE: u32 = 100;

/// Compute the exposure score for a bundle. Always in 0..=100.
pub fn score_bundle(bundle: &ResultBundle) -> u32 {
    let mut score = 0;

    if bundle.domain.as_ref().is_some_and(|record| record.registered) {
        score += DOMAIN_REGISTERED_POINTS;
    }

    if let Some(platforms) = &bundle.username_platforms {
        score += (platforms.len() as u32 * USERNAME_PLATFORM_POINTS).min(USERNAME_CONTRIBUTION_CAP);
    }

    if let Some(platforms) = &bundle.email_platforms {
        score += (platforms.len() as u32 * EMAIL_PLATFORM_POINTS).min(EMAIL_CONTRIBUTION_CAP);
    }

    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::traits::DomainRecord;

    fn platforms(n: usize) -> Option<Vec<String>> {
        Some((0..n).map(|i| format!("Platform{i}")).collect())
    }

    fn registered_domain() -> Option<DomainRecord> {
        Some(DomainRecord {
            registered: true,
            registrar: Some("Example Registrar".to_string()),
            ..DomainRecord::default()
        })
    }

    #[test]
    fn empty_bundle_scores_zero() {
        assert_eq!(score_bundle(&ResultBundle::default()), 0);
    }

    #[test]
    fn registered_domain_contributes_flat_twenty() {
        let bundle = ResultBundle {
            domain: registered_domain(),
            ..ResultBundle::default()
        };
        assert_eq!(score_bundle(&bundle), 20);
    }

    #[test]
    fn unregistered_domain_contributes_nothing() {
        let bundle = ResultBundle {
            domain: Some(DomainRecord::unregistered("Domain not found in registry")),
            ..ResultBundle::default()
        };
        assert_eq!(score_bundle(&bundle), 0);
    }

    #[test]
    fn username_platforms_score_five_each() {
        let bundle = ResultBundle {
            username_platforms: platforms(3),
            ..ResultBundle::default()
        };
        assert_eq!(score_bundle(&bundle), 15);
    }

    #[test]
    fn username_contribution_caps_at_forty() {
        // 9 platforms would be 45 points uncapped
        let bundle = ResultBundle {
            username_platforms: platforms(9),
            ..ResultBundle::default()
        };
        assert_eq!(score_bundle(&bundle), 40);
    }

    #[test]
    fn email_platforms_score_four_each() {
        let bundle = ResultBundle {
            email_platforms: platforms(5),
            ..ResultBundle::default()
        };
        assert_eq!(score_bundle(&bundle), 20);
    }

    #[test]
    fn email_contribution_caps_at_forty() {
        // 11 services would be 44 points uncapped
        let bundle = ResultBundle {
            email_platforms: platforms(11),
            ..ResultBundle::default()
        };
        assert_eq!(score_bundle(&bundle), 40);
    }

    #[test]
    fn all_signals_maxed_reaches_exactly_one_hundred() {
        let bundle = ResultBundle {
            username_platforms: platforms(20),
            email_platforms: platforms(15),
            domain: registered_domain(),
        };
        assert_eq!(score_bundle(&bundle), 100);
    }

    #[test]
    fn empty_lists_present_in_bundle_score_zero() {
        let bundle = ResultBundle {
            username_platforms: platforms(0),
            email_platforms: platforms(0),
            ..ResultBundle::default()
        };
        assert_eq!(score_bundle(&bundle), 0);
    }
}
