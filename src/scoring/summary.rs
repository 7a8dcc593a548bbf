// Risk bands and the human-readable summary.
//
// Five half-open bands over the score, each with a fixed label and advice
// sentence. These are distinct from the coarser 3-tier color thresholds
// the report renderer uses; the two schemes coexist.

use std::fmt;

use crate::collect::ResultBundle;

/// Risk band for a score. Bands are half-open and ascend in steps of 20;
/// the top band closes at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Determine the band for a score (0-100).
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=19 => RiskLevel::VeryLow,
            20..=39 => RiskLevel::Low,
            40..=59 => RiskLevel::Medium,
            60..=79 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }

    /// The band's fixed advice sentence.
    pub fn advice(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => {
                "Your digital footprint is minimal. Consider this a good privacy baseline."
            }
            RiskLevel::Low => {
                "Limited exposure detected. Review the found accounts and consider privacy settings."
            }
            RiskLevel::Medium => {
                "Moderate exposure found. Consider reviewing privacy settings on detected platforms."
            }
            RiskLevel::High => {
                "Significant exposure detected. Strongly consider enhancing your privacy measures."
            }
            RiskLevel::VeryHigh => {
                "Extensive digital footprint found. Immediate privacy review recommended."
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the summary sentence for a scored bundle.
///
/// Structure is fixed: lead sentence with band label and score, then one
/// clause per populated slot in a fixed order (registration visibility,
/// username count, email count), then the band's advice sentence.
pub fn generate_summary(bundle: &ResultBundle, score: u32) -> String {
    let level = RiskLevel::from_score(score);

    let mut parts = vec![format!("Privacy Risk: {} ({score}/100).", level.as_str())];

    if bundle.domain.as_ref().is_some_and(|record| record.registered) {
        parts.push("Domain registration is publicly visible.".to_string());
    }

    if let Some(platforms) = &bundle.username_platforms {
        if !platforms.is_empty() {
            parts.push(format!("Username found on {} platforms.", platforms.len()));
        }
    }

    if let Some(platforms) = &bundle.email_platforms {
        if !platforms.is_empty() {
            parts.push(format!("Email registered on {} services.", platforms.len()));
        }
    }

    parts.push(level.advice().to_string());

    parts.join(" ")
}
