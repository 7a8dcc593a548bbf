// Self-contained HTML report.
//
// Fixed template: header with the checked value and generation timestamp,
// color-coded score section, one conditional section per populated bundle
// slot, and a fixed recommendations list. The score color uses its own
// 3-tier threshold set (60/30), independent of the 5-band summary text.

use std::fmt::Write;

use super::ReportResults;
use crate::collect::traits::DomainRecord;

const STYLE: &str = "\
body { font-family: 'Arial', sans-serif; background: #0a0a0a; color: #ffffff; margin: 0; padding: 20px; }
.container { max-width: 800px; margin: 0 auto; }
.header { text-align: center; margin-bottom: 40px; }
.logo { color: #00ffff; font-size: 2.5em; font-weight: bold; }
.score { font-size: 3em; color: #00ffff; margin: 20px 0; }
.section { background: rgba(255,255,255,0.1); padding: 20px; margin: 20px 0; border-radius: 10px; }
.risk-high { color: #ff4444; }
.risk-medium { color: #ffaa00; }
.risk-low { color: #44ff44; }
.platform { background: rgba(0,255,255,0.2); padding: 5px 10px; margin: 5px; border-radius: 5px; display: inline-block; }";

/// CSS class for the score display. Coarser than the summary bands:
/// >= 60 is high (red), >= 30 medium (amber), below that low (green).
fn score_color_class(score: u32) -> &'static str {
    if score >= 60 {
        "risk-high"
    } else if score >= 30 {
        "risk-medium"
    } else {
        "risk-low"
    }
}

/// Minimal HTML escaping for interpolated user data.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full report document.
pub fn render(results: &ReportResults, input_value: &str, generated_at: &str) -> String {
    let mut doc = String::with_capacity(4096);

    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"UTF-8\">\n");
    doc.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    doc.push_str("<title>Periscope Privacy Exposure Report</title>\n");
    let _ = write!(doc, "<style>\n{STYLE}\n</style>\n</head>\n<body>\n");
    doc.push_str("<div class=\"container\">\n");

    // Header
    doc.push_str("<div class=\"header\">\n<div class=\"logo\">PERISCOPE PRIVACY REPORT</div>\n");
    let _ = write!(
        doc,
        "<p>Privacy Exposure Analysis for: <strong>{}</strong></p>\n",
        escape_html(input_value)
    );
    let _ = write!(doc, "<p>Generated on: {}</p>\n</div>\n", escape_html(generated_at));

    // Score
    doc.push_str("<div class=\"section\">\n<h2>Privacy Exposure Score</h2>\n");
    let _ = write!(
        doc,
        "<div class=\"score {}\">{}/100</div>\n",
        score_color_class(results.score),
        results.score
    );
    let summary = results.summary.as_deref().unwrap_or("No summary available");
    let _ = write!(doc, "<p>{}</p>\n</div>\n", escape_html(summary));

    // Domain section — present whenever the domain check ran, registered or not
    if let Some(record) = &results.bundle.domain {
        push_domain_section(&mut doc, record);
    }

    if let Some(platforms) = &results.bundle.username_platforms {
        if !platforms.is_empty() {
            push_platform_section(
                &mut doc,
                "Username Found On Platforms",
                "Total platforms",
                platforms,
            );
        }
    }

    if let Some(platforms) = &results.bundle.email_platforms {
        if !platforms.is_empty() {
            push_platform_section(
                &mut doc,
                "Email Registered On Services",
                "Total services",
                platforms,
            );
        }
    }

    // Fixed recommendations
    doc.push_str(
        "<div class=\"section\">\n<h3>Privacy Recommendations</h3>\n<ul>\n\
         <li>Review privacy settings on all discovered platforms</li>\n\
         <li>Consider using different usernames for different services</li>\n\
         <li>Enable two-factor authentication where available</li>\n\
         <li>Regularly audit your digital footprint</li>\n\
         <li>Use privacy-focused email services for sensitive accounts</li>\n\
         </ul>\n</div>\n",
    );

    doc.push_str(
        "<div class=\"section\">\n<p style=\"text-align: center; color: #666;\">\n\
         Generated by Periscope - No data stored, completely ephemeral\n</p>\n</div>\n",
    );

    doc.push_str("</div>\n</body>\n</html>\n");
    doc
}

fn push_domain_section(doc: &mut String, record: &DomainRecord) {
    doc.push_str("<div class=\"section\">\n<h3>Domain Information (WHOIS)</h3>\n");
    let _ = write!(
        doc,
        "<p><strong>Registered:</strong> {}</p>\n",
        if record.registered { "Yes" } else { "No" }
    );
    if let Some(registrar) = &record.registrar {
        let _ = write!(
            doc,
            "<p><strong>Registrar:</strong> {}</p>\n",
            escape_html(registrar)
        );
    }
    if let Some(creation_date) = &record.creation_date {
        let _ = write!(
            doc,
            "<p><strong>Creation Date:</strong> {}</p>\n",
            escape_html(creation_date)
        );
    }
    doc.push_str("</div>\n");
}

fn push_platform_section(doc: &mut String, heading: &str, total_label: &str, platforms: &[String]) {
    let _ = write!(doc, "<div class=\"section\">\n<h3>{heading}</h3>\n<div>\n");
    for platform in platforms {
        let _ = write!(
            doc,
            "<span class=\"platform\">{}</span>\n",
            escape_html(platform)
        );
    }
    let _ = write!(
        doc,
        "</div>\n<p>{total_label}: {}</p>\n</div>\n",
        platforms.len()
    );
}
