// Colored terminal output for check results.
//
// This module handles all terminal-specific formatting: colors, the risk
// line, per-slot detail blocks. The main.rs display calls delegate here.

use colored::Colorize;

use crate::collect::traits::DomainRecord;
use crate::collect::ResultBundle;
use crate::scoring::summary::RiskLevel;

/// Display a completed check in the terminal.
pub fn display_check(value: &str, bundle: &ResultBundle, score: u32) {
    println!("\n{}", format!("=== Privacy Exposure: {value} ===").bold());

    let level = RiskLevel::from_score(score);
    println!("  Risk: {} ({score}/100)", colorize_level(level));

    if let Some(record) = &bundle.domain {
        display_domain(record);
    }

    if let Some(platforms) = &bundle.username_platforms {
        display_platforms("Username found on", "platforms", platforms);
    }

    if let Some(platforms) = &bundle.email_platforms {
        display_platforms("Email registered on", "services", platforms);
    }

    println!("\n  {}", level.advice().dimmed());
}

fn display_domain(record: &DomainRecord) {
    if record.registered {
        println!("\n  Domain: {}", "registered".yellow());
        if let Some(registrar) = &record.registrar {
            println!("    Registrar:  {registrar}");
        }
        if let Some(creation_date) = &record.creation_date {
            println!("    Created:    {creation_date}");
        }
        if let Some(expiration_date) = &record.expiration_date {
            println!("    Expires:    {expiration_date}");
        }
        if !record.status.is_empty() {
            println!("    Status:     {}", record.status.join(", "));
        }
    } else {
        println!("\n  Domain: {}", "not registered".green());
        if let Some(error) = &record.error {
            println!("    {}", error.dimmed());
        }
    }
}

fn display_platforms(lead: &str, noun: &str, platforms: &[String]) {
    if platforms.is_empty() {
        println!("\n  {lead} {} {noun}", "0".green());
        return;
    }
    println!("\n  {lead} {} {noun}:", platforms.len().to_string().red());
    for platform in platforms {
        println!("    - {platform}");
    }
}

/// Colorize a risk level label.
fn colorize_level(level: RiskLevel) -> colored::ColoredString {
    let label = level.as_str();
    match level {
        RiskLevel::VeryHigh => label.red().bold(),
        RiskLevel::High => label.bright_red(),
        RiskLevel::Medium => label.yellow(),
        RiskLevel::Low => label.green(),
        RiskLevel::VeryLow => label.green().dimmed(),
    }
}
