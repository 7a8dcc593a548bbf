// Report generation — rendering a scored bundle into a document.

use serde::{Deserialize, Serialize};

use crate::collect::ResultBundle;

pub mod html;

/// Requested document format.
///
/// There is no dedicated PDF renderer yet; "pdf" is served as the HTML
/// rendering. A documented limitation, not a silent substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Html,
    Pdf,
}

/// The scored results a report is rendered from — the same shape the
/// check endpoint returns, minus the timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportResults {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(flatten)]
    pub bundle: ResultBundle,
}

/// Render a report in the requested format.
///
/// Any format without a dedicated renderer degrades to the HTML rendering
/// rather than failing.
pub fn render(
    format: ReportFormat,
    results: &ReportResults,
    input_value: &str,
    generated_at: &str,
) -> String {
    match format {
        ReportFormat::Html | ReportFormat::Pdf => html::render(results, input_value, generated_at),
    }
}
