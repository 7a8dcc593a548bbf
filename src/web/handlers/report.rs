// POST /generate-report — render a previously computed result set.
//
// The body carries the results payload the check endpoint returned plus
// the requested format. "pdf" is served as HTML until a real PDF renderer
// exists; the response content type is text/html either way.

use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::report::{self, ReportFormat, ReportResults};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub results: ReportResults,
    pub format: ReportFormat,
    pub input_type: String,
    pub input_value: String,
}

pub async fn generate_report(Json(request): Json<ReportRequest>) -> Response {
    let generated_at = Utc::now().to_rfc3339();
    let html = report::render(
        request.format,
        &request.results,
        &request.input_value,
        &generated_at,
    );

    info!(
        input_type = %request.input_type,
        format = ?request.format,
        "report generated"
    );

    Html(html).into_response()
}
