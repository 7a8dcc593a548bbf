// POST /privacy-check — run the full check pipeline for one identifier.
//
// Validation failures are client errors with the violated rule in the
// message. Backend failures never reach here (the collector recovers
// them), so a 200 with a possibly empty bundle is the normal outcome
// for any well-formed input.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::collect::ResultBundle;
use crate::identifier::{Identifier, IdentifierKind};
use crate::scoring::exposure::score_bundle;
use crate::scoring::summary::generate_summary;
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct PrivacyCheckRequest {
    #[serde(rename = "type")]
    pub kind: IdentifierKind,
    pub value: String,
}

#[derive(Serialize)]
struct PrivacyCheckResponse {
    score: u32,
    summary: String,
    timestamp: String,
    #[serde(flatten)]
    bundle: ResultBundle,
}

pub async fn privacy_check(
    State(state): State<AppState>,
    Json(request): Json<PrivacyCheckRequest>,
) -> Response {
    let identifier = match Identifier::parse(request.kind, &request.value) {
        Ok(identifier) => identifier,
        Err(e) => return api_error(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let bundle = state.collector.collect(&identifier).await;
    let score = score_bundle(&bundle);
    let summary = generate_summary(&bundle, score);

    info!(
        kind = %identifier.kind(),
        value = %identifier.value(),
        score,
        "privacy check completed"
    );

    Json(PrivacyCheckResponse {
        score,
        summary,
        timestamp: Utc::now().to_rfc3339(),
        bundle,
    })
    .into_response()
}
