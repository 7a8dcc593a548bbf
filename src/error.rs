// Error taxonomy for the check pipeline.
//
// Backend failures (unavailable tools, timeouts) are recovered inside the
// collector and never surface to the caller; only validation and
// scoring/rendering failures fail a request.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while running a privacy check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The input failed format validation. The message names the rule
    /// that was violated and is safe to show to the caller.
    #[error("{0}")]
    InvalidFormat(String),

    /// An external tool or API could not be reached. Recovered locally:
    /// platform checks record an empty result, domain checks fall back
    /// to the canned heuristic.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    /// An external tool or API call exceeded its per-call timeout.
    /// Recovered the same way as `BackendUnavailable`.
    #[error("backend timed out after {0:?}")]
    BackendTimeout(Duration),

    /// Unexpected failure in the pipeline itself. Surfaced as a generic
    /// server error; the full context goes to the logs only.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
