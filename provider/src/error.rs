//! Error taxonomy for the extraction pipeline.

use appsketch_schema::Violation;
use serde_json::Value;
use thiserror::Error;

/// The upstream completion call failed.
#[derive(Debug, Error)]
#[error("completion call failed: {message}")]
pub struct BackendError {
    /// The upstream's own error message.
    pub message: String,
    /// Raw upstream response body, when one was received.
    pub raw_response: Option<Value>,
}

/// Failures the extraction pipeline reports to its caller.
///
/// Every variant carries enough context for offline diagnosis; nothing is
/// silently swallowed and nothing is retried.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The caller-supplied description was missing or empty. Reported
    /// before any upstream call is made.
    #[error("Missing or invalid description")]
    InvalidInput,

    /// The completion call itself failed (network, auth, quota).
    #[error("completion call failed: {message}")]
    Upstream {
        /// The upstream's error message.
        message: String,
        /// Raw upstream response for diagnosis, when one was received.
        raw_response: Option<Value>,
    },

    /// No parseable JSON candidate was found in the model output.
    #[error("no JSON candidate found in model output")]
    Recovery {
        /// The raw model output for offline inspection.
        raw_output: String,
    },

    /// A candidate parsed but failed structural validation.
    #[error("extracted JSON failed schema validation ({n} violations)", n = .violations.len())]
    SchemaViolation {
        /// Every field-level violation, not just the first.
        violations: Vec<Violation>,
        /// The offending candidate for diagnosis.
        candidate: Value,
    },
}

impl From<BackendError> for ExtractError {
    fn from(err: BackendError) -> Self {
        Self::Upstream {
            message: err.message,
            raw_response: err.raw_response,
        }
    }
}
