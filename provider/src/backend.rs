//! The completion capability seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BackendError;

/// One request to the completion capability.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Fixed natural-language instruction describing the target schema and
    /// extraction rules.
    pub instructions: String,
    /// The (already truncated) user-supplied description.
    pub input: String,
    /// Upper bound on generated output size.
    pub max_output_tokens: u32,
    /// Name advertised to the upstream for the structured-output schema.
    pub schema_name: String,
    /// JSON Schema the output should be constrained to, when the capability
    /// supports structured output.
    pub schema: Value,
}

/// What a completion call produced.
///
/// Backends that can constrain output hand back [`Parsed`]; everything else
/// hands back the raw text for recovery. When the upstream provides both,
/// the backend prefers `Parsed`.
///
/// [`Parsed`]: ModelOutput::Parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutput {
    /// A pre-parsed structured payload.
    Parsed(Value),
    /// Raw generated text.
    Raw(String),
}

/// A language-model completion capability.
///
/// Object-safe so test doubles and alternative upstreams can be boxed into
/// the extraction pipeline. Implementations issue exactly one call per
/// request: no retries, no timeout beyond the transport default, and no
/// cancellation once the call is in flight.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Issues a single completion call.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] carrying the upstream's message (and raw
    /// response body when one was received) on network, auth, or quota
    /// failure.
    async fn complete(&self, request: &CompletionRequest) -> Result<ModelOutput, BackendError>;
}
