//! Single-shot extraction pipeline: request, recover, validate.

use appsketch_schema::{
    app_spec_schema, recover_candidate, AppSpec, AppSpecValidator, SchemaCompileError,
};
use serde_json::Value;

use crate::backend::{CompletionBackend, CompletionRequest, ModelOutput};
use crate::error::ExtractError;
use crate::prompt::{self, INSTRUCTION, MAX_OUTPUT_TOKENS, SCHEMA_NAME};

/// Turns a free-text description into a validated [`AppSpec`].
///
/// Owns the completion backend and the compiled schema validator. One
/// instance is shared across requests; it holds no per-request state, so no
/// locking is required.
pub struct Extractor {
    backend: Box<dyn CompletionBackend>,
    validator: AppSpecValidator,
    schema: Value,
}

impl Extractor {
    /// Creates a pipeline around the given backend.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaCompileError`] if the generated schema does not
    /// compile.
    pub fn new(backend: Box<dyn CompletionBackend>) -> Result<Self, SchemaCompileError> {
        Ok(Self {
            backend,
            validator: AppSpecValidator::new()?,
            schema: app_spec_schema(),
        })
    }

    /// Runs one extraction end to end.
    ///
    /// Truncates the description to its first 2000 characters, issues exactly
    /// one completion call, recovers a JSON candidate from the output, and
    /// validates it against the fixed schema.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::InvalidInput`] for an empty description, before any
    ///   upstream call
    /// - [`ExtractError::Upstream`] when the completion call fails
    /// - [`ExtractError::Recovery`] when no JSON candidate can be recovered
    /// - [`ExtractError::SchemaViolation`] when the candidate fails
    ///   validation, with every violation listed
    pub async fn extract(&self, description: &str) -> Result<AppSpec, ExtractError> {
        if description.is_empty() {
            return Err(ExtractError::InvalidInput);
        }

        let input = prompt::truncate_description(description);
        let request = CompletionRequest {
            instructions: INSTRUCTION.to_string(),
            input: input.to_string(),
            max_output_tokens: MAX_OUTPUT_TOKENS,
            schema_name: SCHEMA_NAME.to_string(),
            schema: self.schema.clone(),
        };

        let output = match self.backend.complete(&request).await {
            Ok(output) => output,
            Err(err) => {
                tracing::error!(error = %err, "completion call failed");
                return Err(err.into());
            }
        };

        let (candidate, raw_output) = match output {
            ModelOutput::Parsed(value) => (Some(value), None),
            ModelOutput::Raw(text) => (recover_candidate(&text), Some(text)),
        };

        let Some(candidate) = candidate else {
            let raw_output = raw_output.unwrap_or_default();
            tracing::error!(raw_output = %raw_output, "no JSON candidate in model output");
            return Err(ExtractError::Recovery { raw_output });
        };

        match self.validator.validate(&candidate) {
            Ok(spec) => Ok(spec),
            Err(violations) => {
                tracing::error!(
                    violation_count = violations.len(),
                    candidate = %candidate,
                    "candidate failed schema validation"
                );
                Err(ExtractError::SchemaViolation {
                    violations,
                    candidate,
                })
            }
        }
    }
}
