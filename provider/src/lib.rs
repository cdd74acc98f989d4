//! Completion backend abstraction and the extraction pipeline.
//!
//! This crate turns a free-text app description into a validated
//! [`appsketch_schema::AppSpec`] through one synchronous upstream call:
//!
//! - [`CompletionBackend`] - Object-safe seam over the completion capability
//! - [`OpenAiBackend`] - Backend for OpenAI-compatible chat endpoints
//! - [`Extractor`] - Request, recover, validate; no retries at any layer
//! - [`ExtractError`] - Typed failure taxonomy carrying diagnostics

pub mod backend;
pub mod error;
pub mod extract;
pub mod openai;
pub mod prompt;

pub use backend::{CompletionBackend, CompletionRequest, ModelOutput};
pub use error::{BackendError, ExtractError};
pub use extract::Extractor;
pub use openai::OpenAiBackend;
