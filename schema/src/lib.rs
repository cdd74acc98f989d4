//! Core data model for extracted app specifications.
//!
//! This crate is the pure, synchronous heart of the extraction pipeline:
//!
//! - [`model`] - The fixed `AppSpec` shape (entities, fields, roles, actions)
//! - [`recover`] - Best-effort recovery of a JSON candidate from raw model text
//! - [`validate`] - Schema-constrained validation collecting every violation
//!
//! No I/O happens here; the provider crate drives these pieces.

pub mod model;
pub mod recover;
pub mod validate;

pub use model::{Action, ActionType, AppSpec, Entity, Field, FieldType};
pub use recover::recover_candidate;
pub use validate::{app_spec_schema, AppSpecValidator, SchemaCompileError, Violation};
