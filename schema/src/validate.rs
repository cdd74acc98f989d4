//! Schema-constrained validation of recovered candidates.

use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::AppSpec;

/// A single field-level schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON pointer to the offending value. The empty string is the root.
    pub path: String,
    /// What the value failed to satisfy.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at '{}': {}", self.path, self.message)
    }
}

/// The generated schema failed to compile.
///
/// The schema is derived from [`AppSpec`] at build time, so this only fires
/// on a schemars/jsonschema incompatibility and is surfaced at startup.
#[derive(Debug, Error)]
#[error("schema compilation failed: {0}")]
pub struct SchemaCompileError(String);

/// Returns the JSON Schema every candidate is validated against.
///
/// Derived from [`AppSpec`], so the serde shape and the validation schema
/// cannot drift apart. The same value is handed to the completion backend
/// as the structured-output constraint.
#[must_use]
pub fn app_spec_schema() -> Value {
    serde_json::json!(schemars::schema_for!(AppSpec))
}

/// Validator that checks candidates against the fixed [`AppSpec`] schema.
///
/// Compiles the schema once; construct it at startup and share it across
/// requests.
pub struct AppSpecValidator {
    validator: Validator,
}

impl AppSpecValidator {
    /// Compiles the generated [`AppSpec`] schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaCompileError`] if the generated schema does not
    /// compile.
    pub fn new() -> Result<Self, SchemaCompileError> {
        let schema = app_spec_schema();
        let validator =
            Validator::new(&schema).map_err(|e| SchemaCompileError(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Validates a candidate field-by-field and deserializes it on success.
    ///
    /// Collects **every** violation with its instance path, not just the
    /// first. The empty object `{}` fails with one violation per missing
    /// required field; callers distinguish "irrelevant input" from
    /// "malformed input" by inspecting which fields are absent.
    ///
    /// # Errors
    ///
    /// Returns the full violation list when the candidate does not satisfy
    /// the schema.
    pub fn validate(&self, candidate: &Value) -> Result<AppSpec, Vec<Violation>> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(candidate)
            .map(|error| Violation {
                path: error.instance_path.to_string(),
                message: error.to_string(),
            })
            .collect();

        if !violations.is_empty() {
            return Err(violations);
        }

        // The schema guarantees the shape, so this only fails if the schema
        // and the serde derive ever disagree.
        serde_json::from_value(candidate.clone()).map_err(|e| {
            vec![Violation {
                path: String::new(),
                message: format!("deserialization failed: {e}"),
            }]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> AppSpecValidator {
        AppSpecValidator::new().unwrap()
    }

    fn minimal_spec() -> Value {
        json!({
            "app_name": "Invoicing",
            "entities": [
                {"name": "Invoice", "fields": [
                    {"name": "id", "type": "id"},
                    {"name": "amount", "type": "number"}
                ]}
            ],
            "roles": [
                {"name": "Accountant", "actions": [
                    {"name": "Create Invoice", "entity": "Invoice", "type": "form"}
                ]}
            ]
        })
    }

    #[test]
    fn valid_candidate_round_trips_unchanged() {
        let candidate = minimal_spec();
        let spec = validator().validate(&candidate).unwrap();
        assert_eq!(serde_json::to_value(&spec).unwrap(), candidate);
    }

    #[test]
    fn empty_arrays_are_schema_legal() {
        let candidate = json!({"app_name": "X", "entities": [], "roles": []});
        let spec = validator().validate(&candidate).unwrap();
        assert!(spec.entities.is_empty());
        assert!(spec.roles.is_empty());
    }

    #[test]
    fn empty_object_fails_naming_missing_fields() {
        let violations = validator().validate(&json!({})).unwrap_err();
        let text = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("app_name"));
        assert!(text.contains("entities"));
        assert!(text.contains("roles"));
    }

    #[test]
    fn too_many_entities_names_the_array() {
        let entity = json!({"name": "E", "fields": []});
        let candidate = json!({
            "app_name": "X",
            "entities": (0..11).map(|_| entity.clone()).collect::<Vec<_>>(),
            "roles": []
        });
        let violations = validator().validate(&candidate).unwrap_err();
        assert!(violations.iter().any(|v| v.path == "/entities"));
    }

    #[test]
    fn too_many_roles_names_the_array() {
        let role = json!({"name": "R", "actions": []});
        let candidate = json!({
            "app_name": "X",
            "entities": [],
            "roles": (0..6).map(|_| role.clone()).collect::<Vec<_>>()
        });
        let violations = validator().validate(&candidate).unwrap_err();
        assert!(violations.iter().any(|v| v.path == "/roles"));
    }

    #[test]
    fn too_many_fields_names_the_nested_array() {
        let field = json!({"name": "f", "type": "string"});
        let candidate = json!({
            "app_name": "X",
            "entities": [
                {"name": "E", "fields": (0..11).map(|_| field.clone()).collect::<Vec<_>>()}
            ],
            "roles": []
        });
        let violations = validator().validate(&candidate).unwrap_err();
        assert!(violations.iter().any(|v| v.path == "/entities/0/fields"));
    }

    #[test]
    fn too_many_actions_names_the_nested_array() {
        let action = json!({"name": "A", "entity": "E", "type": "none"});
        let candidate = json!({
            "app_name": "X",
            "entities": [],
            "roles": [
                {"name": "R", "actions": (0..6).map(|_| action.clone()).collect::<Vec<_>>()}
            ]
        });
        let violations = validator().validate(&candidate).unwrap_err();
        assert!(violations.iter().any(|v| v.path == "/roles/0/actions"));
    }

    #[test]
    fn out_of_enumeration_field_type_names_the_field() {
        let mut candidate = minimal_spec();
        candidate["entities"][0]["fields"][0]["type"] = json!("uuid");
        let violations = validator().validate(&candidate).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.path == "/entities/0/fields/0/type"));
    }

    #[test]
    fn every_field_type_in_the_enumeration_passes() {
        for field_type in [
            "id", "string", "first_name", "last_name", "name", "email", "text", "number",
            "date", "boolean",
        ] {
            let mut candidate = minimal_spec();
            candidate["entities"][0]["fields"][0]["type"] = json!(field_type);
            assert!(
                validator().validate(&candidate).is_ok(),
                "field type {field_type} should be legal"
            );
        }
    }

    #[test]
    fn out_of_enumeration_action_type_names_the_field() {
        let mut candidate = minimal_spec();
        candidate["roles"][0]["actions"][0]["type"] = json!("wizard");
        let violations = validator().validate(&candidate).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.path == "/roles/0/actions/0/type"));
    }

    #[test]
    fn numbers_are_not_coerced_to_strings() {
        let mut candidate = minimal_spec();
        candidate["app_name"] = json!(42);
        let violations = validator().validate(&candidate).unwrap_err();
        assert!(violations.iter().any(|v| v.path == "/app_name"));
    }

    #[test]
    fn dangling_action_entity_is_not_a_violation() {
        let mut candidate = minimal_spec();
        candidate["roles"][0]["actions"][0]["entity"] = json!("NoSuchEntity");
        assert!(validator().validate(&candidate).is_ok());
    }

    #[test]
    fn non_object_candidate_fails() {
        assert!(validator().validate(&json!(42)).is_err());
        assert!(validator().validate(&json!("app")).is_err());
    }
}
