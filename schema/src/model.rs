//! The fixed schema an extraction must produce.
//!
//! The array-length caps below are hard limits enforced by validation, not
//! advisory. They surface in the generated JSON Schema as `maxItems`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Data type of a single entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Database table primary key.
    Id,
    /// Short free-form string.
    String,
    /// Person given name.
    FirstName,
    /// Person family name.
    LastName,
    /// Full person name.
    Name,
    /// Email address.
    Email,
    /// Long text that usually spans multiple lines.
    Text,
    /// Numeric value.
    Number,
    /// Calendar date.
    Date,
    /// True/false flag.
    Boolean,
}

/// A single named, typed field on an [`Entity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Field {
    /// Field name as it would appear in a data model.
    pub name: String,
    /// Declared data type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// A piece of data the app needs to store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Entity {
    /// Entity name.
    pub name: String,
    /// Ordered fields, at most 10.
    #[schemars(length(max = 10))]
    pub fields: Vec<Field>,
}

/// How an action surfaces in the mock UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Adds an instance of an entity.
    Form,
    /// Views instances of an entity.
    Table,
    /// More complex, or not directly tied to an entity.
    None,
}

/// Something a role can do to an entity.
///
/// `entity` is expected to reference an [`Entity`] name but the schema does
/// not enforce the cross-reference; consumers treat a dangling name as
/// "no matching entity".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Action {
    /// Short verb or verb-noun phrase, e.g. "Create Invoice".
    pub name: String,
    /// Name of the entity acted upon.
    pub entity: String,
    /// How the action surfaces in the UI.
    #[serde(rename = "type")]
    pub action_type: ActionType,
}

/// A user role and the actions it can perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Role {
    /// Role name.
    pub name: String,
    /// Ordered actions, at most 5. `none`-type actions come last.
    #[schemars(length(max = 5))]
    pub actions: Vec<Action>,
}

/// The validated root object describing an application.
///
/// Constructed fresh per request from model output, never mutated after
/// validation, and discarded at the end of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AppSpec {
    /// Display name of the app.
    pub app_name: String,
    /// Entities the app stores, at most 10.
    #[schemars(length(max = 10))]
    pub entities: Vec<Entity>,
    /// User roles, at most 5.
    #[schemars(length(max = 5))]
    pub roles: Vec<Role>,
}

impl AppSpec {
    /// Whether the model detected no app in the input.
    ///
    /// Empty arrays are schema-legal; an all-empty spec is the conventional
    /// "input was unrelated to app requirements" signal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.app_name.is_empty() && self.entities.is_empty() && self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_type_serializes_snake_case() {
        let value = serde_json::to_value(FieldType::FirstName).unwrap();
        assert_eq!(value, json!("first_name"));
        let back: FieldType = serde_json::from_value(json!("last_name")).unwrap();
        assert_eq!(back, FieldType::LastName);
    }

    #[test]
    fn action_uses_type_key_on_the_wire() {
        let action = Action {
            name: "Create Invoice".to_string(),
            entity: "Invoice".to_string(),
            action_type: ActionType::Form,
        };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], json!("form"));
    }

    #[test]
    fn app_spec_round_trips() {
        let spec = AppSpec {
            app_name: "Invoicing".to_string(),
            entities: vec![Entity {
                name: "Invoice".to_string(),
                fields: vec![Field {
                    name: "id".to_string(),
                    field_type: FieldType::Id,
                }],
            }],
            roles: vec![Role {
                name: "Accountant".to_string(),
                actions: vec![Action {
                    name: "View Invoices".to_string(),
                    entity: "Invoice".to_string(),
                    action_type: ActionType::Table,
                }],
            }],
        };
        let value = serde_json::to_value(&spec).unwrap();
        let back: AppSpec = serde_json::from_value(value).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn empty_spec_is_reported_empty() {
        let spec = AppSpec {
            app_name: String::new(),
            entities: vec![],
            roles: vec![],
        };
        assert!(spec.is_empty());
    }
}
