//! The fixed instruction prompt and request construction limits.

/// Effective description length cap. Longer input is truncated, not rejected.
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

/// Upper bound on generated output tokens for one completion call.
pub const MAX_OUTPUT_TOKENS: u32 = 5000;

/// Name advertised to the upstream for the structured-output schema.
pub const SCHEMA_NAME: &str = "app";

/// Instruction given to the model alongside the description.
///
/// Conveys the target schema, the meaning of each field type, the rule that
/// `none`-type actions come last, the 5/10 length caps, reasonable defaults
/// for unknown values, and the empty-object convention for off-topic input.
pub const INSTRUCTION: &str = r#"Given a short description of an app, output exactly one valid JSON object modelling the requirements of the app.
Each entity should reflect the data the app needs to store.
"id" should be used for any database table primary keys.
"first_name", "last_name", and "name" should be used for person names.
"text" should be used for long text that usually spans multiple lines.
Each role should have a list of actions they can perform that views or modifies other entities.
Each action should be a simple verb or verb-noun phrase like "Create Invoice" or "View Reports".
Each action should have a corresponding entity that it acts upon and an action type.
An action type is "form" if it adds an instance of an entity, "table" if it requires viewing instances of an entity, and "none" if it is more complex or does not directly relate to an entity like "Generate Report" or "Manage Users".
Any "none" type actions should appear at the end of the action list for a role.
The role and action lists can have at most 5 items while the entity and field lists can have at most 10 items.
Only include the most important items, keeping it as simple as required.
If a value is unknown, use reasonable defaults.
If the user input is unrelated to app requirements, do not return anything, or return an empty object.
The JSON object must follow this schema:

{
  "app_name": "App Name",
  "entities": [
    {
      "name": "Entity Name",
      "fields": [
        {"name": "field_name", "type": "id|string|first_name|last_name|name|email|text|number|date|boolean"}
      ]
    }
  ],
  "roles": [
    {
      "name": "Role Name",
      "actions": [
        {"name": "Action Name", "entity": "Entity Name", "type": "form|table|none"}
      ]
    }
  ]
}"#;

/// Truncates a description to its first [`MAX_DESCRIPTION_CHARS`] characters.
///
/// Counts Unicode scalar values rather than bytes, so the cut can never land
/// inside a multi-byte character.
#[must_use]
pub fn truncate_description(description: &str) -> &str {
    match description.char_indices().nth(MAX_DESCRIPTION_CHARS) {
        Some((index, _)) => &description[..index],
        None => description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_descriptions_pass_through() {
        assert_eq!(truncate_description("a todo app"), "a todo app");
    }

    #[test]
    fn long_descriptions_are_cut_to_the_cap() {
        let long = "x".repeat(5000);
        assert_eq!(truncate_description(&long).chars().count(), 2000);
    }

    #[test]
    fn exact_cap_is_not_cut() {
        let exact = "y".repeat(2000);
        assert_eq!(truncate_description(&exact), exact);
    }

    #[test]
    fn multibyte_input_is_cut_on_a_char_boundary() {
        let long = "é".repeat(3000);
        let cut = truncate_description(&long);
        assert_eq!(cut.chars().count(), 2000);
        assert!(long.starts_with(cut));
    }

    #[test]
    fn instruction_states_the_caps_and_conventions() {
        assert!(INSTRUCTION.contains("at most 5"));
        assert!(INSTRUCTION.contains("at most 10"));
        assert!(INSTRUCTION.contains("reasonable defaults"));
        assert!(INSTRUCTION.contains("return an empty object"));
        assert!(INSTRUCTION.contains("end of the action list"));
    }
}
