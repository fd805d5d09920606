use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{KeySchemaElement, KeyType};

/// Equality condition on one key attribute, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyCondition {
    pub attribute_name: String,
    /// Raw text value. Its type is inferred when the expression is built.
    pub value: String,
    pub key_type: KeyType,
}

impl KeyCondition {
    pub fn new(attribute_name: impl Into<String>, value: impl Into<String>, key_type: KeyType) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            value: value.into(),
            key_type,
        }
    }
}

/// Turns per-attribute text inputs into conditions for the active key schema.
///
/// Attributes without input, or with blank input, produce no condition.
pub fn conditions_from_inputs(
    key_schema: &[KeySchemaElement],
    inputs: &BTreeMap<String, String>,
) -> Vec<KeyCondition> {
    key_schema
        .iter()
        .filter_map(|element| {
            inputs
                .get(&element.attribute_name)
                .filter(|value| !value.trim().is_empty())
                .map(|value| {
                    KeyCondition::new(&element.attribute_name, value.as_str(), element.key_type)
                })
        })
        .collect()
}
