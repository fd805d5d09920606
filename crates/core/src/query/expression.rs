use std::collections::BTreeMap;

use crate::item::{number_from_f64, Item, Value};

use super::condition::KeyCondition;

/// A key-condition expression with its placeholder substitutions.
///
/// Attribute names and values are always referenced through `#kN` / `:vN`
/// placeholders so reserved words never collide with the expression syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyConditionExpression {
    pub expression: String,
    pub attribute_names: BTreeMap<String, String>,
    pub attribute_values: Item,
}

/// Builds an equality expression over every condition, joined with `AND`.
///
/// Returns `None` for an empty condition list: a query needs at least one key
/// condition, so there is nothing to send.
pub fn build_key_condition(conditions: &[KeyCondition]) -> Option<KeyConditionExpression> {
    if conditions.is_empty() {
        return None;
    }

    let mut clauses = Vec::with_capacity(conditions.len());
    let mut attribute_names = BTreeMap::new();
    let mut attribute_values = Item::new();

    for (i, condition) in conditions.iter().enumerate() {
        let name = format!("#k{i}");
        let value = format!(":v{i}");
        clauses.push(format!("{name} = {value}"));
        attribute_names.insert(name, condition.attribute_name.clone());
        attribute_values.insert(value, infer_value(&condition.value));
    }

    Some(KeyConditionExpression {
        expression: clauses.join(" AND "),
        attribute_names,
        attribute_values,
    })
}

/// Guesses the type of a typed-in key value.
///
/// Non-empty text that reads as a finite decimal number (`007`, `+5`, `.5`,
/// `1e3`) becomes a number, in integer form when integral. Everything else
/// stays a string. This is a heuristic, not a schema lookup: a
/// numeric-looking value for a string key will be sent as a number.
pub fn infer_value(text: &str) -> Value {
    text.trim()
        .parse::<f64>()
        .ok()
        .and_then(number_from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(text.to_string()))
}
