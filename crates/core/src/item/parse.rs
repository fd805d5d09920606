use crate::error::{InputError, Result};

use super::value::Item;

/// Parses an item body typed by the user.
///
/// The body must be a JSON object; anything else is rejected before it can
/// reach the service.
pub fn parse_item_json(text: &str) -> Result<Item> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| InputError::InvalidJson(e.to_string()))?;

    if !value.is_object() {
        return Err(InputError::NotAnObject);
    }

    serde_json::from_value(value).map_err(|e| InputError::InvalidJson(e.to_string()))
}
