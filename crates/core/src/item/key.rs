use crate::error::{InputError, Result};
use crate::schema::KeySchemaElement;

use super::value::{Item, Value};

/// Builds the primary key of `item` from the table's base key schema.
///
/// Callers must pass the base table schema even when the item was found
/// through a secondary index: deletes always address the base table.
pub fn key_from_item(key_schema: &[KeySchemaElement], item: &Item) -> Result<Item> {
    key_schema
        .iter()
        .map(|element| {
            let name = &element.attribute_name;
            match item.get(name) {
                Some(value) if !value.is_null() => Ok((name.clone(), value.clone())),
                _ => Err(InputError::MissingKeyAttribute(name.clone())),
            }
        })
        .collect()
}

/// Skeleton for a new item: every key attribute set to an empty string.
pub fn item_template(key_schema: &[KeySchemaElement]) -> Item {
    key_schema
        .iter()
        .map(|element| (element.attribute_name.clone(), Value::from("")))
        .collect()
}
