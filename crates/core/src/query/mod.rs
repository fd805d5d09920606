//! Key-condition query building.

mod condition;
mod expression;

pub use condition::{conditions_from_inputs, KeyCondition};
pub use expression::{build_key_condition, infer_value, KeyConditionExpression};
