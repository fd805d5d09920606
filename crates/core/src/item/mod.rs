//! Generic document items.

mod key;
mod parse;
mod value;

pub use key::{item_template, key_from_item};
pub use parse::parse_item_json;
pub use value::{canonical_number, number_from_f64, Item, Number, Value};
