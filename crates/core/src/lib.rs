//! dynadmin_core - Functional core for the dynadmin console.
//!
//! Pure data types and pure functions shared by the server: the table and key
//! schema model, generic item values, key-condition building and the error
//! types surfaced to the HTTP layer. Nothing in this crate performs I/O.

pub mod endpoint;
mod error;
pub mod item;
pub mod query;
pub mod remote;
pub mod schema;

pub use error::{InputError, Result};
