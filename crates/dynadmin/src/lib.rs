//! dynadmin - HTTP admin console for DynamoDB Local.
//!
//! The server holds one active [`dispatcher::Dispatcher`] bound to a single
//! endpoint and exposes its operations as a JSON API. The endpoint can be
//! switched at runtime and is remembered across restarts.

pub mod app;
pub mod config;
pub mod connection;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod models;
pub mod settings;
pub mod state;
