//! AWS SDK backend.
//!
//! Clients are configured with the fixed local-development region and
//! placeholder credentials, so no AWS account or credential chain is needed.

mod client;
pub mod conversions;
mod error;

#[cfg(test)]
mod dynamodb_local_tests;

pub use client::{build_client, SdkConnectionFactory, SdkDocumentClient, SdkTableClient};
pub use error::map_sdk_error;
