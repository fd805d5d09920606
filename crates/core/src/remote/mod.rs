//! The seam between the dispatcher and whatever answers its calls.
//!
//! A connection is a pair of handles, [`TableClient`] and [`DocumentClient`],
//! always built together for one endpoint.

mod error;
mod http_mapping;
mod requests;
mod traits;

pub use error::{
    RemoteError, Result, RESOURCE_IN_USE, RESOURCE_NOT_FOUND, UNKNOWN_OPERATION, VALIDATION,
};
pub use http_mapping::{input_error_to_status_code, remote_error_to_status_code};
pub use requests::{QueryRequest, ScanRequest};
pub use traits::{DocumentClient, TableClient};
