//! Connections to a DynamoDB-compatible endpoint.
//!
//! A [`Connection`] bundles the two client handles for one endpoint. Handles
//! are only ever built together by a [`ConnectionFactory`], so both always
//! point at the same place.
//!
//! Backends:
//! - [`sdk`]: the AWS SDK against a live endpoint such as DynamoDB Local
//! - [`inmemory`]: per-endpoint in-process tables for tests and demos

pub mod inmemory;
pub mod sdk;

use std::sync::Arc;

use dynadmin_core::remote::{DocumentClient, TableClient};

pub use inmemory::InMemoryConnectionFactory;
pub use sdk::SdkConnectionFactory;

/// The pair of client handles bound to one endpoint.
#[derive(Clone)]
pub struct Connection {
    endpoint: String,
    tables: Arc<dyn TableClient>,
    documents: Arc<dyn DocumentClient>,
}

impl Connection {
    pub fn new(
        endpoint: impl Into<String>,
        tables: Arc<dyn TableClient>,
        documents: Arc<dyn DocumentClient>,
    ) -> Self {
        let endpoint = endpoint.into();
        debug_assert_eq!(tables.endpoint(), endpoint);
        debug_assert_eq!(documents.endpoint(), endpoint);
        Self {
            endpoint,
            tables,
            documents,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Low-level handle for table lifecycle and settings.
    pub fn tables(&self) -> &dyn TableClient {
        self.tables.as_ref()
    }

    /// Document handle for item reads and writes.
    pub fn documents(&self) -> &dyn DocumentClient {
        self.documents.as_ref()
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// Builds connections. Building never touches the network.
pub trait ConnectionFactory: Send + Sync {
    fn connect(&self, endpoint: &str) -> Connection;
}
