//! In-memory backend.
//!
//! Each endpoint gets its own [`InMemoryStore`], so switching endpoints
//! switches data sets the way it would against real targets. Stores live as
//! long as the factory that created them.

mod client;
mod store;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

pub use client::{InMemoryDocumentClient, InMemoryTableClient};
pub use store::InMemoryStore;

use crate::connection::{Connection, ConnectionFactory};

/// Hands out connections backed by per-endpoint in-memory stores.
#[derive(Debug, Default)]
pub struct InMemoryConnectionFactory {
    stores: Mutex<HashMap<String, Arc<InMemoryStore>>>,
    ttl_unsupported: bool,
}

impl InMemoryConnectionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose stores reject time-to-live calls as unknown operations.
    pub fn without_ttl() -> Self {
        Self {
            ttl_unsupported: true,
            ..Self::default()
        }
    }

    /// The store for an endpoint, created on first use.
    pub fn store(&self, endpoint: &str) -> Arc<InMemoryStore> {
        let mut stores = self.stores.lock().unwrap_or_else(PoisonError::into_inner);
        stores
            .entry(endpoint.to_string())
            .or_insert_with(|| Arc::new(InMemoryStore::new(!self.ttl_unsupported)))
            .clone()
    }
}

impl ConnectionFactory for InMemoryConnectionFactory {
    fn connect(&self, endpoint: &str) -> Connection {
        let store = self.store(endpoint);
        tracing::info!(endpoint, "Built in-memory clients");

        Connection::new(
            endpoint,
            Arc::new(InMemoryTableClient::new(endpoint, store.clone())),
            Arc::new(InMemoryDocumentClient::new(endpoint, store)),
        )
    }
}
