//! Client handles over an in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use dynadmin_core::item::Item;
use dynadmin_core::remote::{DocumentClient, QueryRequest, Result, ScanRequest, TableClient};
use dynadmin_core::schema::{CreateTableRequest, StreamSpec, TableDescriptor, TtlDescriptor, TtlSpec};

use super::store::InMemoryStore;

/// Low-level handle over an in-memory store.
#[derive(Debug, Clone)]
pub struct InMemoryTableClient {
    endpoint: String,
    store: Arc<InMemoryStore>,
}

impl InMemoryTableClient {
    pub fn new(endpoint: impl Into<String>, store: Arc<InMemoryStore>) -> Self {
        Self {
            endpoint: endpoint.into(),
            store,
        }
    }
}

#[async_trait]
impl TableClient for InMemoryTableClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.store.list_tables().await)
    }

    async fn describe_table(&self, table_name: &str) -> Result<TableDescriptor> {
        self.store.describe_table(table_name).await
    }

    async fn describe_time_to_live(&self, table_name: &str) -> Result<Option<TtlDescriptor>> {
        self.store.describe_time_to_live(table_name).await
    }

    async fn create_table(&self, request: &CreateTableRequest) -> Result<TableDescriptor> {
        self.store.create_table(request).await
    }

    async fn delete_table(&self, table_name: &str) -> Result<TableDescriptor> {
        self.store.delete_table(table_name).await
    }

    async fn update_time_to_live(&self, table_name: &str, spec: &TtlSpec) -> Result<TtlSpec> {
        self.store.update_time_to_live(table_name, spec).await
    }

    async fn update_stream(&self, table_name: &str, spec: &StreamSpec) -> Result<TableDescriptor> {
        self.store.update_stream(table_name, spec).await
    }
}

/// Document handle over an in-memory store.
#[derive(Debug, Clone)]
pub struct InMemoryDocumentClient {
    endpoint: String,
    store: Arc<InMemoryStore>,
}

impl InMemoryDocumentClient {
    pub fn new(endpoint: impl Into<String>, store: Arc<InMemoryStore>) -> Self {
        Self {
            endpoint: endpoint.into(),
            store,
        }
    }
}

#[async_trait]
impl DocumentClient for InMemoryDocumentClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn scan(&self, request: &ScanRequest) -> Result<Vec<Item>> {
        let limit = usize::try_from(request.limit).unwrap_or_default();
        self.store
            .scan(&request.table_name, request.index_name.as_deref(), limit)
            .await
    }

    async fn query(&self, request: &QueryRequest) -> Result<Vec<Item>> {
        self.store
            .query(
                &request.table_name,
                request.index_name.as_deref(),
                &request.key_condition,
            )
            .await
    }

    async fn put_item(&self, table_name: &str, item: &Item) -> Result<()> {
        self.store.put_item(table_name, item).await
    }

    async fn delete_item(&self, table_name: &str, key: &Item) -> Result<()> {
        self.store.delete_item(table_name, key).await
    }
}
