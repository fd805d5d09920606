use async_trait::async_trait;

use crate::item::Item;
use crate::schema::{CreateTableRequest, StreamSpec, TableDescriptor, TtlDescriptor, TtlSpec};

use super::{QueryRequest, Result, ScanRequest};

/// Low-level handle: table lifecycle and table settings.
#[async_trait]
pub trait TableClient: Send + Sync {
    /// Endpoint this handle was built for.
    fn endpoint(&self) -> &str;

    /// Lists table names in the order the service returns them.
    async fn list_tables(&self) -> Result<Vec<String>>;

    async fn describe_table(&self, table_name: &str) -> Result<TableDescriptor>;

    /// Describes time-to-live. `None` when the service sent no description.
    async fn describe_time_to_live(&self, table_name: &str) -> Result<Option<TtlDescriptor>>;

    async fn create_table(&self, request: &CreateTableRequest) -> Result<TableDescriptor>;

    async fn delete_table(&self, table_name: &str) -> Result<TableDescriptor>;

    async fn update_time_to_live(&self, table_name: &str, spec: &TtlSpec) -> Result<TtlSpec>;

    async fn update_stream(&self, table_name: &str, spec: &StreamSpec) -> Result<TableDescriptor>;
}

/// Document handle: item reads and writes on generic values.
#[async_trait]
pub trait DocumentClient: Send + Sync {
    /// Endpoint this handle was built for.
    fn endpoint(&self) -> &str;

    async fn scan(&self, request: &ScanRequest) -> Result<Vec<Item>>;

    async fn query(&self, request: &QueryRequest) -> Result<Vec<Item>>;

    async fn put_item(&self, table_name: &str, item: &Item) -> Result<()>;

    async fn delete_item(&self, table_name: &str, key: &Item) -> Result<()>;
}
