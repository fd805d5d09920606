//! Table, key schema, stream and time-to-live model.

mod requests;
mod types;

pub use requests::{CreateTableRequest, TableForm, DEFAULT_THROUGHPUT};
pub use types::{
    AttributeDefinition, AttributeType, IndexDescriptor, KeySchemaElement, KeyType, Projection,
    ProjectionType, ProvisionedThroughput, SecondaryIndex, StreamSpec, StreamViewType,
    TableDescriptor, TtlDescriptor, TtlSpec, TtlStatus, FALLBACK_TTL_ATTRIBUTE,
};
