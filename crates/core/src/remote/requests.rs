use crate::query::KeyConditionExpression;

/// Unconditional read of up to `limit` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub table_name: String,
    pub index_name: Option<String>,
    pub limit: i32,
}

/// Key-condition read.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub table_name: String,
    pub index_name: Option<String>,
    pub key_condition: KeyConditionExpression,
}
