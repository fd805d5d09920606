//! Tables and items held in memory for one endpoint.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use dynadmin_core::item::{canonical_number, key_from_item, Item, Value};
use dynadmin_core::query::KeyConditionExpression;
use dynadmin_core::remote::{RemoteError, Result};
use dynadmin_core::schema::{
    AttributeType, CreateTableRequest, IndexDescriptor, KeySchemaElement, KeyType, StreamSpec,
    TableDescriptor, TtlDescriptor, TtlSpec, TtlStatus, DEFAULT_THROUGHPUT,
};
use tokio::sync::RwLock;

const UNKNOWN_TTL_OPERATION: &str = "An unknown operation was requested.";

#[derive(Debug)]
struct StoredTable {
    descriptor: TableDescriptor,
    ttl: Option<TtlDescriptor>,
    /// Items keyed by their serialized primary key.
    items: BTreeMap<String, Item>,
}

impl StoredTable {
    fn refresh_stats(&mut self) {
        self.descriptor.item_count = self.items.len() as i64;
        self.descriptor.table_size_bytes = self
            .items
            .values()
            .map(|item| serde_json::to_vec(item).map(|b| b.len() as i64).unwrap_or_default())
            .sum();
    }
}

/// In-memory tables for one endpoint.
///
/// Mimics the DynamoDB Local behaviors the console relies on, including the
/// service error messages for missing tables and key schema violations.
#[derive(Debug)]
pub struct InMemoryStore {
    tables: RwLock<BTreeMap<String, StoredTable>>,
    ttl_supported: bool,
    requests: AtomicUsize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl InMemoryStore {
    /// Creates an empty store. With `ttl_supported` off, time-to-live calls
    /// fail the way older local targets fail them.
    pub fn new(ttl_supported: bool) -> Self {
        Self {
            tables: RwLock::new(BTreeMap::new()),
            ttl_supported,
            requests: AtomicUsize::new(0),
        }
    }

    /// Number of calls this store has answered.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    fn check_ttl_supported(&self) -> Result<()> {
        if self.ttl_supported {
            Ok(())
        } else {
            Err(RemoteError::UnsupportedOperation(
                UNKNOWN_TTL_OPERATION.to_string(),
            ))
        }
    }

    // ------------------------------------------------------------------------
    // Tables
    // ------------------------------------------------------------------------

    pub async fn list_tables(&self) -> Vec<String> {
        self.record_request();
        self.tables.read().await.keys().cloned().collect()
    }

    pub async fn describe_table(&self, table_name: &str) -> Result<TableDescriptor> {
        self.record_request();
        let tables = self.tables.read().await;
        Ok(get_table(&tables, table_name)?.descriptor.clone())
    }

    pub async fn create_table(&self, request: &CreateTableRequest) -> Result<TableDescriptor> {
        self.record_request();
        request
            .validate()
            .map_err(|e| RemoteError::Validation(e.to_string()))?;
        check_attributes_defined(request)?;

        let mut tables = self.tables.write().await;
        if tables.contains_key(&request.table_name) {
            return Err(RemoteError::InUse(format!(
                "Table already exists: {}",
                request.table_name
            )));
        }

        let descriptor = new_descriptor(request);
        tables.insert(
            request.table_name.clone(),
            StoredTable {
                descriptor: descriptor.clone(),
                ttl: None,
                items: BTreeMap::new(),
            },
        );

        tracing::debug!(table = %request.table_name, "In-memory table created");
        Ok(descriptor)
    }

    pub async fn delete_table(&self, table_name: &str) -> Result<TableDescriptor> {
        self.record_request();
        let mut tables = self.tables.write().await;
        let table = tables.remove(table_name).ok_or_else(not_found)?;
        Ok(table.descriptor)
    }

    pub async fn describe_time_to_live(&self, table_name: &str) -> Result<Option<TtlDescriptor>> {
        self.record_request();
        self.check_ttl_supported()?;
        let tables = self.tables.read().await;
        let table = get_table(&tables, table_name)?;

        Ok(Some(table.ttl.clone().unwrap_or(TtlDescriptor {
            time_to_live_status: TtlStatus::Disabled,
            attribute_name: None,
        })))
    }

    pub async fn update_time_to_live(&self, table_name: &str, spec: &TtlSpec) -> Result<TtlSpec> {
        self.record_request();
        self.check_ttl_supported()?;
        if spec.attribute_name.trim().is_empty() {
            return Err(RemoteError::Validation(
                "TimeToLiveSpecification.AttributeName must not be empty".to_string(),
            ));
        }

        let mut tables = self.tables.write().await;
        let table = get_table_mut(&mut tables, table_name)?;

        let currently_enabled = table
            .ttl
            .as_ref()
            .is_some_and(|ttl| ttl.time_to_live_status == TtlStatus::Enabled);
        if spec.enabled && currently_enabled {
            return Err(RemoteError::Validation(
                "TimeToLive is already enabled".to_string(),
            ));
        }
        if !spec.enabled && !currently_enabled {
            return Err(RemoteError::Validation(
                "TimeToLive is already disabled".to_string(),
            ));
        }

        table.ttl = Some(TtlDescriptor {
            time_to_live_status: if spec.enabled {
                TtlStatus::Enabled
            } else {
                TtlStatus::Disabled
            },
            attribute_name: spec.enabled.then(|| spec.attribute_name.clone()),
        });
        Ok(spec.clone())
    }

    pub async fn update_stream(&self, table_name: &str, spec: &StreamSpec) -> Result<TableDescriptor> {
        self.record_request();
        let mut tables = self.tables.write().await;
        let table = get_table_mut(&mut tables, table_name)?;
        let descriptor = &mut table.descriptor;

        match (spec.stream_enabled, descriptor.stream_enabled()) {
            (true, true) => {
                return Err(RemoteError::Validation(format!(
                    "Table already has an enabled stream: {}",
                    descriptor.latest_stream_arn.as_deref().unwrap_or_default()
                )))
            }
            (false, false) => {
                return Err(RemoteError::Validation(
                    "Table already has stream disabled".to_string(),
                ))
            }
            (true, false) => {
                if spec.stream_view_type.is_none() {
                    return Err(RemoteError::Validation(
                        "StreamViewType is required when enabling a stream".to_string(),
                    ));
                }
                let label = stream_label();
                descriptor.latest_stream_arn = Some(format!(
                    "{}/stream/{label}",
                    descriptor.table_arn.as_deref().unwrap_or_default()
                ));
                descriptor.latest_stream_label = Some(label);
                descriptor.stream_specification = Some(*spec);
            }
            (false, true) => descriptor.stream_specification = None,
        }

        Ok(descriptor.clone())
    }

    // ------------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------------

    pub async fn scan(&self, table_name: &str, index_name: Option<&str>, limit: usize) -> Result<Vec<Item>> {
        self.record_request();
        let tables = self.tables.read().await;
        let table = get_table(&tables, table_name)?;
        let key_schema = resolve_key_schema(&table.descriptor, index_name)?;

        Ok(table
            .items
            .values()
            .filter(|item| has_attributes(item, key_schema))
            .take(limit)
            .cloned()
            .collect())
    }

    pub async fn query(
        &self,
        table_name: &str,
        index_name: Option<&str>,
        condition: &KeyConditionExpression,
    ) -> Result<Vec<Item>> {
        self.record_request();
        let tables = self.tables.read().await;
        let table = get_table(&tables, table_name)?;
        let key_schema = resolve_key_schema(&table.descriptor, index_name)?;
        let clauses = parse_key_condition(condition)?;

        let partition_key = key_schema
            .iter()
            .find(|k| k.key_type == KeyType::Hash)
            .map(|k| k.attribute_name.as_str())
            .unwrap_or_default();
        if !clauses.iter().any(|(name, _)| name == partition_key) {
            return Err(RemoteError::Validation(format!(
                "Query condition missed key schema element: {partition_key}"
            )));
        }
        if let Some((name, _)) = clauses
            .iter()
            .find(|(name, _)| !key_schema.iter().any(|k| &k.attribute_name == name))
        {
            return Err(RemoteError::Validation(format!(
                "Query condition missed key schema element: {name}"
            )));
        }

        Ok(table
            .items
            .values()
            .filter(|item| {
                clauses
                    .iter()
                    .all(|(name, value)| item.get(name).is_some_and(|v| values_equal(v, value)))
            })
            .cloned()
            .collect())
    }

    pub async fn put_item(&self, table_name: &str, item: &Item) -> Result<()> {
        self.record_request();
        let mut tables = self.tables.write().await;
        let table = get_table_mut(&mut tables, table_name)?;

        check_key_attributes(&table.descriptor, item, "item")?;
        let key = storage_key(&table.descriptor, item)?;

        table.items.insert(key, item.clone());
        table.refresh_stats();
        Ok(())
    }

    pub async fn delete_item(&self, table_name: &str, key: &Item) -> Result<()> {
        self.record_request();
        let mut tables = self.tables.write().await;
        let table = get_table_mut(&mut tables, table_name)?;

        if key.len() != table.descriptor.key_schema.len() {
            return Err(RemoteError::Validation(
                "The provided key element does not match the schema".to_string(),
            ));
        }
        check_key_attributes(&table.descriptor, key, "key")?;
        let storage_key = storage_key(&table.descriptor, key)?;

        table.items.remove(&storage_key);
        table.refresh_stats();
        Ok(())
    }
}

fn not_found() -> RemoteError {
    RemoteError::NotFound("Cannot do operations on a non-existent table".to_string())
}

fn get_table<'a>(tables: &'a BTreeMap<String, StoredTable>, name: &str) -> Result<&'a StoredTable> {
    tables.get(name).ok_or_else(not_found)
}

fn get_table_mut<'a>(
    tables: &'a mut BTreeMap<String, StoredTable>,
    name: &str,
) -> Result<&'a mut StoredTable> {
    tables.get_mut(name).ok_or_else(not_found)
}

fn check_attributes_defined(request: &CreateTableRequest) -> Result<()> {
    let key_attributes = request
        .key_schema
        .iter()
        .chain(request.global_secondary_indexes.iter().flat_map(|i| i.key_schema.iter()));

    for key in key_attributes {
        let defined = request
            .attribute_definitions
            .iter()
            .any(|d| d.attribute_name == key.attribute_name);
        if !defined {
            return Err(RemoteError::Validation(format!(
                "One or more parameter values were invalid: Some index key attributes are not defined in AttributeDefinitions. Keys: [{}]",
                key.attribute_name
            )));
        }
    }
    Ok(())
}

fn stream_label() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

fn new_descriptor(request: &CreateTableRequest) -> TableDescriptor {
    let table_arn = format!("arn:aws:dynamodb:ddblocal:000000000000:table/{}", request.table_name);
    let stream = request.stream_specification.filter(|s| s.stream_enabled);
    let latest_stream_label = stream.map(|_| stream_label());

    TableDescriptor {
        table_name: request.table_name.clone(),
        table_status: "ACTIVE".to_string(),
        key_schema: request.key_schema.clone(),
        attribute_definitions: request.attribute_definitions.clone(),
        global_secondary_indexes: request
            .global_secondary_indexes
            .iter()
            .map(|index| IndexDescriptor {
                index_name: index.index_name.clone(),
                key_schema: index.key_schema.clone(),
                projection: index.projection.clone(),
                index_status: Some("ACTIVE".to_string()),
                item_count: Some(0),
            })
            .collect(),
        local_secondary_indexes: Vec::new(),
        stream_specification: stream,
        latest_stream_arn: latest_stream_label
            .as_ref()
            .map(|label| format!("{table_arn}/stream/{label}")),
        latest_stream_label,
        provisioned_throughput: Some(DEFAULT_THROUGHPUT),
        table_size_bytes: 0,
        item_count: 0,
        creation_date_time: Some(Utc::now()),
        table_arn: Some(table_arn),
    }
}

fn resolve_key_schema<'a>(
    descriptor: &'a TableDescriptor,
    index_name: Option<&str>,
) -> Result<&'a [KeySchemaElement]> {
    match index_name {
        None => Ok(&descriptor.key_schema),
        Some(name) => descriptor
            .index(name)
            .map(|index| index.key_schema.as_slice())
            .ok_or_else(|| {
                RemoteError::Validation(format!(
                    "The table does not have the specified index: {name}"
                ))
            }),
    }
}

fn has_attributes(item: &Item, key_schema: &[KeySchemaElement]) -> bool {
    key_schema.iter().all(|k| item.contains_key(&k.attribute_name))
}

/// Checks that every base key attribute is present with its declared type.
fn check_key_attributes(descriptor: &TableDescriptor, item: &Item, what: &str) -> Result<()> {
    for key in &descriptor.key_schema {
        let value = item.get(&key.attribute_name).ok_or_else(|| {
            RemoteError::Validation(format!(
                "One or more parameter values were invalid: Missing the key {} in the {what}",
                key.attribute_name
            ))
        })?;

        let expected = descriptor
            .attribute_definitions
            .iter()
            .find(|d| d.attribute_name == key.attribute_name)
            .map(|d| d.attribute_type)
            .unwrap_or(AttributeType::String);

        let actual = match value {
            Value::String(_) => Some(AttributeType::String),
            Value::Number(_) => Some(AttributeType::Number),
            _ => None,
        };
        let matches = match expected {
            AttributeType::Binary => actual == Some(AttributeType::String),
            expected => actual == Some(expected),
        };
        if !matches {
            return Err(RemoteError::Validation(format!(
                "One or more parameter values were invalid: Type mismatch for key {} expected: {} actual: {}",
                key.attribute_name,
                expected,
                actual.map(|t| t.as_str()).unwrap_or("other")
            )));
        }
    }
    Ok(())
}

/// Serialized base key. Numbers are canonical, so `1` and `1.0` name one item.
fn storage_key(descriptor: &TableDescriptor, item: &Item) -> Result<String> {
    let key: Item = key_from_item(&descriptor.key_schema, item)
        .map_err(|e| RemoteError::Validation(e.to_string()))?
        .into_iter()
        .map(|(name, value)| match value {
            Value::Number(n) => (name, Value::Number(canonical_number(&n))),
            value => (name, value),
        })
        .collect();
    serde_json::to_string(&key).map_err(|e| RemoteError::Conversion(e.to_string()))
}

/// Parses `#name = :value` clauses joined by `AND` into attribute/value pairs.
fn parse_key_condition(condition: &KeyConditionExpression) -> Result<Vec<(String, Value)>> {
    condition
        .expression
        .split(" AND ")
        .map(|clause| {
            let (placeholder, value_ref) = clause.split_once(" = ").ok_or_else(|| {
                RemoteError::Validation(format!(
                    "Invalid KeyConditionExpression: unsupported clause: {clause}"
                ))
            })?;

            let name = condition
                .attribute_names
                .get(placeholder.trim())
                .ok_or_else(|| {
                    RemoteError::Validation(format!(
                        "Value provided in ExpressionAttributeNames unused or undefined: {placeholder}"
                    ))
                })?;
            let value = condition
                .attribute_values
                .get(value_ref.trim())
                .ok_or_else(|| {
                    RemoteError::Validation(format!(
                        "Value provided in ExpressionAttributeValues unused or undefined: {value_ref}"
                    ))
                })?;

            Ok((name.clone(), value.clone()))
        })
        .collect()
}

/// Numbers compare by numeric value, everything else structurally.
fn values_equal(stored: &Value, wanted: &Value) -> bool {
    match (stored, wanted) {
        (Value::Number(a), Value::Number(b)) => canonical_number(a) == canonical_number(b),
        (a, b) => a == b,
    }
}

#[cfg(test)]
mod tests {
    use dynadmin_core::query::{build_key_condition, KeyCondition};
    use dynadmin_core::schema::{AttributeDefinition, StreamViewType, TableForm};

    use super::*;

    fn orders_request() -> CreateTableRequest {
        TableForm {
            table_name: "Orders".to_string(),
            partition_key_name: "customer".to_string(),
            sort_key_name: "order".to_string(),
            sort_key_type: AttributeType::Number,
            ..TableForm::default()
        }
        .into_request()
        .unwrap()
    }

    fn order(customer: &str, order: i64) -> Item {
        let mut item = Item::new();
        item.insert("customer".to_string(), Value::from(customer));
        item.insert("order".to_string(), Value::from(order));
        item
    }

    #[tokio::test]
    async fn test_create_and_describe_table() {
        let store = InMemoryStore::default();
        let created = store.create_table(&orders_request()).await.unwrap();

        assert_eq!(created.table_status, "ACTIVE");
        assert_eq!(created.provisioned_throughput, Some(DEFAULT_THROUGHPUT));
        assert_eq!(store.list_tables().await, vec!["Orders".to_string()]);
        assert_eq!(store.describe_table("Orders").await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_duplicate_table_is_in_use() {
        let store = InMemoryStore::default();
        store.create_table(&orders_request()).await.unwrap();

        let result = store.create_table(&orders_request()).await;
        assert_eq!(
            result,
            Err(RemoteError::InUse("Table already exists: Orders".to_string()))
        );
    }

    #[tokio::test]
    async fn test_undefined_key_attribute_is_rejected() {
        let store = InMemoryStore::default();
        let mut request = orders_request();
        request.attribute_definitions = vec![AttributeDefinition::new("customer", AttributeType::String)];

        assert!(matches!(
            store.create_table(&request).await,
            Err(RemoteError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_table_is_not_found() {
        let store = InMemoryStore::default();
        assert!(matches!(
            store.describe_table("Nope").await,
            Err(RemoteError::NotFound(_))
        ));
        assert!(matches!(
            store.put_item("Nope", &order("a", 1)).await,
            Err(RemoteError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_put_replaces_by_key_and_updates_counts() {
        let store = InMemoryStore::default();
        store.create_table(&orders_request()).await.unwrap();

        store.put_item("Orders", &order("a", 1)).await.unwrap();
        let mut updated = order("a", 1);
        updated.insert("total".to_string(), Value::from(10_i64));
        store.put_item("Orders", &updated).await.unwrap();
        store.put_item("Orders", &order("b", 1)).await.unwrap();

        let items = store.scan("Orders", None, 50).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.contains(&updated));
        assert_eq!(store.describe_table("Orders").await.unwrap().item_count, 2);
    }

    #[tokio::test]
    async fn test_integral_float_key_names_the_same_item() {
        let store = InMemoryStore::default();
        store
            .create_table(
                &TableForm {
                    table_name: "Numbers".to_string(),
                    partition_key_type: AttributeType::Number,
                    ..TableForm::default()
                }
                .into_request()
                .unwrap(),
            )
            .await
            .unwrap();

        let int_key: Item = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        let float_key: Item = serde_json::from_str(r#"{"id": 1.0, "v": "x"}"#).unwrap();
        store.put_item("Numbers", &int_key).await.unwrap();
        store.put_item("Numbers", &float_key).await.unwrap();

        let items = store.scan("Numbers", None, 50).await.unwrap();
        assert_eq!(items, vec![float_key]);

        let delete_key: Item = serde_json::from_str(r#"{"id": 1.0}"#).unwrap();
        store.delete_item("Numbers", &delete_key).await.unwrap();
        assert!(store.scan("Numbers", None, 50).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_with_wrong_key_type_is_a_validation_error() {
        let store = InMemoryStore::default();
        store.create_table(&orders_request()).await.unwrap();

        let mut item = order("a", 1);
        item.insert("order".to_string(), Value::from("one"));

        let err = store.put_item("Orders", &item).await.unwrap_err();
        assert_eq!(
            err,
            RemoteError::Validation(
                "One or more parameter values were invalid: Type mismatch for key order expected: N actual: S"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_scan_honors_limit() {
        let store = InMemoryStore::default();
        store.create_table(&orders_request()).await.unwrap();
        for n in 0..10 {
            store.put_item("Orders", &order("a", n)).await.unwrap();
        }

        assert_eq!(store.scan("Orders", None, 3).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_query_matches_key_conditions() {
        let store = InMemoryStore::default();
        store.create_table(&orders_request()).await.unwrap();
        store.put_item("Orders", &order("a", 1)).await.unwrap();
        store.put_item("Orders", &order("a", 2)).await.unwrap();
        store.put_item("Orders", &order("b", 1)).await.unwrap();

        let by_customer = build_key_condition(&[KeyCondition::new("customer", "a", KeyType::Hash)]).unwrap();
        assert_eq!(store.query("Orders", None, &by_customer).await.unwrap().len(), 2);

        let exact = build_key_condition(&[
            KeyCondition::new("customer", "a", KeyType::Hash),
            KeyCondition::new("order", "2", KeyType::Range),
        ])
        .unwrap();
        assert_eq!(
            store.query("Orders", None, &exact).await.unwrap(),
            vec![order("a", 2)]
        );
    }

    #[tokio::test]
    async fn test_query_without_partition_key_is_rejected() {
        let store = InMemoryStore::default();
        store.create_table(&orders_request()).await.unwrap();

        let sort_only = build_key_condition(&[KeyCondition::new("order", "1", KeyType::Range)]).unwrap();
        assert_eq!(
            store.query("Orders", None, &sort_only).await,
            Err(RemoteError::Validation(
                "Query condition missed key schema element: customer".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_delete_item_by_key() {
        let store = InMemoryStore::default();
        store.create_table(&orders_request()).await.unwrap();
        store.put_item("Orders", &order("a", 1)).await.unwrap();

        store.delete_item("Orders", &order("a", 1)).await.unwrap();
        assert!(store.scan("Orders", None, 50).await.unwrap().is_empty());

        let mut partial = Item::new();
        partial.insert("customer".to_string(), Value::from("a"));
        assert!(matches!(
            store.delete_item("Orders", &partial).await,
            Err(RemoteError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_ttl_lifecycle() {
        let store = InMemoryStore::default();
        store.create_table(&orders_request()).await.unwrap();

        let initial = store.describe_time_to_live("Orders").await.unwrap().unwrap();
        assert_eq!(initial.time_to_live_status, TtlStatus::Disabled);

        let enable = TtlSpec::enable("expires").unwrap();
        store.update_time_to_live("Orders", &enable).await.unwrap();
        let enabled = store.describe_time_to_live("Orders").await.unwrap().unwrap();
        assert_eq!(enabled.time_to_live_status, TtlStatus::Enabled);
        assert_eq!(enabled.attribute_name.as_deref(), Some("expires"));

        store
            .update_time_to_live("Orders", &TtlSpec::disable(Some(&enabled)))
            .await
            .unwrap();
        let disabled = store.describe_time_to_live("Orders").await.unwrap().unwrap();
        assert_eq!(disabled.time_to_live_status, TtlStatus::Disabled);
    }

    #[tokio::test]
    async fn test_ttl_unsupported_store() {
        let store = InMemoryStore::new(false);
        store.create_table(&orders_request()).await.unwrap();

        assert!(store
            .describe_time_to_live("Orders")
            .await
            .unwrap_err()
            .is_unsupported_operation());
    }

    #[tokio::test]
    async fn test_stream_enable_then_disable() {
        let store = InMemoryStore::default();
        store.create_table(&orders_request()).await.unwrap();

        let enabled = store
            .update_stream("Orders", &StreamSpec::enabled(StreamViewType::KeysOnly))
            .await
            .unwrap();
        assert!(enabled.stream_enabled());
        assert!(enabled.latest_stream_arn.is_some());

        assert!(matches!(
            store
                .update_stream("Orders", &StreamSpec::enabled(StreamViewType::KeysOnly))
                .await,
            Err(RemoteError::Validation(_))
        ));

        let disabled = store.update_stream("Orders", &StreamSpec::disabled()).await.unwrap();
        assert!(!disabled.stream_enabled());
    }

    #[tokio::test]
    async fn test_requests_are_counted() {
        let store = InMemoryStore::default();
        assert_eq!(store.request_count(), 0);
        store.list_tables().await;
        let _ = store.describe_table("Nope").await;
        assert_eq!(store.request_count(), 2);
    }
}
