//! Request dispatcher.
//!
//! Every console operation goes through a [`Dispatcher`], which owns one
//! [`Connection`] and translates console-level requests into calls on its
//! handles. A dispatcher never changes endpoint: switching endpoints builds a
//! new one (see [`crate::state::AppState::set_endpoint`]).

use std::collections::BTreeMap;

use dynadmin_core::item::{key_from_item, Item};
use dynadmin_core::query::{build_key_condition, conditions_from_inputs, KeyCondition};
use dynadmin_core::remote::{QueryRequest, ScanRequest};
use dynadmin_core::schema::{
    CreateTableRequest, StreamSpec, TableDescriptor, TableForm, TtlDescriptor, TtlSpec,
};

use crate::connection::Connection;
use crate::error::Result;

/// Maximum number of items a scan returns. There is no pagination.
pub const SCAN_LIMIT: i32 = 50;

/// Items returned by a scan, and whether the cap was hit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanPage {
    pub items: Vec<Item>,
    pub limit_reached: bool,
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    connection: Connection,
}

impl Dispatcher {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    pub fn endpoint(&self) -> &str {
        self.connection.endpoint()
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    // ========================================================================
    // Tables
    // ========================================================================

    pub async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.connection.tables().list_tables().await?)
    }

    pub async fn describe_table(&self, table_name: &str) -> Result<TableDescriptor> {
        Ok(self.connection.tables().describe_table(table_name).await?)
    }

    /// Describes time-to-live.
    ///
    /// Targets that predate TTL answer with an unknown-operation error; that
    /// one failure yields `None` instead of an error.
    pub async fn describe_time_to_live(&self, table_name: &str) -> Result<Option<TtlDescriptor>> {
        match self.connection.tables().describe_time_to_live(table_name).await {
            Ok(ttl) => Ok(ttl),
            Err(e) if e.is_unsupported_operation() => {
                tracing::warn!(
                    endpoint = %self.endpoint(),
                    table = %table_name,
                    error = %e,
                    "Target does not support time-to-live"
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn create_table(&self, request: &CreateTableRequest) -> Result<TableDescriptor> {
        request.validate()?;
        tracing::info!(table = %request.table_name, "Creating table");
        Ok(self.connection.tables().create_table(request).await?)
    }

    pub async fn create_table_from_form(&self, form: TableForm) -> Result<TableDescriptor> {
        let request = form.into_request()?;
        self.create_table(&request).await
    }

    pub async fn delete_table(&self, table_name: &str) -> Result<TableDescriptor> {
        tracing::info!(table = %table_name, "Deleting table");
        Ok(self.connection.tables().delete_table(table_name).await?)
    }

    pub async fn update_time_to_live(&self, table_name: &str, spec: &TtlSpec) -> Result<TtlSpec> {
        Ok(self
            .connection
            .tables()
            .update_time_to_live(table_name, spec)
            .await?)
    }

    /// Disables time-to-live using the last-known attribute name.
    pub async fn disable_time_to_live(&self, table_name: &str) -> Result<TtlSpec> {
        let current = self.describe_time_to_live(table_name).await?;
        let spec = TtlSpec::disable(current.as_ref());
        self.update_time_to_live(table_name, &spec).await
    }

    pub async fn update_stream(&self, table_name: &str, spec: &StreamSpec) -> Result<TableDescriptor> {
        Ok(self.connection.tables().update_stream(table_name, spec).await?)
    }

    /// Flips the table's stream between enabled and disabled.
    pub async fn toggle_stream(&self, table_name: &str) -> Result<TableDescriptor> {
        let table = self.describe_table(table_name).await?;
        let spec = StreamSpec::toggled(table.stream_specification.as_ref());
        self.update_stream(table_name, &spec).await
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Reads up to [`SCAN_LIMIT`] items, from an index when one is named.
    pub async fn scan(&self, table_name: &str, index_name: Option<&str>) -> Result<ScanPage> {
        let request = ScanRequest {
            table_name: table_name.to_string(),
            index_name: index_name.map(str::to_string),
            limit: SCAN_LIMIT,
        };

        let mut items = self.connection.documents().scan(&request).await?;
        items.truncate(SCAN_LIMIT as usize);

        Ok(ScanPage {
            limit_reached: items.len() == SCAN_LIMIT as usize,
            items,
        })
    }

    /// Runs an equality query. An empty condition list matches nothing and
    /// makes no remote call.
    pub async fn query(
        &self,
        table_name: &str,
        index_name: Option<&str>,
        conditions: &[KeyCondition],
    ) -> Result<Vec<Item>> {
        let Some(key_condition) = build_key_condition(conditions) else {
            tracing::debug!(table = %table_name, "Query without key conditions, skipping");
            return Ok(Vec::new());
        };

        let request = QueryRequest {
            table_name: table_name.to_string(),
            index_name: index_name.map(str::to_string),
            key_condition,
        };
        Ok(self.connection.documents().query(&request).await?)
    }

    /// Queries with per-attribute text inputs for the active key schema.
    pub async fn query_from_inputs(
        &self,
        table_name: &str,
        index_name: Option<&str>,
        inputs: &BTreeMap<String, String>,
    ) -> Result<Vec<Item>> {
        let table = self.describe_table(table_name).await?;
        let conditions = conditions_from_inputs(table.active_key_schema(index_name), inputs);
        self.query(table_name, index_name, &conditions).await
    }

    pub async fn put_item(&self, table_name: &str, item: &Item) -> Result<()> {
        Ok(self.connection.documents().put_item(table_name, item).await?)
    }

    pub async fn delete_item(&self, table_name: &str, key: &Item) -> Result<()> {
        Ok(self.connection.documents().delete_item(table_name, key).await?)
    }

    /// Deletes the item identified by the base key attributes of `item`.
    /// Returns the key that was used.
    pub async fn delete_item_by_base_key(&self, table_name: &str, item: &Item) -> Result<Item> {
        let table = self.describe_table(table_name).await?;
        let key = key_from_item(&table.key_schema, item)?;
        self.delete_item(table_name, &key).await?;
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dynadmin_core::item::Value;
    use dynadmin_core::remote::RemoteError;
    use dynadmin_core::schema::{KeyType, TtlStatus};
    use dynadmin_core::InputError;

    use super::*;
    use crate::connection::{ConnectionFactory, InMemoryConnectionFactory};
    use crate::error::DispatchError;

    const ENDPOINT: &str = "http://localhost:8000";

    fn dispatcher_on(factory: &InMemoryConnectionFactory) -> Dispatcher {
        Dispatcher::new(factory.connect(ENDPOINT))
    }

    fn users_form() -> TableForm {
        TableForm {
            table_name: "Users".to_string(),
            ..TableForm::default()
        }
    }

    fn user(id: &str) -> Item {
        let mut item = Item::new();
        item.insert("id".to_string(), Value::from(id));
        item
    }

    #[tokio::test]
    async fn test_create_describe_delete_table() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);

        let created = dispatcher.create_table_from_form(users_form()).await.unwrap();
        assert_eq!(created.table_name, "Users");
        assert_eq!(dispatcher.list_tables().await.unwrap(), vec!["Users".to_string()]);

        let deleted = dispatcher.delete_table("Users").await.unwrap();
        assert_eq!(deleted.table_name, "Users");
        assert!(dispatcher.list_tables().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_table_without_partition_key_makes_no_remote_call() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);

        let request = CreateTableRequest {
            table_name: "Users".to_string(),
            key_schema: vec![],
            attribute_definitions: vec![],
            global_secondary_indexes: vec![],
            stream_specification: None,
        };

        assert_eq!(
            dispatcher.create_table(&request).await,
            Err(DispatchError::Input(InputError::MissingPartitionKey))
        );
        assert_eq!(factory.store(ENDPOINT).request_count(), 0);
    }

    #[tokio::test]
    async fn test_scan_is_capped_at_fifty() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);
        dispatcher.create_table_from_form(users_form()).await.unwrap();

        for n in 0..75 {
            dispatcher.put_item("Users", &user(&format!("user-{n:03}"))).await.unwrap();
        }

        let page = dispatcher.scan("Users", None).await.unwrap();
        assert_eq!(page.items.len(), 50);
        assert!(page.limit_reached);
    }

    #[tokio::test]
    async fn test_scan_below_cap_is_not_limited() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);
        dispatcher.create_table_from_form(users_form()).await.unwrap();
        dispatcher.put_item("Users", &user("a")).await.unwrap();

        let page = dispatcher.scan("Users", None).await.unwrap();
        assert_eq!(page.items, vec![user("a")]);
        assert!(!page.limit_reached);
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_remote_call() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);

        let items = dispatcher.query("Users", None, &[]).await.unwrap();

        assert!(items.is_empty());
        assert_eq!(factory.store(ENDPOINT).request_count(), 0);
    }

    #[tokio::test]
    async fn test_query_with_inferred_number() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);
        dispatcher
            .create_table_from_form(TableForm {
                table_name: "Scores".to_string(),
                partition_key_type: dynadmin_core::schema::AttributeType::Number,
                ..TableForm::default()
            })
            .await
            .unwrap();

        let mut item = Item::new();
        item.insert("id".to_string(), Value::from(42_i64));
        dispatcher.put_item("Scores", &item).await.unwrap();

        let conditions = [KeyCondition::new("id", "42", KeyType::Hash)];
        assert_eq!(
            dispatcher.query("Scores", None, &conditions).await.unwrap(),
            vec![item]
        );
    }

    #[tokio::test]
    async fn test_query_from_inputs_drops_blank_values() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);
        dispatcher.create_table_from_form(users_form()).await.unwrap();
        dispatcher.put_item("Users", &user("a")).await.unwrap();
        let requests_before = factory.store(ENDPOINT).request_count();

        let blank = BTreeMap::from([("id".to_string(), "   ".to_string())]);
        assert!(dispatcher
            .query_from_inputs("Users", None, &blank)
            .await
            .unwrap()
            .is_empty());
        // Only the describe call went out.
        assert_eq!(factory.store(ENDPOINT).request_count(), requests_before + 1);

        let filled = BTreeMap::from([("id".to_string(), "a".to_string())]);
        assert_eq!(
            dispatcher.query_from_inputs("Users", None, &filled).await.unwrap(),
            vec![user("a")]
        );
    }

    #[tokio::test]
    async fn test_describe_ttl_unknown_operation_is_none() {
        let factory = InMemoryConnectionFactory::without_ttl();
        let dispatcher = dispatcher_on(&factory);
        dispatcher.create_table_from_form(users_form()).await.unwrap();

        assert_eq!(dispatcher.describe_time_to_live("Users").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_describe_ttl_other_errors_propagate() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);

        assert!(matches!(
            dispatcher.describe_time_to_live("Missing").await,
            Err(DispatchError::Remote(RemoteError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_disable_ttl_reuses_known_attribute() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);
        dispatcher.create_table_from_form(users_form()).await.unwrap();
        dispatcher
            .update_time_to_live("Users", &TtlSpec::enable("expires_at").unwrap())
            .await
            .unwrap();

        let applied = dispatcher.disable_time_to_live("Users").await.unwrap();

        assert!(!applied.enabled);
        assert_eq!(applied.attribute_name, "expires_at");
        let ttl = dispatcher.describe_time_to_live("Users").await.unwrap().unwrap();
        assert_eq!(ttl.time_to_live_status, TtlStatus::Disabled);
    }

    #[tokio::test]
    async fn test_toggle_stream_flips_state() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);
        dispatcher.create_table_from_form(users_form()).await.unwrap();

        let enabled = dispatcher.toggle_stream("Users").await.unwrap();
        assert!(enabled.stream_enabled());

        let disabled = dispatcher.toggle_stream("Users").await.unwrap();
        assert!(!disabled.stream_enabled());
    }

    #[tokio::test]
    async fn test_delete_by_base_key_ignores_other_attributes() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);
        dispatcher.create_table_from_form(users_form()).await.unwrap();

        let mut item = user("a");
        item.insert("name".to_string(), Value::from("Ada"));
        dispatcher.put_item("Users", &item).await.unwrap();

        let key = dispatcher.delete_item_by_base_key("Users", &item).await.unwrap();

        assert_eq!(key, user("a"));
        assert!(dispatcher.scan("Users", None).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_base_key_without_key_is_input_error() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);
        dispatcher.create_table_from_form(users_form()).await.unwrap();

        let mut item = Item::new();
        item.insert("name".to_string(), Value::from("Ada"));

        assert_eq!(
            dispatcher.delete_item_by_base_key("Users", &item).await,
            Err(DispatchError::Input(InputError::MissingKeyAttribute(
                "id".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn test_put_item_schema_violation_is_verbatim() {
        let factory = InMemoryConnectionFactory::new();
        let dispatcher = dispatcher_on(&factory);
        dispatcher.create_table_from_form(users_form()).await.unwrap();

        let err = dispatcher.put_item("Users", &Item::new()).await.unwrap_err();
        assert_eq!(
            err,
            DispatchError::Remote(RemoteError::Validation(
                "One or more parameter values were invalid: Missing the key id in the item"
                    .to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_handles_share_the_dispatcher_endpoint() {
        let factory = Arc::new(InMemoryConnectionFactory::new());
        let dispatcher = Dispatcher::new(factory.connect("http://localhost:8001"));

        assert_eq!(dispatcher.endpoint(), "http://localhost:8001");
        assert_eq!(dispatcher.connection().tables().endpoint(), "http://localhost:8001");
        assert_eq!(dispatcher.connection().documents().endpoint(), "http://localhost:8001");
    }
}
