//! SDK-backed client handles.

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::config::{retry::RetryConfig, BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::Client;
use dynadmin_core::endpoint::{ACCESS_KEY_ID, REGION, SECRET_ACCESS_KEY};
use dynadmin_core::item::Item;
use dynadmin_core::remote::{
    DocumentClient, QueryRequest, RemoteError, Result, ScanRequest, TableClient,
};
use dynadmin_core::schema::{CreateTableRequest, StreamSpec, TableDescriptor, TtlDescriptor, TtlSpec};

use super::conversions::{
    attributes_to_item, create_table_parts, item_to_attributes, stream_to_sdk, table_from_sdk,
    ttl_from_sdk, ttl_spec_from_sdk, ttl_to_sdk,
};
use super::error::map_sdk_error;
use crate::connection::{Connection, ConnectionFactory};

/// Builds an SDK client for a local endpoint.
///
/// Uses the fixed region and placeholder credentials. Retries are disabled so
/// an unreachable endpoint fails the request instead of stalling it.
pub fn build_client(endpoint: &str) -> Client {
    let credentials = Credentials::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY, None, None, "dynadmin");

    let config = aws_sdk_dynamodb::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(REGION))
        .endpoint_url(endpoint)
        .credentials_provider(credentials)
        .retry_config(RetryConfig::disabled())
        .build();

    Client::from_conf(config)
}

/// Builds both SDK handles from one client.
#[derive(Debug, Clone, Copy, Default)]
pub struct SdkConnectionFactory;

impl ConnectionFactory for SdkConnectionFactory {
    fn connect(&self, endpoint: &str) -> Connection {
        let client = build_client(endpoint);
        tracing::info!(endpoint, "Built DynamoDB clients");

        Connection::new(
            endpoint,
            Arc::new(SdkTableClient::new(endpoint, client.clone())),
            Arc::new(SdkDocumentClient::new(endpoint, client)),
        )
    }
}

fn missing(field: &str) -> RemoteError {
    RemoteError::Conversion(format!("Response is missing {field}"))
}

// ============================================================================
// TableClient implementation
// ============================================================================

/// Low-level handle over the SDK client.
#[derive(Debug, Clone)]
pub struct SdkTableClient {
    endpoint: String,
    client: Client,
}

impl SdkTableClient {
    pub fn new(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl TableClient for SdkTableClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        let output = self
            .client
            .list_tables()
            .send()
            .await
            .map_err(|e| map_sdk_error("ListTables", e))?;

        Ok(output.table_names().to_vec())
    }

    async fn describe_table(&self, table_name: &str) -> Result<TableDescriptor> {
        let output = self
            .client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| map_sdk_error("DescribeTable", e))?;

        table_from_sdk(output.table().ok_or_else(|| missing("Table"))?)
    }

    async fn describe_time_to_live(&self, table_name: &str) -> Result<Option<TtlDescriptor>> {
        let output = self
            .client
            .describe_time_to_live()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| map_sdk_error("DescribeTimeToLive", e))?;

        output
            .time_to_live_description()
            .map(ttl_from_sdk)
            .transpose()
    }

    async fn create_table(&self, request: &CreateTableRequest) -> Result<TableDescriptor> {
        let parts = create_table_parts(request)?;

        let output = self
            .client
            .create_table()
            .table_name(&request.table_name)
            .set_key_schema(Some(parts.key_schema))
            .set_attribute_definitions(Some(parts.attribute_definitions))
            .provisioned_throughput(parts.provisioned_throughput)
            .set_global_secondary_indexes(parts.global_secondary_indexes)
            .set_stream_specification(parts.stream_specification)
            .send()
            .await
            .map_err(|e| map_sdk_error("CreateTable", e))?;

        table_from_sdk(
            output
                .table_description()
                .ok_or_else(|| missing("TableDescription"))?,
        )
    }

    async fn delete_table(&self, table_name: &str) -> Result<TableDescriptor> {
        let output = self
            .client
            .delete_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteTable", e))?;

        table_from_sdk(
            output
                .table_description()
                .ok_or_else(|| missing("TableDescription"))?,
        )
    }

    async fn update_time_to_live(&self, table_name: &str, spec: &TtlSpec) -> Result<TtlSpec> {
        let output = self
            .client
            .update_time_to_live()
            .table_name(table_name)
            .time_to_live_specification(ttl_to_sdk(spec)?)
            .send()
            .await
            .map_err(|e| map_sdk_error("UpdateTimeToLive", e))?;

        Ok(output
            .time_to_live_specification()
            .map(ttl_spec_from_sdk)
            .unwrap_or_else(|| spec.clone()))
    }

    async fn update_stream(&self, table_name: &str, spec: &StreamSpec) -> Result<TableDescriptor> {
        let output = self
            .client
            .update_table()
            .table_name(table_name)
            .stream_specification(stream_to_sdk(spec)?)
            .send()
            .await
            .map_err(|e| map_sdk_error("UpdateTable", e))?;

        table_from_sdk(
            output
                .table_description()
                .ok_or_else(|| missing("TableDescription"))?,
        )
    }
}

// ============================================================================
// DocumentClient implementation
// ============================================================================

/// Document handle over the SDK client.
#[derive(Debug, Clone)]
pub struct SdkDocumentClient {
    endpoint: String,
    client: Client,
}

impl SdkDocumentClient {
    pub fn new(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl DocumentClient for SdkDocumentClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn scan(&self, request: &ScanRequest) -> Result<Vec<Item>> {
        let output = self
            .client
            .scan()
            .table_name(&request.table_name)
            .set_index_name(request.index_name.clone())
            .limit(request.limit)
            .send()
            .await
            .map_err(|e| map_sdk_error("Scan", e))?;

        output.items().iter().map(attributes_to_item).collect()
    }

    async fn query(&self, request: &QueryRequest) -> Result<Vec<Item>> {
        let condition = &request.key_condition;

        let output = self
            .client
            .query()
            .table_name(&request.table_name)
            .set_index_name(request.index_name.clone())
            .key_condition_expression(&condition.expression)
            .set_expression_attribute_names(Some(
                condition.attribute_names.clone().into_iter().collect(),
            ))
            .set_expression_attribute_values(Some(item_to_attributes(
                &condition.attribute_values,
            )))
            .send()
            .await
            .map_err(|e| map_sdk_error("Query", e))?;

        output.items().iter().map(attributes_to_item).collect()
    }

    async fn put_item(&self, table_name: &str, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| map_sdk_error("PutItem", e))?;

        Ok(())
    }

    async fn delete_item(&self, table_name: &str, key: &Item) -> Result<()> {
        self.client
            .delete_item()
            .table_name(table_name)
            .set_key(Some(item_to_attributes(key)))
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteItem", e))?;

        Ok(())
    }
}
