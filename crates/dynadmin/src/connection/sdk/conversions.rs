//! SDK type conversion functions.
//!
//! Pure functions for converting between SDK shapes and the console's own
//! types. These are testable in isolation without a DynamoDB endpoint.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::{Blob, DateTime as SdkDateTime};
use aws_sdk_dynamodb::types::{self as sdk, AttributeValue};
use base64::prelude::*;
use chrono::{DateTime, Utc};
use dynadmin_core::item::{Item, Number, Value};
use dynadmin_core::remote::{RemoteError, Result};
use dynadmin_core::schema::{
    AttributeDefinition, AttributeType, CreateTableRequest, IndexDescriptor, KeySchemaElement,
    KeyType, Projection, ProjectionType, ProvisionedThroughput, SecondaryIndex, StreamSpec,
    StreamViewType, TableDescriptor, TtlDescriptor, TtlSpec, TtlStatus, DEFAULT_THROUGHPUT,
};

// ============================================================================
// Item conversions
// ============================================================================

/// Convert a generic value to an attribute value.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::List(values) => AttributeValue::L(values.iter().map(value_to_attribute).collect()),
        Value::Map(item) => AttributeValue::M(item_to_attributes(item)),
    }
}

/// Convert an attribute value to a generic value.
///
/// Sets become lists and binary data becomes base64 text, since the generic
/// value model has neither.
pub fn attribute_to_value(attribute: &AttributeValue) -> Result<Value> {
    let value = match attribute {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => Value::Number(parse_number(n)?),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::List(
            values
                .iter()
                .map(attribute_to_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        AttributeValue::M(map) => Value::Map(attributes_to_item(map)?),
        AttributeValue::Ss(values) => Value::List(values.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(values) => Value::List(
            values
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<Vec<_>>>()?,
        ),
        AttributeValue::B(blob) => Value::String(encode_blob(blob)),
        AttributeValue::Bs(blobs) => {
            Value::List(blobs.iter().map(|b| Value::String(encode_blob(b))).collect())
        }
        other => {
            return Err(RemoteError::Conversion(format!(
                "Unsupported attribute value: {other:?}"
            )))
        }
    };
    Ok(value)
}

/// Convert a generic item to an attribute map.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    item.iter()
        .map(|(name, value)| (name.clone(), value_to_attribute(value)))
        .collect()
}

/// Convert an attribute map to a generic item.
pub fn attributes_to_item(attributes: &HashMap<String, AttributeValue>) -> Result<Item> {
    attributes
        .iter()
        .map(|(name, attribute)| Ok((name.clone(), attribute_to_value(attribute)?)))
        .collect()
}

fn parse_number(text: &str) -> Result<Number> {
    text.parse::<Number>()
        .map_err(|_| RemoteError::Conversion(format!("Invalid number: {text}")))
}

fn encode_blob(blob: &Blob) -> String {
    BASE64_STANDARD.encode(blob.as_ref())
}

// ============================================================================
// Schema conversions (to SDK)
// ============================================================================

fn build_error(err: aws_sdk_dynamodb::error::BuildError) -> RemoteError {
    RemoteError::InvalidRequest(err.to_string())
}

pub fn key_schema_to_sdk(key_schema: &[KeySchemaElement]) -> Result<Vec<sdk::KeySchemaElement>> {
    key_schema
        .iter()
        .map(|element| {
            sdk::KeySchemaElement::builder()
                .attribute_name(&element.attribute_name)
                .key_type(sdk::KeyType::from(element.key_type.as_str()))
                .build()
                .map_err(build_error)
        })
        .collect()
}

pub fn attribute_definitions_to_sdk(
    definitions: &[AttributeDefinition],
) -> Result<Vec<sdk::AttributeDefinition>> {
    definitions
        .iter()
        .map(|definition| {
            sdk::AttributeDefinition::builder()
                .attribute_name(&definition.attribute_name)
                .attribute_type(sdk::ScalarAttributeType::from(
                    definition.attribute_type.as_str(),
                ))
                .build()
                .map_err(build_error)
        })
        .collect()
}

pub fn throughput_to_sdk(throughput: ProvisionedThroughput) -> Result<sdk::ProvisionedThroughput> {
    sdk::ProvisionedThroughput::builder()
        .read_capacity_units(throughput.read_capacity_units)
        .write_capacity_units(throughput.write_capacity_units)
        .build()
        .map_err(build_error)
}

pub fn projection_to_sdk(projection: &Projection) -> sdk::Projection {
    let non_key_attributes = if projection.non_key_attributes.is_empty() {
        None
    } else {
        Some(projection.non_key_attributes.clone())
    };

    sdk::Projection::builder()
        .projection_type(sdk::ProjectionType::from(projection.projection_type.as_str()))
        .set_non_key_attributes(non_key_attributes)
        .build()
}

/// Indexes without their own throughput get the table default.
pub fn secondary_index_to_sdk(index: &SecondaryIndex) -> Result<sdk::GlobalSecondaryIndex> {
    sdk::GlobalSecondaryIndex::builder()
        .index_name(&index.index_name)
        .set_key_schema(Some(key_schema_to_sdk(&index.key_schema)?))
        .projection(projection_to_sdk(&index.projection))
        .provisioned_throughput(throughput_to_sdk(
            index.provisioned_throughput.unwrap_or(DEFAULT_THROUGHPUT),
        )?)
        .build()
        .map_err(build_error)
}

pub fn stream_to_sdk(spec: &StreamSpec) -> Result<sdk::StreamSpecification> {
    sdk::StreamSpecification::builder()
        .stream_enabled(spec.stream_enabled)
        .set_stream_view_type(
            spec.stream_view_type
                .map(|view| sdk::StreamViewType::from(view.as_str())),
        )
        .build()
        .map_err(build_error)
}

pub fn ttl_to_sdk(spec: &TtlSpec) -> Result<sdk::TimeToLiveSpecification> {
    sdk::TimeToLiveSpecification::builder()
        .enabled(spec.enabled)
        .attribute_name(&spec.attribute_name)
        .build()
        .map_err(build_error)
}

/// Every part of a create request except the table name, in SDK shapes.
pub struct CreateTableParts {
    pub key_schema: Vec<sdk::KeySchemaElement>,
    pub attribute_definitions: Vec<sdk::AttributeDefinition>,
    pub provisioned_throughput: sdk::ProvisionedThroughput,
    /// `None` when the request has no indexes; the service rejects an empty list.
    pub global_secondary_indexes: Option<Vec<sdk::GlobalSecondaryIndex>>,
    pub stream_specification: Option<sdk::StreamSpecification>,
}

pub fn create_table_parts(request: &CreateTableRequest) -> Result<CreateTableParts> {
    let global_secondary_indexes = if request.global_secondary_indexes.is_empty() {
        None
    } else {
        Some(
            request
                .global_secondary_indexes
                .iter()
                .map(secondary_index_to_sdk)
                .collect::<Result<Vec<_>>>()?,
        )
    };

    Ok(CreateTableParts {
        key_schema: key_schema_to_sdk(&request.key_schema)?,
        attribute_definitions: attribute_definitions_to_sdk(&request.attribute_definitions)?,
        provisioned_throughput: throughput_to_sdk(DEFAULT_THROUGHPUT)?,
        global_secondary_indexes,
        stream_specification: request
            .stream_specification
            .as_ref()
            .map(stream_to_sdk)
            .transpose()?,
    })
}

// ============================================================================
// Schema conversions (from SDK)
// ============================================================================

fn parse_wire<T>(kind: &str, text: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    text.parse::<T>()
        .map_err(|_| RemoteError::Conversion(format!("Unknown {kind}: {text}")))
}

pub fn key_schema_from_sdk(elements: &[sdk::KeySchemaElement]) -> Result<Vec<KeySchemaElement>> {
    elements
        .iter()
        .map(|element| {
            Ok(KeySchemaElement {
                attribute_name: element.attribute_name().to_string(),
                key_type: parse_wire::<KeyType>("key type", element.key_type().as_str())?,
            })
        })
        .collect()
}

fn attribute_definitions_from_sdk(
    definitions: &[sdk::AttributeDefinition],
) -> Result<Vec<AttributeDefinition>> {
    definitions
        .iter()
        .map(|definition| {
            Ok(AttributeDefinition::new(
                definition.attribute_name(),
                parse_wire::<AttributeType>(
                    "attribute type",
                    definition.attribute_type().as_str(),
                )?,
            ))
        })
        .collect()
}

fn projection_from_sdk(projection: Option<&sdk::Projection>) -> Result<Projection> {
    let Some(projection) = projection else {
        return Ok(Projection::default());
    };

    Ok(Projection {
        projection_type: match projection.projection_type() {
            Some(projection_type) => {
                parse_wire::<ProjectionType>("projection type", projection_type.as_str())?
            }
            None => ProjectionType::All,
        },
        non_key_attributes: projection.non_key_attributes().to_vec(),
    })
}

fn global_index_from_sdk(index: &sdk::GlobalSecondaryIndexDescription) -> Result<IndexDescriptor> {
    Ok(IndexDescriptor {
        index_name: index.index_name().unwrap_or_default().to_string(),
        key_schema: key_schema_from_sdk(index.key_schema())?,
        projection: projection_from_sdk(index.projection())?,
        index_status: index.index_status().map(|s| s.as_str().to_string()),
        item_count: index.item_count(),
    })
}

fn local_index_from_sdk(index: &sdk::LocalSecondaryIndexDescription) -> Result<IndexDescriptor> {
    Ok(IndexDescriptor {
        index_name: index.index_name().unwrap_or_default().to_string(),
        key_schema: key_schema_from_sdk(index.key_schema())?,
        projection: projection_from_sdk(index.projection())?,
        index_status: None,
        item_count: index.item_count(),
    })
}

pub fn stream_from_sdk(spec: &sdk::StreamSpecification) -> Result<StreamSpec> {
    Ok(StreamSpec {
        stream_enabled: spec.stream_enabled(),
        stream_view_type: spec
            .stream_view_type()
            .map(|view| parse_wire::<StreamViewType>("stream view type", view.as_str()))
            .transpose()?,
    })
}

pub fn datetime_from_sdk(value: &SdkDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(value.secs(), value.subsec_nanos())
}

/// Convert a table description to a descriptor.
pub fn table_from_sdk(table: &sdk::TableDescription) -> Result<TableDescriptor> {
    let provisioned_throughput = table.provisioned_throughput().map(|pt| ProvisionedThroughput {
        read_capacity_units: pt.read_capacity_units().unwrap_or_default(),
        write_capacity_units: pt.write_capacity_units().unwrap_or_default(),
    });

    Ok(TableDescriptor {
        table_name: table.table_name().unwrap_or_default().to_string(),
        table_status: table
            .table_status()
            .map(|s| s.as_str().to_string())
            .unwrap_or_default(),
        key_schema: key_schema_from_sdk(table.key_schema())?,
        attribute_definitions: attribute_definitions_from_sdk(table.attribute_definitions())?,
        global_secondary_indexes: table
            .global_secondary_indexes()
            .iter()
            .map(global_index_from_sdk)
            .collect::<Result<Vec<_>>>()?,
        local_secondary_indexes: table
            .local_secondary_indexes()
            .iter()
            .map(local_index_from_sdk)
            .collect::<Result<Vec<_>>>()?,
        stream_specification: table.stream_specification().map(stream_from_sdk).transpose()?,
        latest_stream_label: table.latest_stream_label().map(str::to_string),
        latest_stream_arn: table.latest_stream_arn().map(str::to_string),
        provisioned_throughput,
        table_size_bytes: table.table_size_bytes().unwrap_or_default(),
        item_count: table.item_count().unwrap_or_default(),
        creation_date_time: table.creation_date_time().and_then(datetime_from_sdk),
        table_arn: table.table_arn().map(str::to_string),
    })
}

pub fn ttl_from_sdk(description: &sdk::TimeToLiveDescription) -> Result<TtlDescriptor> {
    Ok(TtlDescriptor {
        time_to_live_status: match description.time_to_live_status() {
            Some(status) => parse_wire::<TtlStatus>("time-to-live status", status.as_str())?,
            None => TtlStatus::Disabled,
        },
        attribute_name: description.attribute_name().map(str::to_string),
    })
}

pub fn ttl_spec_from_sdk(spec: &sdk::TimeToLiveSpecification) -> TtlSpec {
    TtlSpec {
        enabled: spec.enabled(),
        attribute_name: spec.attribute_name().to_string(),
    }
}
