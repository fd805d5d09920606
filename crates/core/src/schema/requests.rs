use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

use super::types::{
    AttributeDefinition, AttributeType, KeySchemaElement, KeyType, ProvisionedThroughput,
    SecondaryIndex, StreamSpec, StreamViewType,
};

/// Capacity used for every table and index the console creates.
pub const DEFAULT_THROUGHPUT: ProvisionedThroughput = ProvisionedThroughput {
    read_capacity_units: 5,
    write_capacity_units: 5,
};

/// Request for creating a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableRequest {
    pub table_name: String,
    pub key_schema: Vec<KeySchemaElement>,
    pub attribute_definitions: Vec<AttributeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<SecondaryIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpec>,
}

impl CreateTableRequest {
    /// Checks the parts the service cannot do without.
    pub fn validate(&self) -> Result<()> {
        if self.table_name.trim().is_empty() {
            return Err(InputError::EmptyTableName);
        }
        if !self.key_schema.iter().any(|k| k.key_type == KeyType::Hash) {
            return Err(InputError::MissingPartitionKey);
        }
        Ok(())
    }
}

/// The simple create-table form: one partition key, an optional sort key and
/// an optional change stream. Secondary indexes are not offered here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableForm {
    pub table_name: String,
    pub partition_key_name: String,
    pub partition_key_type: AttributeType,
    pub sort_key_name: String,
    pub sort_key_type: AttributeType,
    pub stream_enabled: bool,
    pub stream_view_type: StreamViewType,
}

impl Default for TableForm {
    fn default() -> Self {
        Self {
            table_name: String::new(),
            partition_key_name: "id".to_string(),
            partition_key_type: AttributeType::String,
            sort_key_name: String::new(),
            sort_key_type: AttributeType::String,
            stream_enabled: false,
            stream_view_type: StreamViewType::NewAndOldImages,
        }
    }
}

impl TableForm {
    /// Converts the form into a create-table request.
    ///
    /// A blank sort key name means the table has no sort key.
    pub fn into_request(self) -> Result<CreateTableRequest> {
        let table_name = self.table_name.trim().to_string();
        if table_name.is_empty() {
            return Err(InputError::EmptyTableName);
        }

        let partition_key = self.partition_key_name.trim();
        if partition_key.is_empty() {
            return Err(InputError::MissingPartitionKey);
        }

        let mut key_schema = vec![KeySchemaElement::hash(partition_key)];
        let mut attribute_definitions = vec![AttributeDefinition::new(
            partition_key,
            self.partition_key_type,
        )];

        let sort_key = self.sort_key_name.trim();
        if !sort_key.is_empty() {
            key_schema.push(KeySchemaElement::range(sort_key));
            attribute_definitions.push(AttributeDefinition::new(sort_key, self.sort_key_type));
        }

        let stream_specification = self
            .stream_enabled
            .then(|| StreamSpec::enabled(self.stream_view_type));

        Ok(CreateTableRequest {
            table_name,
            key_schema,
            attribute_definitions,
            global_secondary_indexes: Vec::new(),
            stream_specification,
        })
    }
}
