//! Request and response bodies for the HTTP API.
//!
//! Field names follow the service's PascalCase convention so responses read
//! like the DynamoDB API they front.

use std::collections::BTreeMap;

use dynadmin_core::item::Item;
use dynadmin_core::schema::{TableDescriptor, TtlDescriptor, TtlSpec};
use dynadmin_core::InputError;
use serde::{Deserialize, Serialize};

use crate::dispatcher::ScanPage;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetEndpoint {
    #[serde(alias = "endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointResponse {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableNamesResponse {
    pub table_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableResponse {
    pub table: TableDescriptor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDescriptionResponse {
    pub table_description: TableDescriptor,
}

/// `null` when the target does not support time-to-live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TtlDescriptionResponse {
    pub time_to_live_description: Option<TtlDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TtlSpecificationResponse {
    pub time_to_live_specification: TtlSpec,
}

/// Time-to-live update from the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTtl {
    pub enabled: bool,
    #[serde(default)]
    pub attribute_name: String,
}

impl UpdateTtl {
    /// The spec to send, or `None` for a disable without an attribute name,
    /// which falls back to the last-known one.
    pub fn into_spec(self) -> Result<Option<TtlSpec>, InputError> {
        if self.enabled {
            return TtlSpec::enable(&self.attribute_name).map(Some);
        }

        let attribute_name = self.attribute_name.trim();
        if attribute_name.is_empty() {
            Ok(None)
        } else {
            Ok(Some(TtlSpec {
                enabled: false,
                attribute_name: attribute_name.to_string(),
            }))
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanParams {
    pub index: Option<String>,
}

impl ScanParams {
    pub fn index_name(&self) -> Option<&str> {
        self.index
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemsResponse {
    pub items: Vec<Item>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_reached: Option<bool>,
}

impl From<ScanPage> for ItemsResponse {
    fn from(page: ScanPage) -> Self {
        Self {
            count: page.items.len(),
            limit_reached: Some(page.limit_reached),
            items: page.items,
        }
    }
}

impl From<Vec<Item>> for ItemsResponse {
    fn from(items: Vec<Item>) -> Self {
        Self {
            count: items.len(),
            limit_reached: None,
            items,
        }
    }
}

/// Query from per-attribute text inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryItems {
    pub index_name: Option<String>,
    pub keys: BTreeMap<String, String>,
}

impl QueryItems {
    pub fn index_name(&self) -> Option<&str> {
        self.index_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemResponse {
    pub item: Item,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyResponse {
    pub key: Item,
}
