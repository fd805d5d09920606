use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Declares a closed set of service enum values with their wire names.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire name of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InputError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(InputError::InvalidEnumValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum!(
    /// Role of an attribute in a key schema.
    KeyType, "key type" {
        Hash => "HASH",
        Range => "RANGE",
    }
);

wire_enum!(
    /// Scalar type of a key attribute.
    AttributeType, "attribute type" {
        String => "S",
        Number => "N",
        Binary => "B",
    }
);

wire_enum!(
    /// Which attributes a secondary index copies from the base table.
    ProjectionType, "projection type" {
        All => "ALL",
        KeysOnly => "KEYS_ONLY",
        Include => "INCLUDE",
    }
);

wire_enum!(
    /// What a change stream record carries.
    StreamViewType, "stream view type" {
        NewImage => "NEW_IMAGE",
        OldImage => "OLD_IMAGE",
        NewAndOldImages => "NEW_AND_OLD_IMAGES",
        KeysOnly => "KEYS_ONLY",
    }
);

wire_enum!(
    /// Time-to-live state reported by the service.
    TtlStatus, "time-to-live status" {
        Enabling => "ENABLING",
        Disabling => "DISABLING",
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
);

/// One element of a table or index key schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeySchemaElement {
    pub attribute_name: String,
    pub key_type: KeyType,
}

impl KeySchemaElement {
    pub fn hash(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            key_type: KeyType::Hash,
        }
    }

    pub fn range(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            key_type: KeyType::Range,
        }
    }
}

/// Declared type of a key attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDefinition {
    pub attribute_name: String,
    pub attribute_type: AttributeType,
}

impl AttributeDefinition {
    pub fn new(attribute_name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            attribute_type,
        }
    }
}

/// Secondary index projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Projection {
    pub projection_type: ProjectionType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_key_attributes: Vec<String>,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            projection_type: ProjectionType::All,
            non_key_attributes: Vec::new(),
        }
    }
}

/// Provisioned read/write capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

/// Change stream configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamSpec {
    pub stream_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_view_type: Option<StreamViewType>,
}

impl StreamSpec {
    /// An enabled stream with the given view type.
    pub fn enabled(view_type: StreamViewType) -> Self {
        Self {
            stream_enabled: true,
            stream_view_type: Some(view_type),
        }
    }

    /// A disabled stream. The service rejects a view type when disabling.
    pub fn disabled() -> Self {
        Self {
            stream_enabled: false,
            stream_view_type: None,
        }
    }

    /// Flips the current stream state.
    ///
    /// An enabled stream becomes disabled; a disabled or absent stream becomes
    /// enabled with `NEW_AND_OLD_IMAGES`.
    pub fn toggled(current: Option<&StreamSpec>) -> Self {
        match current {
            Some(spec) if spec.stream_enabled => Self::disabled(),
            _ => Self::enabled(StreamViewType::NewAndOldImages),
        }
    }
}

/// Secondary index definition used when creating a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecondaryIndex {
    pub index_name: String,
    pub key_schema: Vec<KeySchemaElement>,
    #[serde(default)]
    pub projection: Projection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

/// Secondary index as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexDescriptor {
    pub index_name: String,
    pub key_schema: Vec<KeySchemaElement>,
    pub projection: Projection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
}

/// Table description as reported by the service.
///
/// This is a read model: it is refreshed on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDescriptor {
    pub table_name: String,
    pub table_status: String,
    pub key_schema: Vec<KeySchemaElement>,
    pub attribute_definitions: Vec<AttributeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<IndexDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_secondary_indexes: Vec<IndexDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_stream_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_stream_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    pub table_size_bytes: i64,
    pub item_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_arn: Option<String>,
}

impl TableDescriptor {
    /// The base table partition key.
    pub fn partition_key(&self) -> Option<&KeySchemaElement> {
        self.key_schema.iter().find(|k| k.key_type == KeyType::Hash)
    }

    /// The base table sort key, if any.
    pub fn sort_key(&self) -> Option<&KeySchemaElement> {
        self.key_schema.iter().find(|k| k.key_type == KeyType::Range)
    }

    /// Looks up a global or local secondary index by name.
    pub fn index(&self, name: &str) -> Option<&IndexDescriptor> {
        self.global_secondary_indexes
            .iter()
            .chain(self.local_secondary_indexes.iter())
            .find(|index| index.index_name == name)
    }

    /// Key schema used for querying: the base table's when no index is
    /// selected, otherwise the index's. Unknown indexes have no keys.
    pub fn active_key_schema(&self, index_name: Option<&str>) -> &[KeySchemaElement] {
        match index_name {
            None => &self.key_schema,
            Some(name) => self
                .index(name)
                .map(|index| index.key_schema.as_slice())
                .unwrap_or(&[]),
        }
    }

    pub fn stream_enabled(&self) -> bool {
        self.stream_specification
            .is_some_and(|spec| spec.stream_enabled)
    }
}

/// Time-to-live description as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TtlDescriptor {
    pub time_to_live_status: TtlStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
}

/// Attribute name used to disable TTL when none is known.
pub const FALLBACK_TTL_ATTRIBUTE: &str = "ttl";

/// Time-to-live update sent to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TtlSpec {
    pub enabled: bool,
    pub attribute_name: String,
}

impl TtlSpec {
    /// Enables TTL on the given attribute.
    pub fn enable(attribute_name: &str) -> crate::Result<Self> {
        let attribute_name = attribute_name.trim();
        if attribute_name.is_empty() {
            return Err(InputError::EmptyTtlAttribute);
        }
        Ok(Self {
            enabled: true,
            attribute_name: attribute_name.to_string(),
        })
    }

    /// Disables TTL. The service requires the attribute name even here, so the
    /// last-known one is reused.
    pub fn disable(current: Option<&TtlDescriptor>) -> Self {
        let attribute_name = current
            .and_then(|ttl| ttl.attribute_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_TTL_ATTRIBUTE);

        Self {
            enabled: false,
            attribute_name: attribute_name.to_string(),
        }
    }
}
