use crate::error::{Result, TaskError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Descriptor written by `npm run gen-metadata` into `build/metadata.json`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MetadataDescriptor {
    #[serde(rename = "schemaVersions")]
    pub schema_versions: BTreeMap<String, SchemaVersion>,

    #[serde(default)]
    pub flags: MetadataFlags,
}

/// Major and minor version of one schema, kept as the strings the
/// generator emits.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SchemaVersion {
    pub major: String,
    pub minor: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataFlags {
    #[serde(default, alias = "useMsgpack")]
    pub use_msgpack: bool,
}

impl MetadataDescriptor {
    pub fn parse(content: &str) -> Result<Self> {
        let descriptor: Self = serde_json::from_str(content).map_err(TaskError::InvalidMetadata)?;

        if descriptor.schema_versions.is_empty() {
            return Err(TaskError::MetadataValidation(
                "'schemaVersions' must declare at least one schema".to_string(),
            ));
        }

        Ok(descriptor)
    }
}
