//! model::meta
//!
//! Relationship entries that carry per-relationship metadata.
//!
//! Some reference fields attach data to the relationship itself rather than
//! to the referenced resource. Typed relation fields, for example, qualify
//! each creator with a MARC relator:
//!
//! ```json
//! "field_creator": {
//!   "data": [
//!     {
//!       "type": "taxonomy_term--person",
//!       "id": "3ed0f7e4-0d4b-4a4a-9f14-2b1c9b1ed6c1",
//!       "meta": { "rel_type": "relators:pht" }
//!     }
//!   ]
//! }
//! ```
//!
//! Metadata values are arbitrary JSON, so reads go through typed accessors
//! that report an absent key and a value of the wrong type as different
//! errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::types::ResourceRef;

/// Errors from reading relationship metadata.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MetaError {
    /// The key is not present in the metadata.
    #[error("missing field from meta: {0}")]
    Missing(String),

    /// The key is present but holds a value of another type.
    #[error("cannot convert type: {value} to {expected} (field '{field}')")]
    Conversion {
        field: String,
        value: String,
        expected: &'static str,
    },
}

/// Arbitrary key/value metadata attached to a relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta(Map<String, Value>);

impl Meta {
    /// Raw value for `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn require(&self, field: &str) -> Result<&Value, MetaError> {
        self.0
            .get(field)
            .ok_or_else(|| MetaError::Missing(field.to_string()))
    }

    /// Read `field` as a string.
    ///
    /// # Errors
    ///
    /// `MetaError::Missing` if absent, `MetaError::Conversion` if the value
    /// is not a JSON string.
    pub fn as_string(&self, field: &str) -> Result<&str, MetaError> {
        let value = self.require(field)?;
        value.as_str().ok_or_else(|| MetaError::Conversion {
            field: field.to_string(),
            value: value.to_string(),
            expected: "string",
        })
    }

    /// Read `field` as an integer.
    ///
    /// Only JSON integers convert; floats and numeric strings do not.
    ///
    /// # Errors
    ///
    /// `MetaError::Missing` if absent, `MetaError::Conversion` otherwise.
    pub fn as_int(&self, field: &str) -> Result<i64, MetaError> {
        let value = self.require(field)?;
        value.as_i64().ok_or_else(|| MetaError::Conversion {
            field: field.to_string(),
            value: value.to_string(),
            expected: "int",
        })
    }
}

impl FromIterator<(String, Value)> for Meta {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Meta(iter.into_iter().collect())
    }
}

/// A relationship entry: the reference plus its metadata.
///
/// ```
/// use idc_jsonapi::model::{MetaError, RelData};
///
/// let rel: RelData = serde_json::from_str(r#"{
///     "type": "taxonomy_term--person",
///     "id": "3ed0f7e4",
///     "meta": {"rel_type": "relators:pht", "target_revision_id": 12}
/// }"#).unwrap();
///
/// assert_eq!(rel.meta_string("rel_type").unwrap(), "relators:pht");
/// assert_eq!(rel.meta_int("target_revision_id").unwrap(), 12);
/// assert!(matches!(rel.meta_int("weight"), Err(MetaError::Missing(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelData {
    #[serde(flatten)]
    pub reference: ResourceRef,
    #[serde(default)]
    pub meta: Meta,
}

impl RelData {
    pub fn meta_string(&self, field: &str) -> Result<&str, MetaError> {
        self.meta.as_string(field)
    }

    pub fn meta_int(&self, field: &str) -> Result<i64, MetaError> {
        self.meta.as_int(field)
    }
}

impl std::ops::Deref for RelData {
    type Target = ResourceRef;

    fn deref(&self) -> &ResourceRef {
        &self.reference
    }
}
