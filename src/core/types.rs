//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`DrupalType`] - Entity type and bundle tuple (`node--islandora_object`)
//! - [`ResourceRef`] - Pointer to another resource found in `relationships`
//!
//! # Validation
//!
//! These types enforce validity at construction time. A reference without
//! both a type and an id cannot be represented.
//!
//! # Examples
//!
//! ```
//! use idc_jsonapi::core::types::{DrupalType, ResourceRef};
//!
//! let ty: DrupalType = "taxonomy_term--language".parse().unwrap();
//! assert_eq!(ty.entity(), "taxonomy_term");
//! assert_eq!(ty.bundle(), "language");
//!
//! let reference = ResourceRef::new(ty, "7397e0c4-df0a-4800-95af-afccc6ff64a5").unwrap();
//! assert_eq!(reference.id(), "7397e0c4-df0a-4800-95af-afccc6ff64a5");
//!
//! // Invalid constructions fail at creation time
//! assert!("node".parse::<DrupalType>().is_err());
//! assert!(ResourceRef::new(DrupalType::new("node", "page").unwrap(), "").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between entity type and bundle in the wire form.
const TYPE_SEPARATOR: &str = "--";

/// Drupal entity types.
pub mod entity {
    /// The generic content entity.
    pub const NODE: &str = "node";
    /// Taxonomy terms (vocabularies are bundles).
    pub const TAXONOMY_TERM: &str = "taxonomy_term";
    /// Media entities.
    pub const MEDIA: &str = "media";
    /// Managed files.
    pub const FILE: &str = "file";
}

/// Bundles used by the repository content model.
pub mod bundle {
    /// IDC collection node bundle.
    pub const COLLECTION: &str = "collection_object";
    /// Islandora repository object node bundle.
    pub const REPOSITORY_OBJECT: &str = "islandora_object";
    pub const IMAGE: &str = "image";
    pub const DOCUMENT: &str = "document";
    pub const VIDEO: &str = "video";
    pub const AUDIO: &str = "audio";
    pub const EXTRACTED_TEXT: &str = "extracted_text";
    /// Generic file media bundle, also the only bundle of the file entity.
    pub const FILE: &str = "file";
    /// FITS technical metadata media bundle.
    pub const FITS: &str = "fits_technical_metadata";
    pub const REMOTE_VIDEO: &str = "remote_video";
    /// Language taxonomy vocabulary.
    pub const LANGUAGE: &str = "language";
}

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid drupal type: {0}")]
    InvalidDrupalType(String),

    #[error("invalid resource reference: {0}")]
    InvalidReference(String),
}

/// A Drupal resource type: the tuple of entity type and bundle.
///
/// On the wire this is a single string joined by `--`, for example
/// `taxonomy_term--language` or `media--image`.
///
/// # Example
///
/// ```
/// use idc_jsonapi::core::types::DrupalType;
///
/// let ty = DrupalType::new("media", "image").unwrap();
/// assert_eq!(ty.to_string(), "media--image");
///
/// assert!(DrupalType::new("", "image").is_err());
/// assert!("media-image".parse::<DrupalType>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DrupalType {
    entity: String,
    bundle: String,
}

impl DrupalType {
    /// Create a type from its entity and bundle halves.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidDrupalType` if either half is empty or
    /// contains the `--` separator.
    pub fn new(entity: impl Into<String>, bundle: impl Into<String>) -> Result<Self, TypeError> {
        let entity = entity.into();
        let bundle = bundle.into();
        Self::validate_part(&entity, "entity")?;
        Self::validate_part(&bundle, "bundle")?;
        Ok(Self { entity, bundle })
    }

    fn validate_part(part: &str, what: &str) -> Result<(), TypeError> {
        if part.is_empty() {
            return Err(TypeError::InvalidDrupalType(format!("{} cannot be empty", what)));
        }
        if part.contains(TYPE_SEPARATOR) {
            return Err(TypeError::InvalidDrupalType(format!(
                "{} '{}' cannot contain '{}'",
                what, part, TYPE_SEPARATOR
            )));
        }
        if part.contains('/') || part.contains(char::is_whitespace) {
            return Err(TypeError::InvalidDrupalType(format!(
                "{} '{}' is not a valid machine name",
                what, part
            )));
        }
        Ok(())
    }

    /// The entity type, e.g. `node`.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// The bundle, e.g. `islandora_object`.
    pub fn bundle(&self) -> &str {
        &self.bundle
    }
}

impl fmt::Display for DrupalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.entity, TYPE_SEPARATOR, self.bundle)
    }
}

impl FromStr for DrupalType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (entity, bundle) = s.split_once(TYPE_SEPARATOR).ok_or_else(|| {
            TypeError::InvalidDrupalType(format!("'{}' is missing the '--' separator", s))
        })?;
        Self::new(entity, bundle)
    }
}

impl TryFrom<String> for DrupalType {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DrupalType> for String {
    fn from(value: DrupalType) -> Self {
        value.to_string()
    }
}

/// A pointer to another resource, as found in a `relationships` entry.
///
/// Both halves are required and immutable. References are normally produced
/// by deserializing a fetched resource; resolving one is done through
/// [`crate::jsonapi::Resolver`].
///
/// ```
/// use idc_jsonapi::core::types::ResourceRef;
///
/// let json = r#"{"type": "node--collection_object", "id": "abc", "meta": {"drupal_internal__target_id": 4}}"#;
/// let reference: ResourceRef = serde_json::from_str(json).unwrap();
/// assert_eq!(reference.resource_type().bundle(), "collection_object");
/// assert_eq!(reference.id(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawResourceRef")]
pub struct ResourceRef {
    #[serde(rename = "type")]
    resource_type: DrupalType,
    id: String,
}

/// Unvalidated wire form of a reference.
#[derive(Deserialize)]
struct RawResourceRef {
    #[serde(rename = "type")]
    resource_type: DrupalType,
    id: String,
}

impl ResourceRef {
    /// Create a reference.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidReference` if `id` is empty.
    pub fn new(resource_type: DrupalType, id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TypeError::InvalidReference(format!(
                "{} reference has an empty id",
                resource_type
            )));
        }
        Ok(Self { resource_type, id })
    }

    /// The type of the referenced resource.
    pub fn resource_type(&self) -> &DrupalType {
        &self.resource_type
    }

    /// The identifier of the referenced resource.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl TryFrom<RawResourceRef> for ResourceRef {
    type Error = TypeError;

    fn try_from(raw: RawResourceRef) -> Result<Self, Self::Error> {
        Self::new(raw.resource_type, raw.id)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.id)
    }
}
