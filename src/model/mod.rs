//! model
//!
//! Typed shapes of the JSON:API documents served for repository content.
//!
//! # Layout
//!
//! Every response is a [`JsonApiDocument`] whose `data` holds
//! [`JsonApiResource`]s. A resource kind is described by two structs, one
//! for `attributes` and one for `relationships`; the public names such as
//! [`JsonApiIslandoraObj`] are aliases that plug those into the envelope.
//!
//! Kinds that share fields compose a shared block with `#[serde(flatten)]`
//! instead of repeating it, e.g. every media kind embeds
//! [`media::MediaAttributes`] and [`media::MediaRelationships`].
//!
//! Only the fields the migration test suite reads are modeled. Field names
//! are the Drupal machine names and must not change.
//!
//! # Modules
//!
//! - [`common`] - Shared attribute blocks and relationship envelopes
//! - [`meta`] - Relationship entries carrying metadata
//! - [`language`] - Multilingual values
//! - [`taxonomy`] - Taxonomy term kinds
//! - [`repository`] - Collections and repository objects
//! - [`media`] - Media kinds
//! - [`file`] - File entities

pub mod common;
pub mod file;
pub mod language;
pub mod media;
pub mod meta;
pub mod repository;
pub mod taxonomy;

pub use common::{
    AuthorityLink, FileUri, FormattedText, Href, LangText, Link, Relationship, RelationshipLinks,
    ToMany, ToOne,
};
pub use file::JsonApiFile;
pub use language::{LanguageMeta, LanguageValue};
pub use media::{
    JsonApiAudioMedia, JsonApiDocumentMedia, JsonApiExtractedTextMedia, JsonApiFitsMedia,
    JsonApiGenericFileMedia, JsonApiImageMedia, JsonApiRemoteVideoMedia, JsonApiVideoMedia,
};
pub use meta::{Meta, MetaError, RelData};
pub use repository::{JsonApiCollection, JsonApiIslandoraObj};
pub use taxonomy::{
    JsonApiAccessRights, JsonApiCopyrightAndUse, JsonApiCorporateBody, JsonApiFamily,
    JsonApiGenre, JsonApiGeolocation, JsonApiIslandoraAccessTerms, JsonApiIslandoraDisplay,
    JsonApiIslandoraModel, JsonApiLanguage, JsonApiMediaUse, JsonApiPerson, JsonApiResourceType,
    JsonApiSubject,
};

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::core::types::{DrupalType, ResourceRef};

/// Relationships block of a kind that has none worth modeling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoRelationships {}

/// A JSON:API document.
///
/// `data` is always presented as a list. Collection routes send an array;
/// individual routes send one object, which becomes a list of one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "A: DeserializeOwned + Default, R: DeserializeOwned + Default"))]
pub struct JsonApiDocument<A, R = NoRelationships> {
    #[serde(deserialize_with = "one_or_many")]
    pub data: Vec<JsonApiResource<A, R>>,
}

impl<A, R> JsonApiDocument<A, R> {
    /// The only resource in the document, or `None` if there are zero or
    /// several.
    pub fn single(&self) -> Option<&JsonApiResource<A, R>> {
        match self.data.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

/// One resource object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de> + Default, R: Deserialize<'de> + Default"))]
pub struct JsonApiResource<A, R = NoRelationships> {
    #[serde(rename = "type")]
    pub resource_type: DrupalType,
    pub id: String,
    #[serde(default)]
    pub attributes: A,
    #[serde(default)]
    pub relationships: R,
}

impl<A, R> JsonApiResource<A, R> {
    /// A reference pointing back at this resource.
    ///
    /// Returns `None` if the resource has an empty id.
    pub fn reference(&self) -> Option<ResourceRef> {
        ResourceRef::new(self.resource_type.clone(), self.id.clone()).ok()
    }
}

/// The `data` of any relationship, when the field's cardinality is not
/// known up front.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    Many(Vec<RelData>),
    One(Option<RelData>),
}

impl Default for RelationshipData {
    fn default() -> Self {
        RelationshipData::One(None)
    }
}

impl RelationshipData {
    /// All referenced entries, in document order.
    pub fn entries(&self) -> Vec<&RelData> {
        match self {
            RelationshipData::Many(items) => items.iter().collect(),
            RelationshipData::One(item) => item.iter().collect(),
        }
    }
}

/// A document of any kind, with attributes left as raw JSON and every
/// relationship kept by field name.
pub type GenericDocument =
    JsonApiDocument<Map<String, Value>, BTreeMap<String, Relationship<RelationshipData>>>;

/// Accept an array, a single object, or `null` for `data`.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        Value::Null => Ok(Vec::new()),
        item @ Value::Object(_) => serde_json::from_value(item)
            .map(|one| vec![one])
            .map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "expected array or object for data, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Named {
        #[serde(default)]
        name: String,
    }

    type NamedDocument = JsonApiDocument<Named>;

    #[test]
    fn data_array() {
        let doc: NamedDocument = serde_json::from_value(json!({
            "data": [
                {"type": "taxonomy_term--genre", "id": "a", "attributes": {"name": "Maps"}},
                {"type": "taxonomy_term--genre", "id": "b", "attributes": {"name": "Photographs"}}
            ]
        }))
        .unwrap();
        assert_eq!(doc.data.len(), 2);
        assert!(doc.single().is_none());
    }

    #[test]
    fn data_object_is_list_of_one() {
        let doc: NamedDocument = serde_json::from_value(json!({
            "data": {"type": "taxonomy_term--genre", "id": "a", "attributes": {"name": "Maps"}}
        }))
        .unwrap();
        assert_eq!(doc.single().unwrap().attributes.name, "Maps");
    }

    #[test]
    fn data_null_is_empty() {
        let doc: NamedDocument = serde_json::from_value(json!({"data": null})).unwrap();
        assert!(doc.data.is_empty());
    }

    #[test]
    fn data_scalar_is_error() {
        assert!(serde_json::from_value::<NamedDocument>(json!({"data": 3})).is_err());
    }

    #[test]
    fn decode_error_names_the_field() {
        let err = serde_json::from_value::<NamedDocument>(json!({
            "data": [{"type": "taxonomy_term--genre", "id": "a", "attributes": {"name": 7}}]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn missing_attributes_default() {
        let doc: NamedDocument = serde_json::from_value(json!({
            "data": [{"type": "taxonomy_term--genre", "id": "a"}]
        }))
        .unwrap();
        assert_eq!(doc.data[0].attributes, Named::default());
    }

    #[test]
    fn resource_reference_points_back() {
        let doc: NamedDocument = serde_json::from_value(json!({
            "data": [{"type": "taxonomy_term--genre", "id": "a"}]
        }))
        .unwrap();
        let reference = doc.data[0].reference().unwrap();
        assert_eq!(reference.to_string(), "taxonomy_term--genre/a");
    }

    #[test]
    fn generic_document_keeps_relationships_by_name() {
        let doc: GenericDocument = serde_json::from_value(json!({
            "data": [{
                "type": "node--islandora_object",
                "id": "815a4c04",
                "attributes": {"title": "Moonrise"},
                "relationships": {
                    "field_member_of": {"data": {"type": "node--collection_object", "id": "c1"}},
                    "field_subject": {"data": [
                        {"type": "taxonomy_term--subject", "id": "s1"},
                        {"type": "taxonomy_term--subject", "id": "s2"}
                    ]},
                    "field_model": {"data": null}
                }
            }]
        }))
        .unwrap();

        let resource = doc.single().unwrap();
        assert_eq!(resource.attributes["title"], "Moonrise");
        let rels = &resource.relationships;
        assert_eq!(rels["field_member_of"].data.entries().len(), 1);
        assert_eq!(rels["field_subject"].data.entries().len(), 2);
        assert!(rels["field_model"].data.entries().is_empty());
    }
}
