//! model::common
//!
//! Attribute blocks and relationship envelopes shared by every resource kind.

use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize};

/// Formatted text field (`value`, `format`, `processed`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattedText {
    pub value: String,
    pub format: Option<String>,
    pub processed: Option<String>,
}

/// Link field (`uri`, `title`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub uri: String,
    pub title: Option<String>,
}

/// Authority link field: a link plus the authority source it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorityLink {
    pub uri: String,
    pub title: Option<String>,
    pub source: Option<String>,
}

/// Text paired with a Drupal language code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangText {
    pub value: String,
    pub langcode: Option<String>,
}

/// File URI: the stream wrapper form and the public URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUri {
    /// e.g. `/_flysystem/fedora/2021-03/photo.jpg`
    pub url: String,
    /// e.g. `fedora://2021-03/photo.jpg`
    pub value: String,
}

/// `href` holder used in `links` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Href {
    pub href: String,
}

/// `links` member of a relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipLinks {
    pub related: Option<Href>,
    #[serde(rename = "self")]
    pub self_link: Option<Href>,
}

/// A relationship field: `{ "data": ..., "links": {...} }`.
///
/// Use the [`ToOne`] and [`ToMany`] aliases rather than naming `D` directly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(bound(deserialize = "D: Deserialize<'de> + Default"))]
pub struct Relationship<D> {
    #[serde(default)]
    pub data: D,
    #[serde(default)]
    pub links: Option<RelationshipLinks>,
}

/// Single-valued relationship; `data` is `null` when nothing is referenced.
pub type ToOne<T = crate::core::types::ResourceRef> = Relationship<Option<T>>;

/// Multi-valued relationship.
pub type ToMany<T = crate::core::types::ResourceRef> = Relationship<Vec<T>>;

impl<D> Relationship<D> {
    /// Origin of the site that served this relationship, taken from
    /// `links.related.href` (or `links.self.href`).
    ///
    /// Everything before the `/jsonapi/` path segment is kept, so sites
    /// mounted under a sub-path keep their prefix. Returns `None` when the
    /// response carried no usable link.
    ///
    /// ```
    /// use idc_jsonapi::model::ToMany;
    ///
    /// let rel: ToMany = serde_json::from_str(r#"{
    ///     "data": [],
    ///     "links": {"related": {"href": "http://islandora-idc.traefik.me/jsonapi/node/islandora_object/815a4c04/field_subject"}}
    /// }"#).unwrap();
    /// assert_eq!(rel.related_origin().unwrap().as_str(), "http://islandora-idc.traefik.me/");
    /// ```
    pub fn related_origin(&self) -> Option<Url> {
        let links = self.links.as_ref()?;
        let href = links.related.as_ref().or(links.self_link.as_ref())?;
        origin_of(&href.href)
    }
}

/// Strip a JSON:API URL down to the site origin.
fn origin_of(href: &str) -> Option<Url> {
    let mut url = Url::parse(href).ok()?;
    let segments: Vec<String> = url.path_segments()?.map(str::to_string).collect();
    let prefix_len = segments.iter().position(|s| s == "jsonapi")?;

    url.set_query(None);
    url.set_fragment(None);
    {
        let mut path = url.path_segments_mut().ok()?;
        path.clear();
        path.extend(&segments[..prefix_len]);
        if prefix_len > 0 {
            // keep a trailing slash so the origin joins like a directory
            path.push("");
        }
    }
    Some(url)
}

impl<T> Relationship<Option<T>> {
    /// The referenced item, if any.
    pub fn get(&self) -> Option<&T> {
        self.data.as_ref()
    }
}

impl<T> Relationship<Vec<T>> {
    /// Iterate over the referenced items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Decode a single-valued field, reading an explicit `null` as the default.
///
/// Drupal sends `null` for an unset boolean or plain text field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
