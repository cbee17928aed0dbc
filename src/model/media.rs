//! model::media
//!
//! Media kinds.
//!
//! Every file-backed media kind embeds [`MediaAttributes`] and
//! [`MediaRelationships`] and adds the field that points at its file, whose
//! name differs per bundle (`field_media_image`, `field_media_document`,
//! ...). The file reference is a [`RelData`] because image references carry
//! `alt`, `width` and `height` in their `meta`.
//!
//! Example query:
//! `https://islandora-idc.traefik.me/jsonapi/media/image?filter[id]=090690a5-4db5-4d72-a94e-3b26a90b516b`

use serde::Deserialize;

use super::common::{null_as_default, FormattedText, ToMany, ToOne};
use super::meta::RelData;
use super::JsonApiDocument;

/// Attributes shared by every file-backed media kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MediaAttributes {
    pub name: String,
    #[serde(rename = "field_file_size")]
    pub file_size: Option<u64>,
    #[serde(rename = "field_mime_type")]
    pub mime_type: Option<String>,
    #[serde(rename = "field_original_name")]
    pub original_name: Option<String>,
    #[serde(rename = "field_restricted_access", deserialize_with = "null_as_default")]
    pub restricted_access: bool,
}

/// Relationships shared by every media kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MediaRelationships {
    #[serde(rename = "field_access_terms")]
    pub access_terms: ToMany,
    #[serde(rename = "field_media_use")]
    pub media_use: ToMany,
    /// The repository object this media belongs to
    #[serde(rename = "field_media_of")]
    pub media_of: ToOne,
}

// =============================================================================
// Attributes
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageMediaAttributes {
    #[serde(flatten)]
    pub common: MediaAttributes,
    #[serde(rename = "field_height")]
    pub height: Option<u32>,
    #[serde(rename = "field_width")]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractedTextMediaAttributes {
    #[serde(flatten)]
    pub common: MediaAttributes,
    #[serde(rename = "field_edited_text")]
    pub edited_text: Option<FormattedText>,
}

/// Remote video has no local file, so none of the file attributes apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteVideoMediaAttributes {
    pub name: String,
    #[serde(rename = "field_media_oembed_video", deserialize_with = "null_as_default")]
    pub embed_url: String,
    #[serde(rename = "field_restricted_access", deserialize_with = "null_as_default")]
    pub restricted_access: bool,
}

// =============================================================================
// Relationships
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageMediaRelationships {
    #[serde(flatten)]
    pub common: MediaRelationships,
    #[serde(rename = "field_media_image")]
    pub file: ToOne<RelData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentMediaRelationships {
    #[serde(flatten)]
    pub common: MediaRelationships,
    #[serde(rename = "field_media_document")]
    pub file: ToOne<RelData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AudioMediaRelationships {
    #[serde(flatten)]
    pub common: MediaRelationships,
    #[serde(rename = "field_media_audio_file")]
    pub file: ToOne<RelData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoMediaRelationships {
    #[serde(flatten)]
    pub common: MediaRelationships,
    #[serde(rename = "field_media_video_file")]
    pub file: ToOne<RelData>,
}

/// Used by the generic file, extracted text and FITS bundles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileMediaRelationships {
    #[serde(flatten)]
    pub common: MediaRelationships,
    #[serde(rename = "field_media_file")]
    pub file: ToOne<RelData>,
}

pub type JsonApiImageMedia = JsonApiDocument<ImageMediaAttributes, ImageMediaRelationships>;
pub type JsonApiDocumentMedia = JsonApiDocument<MediaAttributes, DocumentMediaRelationships>;
pub type JsonApiAudioMedia = JsonApiDocument<MediaAttributes, AudioMediaRelationships>;
pub type JsonApiVideoMedia = JsonApiDocument<MediaAttributes, VideoMediaRelationships>;
pub type JsonApiExtractedTextMedia =
    JsonApiDocument<ExtractedTextMediaAttributes, FileMediaRelationships>;
pub type JsonApiGenericFileMedia = JsonApiDocument<MediaAttributes, FileMediaRelationships>;
pub type JsonApiFitsMedia = JsonApiDocument<MediaAttributes, FileMediaRelationships>;
pub type JsonApiRemoteVideoMedia = JsonApiDocument<RemoteVideoMediaAttributes, MediaRelationships>;
