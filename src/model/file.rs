//! model::file
//!
//! File entities (`file--file`).

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::common::FileUri;
use super::JsonApiDocument;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileAttributes {
    pub filename: String,
    pub uri: FileUri,
    #[serde(rename = "filemime")]
    pub mime_type: Option<String>,
    #[serde(rename = "filesize")]
    pub file_size: Option<u64>,
    #[serde(rename = "created")]
    pub created_date: Option<DateTime<FixedOffset>>,
    #[serde(rename = "changed")]
    pub changed_date: Option<DateTime<FixedOffset>>,
}

pub type JsonApiFile = JsonApiDocument<FileAttributes>;
