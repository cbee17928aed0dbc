//! model::repository
//!
//! Collections and repository objects (`node--collection_object`,
//! `node--islandora_object`).

use serde::Deserialize;

use super::common::{null_as_default, LangText, Link, ToMany, ToOne};
use super::language::LanguageValue;
use super::meta::RelData;
use super::JsonApiDocument;

// =============================================================================
// Collection
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CollectionAttributes {
    pub title: String,
    pub description: Option<LangText>,
    #[serde(rename = "field_collection_contact_email")]
    pub contact_email: Option<String>,
    #[serde(rename = "field_collection_contact_name")]
    pub contact_name: Option<String>,
    #[serde(rename = "field_collection_number")]
    pub collection_numbers: Vec<String>,
    #[serde(rename = "field_finding_aid")]
    pub finding_aids: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CollectionRelationships {
    #[serde(rename = "field_alternative_title")]
    pub alt_titles: ToMany<LanguageValue>,
    #[serde(rename = "field_title_language")]
    pub title_language: ToOne<LanguageValue>,
    #[serde(rename = "field_description")]
    pub descriptions: ToMany<LanguageValue>,
    #[serde(rename = "field_access_terms")]
    pub access_terms: ToMany,
    #[serde(rename = "field_member_of")]
    pub member_of: ToOne,
}

pub type JsonApiCollection = JsonApiDocument<CollectionAttributes, CollectionRelationships>;

// =============================================================================
// Repository object
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IslandoraObjAttributes {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "field_collection_number")]
    pub collection_numbers: Vec<String>,
    #[serde(rename = "field_date_available")]
    pub date_available: Option<String>,
    #[serde(rename = "field_date_copyrighted")]
    pub dates_copyrighted: Vec<String>,
    #[serde(rename = "field_date_created")]
    pub dates_created: Vec<String>,
    #[serde(rename = "field_date_published")]
    pub dates_published: Vec<String>,
    #[serde(rename = "field_digital_identifier")]
    pub digital_identifiers: Vec<String>,
    #[serde(rename = "field_dspace_identifier")]
    pub dspace_identifier: Option<Link>,
    #[serde(rename = "field_dspace_item_id")]
    pub dspace_item_id: Option<String>,
    #[serde(rename = "field_extent")]
    pub extent: Vec<String>,
    #[serde(rename = "field_featured_item", deserialize_with = "null_as_default")]
    pub featured_item: bool,
    #[serde(rename = "field_finding_aid")]
    pub finding_aids: Vec<Link>,
    #[serde(rename = "field_geoportal_link")]
    pub geoportal_link: Option<Link>,
    #[serde(rename = "field_is_part_of")]
    pub is_part_of: Option<Link>,
    #[serde(rename = "field_issn")]
    pub issn: Option<String>,
    #[serde(rename = "field_item_barcode")]
    pub item_barcodes: Vec<String>,
    #[serde(rename = "field_jhir")]
    pub jhir_uri: Option<Link>,
    #[serde(rename = "field_library_catalog_link")]
    pub library_catalog_links: Vec<Link>,
    #[serde(rename = "field_oclc_number")]
    pub oclc_numbers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IslandoraObjRelationships {
    #[serde(rename = "field_abstract")]
    pub abstracts: ToMany<LanguageValue>,
    #[serde(rename = "field_access_rights")]
    pub access_rights: ToMany,
    #[serde(rename = "field_access_terms")]
    pub access_terms: ToMany,
    #[serde(rename = "field_alternative_title")]
    pub alt_titles: ToMany<LanguageValue>,
    /// `meta.rel_type` holds the MARC relator
    #[serde(rename = "field_contributor")]
    pub contributors: ToMany<RelData>,
    #[serde(rename = "field_copyright_and_use")]
    pub copyright_and_use: ToOne,
    #[serde(rename = "field_copyright_holder")]
    pub copyright_holders: ToMany,
    /// `meta.rel_type` holds the MARC relator
    #[serde(rename = "field_creator")]
    pub creators: ToMany<RelData>,
    #[serde(rename = "field_custodial_history")]
    pub custodial_history: ToMany<LanguageValue>,
    #[serde(rename = "field_description")]
    pub descriptions: ToMany<LanguageValue>,
    #[serde(rename = "field_digital_publisher")]
    pub digital_publishers: ToMany,
    #[serde(rename = "field_genre")]
    pub genres: ToMany,
    pub language: ToMany,
    #[serde(rename = "field_model")]
    pub model: ToOne,
    #[serde(rename = "field_member_of")]
    pub member_of: ToOne,
    #[serde(rename = "field_publisher")]
    pub publishers: ToMany,
    #[serde(rename = "field_publisher_country")]
    pub publisher_countries: ToMany,
    #[serde(rename = "field_resource_type")]
    pub resource_types: ToMany,
    #[serde(rename = "field_spatial_coverage")]
    pub spatial_coverage: ToMany,
    #[serde(rename = "field_subject")]
    pub subjects: ToMany,
    #[serde(rename = "field_table_of_contents")]
    pub table_of_contents: ToMany<LanguageValue>,
    #[serde(rename = "field_title_language")]
    pub title_language: ToOne,
    #[serde(rename = "field_display_hints")]
    pub display_hint: ToOne,
}

pub type JsonApiIslandoraObj = JsonApiDocument<IslandoraObjAttributes, IslandoraObjRelationships>;
