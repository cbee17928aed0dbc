//! model::taxonomy
//!
//! Taxonomy term kinds.
//!
//! Most vocabularies share `name`, `description` and
//! `field_authority_link`; the agent vocabularies (person, family,
//! corporate body) add name parts and typed relationships to other agents.

use serde::Deserialize;

use super::common::{AuthorityLink, FormattedText, Link, ToMany};
use super::meta::RelData;
use super::{JsonApiDocument, NoRelationships};

/// `name` and `description`, present on every term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TermAttributes {
    pub name: String,
    pub description: Option<FormattedText>,
}

/// A term that links out to a controlled vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthorityTermAttributes {
    #[serde(flatten)]
    pub term: TermAttributes,
    #[serde(rename = "field_authority_link")]
    pub authority: Vec<AuthorityLink>,
}

/// A term identified by an external URI (models, display hints, media uses).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExternalUriTermAttributes {
    #[serde(flatten)]
    pub term: TermAttributes,
    #[serde(rename = "field_external_uri")]
    pub external_uri: Option<Link>,
}

/// Relationships of the agent vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentRelationships {
    /// Typed links to other agents; `meta.rel_type` names the relation
    #[serde(rename = "field_relationships")]
    pub relationships: ToMany<RelData>,
}

// =============================================================================
// Agents
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PersonAttributes {
    #[serde(flatten)]
    pub term: AuthorityTermAttributes,
    #[serde(rename = "field_date")]
    pub dates: Vec<String>,
    #[serde(rename = "field_primary_part_of_name")]
    pub primary_part_of_name: Option<String>,
    #[serde(rename = "field_preferred_name_prefix")]
    pub preferred_name_prefix: Vec<String>,
    #[serde(rename = "field_preferred_name_rest")]
    pub preferred_name_rest: Vec<String>,
    #[serde(rename = "field_preferred_name_suffix")]
    pub preferred_name_suffix: Vec<String>,
    #[serde(rename = "field_preferred_name_fuller_form")]
    pub preferred_name_fuller_form: Vec<String>,
    #[serde(rename = "field_preferred_name_number")]
    pub preferred_name_number: Vec<String>,
    #[serde(rename = "field_person_alternate_name")]
    pub alternate_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FamilyAttributes {
    #[serde(flatten)]
    pub term: AuthorityTermAttributes,
    #[serde(rename = "field_date")]
    pub dates: Vec<String>,
    #[serde(rename = "field_family_name")]
    pub family_name: Option<String>,
    #[serde(rename = "field_title_and_other_words")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorporateBodyAttributes {
    #[serde(flatten)]
    pub term: AuthorityTermAttributes,
    #[serde(rename = "field_primary_name")]
    pub primary_name: Option<String>,
    #[serde(rename = "field_subordinate_name")]
    pub subordinate_names: Vec<String>,
    #[serde(rename = "field_location_of_meeting")]
    pub meeting_locations: Vec<String>,
    #[serde(rename = "field_num_of_section_or_meet")]
    pub section_or_meeting_numbers: Vec<String>,
    #[serde(rename = "field_date_of_meeting_or_treaty")]
    pub meeting_dates: Vec<String>,
    #[serde(rename = "field_corporate_body_alt_name")]
    pub alternate_names: Vec<String>,
    #[serde(rename = "field_date")]
    pub dates: Vec<String>,
}

// =============================================================================
// Other vocabularies
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeolocationAttributes {
    #[serde(flatten)]
    pub term: AuthorityTermAttributes,
    #[serde(rename = "field_broader")]
    pub broader: Vec<Link>,
    #[serde(rename = "field_geo_alt_name")]
    pub alternate_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LanguageAttributes {
    #[serde(flatten)]
    pub term: AuthorityTermAttributes,
    /// ISO 639-2 code, e.g. `eng`
    #[serde(rename = "field_language_code")]
    pub language_code: Option<String>,
}

/// Islandora access terms form a hierarchy through `parent`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccessTermRelationships {
    pub parent: ToMany,
}

pub type JsonApiPerson = JsonApiDocument<PersonAttributes, AgentRelationships>;
pub type JsonApiFamily = JsonApiDocument<FamilyAttributes, AgentRelationships>;
pub type JsonApiCorporateBody = JsonApiDocument<CorporateBodyAttributes, AgentRelationships>;
pub type JsonApiAccessRights = JsonApiDocument<AuthorityTermAttributes>;
pub type JsonApiCopyrightAndUse = JsonApiDocument<AuthorityTermAttributes>;
pub type JsonApiGenre = JsonApiDocument<AuthorityTermAttributes>;
pub type JsonApiResourceType = JsonApiDocument<AuthorityTermAttributes>;
pub type JsonApiSubject = JsonApiDocument<AuthorityTermAttributes>;
pub type JsonApiGeolocation = JsonApiDocument<GeolocationAttributes>;
pub type JsonApiLanguage = JsonApiDocument<LanguageAttributes>;
pub type JsonApiIslandoraAccessTerms = JsonApiDocument<TermAttributes, AccessTermRelationships>;
pub type JsonApiIslandoraModel = JsonApiDocument<ExternalUriTermAttributes>;
pub type JsonApiIslandoraDisplay = JsonApiDocument<ExternalUriTermAttributes>;
pub type JsonApiMediaUse = JsonApiDocument<ExternalUriTermAttributes, NoRelationships>;
