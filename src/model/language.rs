//! model::language
//!
//! Multilingual string values.
//!
//! Typed fields such as `field_alternative_title` hold a string together with
//! a reference to the language taxonomy term the string is written in. The
//! string travels inline in the relationship's `meta`, so reading it costs
//! nothing; finding the language code means resolving the term.
//!
//! ```json
//! "field_alternative_title": {
//!   "data": [
//!     {
//!       "type": "taxonomy_term--language",
//!       "id": "7397e0c4-df0a-4800-95af-afccc6ff64a5",
//!       "meta": { "value": "Moonrise Over Hernandez" }
//!     },
//!     {
//!       "type": "taxonomy_term--language",
//!       "id": "bacfc5b6-b4b9-4239-8744-46dca6a91f0e",
//!       "meta": { "value": "Salida de la luna sobre Hernández" }
//!     }
//!   ]
//! }
//! ```

use serde::Deserialize;

use super::taxonomy::JsonApiLanguage;
use crate::core::types::ResourceRef;
use crate::jsonapi::{JsonApiError, Resolver};

/// A string value paired with a reference to its language term.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageValue {
    #[serde(flatten)]
    pub reference: ResourceRef,
    #[serde(default)]
    pub meta: LanguageMeta,
}

/// Inline part of a [`LanguageValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LanguageMeta {
    pub value: String,
}

impl LanguageValue {
    /// The string itself. No I/O.
    pub fn value(&self) -> &str {
        &self.meta.value
    }

    /// The language code of [`value`](Self::value), e.g. `eng`.
    ///
    /// Resolves the language term, which costs one request every call.
    ///
    /// # Errors
    ///
    /// Any resolve error; `Decode` if the term carries no language code.
    pub async fn language_code(&self, resolver: &Resolver) -> Result<String, JsonApiError> {
        let language: JsonApiLanguage = resolver.resolve(&self.reference).await?;
        let term = language.single().ok_or_else(|| {
            JsonApiError::Decode(format!("{} did not resolve to one term", self.reference))
        })?;
        term.attributes.language_code.clone().ok_or_else(|| {
            JsonApiError::Decode(format!(
                "language term {} has no field_language_code",
                self.reference.id()
            ))
        })
    }
}
