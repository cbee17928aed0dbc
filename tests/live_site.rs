//! Tests against a running Islandora site.
//!
//! Enabled with the `live_site_tests` feature. The site is taken from
//! `BASE_URL` (default `https://islandora-idc.traefik.me`) and credentials
//! from `IDC_USERNAME` / `IDC_PASSWORD`. `IDC_TEST_OBJECT_ID` must name an
//! existing repository object.

#![cfg(feature = "live_site_tests")]

use idc_jsonapi::core::config::Config;
use idc_jsonapi::core::types::ResourceRef;
use idc_jsonapi::jsonapi::Resolver;
use idc_jsonapi::model::{JsonApiCollection, JsonApiIslandoraObj};

fn resolver() -> Resolver {
    let loaded = Config::load().expect("config should load");
    Resolver::from_config(&loaded.config).expect("resolver should build")
}

fn object_ref() -> ResourceRef {
    let id = std::env::var("IDC_TEST_OBJECT_ID").expect("IDC_TEST_OBJECT_ID must be set");
    ResourceRef::new("node--islandora_object".parse().unwrap(), id).unwrap()
}

#[tokio::test]
async fn object_and_collection() {
    let resolver = resolver();
    let object: JsonApiIslandoraObj = resolver.resolve(&object_ref()).await.unwrap();
    let object = object.single().unwrap();
    assert!(!object.attributes.title.is_empty());

    if let Some(member_of) = object.relationships.member_of.get() {
        let origin = object.relationships.member_of.related_origin();
        let collection: JsonApiCollection = match origin {
            Some(origin) => {
                let options = idc_jsonapi::jsonapi::ResolveOptions::new().origin(origin);
                resolver.resolve_with(member_of, &options).await.unwrap()
            }
            None => member_of.resolve(&resolver).await.unwrap(),
        };
        assert!(!collection.single().unwrap().attributes.title.is_empty());
    }
}

#[tokio::test]
async fn language_codes_of_alternative_titles() {
    let resolver = resolver();
    let object: JsonApiIslandoraObj = resolver.resolve(&object_ref()).await.unwrap();
    for title in object.single().unwrap().relationships.alt_titles.iter() {
        let code = title.language_code(&resolver).await.unwrap();
        assert!(!code.is_empty(), "empty language code for '{}'", title.value());
    }
}
