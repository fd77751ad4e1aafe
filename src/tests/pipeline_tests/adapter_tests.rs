// src/tests/pipeline_tests/adapter_tests.rs

use crate::domain::{Category, Purpose};
use crate::lookup::{LookupTables, REGIONAL_LOCATION_ID};
use crate::provider::{ListingFilters, ListingsAdapter, ProviderError};
use crate::tests::utils::{hit, hits, tables, FakeTransport};
use serde_json::json;
use std::sync::Arc;

fn villa_filters() -> ListingFilters {
    ListingFilters {
        category: Some(Category::Villa),
        ..ListingFilters::default()
    }
}

#[test]
fn request_params_follow_lookup_tables() {
    let fake = FakeTransport::new();
    fake.respond("5524", hits(vec![hit("1", Some(90_000.0), 80.0, "Mirdif")]));
    let adapter = ListingsAdapter::new(&fake, tables(), 25);

    let filters = ListingFilters {
        budget: Some(2_000_000.0),
        category: Some(Category::Apartment),
        rooms: Some(2),
        baths: None,
    };
    let listings = adapter.fetch("Mirdif", Purpose::Rent, &filters).unwrap();
    assert_eq!(listings.len(), 1);

    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    let params = calls[0].to_params();
    assert!(params.contains(&("locationExternalIDs", "5524".to_string())));
    assert!(params.contains(&("purpose", "for-rent".to_string())));
    assert!(params.contains(&("maxPrice", "2000000".to_string())));
    assert!(params.contains(&("categoryExternalID", "4".to_string())));
    assert!(params.contains(&("roomsMin", "2".to_string())));
    assert!(params.contains(&("hitsPerPage", "25".to_string())));
    assert!(!params.iter().any(|(name, _)| *name == "bathsMin"));
}

#[test]
fn unknown_location_uses_regional_id() {
    let fake = FakeTransport::new();
    let adapter = ListingsAdapter::new(&fake, tables(), 25);

    adapter
        .fetch("atlantis", Purpose::Sale, &ListingFilters::default())
        .unwrap();

    assert_eq!(fake.requested_locations(), vec![REGIONAL_LOCATION_ID]);
}

#[test]
fn category_without_id_is_unscoped() {
    let tables = LookupTables::from_json_str(
        r#"{
            "regional_location_id": "5002",
            "neighborhoods": [{ "key": "mirdif", "location_id": "5524" }],
            "category_rules": [{ "keyword": "office", "category": "office" }],
            "category_ids": {}
        }"#,
    )
    .unwrap();
    let fake = FakeTransport::new();
    let adapter = ListingsAdapter::new(&fake, Arc::new(tables), 10);

    let filters = ListingFilters {
        category: Some(Category::Office),
        ..ListingFilters::default()
    };
    adapter.fetch("mirdif", Purpose::Sale, &filters).unwrap();

    assert_eq!(fake.calls()[0].category_id, None);
}

#[test]
fn invalid_budget_is_dropped_not_fatal() {
    let fake = FakeTransport::new();
    let adapter = ListingsAdapter::new(&fake, tables(), 25);

    let filters = ListingFilters {
        budget: Some(f64::NAN),
        ..ListingFilters::default()
    };
    assert!(adapter.fetch("mirdif", Purpose::Sale, &filters).is_ok());
    assert_eq!(fake.calls()[0].max_price, None);
}

#[test]
fn empty_location_is_rejected() {
    let fake = FakeTransport::new();
    let adapter = ListingsAdapter::new(&fake, tables(), 25);

    let err = adapter
        .fetch("  ", Purpose::Sale, &ListingFilters::default())
        .unwrap_err();

    assert!(matches!(err, ProviderError::InvalidRequest(_)));
    assert!(fake.calls().is_empty());
}

#[test]
fn transport_failure_is_returned() {
    let fake = FakeTransport::new();
    fake.fail("5524", ProviderError::Network("connection reset".into()));
    let adapter = ListingsAdapter::new(&fake, tables(), 25);

    let err = adapter
        .fetch("mirdif", Purpose::Sale, &ListingFilters::default())
        .unwrap_err();

    assert_eq!(err, ProviderError::Network("connection reset".into()));
}

#[test]
fn response_without_hits_is_empty() {
    let fake = FakeTransport::new();
    fake.respond("5524", json!({ "message": "quota exceeded" }));
    let adapter = ListingsAdapter::new(&fake, tables(), 25);

    let listings = adapter
        .fetch("mirdif", Purpose::Sale, &ListingFilters::default())
        .unwrap();
    assert!(listings.is_empty());
}

#[test]
fn villa_fallback_stops_at_first_non_empty_community() {
    let fake = FakeTransport::new();
    fake.respond(REGIONAL_LOCATION_ID, hits(Vec::new()))
        .respond("5009", hits(Vec::new()))
        .respond(
            "11934",
            hits(vec![
                hit("v1", Some(4_200_000.0), 350.0, "Dubai Hills Estate"),
                hit("v2", Some(6_900_000.0), 500.0, "Dubai Hills Estate"),
            ]),
        )
        .respond("5480", hits(vec![hit("never", Some(1.0), 1.0, "Emirates Hills")]));
    let adapter = ListingsAdapter::new(&fake, tables(), 25);

    let listings = adapter.fetch("dubai", Purpose::Sale, &villa_filters()).unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].external_id.as_deref(), Some("v1"));
    assert_eq!(
        fake.requested_locations(),
        vec![REGIONAL_LOCATION_ID, "5009", "11934"]
    );
    assert!(fake
        .calls()
        .iter()
        .all(|q| q.category_id.as_deref() == Some("3") && q.purpose == Purpose::Sale));
}

#[test]
fn villa_fallback_exhausts_list_in_order() {
    let fake = FakeTransport::new();
    let tables = tables();
    let adapter = ListingsAdapter::new(&fake, tables.clone(), 25);

    let listings = adapter.fetch("dubai", Purpose::Rent, &villa_filters()).unwrap();
    assert!(listings.is_empty());

    let mut expected = vec![REGIONAL_LOCATION_ID.to_string()];
    expected.extend(
        tables
            .villa_fallback()
            .iter()
            .map(|name| tables.location_id(name).to_string()),
    );
    assert_eq!(fake.requested_locations(), expected);
}

#[test]
fn villa_fallback_skips_failing_community() {
    let fake = FakeTransport::new();
    fake.fail("5009", ProviderError::Network("timeout".into()))
        .respond("11934", hits(vec![hit("v1", Some(3_000_000.0), 300.0, "Dubai Hills Estate")]));
    let adapter = ListingsAdapter::new(&fake, tables(), 25);

    let listings = adapter.fetch("dubai", Purpose::Sale, &villa_filters()).unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(
        fake.requested_locations(),
        vec![REGIONAL_LOCATION_ID, "5009", "11934"]
    );
}

#[test]
fn no_fallback_outside_region_wide_villa_search() {
    let fake = FakeTransport::new();
    let adapter = ListingsAdapter::new(&fake, tables(), 25);

    // Villas in a specific neighborhood.
    adapter.fetch("mirdif", Purpose::Sale, &villa_filters()).unwrap();
    // Region-wide, but not villas.
    let apartments = ListingFilters {
        category: Some(Category::Apartment),
        ..ListingFilters::default()
    };
    adapter.fetch("dubai", Purpose::Sale, &apartments).unwrap();

    assert_eq!(
        fake.requested_locations(),
        vec!["5524", REGIONAL_LOCATION_ID]
    );
}

#[test]
fn no_fallback_when_region_wide_villa_search_has_results() {
    let fake = FakeTransport::new();
    fake.respond(
        REGIONAL_LOCATION_ID,
        hits(vec![hit("r1", Some(5_000_000.0), 400.0, "The Springs")]),
    );
    let adapter = ListingsAdapter::new(&fake, tables(), 25);

    let listings = adapter.fetch("dubai", Purpose::Sale, &villa_filters()).unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(fake.requested_locations(), vec![REGIONAL_LOCATION_ID]);
}
