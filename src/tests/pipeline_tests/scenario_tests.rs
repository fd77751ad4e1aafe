// src/tests/pipeline_tests/scenario_tests.rs

use crate::aggregator::{Aggregator, ScopeOutcome};
use crate::domain::{Category, Purpose, SearchIntent};
use crate::extractor::ParameterExtractor;
use crate::lookup::LookupTables;
use crate::presentation::{build_enrichment_payload, format_listing, handoff_message};
use crate::provider::ListingsAdapter;
use crate::tests::utils::{hit, hits, tables, FakeTransport};
use std::sync::Arc;

#[test]
fn rent_query_in_mirdif_extracts_full_intent() {
    let extractor = ParameterExtractor::new(tables());

    let intent = extractor.extract("Find apartments for rent in Mirdif under 2M AED");

    assert_eq!(
        intent,
        SearchIntent {
            location: Some("mirdif".into()),
            purpose: Purpose::Rent,
            budget: Some(2_000_000.0),
            category: Some(Category::Apartment),
            rooms: None,
            baths: None,
        }
    );
}

#[test]
fn query_to_lines_and_payload() {
    let tables = tables();
    let fake = FakeTransport::new();
    fake.respond(
        "5524",
        hits(vec![
            hit("a", Some(140_000.0), 100.0, "Uptown Mirdif"),
            hit("b", None, 0.0, ""),
            hit("c", Some(95_000.0), 75.0, "Mirdif Hills"),
        ]),
    );

    let intent = ParameterExtractor::new(tables.clone())
        .extract("2 bedroom apartments for rent in mirdif under 150,000 AED");
    assert_eq!(intent.budget, Some(150_000.0));
    assert_eq!(intent.rooms, Some(2));

    let aggregator = Aggregator::new(
        ListingsAdapter::new(&fake, tables.clone(), 25),
        tables.clone(),
        20,
    );
    let report = aggregator.run(intent);

    let call = &fake.calls()[0];
    assert_eq!(call.max_price, Some(150_000));
    assert_eq!(call.category_id.as_deref(), Some("4"));
    assert_eq!(call.rooms_min, Some(2));

    let lines: Vec<String> = report
        .ranked
        .iter()
        .map(|r| format_listing(&r.listing, &r.neighborhood))
        .collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("- Apartments in Mirdif Hills: AED 95,000, Size: 807.29 sq.ft."));
    assert!(lines[1].starts_with("- Apartments in Uptown Mirdif: AED 140,000, Size: 1,076.39 sq.ft."));
    assert!(lines[2].starts_with("- Apartments in Mirdif: price not available, Size: not available"));

    let payload = build_enrichment_payload(&report.ranked, &tables);
    assert_eq!(payload.schools.len(), 1);
    assert_eq!(payload.schools["mirdif"].len(), 3);

    let message = handoff_message(&payload).unwrap();
    assert!(message.contains("GEMS Royal Dubai School"));
    assert!(message.contains("\"price\": null"));
}

#[test]
fn all_empty_fan_out_is_the_no_results_state() {
    let intent = ParameterExtractor::new(tables()).extract("villas for sale under 1 AED");
    assert_eq!(intent.category, Some(Category::Villa));
    assert_eq!(intent.budget, Some(1.0));

    let fake = FakeTransport::new();
    let shared = tables();
    let aggregator = Aggregator::new(ListingsAdapter::new(&fake, shared.clone(), 25), shared, 20);
    let report = aggregator.run(intent);

    // Every neighborhood has its own id, so the villa fallback never kicks in.
    assert!(report.is_empty());
    assert!(report.ranked.is_empty());
    assert_eq!(fake.calls().len(), 7);
}

#[test]
fn region_wide_villa_query_falls_back_through_the_pipeline() {
    let tables = Arc::new(
        LookupTables::from_json_str(
            r#"{
                "regional_location_id": "5002",
                "neighborhoods": [
                    { "key": "dubai", "location_id": "5002" },
                    { "key": "arabian ranches", "location_id": "5009" },
                    { "key": "dubai hills estate", "location_id": "11934" }
                ],
                "category_rules": [ { "keyword": "villa", "category": "villa" } ],
                "category_ids": { "villa": "3" },
                "villa_fallback": ["arabian ranches", "dubai hills estate"]
            }"#,
        )
        .unwrap(),
    );
    let fake = FakeTransport::new();
    fake.respond(
        "11934",
        hits(vec![hit("v1", Some(4_500_000.0), 400.0, "Dubai Hills Estate")]),
    );

    let intent = ParameterExtractor::new(tables.clone()).extract("villas anywhere in Dubai");
    assert_eq!(intent.location.as_deref(), Some("dubai"));
    assert_eq!(intent.category, Some(Category::Villa));

    let aggregator = Aggregator::new(ListingsAdapter::new(&fake, tables.clone(), 25), tables, 20);
    let report = aggregator.run(intent);

    assert_eq!(fake.requested_locations(), vec!["5002", "5009", "11934"]);
    assert_eq!(report.scopes.len(), 1);
    assert_eq!(report.scopes[0].outcome, ScopeOutcome::Found(1));
    assert_eq!(report.ranked[0].neighborhood, "dubai");
    assert_eq!(report.ranked[0].listing.external_id.as_deref(), Some("v1"));
}
