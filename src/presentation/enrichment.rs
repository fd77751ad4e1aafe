// src/presentation/enrichment.rs

use super::lines::sqm_to_sqft;
use crate::domain::RankedResult;
use crate::lookup::LookupTables;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Listing as handed to the summariser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadListing {
    pub neighborhood: String,
    #[serde(rename = "type")]
    pub category: String,
    pub location: String,
    pub price: Option<f64>,
    pub size_sqm: f64,
    pub size_sqft: Option<f64>,
    pub rooms: Option<u32>,
    pub baths: Option<u32>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub listed_at: Option<DateTime<Utc>>,
}

/// Ranked listings plus the school list of every neighborhood they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentPayload {
    pub listings: Vec<PayloadListing>,
    pub schools: BTreeMap<String, Vec<String>>,
}

/// Neighborhoods without school data map to an empty list.
pub fn build_enrichment_payload(
    results: &[RankedResult],
    tables: &LookupTables,
) -> EnrichmentPayload {
    let listings = results
        .iter()
        .map(|r| PayloadListing {
            neighborhood: r.neighborhood.clone(),
            category: r.listing.category.clone(),
            location: r.listing.source_location_label.clone(),
            price: r.listing.price,
            size_sqm: r.listing.area_sqm,
            size_sqft: sqm_to_sqft(r.listing.area_sqm),
            rooms: r.listing.rooms,
            baths: r.listing.baths,
            title: r.listing.title.clone(),
            url: r.listing.detail_url.clone(),
            image_url: r.listing.image_url.clone(),
            latitude: r.listing.latitude,
            longitude: r.listing.longitude,
            listed_at: r.listing.listed_at,
        })
        .collect();

    let schools = results
        .iter()
        .map(|r| (r.neighborhood.clone(), tables.schools(&r.neighborhood).to_vec()))
        .collect();

    EnrichmentPayload { listings, schools }
}
