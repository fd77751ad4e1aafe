// src/domain/listing.rs

use super::intent::Purpose;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One provider record, flattened and normalized.
/// Every field past `purpose` may be missing upstream; missing values degrade
/// ranking and display but never fail the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub category: String,
    pub purpose: Purpose,
    /// Asking price in AED.
    pub price: Option<f64>,
    pub rent_frequency: Option<String>,
    /// Built-up area in square meters, 0.0 when unknown.
    pub area_sqm: f64,
    pub rooms: Option<u32>,
    pub baths: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub title: Option<String>,
    pub detail_url: Option<String>,
    pub image_url: Option<String>,
    pub source_location_label: String,

    pub external_id: Option<String>,
    pub listed_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Empty record for the given purpose; the adapter fills in what the provider sent.
    pub fn new(category: impl Into<String>, purpose: Purpose) -> Self {
        Self {
            category: category.into(),
            purpose,
            price: None,
            rent_frequency: None,
            area_sqm: 0.0,
            rooms: None,
            baths: None,
            latitude: None,
            longitude: None,
            title: None,
            detail_url: None,
            image_url: None,
            source_location_label: String::new(),
            external_id: None,
            listed_at: None,
        }
    }

    /// Sort key for ranking: a missing or unusable price counts as +infinity.
    pub fn ranking_price(&self) -> f64 {
        self.price
            .filter(|p| p.is_finite())
            .unwrap_or(f64::INFINITY)
    }
}

/// A listing tagged with the neighborhood whose search produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub neighborhood: String,
    pub listing: Listing,
}

impl RankedResult {
    pub fn new(neighborhood: impl Into<String>, listing: Listing) -> Self {
        Self {
            neighborhood: neighborhood.into(),
            listing,
        }
    }
}
