// adapter.rs
use crate::domain::{Category, Listing, Purpose, SearchIntent};
use crate::lookup::LookupTables;
use crate::provider::client::{ListingsTransport, ProviderQuery};
use crate::provider::models::RawHit;
use crate::provider::ProviderError;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Optional filters of one provider search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilters {
    /// Maximum price in AED.
    pub budget: Option<f64>,
    pub category: Option<Category>,
    pub rooms: Option<u32>,
    pub baths: Option<u32>,
}

impl From<&SearchIntent> for ListingFilters {
    fn from(intent: &SearchIntent) -> Self {
        Self {
            budget: intent.budget,
            category: intent.category,
            rooms: intent.rooms,
            baths: intent.baths,
        }
    }
}

/// Turns search parameters into provider requests and provider responses
/// into canonical listings.
pub struct ListingsAdapter<T> {
    transport: T,
    tables: Arc<LookupTables>,
    hits_per_page: u32,
}

impl<T: ListingsTransport> ListingsAdapter<T> {
    pub fn new(transport: T, tables: Arc<LookupTables>, hits_per_page: u32) -> Self {
        Self {
            transport,
            tables,
            hits_per_page,
        }
    }

    /// Listings for one location.
    ///
    /// A region-wide villa search that comes back empty is retried against
    /// the villa communities from the lookup tables, in order, until one
    /// returns listings. Only the first request's failure is returned as an
    /// error; failures during the retry chain are logged and skipped.
    pub fn fetch(
        &self,
        location: &str,
        purpose: Purpose,
        filters: &ListingFilters,
    ) -> Result<Vec<Listing>, ProviderError> {
        if location.trim().is_empty() {
            return Err(ProviderError::InvalidRequest(
                "location is required".into(),
            ));
        }

        let query = self.build_query(location, purpose, filters);
        let listings = self.fetch_query(&query)?;

        let wants_villa_fallback = listings.is_empty()
            && filters.category == Some(Category::Villa)
            && self.tables.is_regional(&query.location_id);

        if !wants_villa_fallback {
            return Ok(listings);
        }

        info!(location, "no villas region-wide, trying villa communities");
        Ok(self.villa_fallback(&query))
    }

    pub fn build_query(
        &self,
        location: &str,
        purpose: Purpose,
        filters: &ListingFilters,
    ) -> ProviderQuery {
        let category_id = filters
            .category
            .and_then(|c| self.tables.category_id(c))
            .map(str::to_string);

        if filters.category.is_some() && category_id.is_none() {
            debug!(category = ?filters.category, "no provider id for category, searching all types");
        }

        ProviderQuery {
            location_id: self.tables.location_id(location).to_string(),
            purpose,
            max_price: max_price(filters.budget),
            category_id,
            rooms_min: filters.rooms,
            baths_min: filters.baths,
            hits_per_page: self.hits_per_page,
        }
    }

    fn villa_fallback(&self, query: &ProviderQuery) -> Vec<Listing> {
        for name in self.tables.villa_fallback() {
            let location_id = self.tables.location_id(name);
            if self.tables.is_regional(location_id) {
                continue;
            }

            match self.fetch_query(&query.at_location(location_id)) {
                Ok(listings) if !listings.is_empty() => {
                    info!(community = %name, count = listings.len(), "villa fallback hit");
                    return listings;
                }
                Ok(_) => debug!(community = %name, "villa fallback empty"),
                Err(e) => warn!(community = %name, error = %e, "villa fallback request failed"),
            }
        }

        Vec::new()
    }

    fn fetch_query(&self, query: &ProviderQuery) -> Result<Vec<Listing>, ProviderError> {
        debug!(params = ?query.to_params(), "requesting listings");
        let body = self.transport.list_properties(query)?;
        Ok(normalize_response(&body, query.purpose))
    }
}

/// Budget becomes an integer AED ceiling; unusable values drop the filter.
fn max_price(budget: Option<f64>) -> Option<u64> {
    budget
        .filter(|b| b.is_finite() && *b >= 0.0 && *b <= u64::MAX as f64)
        .map(|b| b as u64)
}

/// Listings from a provider body. A missing `hits` array is an empty result;
/// records that are not objects are skipped, mistyped fields inside a record
/// only lose that field.
pub fn normalize_response(body: &Value, purpose: Purpose) -> Vec<Listing> {
    let Some(hits) = body.get("hits").and_then(Value::as_array) else {
        debug!("response has no hits array");
        return Vec::new();
    };

    let mut listings = Vec::with_capacity(hits.len());
    let mut skipped = 0;

    for hit in hits {
        match serde_json::from_value::<RawHit>(hit.clone()) {
            Ok(raw) => listings.push(raw.into_listing(purpose)),
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "skipping malformed listing");
            }
        }
    }

    debug!(kept = listings.len(), skipped, "normalized provider hits");
    listings
}
