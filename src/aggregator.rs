//! Fans one search intent out over its neighborhoods and ranks the merged results.

use crate::domain::{RankedResult, SearchIntent};
use crate::lookup::LookupTables;
use crate::provider::{ListingFilters, ListingsAdapter, ListingsTransport};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// What one neighborhood's search produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum ScopeOutcome {
    Found(usize),
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopeReport {
    pub neighborhood: String,
    pub outcome: ScopeOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub intent: SearchIntent,
    /// One entry per neighborhood searched, in search order.
    pub scopes: Vec<ScopeReport>,
    /// Listings found before truncation.
    pub total_found: usize,
    pub ranked: Vec<RankedResult>,
}

impl SearchReport {
    /// Nothing found anywhere in scope.
    pub fn is_empty(&self) -> bool {
        self.total_found == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScopeReport> {
        self.scopes
            .iter()
            .filter(|s| matches!(s.outcome, ScopeOutcome::Failed(_)))
    }
}

pub struct Aggregator<T> {
    adapter: ListingsAdapter<T>,
    tables: Arc<LookupTables>,
    top_n: usize,
}

impl<T: ListingsTransport> Aggregator<T> {
    pub fn new(adapter: ListingsAdapter<T>, tables: Arc<LookupTables>, top_n: usize) -> Self {
        Self {
            adapter,
            tables,
            top_n,
        }
    }

    /// The named neighborhood, or every known one when the intent names none.
    pub fn scope(&self, intent: &SearchIntent) -> Vec<String> {
        match &intent.location {
            Some(location) => vec![location.clone()],
            None => self.tables.neighborhood_keys().map(str::to_string).collect(),
        }
    }

    /// Searches each neighborhood in scope one after another. A failing
    /// neighborhood is recorded in the report and does not stop the others.
    pub fn run(&self, intent: SearchIntent) -> SearchReport {
        let neighborhoods = self.scope(&intent);
        match &intent.location {
            Some(location) => info!(neighborhood = %location, "searching specified neighborhood"),
            None => info!(
                count = neighborhoods.len(),
                "no neighborhood given, searching all family-friendly neighborhoods"
            ),
        }

        let filters = ListingFilters::from(&intent);
        let mut scopes = Vec::with_capacity(neighborhoods.len());
        let mut merged = Vec::new();

        for neighborhood in neighborhoods {
            let outcome = match self.adapter.fetch(&neighborhood, intent.purpose, &filters) {
                Ok(listings) if listings.is_empty() => ScopeOutcome::Empty,
                Ok(listings) => {
                    let count = listings.len();
                    merged.extend(
                        listings
                            .into_iter()
                            .map(|listing| RankedResult::new(neighborhood.clone(), listing)),
                    );
                    ScopeOutcome::Found(count)
                }
                Err(e) => {
                    warn!(neighborhood = %neighborhood, error = %e, "neighborhood search failed");
                    ScopeOutcome::Failed(e.to_string())
                }
            };

            info!(neighborhood = %neighborhood, outcome = ?outcome, "neighborhood searched");
            scopes.push(ScopeReport {
                neighborhood,
                outcome,
            });
        }

        let total_found = merged.len();
        let ranked = rank(merged, self.top_n);
        info!(total_found, kept = ranked.len(), "search complete");

        SearchReport {
            intent,
            scopes,
            total_found,
            ranked,
        }
    }
}

/// Ascending by price, listings without a usable price last. The sort is
/// stable, so ties and unpriced listings keep their arrival order.
pub fn rank(mut results: Vec<RankedResult>, top_n: usize) -> Vec<RankedResult> {
    results.sort_by(|a, b| {
        a.listing
            .ranking_price()
            .total_cmp(&b.listing.ranking_price())
    });
    results.truncate(top_n);
    results
}
