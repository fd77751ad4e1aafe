//! Heuristic extraction of a [`SearchIntent`] from free text.
//!
//! Nothing here fails: a signal that cannot be found or parsed leaves the
//! corresponding field unset.

use crate::domain::{Category, Purpose, SearchIntent};
use crate::lookup::LookupTables;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::debug;

// Tried first: "under 2M AED", "under 2.5 million AED".
static RE_BUDGET_MILLIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)under\s+([\d.]+)\s*m(?:illion)?\s*aed").unwrap());
// "under 2,500,000 AED"
static RE_BUDGET_PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)under\s+([\d,]+)\s*aed").unwrap());

static RE_ROOMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s*-?\s*(?:bedrooms?|beds?|br|bhk)\b").unwrap()
});
static RE_STUDIO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bstudio\b").unwrap());
static RE_BATHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*-?\s*(?:bathrooms?|baths?)\b").unwrap());

pub struct ParameterExtractor {
    tables: Arc<LookupTables>,
}

impl ParameterExtractor {
    pub fn new(tables: Arc<LookupTables>) -> Self {
        Self { tables }
    }

    pub fn extract(&self, query: &str) -> SearchIntent {
        let intent = SearchIntent {
            location: self.extract_neighborhood(query),
            purpose: extract_purpose(query),
            budget: extract_budget(query),
            category: self.extract_category(query),
            rooms: extract_rooms(query),
            baths: extract_baths(query),
        };

        debug!(
            location = ?intent.location,
            purpose = %intent.purpose,
            budget = ?intent.budget,
            category = ?intent.category,
            rooms = ?intent.rooms,
            baths = ?intent.baths,
            "extracted search intent"
        );

        intent
    }

    /// First known neighborhood, in table order, whose name appears in the query.
    pub fn extract_neighborhood(&self, query: &str) -> Option<String> {
        let q = query.to_lowercase();
        self.tables
            .neighborhood_keys()
            .find(|key| q.contains(key))
            .map(str::to_string)
    }

    /// First category rule whose keyword appears in the query.
    pub fn extract_category(&self, query: &str) -> Option<Category> {
        let q = query.to_lowercase();
        self.tables
            .category_rules()
            .iter()
            .find(|rule| q.contains(rule.keyword.as_str()))
            .map(|rule| rule.category)
    }
}

/// "rent" anywhere in the query selects renting. This also fires on words
/// like "current" or "parent".
pub fn extract_purpose(query: &str) -> Purpose {
    if query.to_lowercase().contains("rent") {
        Purpose::Rent
    } else {
        Purpose::Sale
    }
}

/// Budget in AED from "under X M AED" or "under N,NNN AED".
/// The million form takes precedence; a number that fails to parse in one
/// form falls through to the next.
pub fn extract_budget(query: &str) -> Option<f64> {
    let millions = RE_BUDGET_MILLIONS
        .captures(query)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .map(|m| (m * 1_000_000.0).round());

    millions
        .or_else(|| {
            RE_BUDGET_PLAIN
                .captures(query)
                .and_then(|caps| caps[1].replace(',', "").parse::<f64>().ok())
        })
        .filter(|b| b.is_finite() && *b >= 0.0)
}

/// Minimum bedrooms: "3 bed", "2-bedroom", "4br", or 0 for "studio".
pub fn extract_rooms(query: &str) -> Option<u32> {
    RE_ROOMS
        .captures(query)
        .and_then(|caps| caps[1].parse().ok())
        .or_else(|| RE_STUDIO.is_match(query).then_some(0))
}

pub fn extract_baths(query: &str) -> Option<u32> {
    RE_BATHS
        .captures(query)
        .and_then(|caps| caps[1].parse().ok())
}
