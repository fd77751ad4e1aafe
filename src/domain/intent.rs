// src/domain/intent.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the caller is looking to rent or to buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Rent,
    #[default]
    Sale,
}

impl Purpose {
    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Rent => "rent",
            Purpose::Sale => "sale",
        }
    }

    /// Value of the provider's `purpose` parameter, e.g. `for-rent`.
    pub fn provider_tag(self) -> String {
        format!("for-{}", self.as_str())
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property-type tag recognised in free text and mapped to a provider category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Villa,
    Apartment,
    Townhouse,
    IndustrialLand,
    MixedUseLand,
    Land,
    Floor,
    Building,
    Penthouse,
    Office,
    Warehouse,
    Shop,
    LabourCamp,
    BulkUnit,
    Factory,
    Showroom,
    OtherCommercial,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Villa => "villa",
            Category::Apartment => "apartment",
            Category::Townhouse => "townhouse",
            Category::IndustrialLand => "industrial-land",
            Category::MixedUseLand => "mixed-use-land",
            Category::Land => "land",
            Category::Floor => "floor",
            Category::Building => "building",
            Category::Penthouse => "penthouse",
            Category::Office => "office",
            Category::Warehouse => "warehouse",
            Category::Shop => "shop",
            Category::LabourCamp => "labour-camp",
            Category::BulkUnit => "bulk-unit",
            Category::Factory => "factory",
            Category::Showroom => "showroom",
            Category::OtherCommercial => "other-commercial",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured search parameters inferred from one free-text query.
///
/// Unset fields mean "no constraint": no `location` searches every known
/// neighborhood, no `category` leaves the provider search unscoped by type.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchIntent {
    pub location: Option<String>,
    pub purpose: Purpose,
    /// Maximum price in AED. Always finite and non-negative when set.
    pub budget: Option<f64>,
    pub category: Option<Category>,
    /// Minimum bedrooms; `Some(0)` is a studio.
    pub rooms: Option<u32>,
    pub baths: Option<u32>,
}

impl SearchIntent {
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
