// src/lookup/builtin.rs
//
// Default lookup data. Location and category identifiers are the listings
// provider's external IDs.

use crate::domain::Category;

/// Catch-all identifier for the whole emirate.
pub const REGIONAL_LOCATION_ID: &str = "5002";

/// (neighborhood key, location id, notable schools), in detection order.
/// "palm jumeirah" precedes "jumeirah" so the longer name is matched first.
pub const NEIGHBORHOODS: &[(&str, &str, &[&str])] = &[
    (
        "arabian ranches",
        "5009",
        &[
            "JESS (Jumeirah English Speaking School)",
            "Nord Anglia International School",
            "Ranches Primary School",
            "Ranches Nursery",
        ],
    ),
    (
        "dubai hills estate",
        "11934",
        &[
            "GEMS World Academy",
            "Safa Community School",
            "Kings' School Al Barsha",
            "GEMS Wellington Academy",
            "GEMS International School",
            "Brighton College Dubai",
            "Dubai Heights Academy",
            "GEMS New Millennium School",
        ],
    ),
    (
        "mirdif",
        "5524",
        &[
            "GEMS Royal Dubai School",
            "Dar Al Marefa",
            "Uptown International School",
        ],
    ),
    (
        "palm jumeirah",
        "5460",
        &[
            "Dubai American Academy",
            "Swiss International Scientific School",
        ],
    ),
    (
        "jumeirah",
        "5424",
        &[
            "Dubai International Academy",
            "Jumeirah College",
            "GEMS Jumeirah Primary School",
        ],
    ),
    ("al furjan", "6897", &["Arbor School"]),
    (
        "emirates hills",
        "5480",
        &[
            "Dubai British School",
            "Emirates International School",
            "GEMS Wellington Academy",
        ],
    ),
];

/// Locations the provider knows that carry no school data.
pub const LOCATION_ALIASES: &[(&str, &str)] = &[
    ("dubai", REGIONAL_LOCATION_ID),
    ("downtown dubai", "6901"),
    ("jumeirah golf estates", "5441"),
    ("damac hills", "8143"),
];

/// Keyword scan order for category detection; first hit wins.
pub const CATEGORY_RULES: &[(&str, Category)] = &[
    ("villa", Category::Villa),
    ("apartment", Category::Apartment),
    ("townhouse", Category::Townhouse),
    ("industrial land", Category::IndustrialLand),
    ("mixed use land", Category::MixedUseLand),
    ("land", Category::Land),
    ("floor", Category::Floor),
    ("building", Category::Building),
    ("penthouse", Category::Penthouse),
    ("office", Category::Office),
    ("warehouse", Category::Warehouse),
    ("shop", Category::Shop),
    ("labour camp", Category::LabourCamp),
    ("bulk unit", Category::BulkUnit),
    ("factory", Category::Factory),
    ("showroom", Category::Showroom),
    ("commercial", Category::OtherCommercial),
];

pub const CATEGORY_IDS: &[(Category, &str)] = &[
    (Category::Villa, "3"),
    (Category::Apartment, "4"),
    (Category::Townhouse, "16"),
    (Category::IndustrialLand, "22"),
    (Category::MixedUseLand, "23"),
    (Category::Land, "14"),
    (Category::Floor, "12"),
    (Category::Building, "17"),
    (Category::Penthouse, "18"),
    (Category::Office, "5"),
    (Category::Warehouse, "7"),
    (Category::Shop, "6"),
    (Category::LabourCamp, "9"),
    (Category::BulkUnit, "20"),
    (Category::Factory, "8"),
    (Category::Showroom, "24"),
    (Category::OtherCommercial, "11"),
];

/// Villa communities retried in order when a region-wide villa search is empty.
pub const VILLA_FALLBACK: &[&str] = &[
    "arabian ranches",
    "dubai hills estate",
    "emirates hills",
    "jumeirah golf estates",
    "damac hills",
    "al furjan",
];
