// src/presentation/lines.rs

use crate::domain::{Listing, Purpose};

pub const SQFT_PER_SQM: f64 = 10.7639;
pub const NOT_AVAILABLE: &str = "not available";

/// One human-readable line per listing, e.g.
/// `- Apartments in Mirdif: AED 1,250,000, Size: 1,297.05 sq.ft., 2 bed, 2 bath`.
pub fn format_listing(listing: &Listing, neighborhood: &str) -> String {
    let location = if listing.source_location_label.is_empty() {
        title_case(neighborhood)
    } else {
        listing.source_location_label.clone()
    };

    let price = match listing.price.filter(|p| p.is_finite()) {
        Some(p) => {
            let mut s = format!("AED {}", group_thousands(p, 0));
            if listing.purpose == Purpose::Rent {
                if let Some(freq) = &listing.rent_frequency {
                    s.push('/');
                    s.push_str(freq);
                }
            }
            s
        }
        None => format!("price {NOT_AVAILABLE}"),
    };

    let size = match sqm_to_sqft(listing.area_sqm) {
        Some(sqft) => format!("{} sq.ft.", group_thousands(sqft, 2)),
        None => NOT_AVAILABLE.to_string(),
    };

    let mut line = format!("- {} in {location}: {price}, Size: {size}", listing.category);

    if let Some(rooms) = listing.rooms {
        if rooms == 0 {
            line.push_str(", studio");
        } else {
            line.push_str(&format!(", {rooms} bed"));
        }
    }
    if let Some(baths) = listing.baths {
        line.push_str(&format!(", {baths} bath"));
    }
    if let Some(url) = listing.detail_url.as_deref().filter(|u| !u.is_empty()) {
        line.push_str(&format!(" <{url}>"));
    }

    line
}

/// Square meters to square feet, rounded to two decimals. Zero, negative or
/// non-finite areas have no conversion.
pub fn sqm_to_sqft(area_sqm: f64) -> Option<f64> {
    if !area_sqm.is_finite() || area_sqm <= 0.0 {
        return None;
    }
    Some((area_sqm * SQFT_PER_SQM * 100.0).round() / 100.0)
}

/// `1234567.891` with 2 decimals -> `1,234,567.89`.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && formatted.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `dubai hills estate` -> `Dubai Hills Estate`.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
