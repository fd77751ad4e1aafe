use crate::domain::{Listing, Purpose};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

// hit
//  ├── externalID
//  ├── title
//  ├── price
//  ├── rentFrequency
//  ├── area            (square meters)
//  ├── rooms / baths
//  ├── createdAt       (unix seconds)
//  ├── category[]      ─ name   (most specific last)
//  ├── location[]      ─ name   (country .. sub-community)
//  ├── coverPhoto      ─ url
//  └── geography       ─ lat, lng
//
// Every field is kept as a raw JSON value: the provider is not consistent
// about numbers vs. numeric strings, and a side field of the wrong shape must
// not cost the whole listing.

const DETAIL_URL_PREFIX: &str = "https://www.bayut.com/property/details-";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHit {
    #[serde(rename = "externalID")]
    pub external_id: Option<Value>,
    pub title: Option<Value>,
    pub price: Option<Value>,
    pub rent_frequency: Option<Value>,
    pub area: Option<Value>,
    pub rooms: Option<Value>,
    pub baths: Option<Value>,
    pub created_at: Option<Value>,
    pub category: Option<Value>,
    pub location: Option<Value>,
    pub cover_photo: Option<Value>,
    pub geography: Option<Value>,
}

impl RawHit {
    /// Flattens the raw hit into a canonical [`Listing`]. Missing, mistyped or
    /// unparseable fields fall back to their defaults.
    pub fn into_listing(self, purpose: Purpose) -> Listing {
        let category = last_name(self.category.as_ref())
            .unwrap_or("property")
            .to_string();

        let mut listing = Listing::new(category, purpose);

        listing.source_location_label = last_name(self.location.as_ref())
            .unwrap_or_default()
            .to_string();

        listing.price = self
            .price
            .as_ref()
            .and_then(lenient_f64)
            .filter(|p| *p >= 0.0);

        listing.area_sqm = self
            .area
            .as_ref()
            .and_then(lenient_f64)
            .filter(|a| *a >= 0.0)
            .unwrap_or(0.0);

        listing.rooms = self.rooms.as_ref().and_then(lenient_u32);
        listing.baths = self.baths.as_ref().and_then(lenient_u32);
        listing.rent_frequency = self.rent_frequency.as_ref().and_then(lenient_string);
        listing.title = self.title.as_ref().and_then(lenient_string);

        listing.external_id = self.external_id.as_ref().and_then(lenient_string);
        listing.detail_url = listing
            .external_id
            .as_ref()
            .map(|id| format!("{DETAIL_URL_PREFIX}{id}.html"));

        listing.image_url = self
            .cover_photo
            .as_ref()
            .and_then(|c| c.get("url"))
            .and_then(Value::as_str)
            .filter(|u| !u.is_empty())
            .map(str::to_string);

        if let Some(geo) = self.geography.as_ref().filter(|g| g.is_object()) {
            listing.latitude = geo.get("lat").and_then(lenient_f64);
            listing.longitude = geo.get("lng").and_then(lenient_f64);
        }

        listing.listed_at = self.created_at.as_ref().and_then(lenient_timestamp);

        listing
    }
}

/// Name of the most specific breadcrumb: the last element of an array of
/// `{ "name": ... }` objects.
fn last_name(crumbs: Option<&Value>) -> Option<&str> {
    crumbs?
        .as_array()?
        .last()?
        .get("name")?
        .as_str()
        .filter(|name| !name.is_empty())
}

/// Number or numeric string, finite only.
fn lenient_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn lenient_u32(value: &Value) -> Option<u32> {
    let n = lenient_f64(value)?;
    (n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64).then_some(n as u32)
}

fn lenient_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let secs = lenient_f64(value)?;
    DateTime::from_timestamp(secs.trunc() as i64, 0)
}
