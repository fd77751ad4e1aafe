mod adapter;
mod client;
mod models;
mod provider_error;

pub use adapter::{normalize_response, ListingFilters, ListingsAdapter};
pub use client::{BayutClient, ListingsTransport, ProviderQuery};
pub use provider_error::ProviderError;
