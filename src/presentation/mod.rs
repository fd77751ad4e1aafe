mod enrichment;
mod lines;
mod summary;

pub use enrichment::{build_enrichment_payload, EnrichmentPayload, PayloadListing};
pub use lines::{format_listing, group_thousands, sqm_to_sqft, title_case, NOT_AVAILABLE};
pub use summary::{handoff_message, summary_instruction};
