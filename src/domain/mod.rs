pub mod intent;
pub mod listing;

pub use intent::{Category, Purpose, SearchIntent};
pub use listing::{Listing, RankedResult};
