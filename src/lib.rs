//! Free-text real-estate search over a listings provider.
//!
//! A query such as "apartments for rent in Mirdif under 2M AED" is turned
//! into a [`SearchIntent`](domain::SearchIntent) by the
//! [`ParameterExtractor`](extractor::ParameterExtractor), searched per
//! neighborhood by the [`Aggregator`](aggregator::Aggregator), ranked by
//! price and rendered with neighborhood school data by [`presentation`].

pub mod aggregator;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extractor;
pub mod logger;
pub mod lookup;
pub mod presentation;
pub mod provider;
