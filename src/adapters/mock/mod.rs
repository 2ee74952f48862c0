//! Test doubles for the trait seams.
//!
//! - [`MockHttpClient`] - canned HTTP responses keyed by URL
//! - [`MockListingSource`] - fixed outcome, optionally held in flight

pub mod http;
pub mod listing_source;

pub use http::{MockHttpClient, MockResponse};
pub use listing_source::{MockListingSource, MockOutcome};
