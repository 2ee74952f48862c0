//! Trait seams between the loader and the outside world.
//!
//! - [`ListingSource`] - where listings come from
//! - [`HttpClient`] - the transport used by the production source

pub mod http;
pub mod listing_source;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use listing_source::ListingSource;
