//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{listing, sample_listings_json};
//! ```

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use marsview::models::Listing;

/// A listing with every field populated.
#[allow(dead_code)]
pub fn listing(id: &str, kind: &str, price: f64) -> Listing {
    Listing {
        id: id.to_string(),
        img_src_url: format!("http://mars.jpl.nasa.gov/msl-raw-images/{}.jpg", id),
        kind: kind.to_string(),
        price,
    }
}

/// Listings that carry only an id, in the given order.
#[allow(dead_code)]
pub fn listings_with_ids(ids: &[&str]) -> Vec<Listing> {
    ids.iter().map(|id| Listing::with_id(*id)).collect()
}

/// API payload for two listings, ids "1" and "2".
#[allow(dead_code)]
pub fn sample_listings_json() -> serde_json::Value {
    serde_json::json!([
        {"id": "1", "img_src": "http://mars.jpl.nasa.gov/msl-raw-images/1.jpg", "type": "buy", "price": 450000},
        {"id": "2", "img_src": "http://mars.jpl.nasa.gov/msl-raw-images/2.jpg", "type": "rent", "price": 8000}
    ])
}
