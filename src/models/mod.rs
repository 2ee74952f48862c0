//! Data models.

mod listing;

pub use listing::{Listing, RENTAL_KIND};
