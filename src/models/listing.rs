//! Listing model for the real-estate API.

use serde::{Deserialize, Serialize};

/// Listing type value marking a rental property.
pub const RENTAL_KIND: &str = "rent";

/// One property record returned by the listing API.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Listing {
    /// Listing identifier (opaque string, e.g. "424906")
    pub id: String,

    /// Absolute URL of the listing photo
    #[serde(rename = "img_src", default)]
    pub img_src_url: String,

    /// Offer type, "rent" or "buy"
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Asking price (monthly rent for rentals)
    #[serde(default)]
    pub price: f64,
}

impl Listing {
    /// Create a listing with only an id set.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            img_src_url: String::new(),
            kind: String::new(),
            price: 0.0,
        }
    }

    /// Whether this listing is offered for rent.
    pub fn is_rental(&self) -> bool {
        self.kind == RENTAL_KIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserialization() {
        let json = r#"{
            "id": "424906",
            "img_src": "http://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000ML0044631300305227E03_DXXX.jpg",
            "type": "rent",
            "price": 450000
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, "424906");
        assert!(listing.img_src_url.ends_with("E03_DXXX.jpg"));
        assert_eq!(listing.kind, "rent");
        assert_eq!(listing.price, 450000.0);
        assert!(listing.is_rental());
    }

    #[test]
    fn test_listing_missing_optional_fields() {
        let listing: Listing = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert_eq!(listing, Listing::with_id("1"));
        assert!(!listing.is_rental());
    }

    #[test]
    fn test_listing_requires_id() {
        let result = serde_json::from_str::<Listing>(r#"{"type": "buy", "price": 10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_buy_listing_is_not_rental() {
        let listing: Listing =
            serde_json::from_str(r#"{"id": "2", "type": "buy", "price": 8000000.5}"#).unwrap();
        assert!(!listing.is_rental());
        assert_eq!(listing.price, 8000000.5);
    }

    #[test]
    fn test_listing_array_preserves_order() {
        let json = r#"[{"id": "3"}, {"id": "1"}, {"id": "2"}]"#;
        let listings: Vec<Listing> = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
