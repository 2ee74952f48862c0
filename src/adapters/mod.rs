//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - production HTTP transport
//! - [`mock`] - test doubles for both seams

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockListingSource};
pub use reqwest_http::ReqwestHttpClient;
