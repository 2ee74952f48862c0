//! marsview - real-estate listing overview state
//!
//! The core type is [`overview::ListingLoader`], which fetches listings from
//! a [`traits::ListingSource`] and exposes load status, the listing
//! collection, and the selected listing as observable fields.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod observable;
pub mod overview;
pub mod presenter;
pub mod traits;
