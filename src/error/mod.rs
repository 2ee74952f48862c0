//! Error types.
//!
//! Only fetch errors exist at the library level. They never reach the
//! presentation layer: the loader turns them into `LoadStatus::Error`.

mod fetch;

pub use fetch::FetchError;
