//! Overview screen state: the listing loader and its load status.

mod loader;
mod status;

pub use loader::ListingLoader;
pub use status::LoadStatus;
