//! Listing source seam.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::Listing;

/// Anything that can produce the full listing collection.
///
/// # Example
///
/// ```ignore
/// use marsview::traits::ListingSource;
///
/// async fn count<S: ListingSource + ?Sized>(source: &S) -> usize {
///     source.get_listings().await.map(|l| l.len()).unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch every listing, in the order the source provides them.
    async fn get_listings(&self) -> Result<Vec<Listing>, FetchError>;
}
