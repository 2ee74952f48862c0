//! Listing API client.
//!
//! [`MarsApiClient`] is the production [`ListingSource`]: one GET against
//! `{base_url}/realestate`, decoded as a JSON array of [`Listing`].

use async_trait::async_trait;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::Listing;
use crate::traits::{Headers, HttpClient, ListingSource};

/// Client for the real-estate listing API.
pub struct MarsApiClient<C: HttpClient> {
    http: C,
    config: ApiConfig,
}

impl<C: HttpClient> MarsApiClient<C> {
    pub fn new(http: C, config: ApiConfig) -> Self {
        Self { http, config }
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), self.config.user_agent.clone());
        headers
    }
}

#[async_trait]
impl<C: HttpClient> ListingSource for MarsApiClient<C> {
    async fn get_listings(&self) -> Result<Vec<Listing>, FetchError> {
        let url = self.config.listings_url();
        debug!(%url, "Requesting listings");

        let response = self.http.get(&url, &self.headers()).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        let listings: Vec<Listing> = response.json()?;
        debug!(count = listings.len(), "Decoded listings");
        Ok(listings)
    }
}
