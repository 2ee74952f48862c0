//! Mock configurations for integration tests.

#[allow(unused_imports)]
pub use marsview::adapters::mock::{MockHttpClient, MockListingSource, MockResponse};
#[allow(unused_imports)]
pub use marsview::traits::{HttpError, Response};

/// Builder for a [`MockHttpClient`] serving the listing endpoint.
#[allow(dead_code)]
pub struct MockHttpConfig {
    client: MockHttpClient,
}

#[allow(dead_code)]
impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Serve `json` with `status` at `url`.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, json.to_string())),
        );
        self
    }

    /// Fail requests to `url` at the transport level.
    pub fn with_transport_error(self, url: &str, err: HttpError) -> Self {
        self.client.set_response(url, MockResponse::Error(err));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
