use crate::fatal;
use std::time::Duration;

/// A simple wrapper around the blocking `reqwest::Client` used to reach the
/// flight computer command endpoint.
///
/// It sets a fixed timeout and keeps the base URL every endpoint path is
/// appended to.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::blocking::Client` used to perform HTTP requests.
    client: reqwest::blocking::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL and request timeout.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:8085"`).
    /// * `timeout` – Upper bound for a single request including the response body.
    pub(crate) fn new(base_url: &str, timeout: Duration) -> HTTPClient {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| fatal!("Could not build HTTP client: {e}"));
        HTTPClient { client, base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Returns a reference to the internal `reqwest::blocking::Client`.
    pub(super) fn client(&self) -> &reqwest::blocking::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }
}
