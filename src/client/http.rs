//! Reqwest-based JSON client for the Fortress mitigation engine.
//!
//! The console's dashboard layer reads metrics, blocklists, threat
//! intelligence, and certificate data through these helpers. Any
//! non-success response surfaces as [`FortressError::UpstreamStatus`]
//! carrying the status and its text; the calling UI layer decides what
//! to do with it. Nothing here is retried.

use crate::FortressError;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// JSON client bound to the engine's base URL.
pub struct EngineClient {
    client: Client,
    base_url: String,
}

impl EngineClient {
    /// Create a client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, FortressError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                FortressError::EngineTransport(format!("Failed to create client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// GET a JSON resource.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FortressError> {
        self.execute(self.client.get(self.url(path)))
    }

    /// POST a JSON body and parse the JSON response.
    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, FortressError> {
        self.execute(self.client.post(self.url(path)).json(body))
    }

    /// PUT a JSON body and parse the JSON response.
    pub fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, FortressError> {
        self.execute(self.client.put(self.url(path)).json(body))
    }

    /// DELETE a resource and parse the JSON response.
    pub fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, FortressError> {
        self.execute(self.client.delete(self.url(path)))
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, FortressError> {
        let response = request
            .send()
            .map_err(|e| FortressError::EngineTransport(format!("Request failed: {}", e)))?;

        parse_json(check_status(response)?)
    }
}

/// Fail on any non-2xx response, carrying the status and its text.
fn check_status(response: Response) -> Result<Response, FortressError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FortressError::UpstreamStatus {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
        });
    }
    Ok(response)
}

fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, FortressError> {
    response
        .json()
        .map_err(|e| FortressError::ProtocolError(format!("Invalid JSON from engine: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EngineClient::new("https://engine.internal:8443");
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_accessor() {
        let client = EngineClient::new("https://engine.internal:8443").unwrap();
        assert_eq!(client.base_url(), "https://engine.internal:8443");
    }

    #[test]
    fn test_url_join() {
        let client = EngineClient::new("https://engine.internal:8443").unwrap();
        assert_eq!(
            client.url("/v1/blocklist"),
            "https://engine.internal:8443/v1/blocklist"
        );
    }
}
