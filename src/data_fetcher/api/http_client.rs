//! HTTP client creation and the transport seam used by the fetcher

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use std::time::Duration;
use tracing::error;

use crate::error::FrcError;

/// Status, headers and body of one completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Issues a single GET. Implementations never retry.
pub trait Transport {
    fn issue_get(&self, url: &str, headers: HeaderMap) -> Result<TransportResponse, FrcError>;
}

/// Creates a blocking HTTP client with connection pooling and a request timeout.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// [`Transport`] backed by `reqwest::blocking`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout_seconds: u64) -> Result<Self, FrcError> {
        Ok(HttpTransport {
            client: create_http_client_with_timeout(timeout_seconds)?,
        })
    }

    pub fn from_client(client: Client) -> Self {
        HttpTransport { client }
    }
}

impl Transport for HttpTransport {
    fn issue_get(&self, url: &str, headers: HeaderMap) -> Result<TransportResponse, FrcError> {
        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().map_err(|e| {
            error!("Failed to read response text from URL {}: {}", url, e);
            FrcError::ApiFetch(e)
        })?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

/// Classifies a reqwest failure the same way for every request.
fn transport_error(url: &str, e: reqwest::Error) -> FrcError {
    error!("Request failed for URL {}: {}", url, e);
    if e.is_timeout() {
        FrcError::network_timeout(url)
    } else if e.is_connect() {
        FrcError::network_connection(url, e.to_string())
    } else {
        FrcError::ApiFetch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_configured_timeout() {
        assert!(create_http_client_with_timeout(5).is_ok());
        assert!(HttpTransport::new(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS).is_ok());
    }

    #[test]
    fn test_unreachable_host_is_a_transport_error() {
        let transport = HttpTransport::new(2).unwrap();
        // Port 9 on loopback (discard) is closed in test environments.
        let result = transport.issue_get("http://127.0.0.1:9/v2.0", HeaderMap::new());
        let err = result.unwrap_err();
        assert!(err.is_transport(), "unexpected error: {err:?}");
    }
}
