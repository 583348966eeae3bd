//! Common utilities for NetBox API client
//!
//! Provides shared functionality used across all API modules.

pub mod query;

use crate::error::NetBoxError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Paginated response wrapper from NetBox API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Build the headers sent with every NetBox request
///
/// The token is marked sensitive so it never shows up in debug output.
pub fn default_headers(token: &str) -> Result<HeaderMap, NetBoxError> {
    let mut auth = HeaderValue::from_str(&format!("Token {}", token))
        .map_err(|e| NetBoxError::InvalidRequest(format!("API token is not a valid header value: {}", e)))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// HTTP client wrapper bound to one NetBox instance
///
/// The wrapped `reqwest::Client` is expected to carry the authentication
/// headers already (see [`default_headers`]), so one connection pool and one
/// header set is reused for every call in a run.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Issue a GET and return only the status code
    ///
    /// Transport errors (connection refused, DNS, timeouts) are returned as
    /// `NetBoxError::Http` so callers can tell "not listening yet" apart from
    /// "listening but unhappy".
    pub async fn get_status(&self, path: &str) -> Result<StatusCode, NetBoxError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Ok(response.status())
    }

    /// Make a GET request
    pub async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, NetBoxError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(NetBoxError::UnexpectedStatus {
                operation: format!("GET {}", path),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            NetBoxError::Api(format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                body.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Make a POST request that must answer `201 Created`
    ///
    /// Any other status, including other 2xx codes, is an error carrying the
    /// response body.
    pub async fn post_created<B: Serialize + ?Sized, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, NetBoxError> {
        let url = self.build_url(path);
        let payload = serde_json::to_value(body)?;
        debug!("POST {} with body: {}", url, payload);

        let response = self.client.post(&url).json(&payload).send().await?;

        let status = response.status();
        let body_text = response.text().await?;
        if status != StatusCode::CREATED {
            return Err(NetBoxError::UnexpectedStatus {
                operation: format!("POST {}", path),
                status: status.as_u16(),
                body: body_text,
            });
        }

        Ok(serde_json::from_str(&body_text)?)
    }

    /// Build query string from filters
    pub fn build_query_string(&self, filters: &[(&str, &str)]) -> String {
        filters
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
