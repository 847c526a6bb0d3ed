//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

/// Backend port used when the base URL is derived from the window location
const API_PORT: u16 = 3000;

/// Ошибки запросов к backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// Get the base URL for API requests
///
/// `STAFF_API_BASE` set at build time wins; otherwise the URL is built from
/// the current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs)
pub fn api_base() -> String {
    if let Some(base) = option_env!("STAFF_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    origin_url(&protocol, &hostname, API_PORT)
}

fn origin_url(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/staff/review");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// GET `path` and return the body as raw JSON
pub async fn get_json(path: &str) -> Result<Value, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    Ok(response.json::<Value>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000", "/staff/review"), "http://h:3000/staff/review");
        assert_eq!(join_url("http://h:3000/", "staff/review"), "http://h:3000/staff/review");
        assert_eq!(join_url("", "/staff/review"), "/staff/review");
    }

    #[test]
    fn test_origin_url() {
        assert_eq!(origin_url("https:", "example.com", 3000), "https://example.com:3000");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP error: 500");
        assert_eq!(
            ApiError::Shape("no data".into()).to_string(),
            "Unexpected response shape: no data"
        );
    }
}
