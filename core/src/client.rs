//! Stateless HTTP request builder and response parser for the analysis API.
//!
//! # Design
//! `AnalysisClient` holds only a `base_url` and carries no mutable state
//! between calls. Every resource goes through the same `build_request` /
//! `parse_response` pair; the caller (or a `Transport`) executes the actual
//! HTTP round-trip in between.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::resource::Resource;

/// Synchronous, stateless client for the analysis API.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    /// A bare GET for the resource: no query, no body.
    pub fn build_request(&self, resource: Resource) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url_for(resource),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Decode a response body verbatim. No shape checks are applied; a 2xx
    /// body that is not JSON (including an empty one) comes back as a string.
    pub fn parse_response(&self, resource: Resource, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(resource, &response)?;
        Ok(serde_json::from_str(&response.body).unwrap_or(Value::String(response.body)))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(resource: Resource, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound { resource });
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
