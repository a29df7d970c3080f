//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are described as plain data. `AnalysisClient`
//! builds `HttpRequest` values and parses `HttpResponse` values; a
//! `Transport` implementation owns the actual network round-trip. Tests swap
//! in an in-memory transport without touching the client.

use async_trait::async_trait;

use crate::error::ApiError;

/// HTTP method for a request. The analysis API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `AnalysisClient::build_request`. `url` is absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one `HttpRequest` against the network (or a stand-in).
///
/// Implementations report only transport-level failures as `Err`; any
/// response that arrived, whatever its status, is returned as `Ok` so the
/// client can interpret it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
