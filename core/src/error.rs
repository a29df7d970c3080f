//! Error types for the analysis API client.
//!
//! # Design
//! Every failure of a fetch is a single "request failed" outcome for the
//! caller; the variants only record the cause. `NotFound` is split out
//! because a missing resource is the one status callers tend to branch on.
//! All other non-2xx responses land in `Status` with the raw code and body.

use thiserror::Error;

use crate::resource::Resource;

/// Errors returned by the client, the transports and the store's actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response arrived: connection refused, DNS failure, timeout.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server returned 404 for the resource.
    #[error("resource not found: {resource}")]
    NotFound { resource: Resource },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// A name that matches none of the eight resources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource: {0}")]
pub struct UnknownResource(pub String);
