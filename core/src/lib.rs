//! Client-side data layer for the poker hand analysis dashboard.
//!
//! # Overview
//! Eight read-only analysis resources are fetched over HTTP and kept in an
//! in-memory store for display.
//!
//! # Design
//! - `AnalysisClient` is stateless: it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - A `Transport` executes the round-trip; `ReqwestTransport` is the real
//!   one, tests plug in their own.
//! - `AnalysisApi` exposes one async GET per resource.
//! - `AnalysisStore` holds an `AnalysisState` and offers one action
//!   (fetch-and-commit), one mutation and one getter per resource.
//! - Payloads are opaque `serde_json::Value`s.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resource;
pub mod state;
pub mod store;
pub mod transport;

#[cfg(test)]
mod testing;

pub use api::AnalysisApi;
pub use client::AnalysisClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, UnknownResource};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use resource::Resource;
pub use state::{AnalysisState, Mutation};
pub use store::{AnalysisStore, FetchReport};
pub use transport::ReqwestTransport;
