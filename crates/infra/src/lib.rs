//! # Wayfest Infra
//!
//! Infrastructure adapters for the Wayfest client.
//!
//! This crate contains:
//! - The reqwest-based HTTP client (cookie-carrying, timeout-bounded)
//! - The API client and gateway implementing the core ports
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Depends on `wayfest-domain` and `wayfest-core`
//! - Everything here is replaceable behind the core's port traits

pub mod api;
pub mod config;
pub mod http;

pub use api::{ApiClient, ApiClientConfig, ScheduleGateway};
pub use http::HttpClient;
