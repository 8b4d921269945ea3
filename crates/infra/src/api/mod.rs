//! Scheduling API client for Wayfest.
//!
//! This module provides the HTTP-based client for the event-scheduling
//! server: session endpoints, catalog CRUD, and route generation.
//!
//! # Architecture
//!
//! - Uses the transport-layer [`crate::http::HttpClient`] (no direct reqwest)
//! - Cookie-based sessions, carried automatically by the transport
//! - [`ScheduleGateway`] implements the `wayfest-core` port traits
//! - No automatic retries; every failure is terminal for its user action

pub mod client;
pub mod gateway;

pub use client::{ApiClient, ApiClientConfig};
pub use gateway::ScheduleGateway;
