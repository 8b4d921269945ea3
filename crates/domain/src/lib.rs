//! # Wayfest Domain
//!
//! Business domain types and models for the Wayfest scheduling client.
//!
//! This crate contains:
//! - Domain data types (Identity, Event, Route, wire payloads)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Clock-time parsing and wraparound duration arithmetic
//!
//! ## Architecture
//! - No dependencies on other Wayfest crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod clock;
pub mod config;
pub mod errors;
pub mod messages;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export clock utilities
pub use clock::{duration_minutes, parse_clock, ClockTime};
