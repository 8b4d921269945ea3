//! Command layer - the explicit interface UI events dispatch through.
//!
//! Each command runs one user-initiated action end to end: claim the
//! in-flight slot, call the owning service, route the outcome to the
//! presenter, and log a structured completion record. Rendering technology
//! never reaches past this module.

pub mod catalog;
pub mod planner;
pub mod session;

use wayfest_domain::{messages, WayfestError};

/// The text shown to the user for a failed action.
///
/// Validation and rejection messages are surfaced verbatim; transport and
/// decode failures collapse into one generic network message.
fn user_message(err: &WayfestError) -> String {
    match err {
        WayfestError::Validation(message) | WayfestError::Rejected(message) => message.clone(),
        WayfestError::Network(_) | WayfestError::Decode(_) => messages::NETWORK_ERROR.to_string(),
        other => other.to_string(),
    }
}
