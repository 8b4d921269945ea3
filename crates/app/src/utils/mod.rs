//! Application-layer utilities.

pub mod logging;
