//! Route planner request client and its gateway port.

pub mod ports;
pub mod service;

pub use service::PlannerService;
