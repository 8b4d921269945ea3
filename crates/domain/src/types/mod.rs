//! Domain data types shared across the client.

pub mod event;
pub mod identity;
pub mod route;

pub use event::{Event, EventInput};
pub use identity::{Identity, Role};
pub use route::Route;
