//! Port interface for catalog CRUD operations.

use async_trait::async_trait;
use wayfest_domain::{Event, EventInput, Result};

/// Catalog operations against the scheduling server.
///
/// `duration` is always the client-computed wraparound-aware value; the
/// service validates it before any of these methods are reached.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch the full event catalog in server order.
    async fn fetch_events(&self) -> Result<Vec<Event>>;

    /// Create an event (organizer only, enforced server-side).
    async fn create_event(&self, input: &EventInput, duration: i64) -> Result<Event>;

    /// Replace an event's fields (organizer only, enforced server-side).
    async fn update_event(&self, id: i64, input: &EventInput, duration: i64) -> Result<Event>;

    /// Delete an event (organizer only, enforced server-side).
    async fn delete_event(&self, id: i64) -> Result<()>;
}
