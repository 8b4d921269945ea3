//! Port interface for route generation.

use async_trait::async_trait;
use wayfest_domain::{Result, Route};

/// Route-generation request against the scheduling server.
///
/// The generation algorithm itself is server-side and opaque to the client.
#[async_trait]
pub trait PlannerGateway: Send + Sync {
    /// Post a selection of event ids; the response is the list of candidate
    /// routes in the order the server proposed them.
    async fn generate_routes(&self, selected_ids: &[i64]) -> Result<Vec<Route>>;
}
