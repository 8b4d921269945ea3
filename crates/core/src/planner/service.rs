//! Selection-to-request translation for route generation.

use std::sync::Arc;

use tracing::info;
use wayfest_domain::{messages, Result, Route, WayfestError};

use super::ports::PlannerGateway;

/// Translates the user's event selection into a route-generation request.
pub struct PlannerService {
    gateway: Arc<dyn PlannerGateway>,
}

impl PlannerService {
    pub fn new(gateway: Arc<dyn PlannerGateway>) -> Self {
        Self { gateway }
    }

    /// Request candidate routes for the selected event ids.
    ///
    /// An empty selection fails fast with a validation error and never
    /// reaches the network. Routes come back in server order; the client
    /// imposes no reordering or ranking.
    pub async fn generate(&self, selected_ids: &[i64]) -> Result<Vec<Route>> {
        if selected_ids.is_empty() {
            return Err(WayfestError::Validation(messages::EMPTY_SELECTION.to_string()));
        }

        let routes = self.gateway.generate_routes(selected_ids).await?;
        info!(selected = selected_ids.len(), routes = routes.len(), "routes generated");
        Ok(routes)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use wayfest_domain::Event;

    use super::*;

    #[derive(Default)]
    struct FakePlannerGateway {
        calls: AtomicUsize,
        routes: Vec<Route>,
    }

    #[async_trait]
    impl PlannerGateway for FakePlannerGateway {
        async fn generate_routes(&self, _selected_ids: &[i64]) -> Result<Vec<Route>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.routes.clone())
        }
    }

    fn route_of(ids: &[i64]) -> Route {
        Route {
            events: ids
                .iter()
                .map(|id| Event {
                    id: *id,
                    name: format!("Event {id}"),
                    start_time: "10:00".into(),
                    end_time: "11:00".into(),
                    location: "Stage".into(),
                    duration: 60,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn empty_selection_never_reaches_the_gateway() {
        let gateway = Arc::new(FakePlannerGateway::default());
        let service = PlannerService::new(gateway.clone());

        let err = service.generate(&[]).await.unwrap_err();
        assert_eq!(err.to_string(), messages::EMPTY_SELECTION);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn routes_come_back_in_server_order() {
        let gateway = Arc::new(FakePlannerGateway {
            routes: vec![route_of(&[2, 1]), route_of(&[3])],
            ..Default::default()
        });
        let service = PlannerService::new(gateway);

        let routes = service.generate(&[1, 2, 3]).await.unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 1]);
    }
}
