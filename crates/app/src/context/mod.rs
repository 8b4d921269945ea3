//! Application context - dependency injection container

use std::sync::Arc;

use wayfest_core::{CatalogService, InFlightGuard, PlannerService, Presenter, SessionService};
use wayfest_domain::{Config, Result};
use wayfest_infra::api::{ApiClient, ApiClientConfig, ScheduleGateway};

/// Application context - holds all services and dependencies.
///
/// One gateway instance serves every port; the services and the presenter
/// are shared behind `Arc` so commands can run from any handler.
pub struct AppContext {
    pub config: Config,
    pub session: Arc<SessionService>,
    pub catalog: Arc<CatalogService>,
    pub planner: Arc<PlannerService>,
    pub presenter: Arc<dyn Presenter>,
    pub guard: InFlightGuard,
}

impl AppContext {
    /// Create a new application context against the configured server.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the API client cannot be constructed
    /// from the supplied configuration.
    pub fn new(config: Config, presenter: Arc<dyn Presenter>) -> Result<Self> {
        let client = Arc::new(ApiClient::new(ApiClientConfig::from(&config.api))?);
        let gateway = Arc::new(ScheduleGateway::new(client));

        let session = Arc::new(SessionService::new(gateway.clone()));
        let catalog = Arc::new(CatalogService::new(gateway.clone()));
        let planner = Arc::new(PlannerService::new(gateway));

        Ok(Self { config, session, catalog, planner, presenter, guard: InFlightGuard::new() })
    }
}
