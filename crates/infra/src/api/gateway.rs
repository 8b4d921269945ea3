//! Gateway implementing the core ports against the scheduling server.
//!
//! One struct serves all three ports; the wire types here mirror the
//! server's JSON payloads exactly.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wayfest_core::{AuthGateway, CatalogGateway, PlannerGateway, SessionProbe};
use wayfest_domain::{Event, EventInput, Identity, Result, Role, Route};

use super::client::ApiClient;

/// Request/response types for the session endpoints
#[derive(Debug, Clone, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
    user: String,
    role: Role,
}

#[derive(Debug, Clone, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    role: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageResponse {
    message: String,
}

/// Body for event create/update; always carries the full field set with the
/// client-computed duration.
#[derive(Debug, Clone, Serialize)]
struct EventPayload<'a> {
    name: &'a str,
    start_time: &'a str,
    end_time: &'a str,
    location: &'a str,
    duration: i64,
}

impl<'a> EventPayload<'a> {
    fn new(input: &'a EventInput, duration: i64) -> Self {
        Self {
            name: &input.name,
            start_time: &input.start_time,
            end_time: &input.end_time,
            location: &input.location,
            duration,
        }
    }
}

/// HTTP implementation of the core's gateway ports.
pub struct ScheduleGateway {
    client: Arc<ApiClient>,
}

impl ScheduleGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for ScheduleGateway {
    /// Probe `/profile` once.
    ///
    /// Any non-2xx answer counts as "no active session"; only transport
    /// failures propagate as errors, so the caller can log the two apart.
    async fn resolve_session(&self) -> Result<SessionProbe> {
        let response = self.client.send(Method::GET, "/profile", None).await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "profile probe returned no session");
            return Ok(SessionProbe::NoSession);
        }

        let identity: Identity = response
            .json()
            .await
            .map_err(|err| wayfest_domain::WayfestError::Decode(err.to_string()))?;
        Ok(SessionProbe::Active(identity))
    }

    async fn login(&self, username: &str, password: &str) -> Result<Identity> {
        let response: LoginResponse =
            self.client.post("/login", &LoginRequest { username, password }).await?;

        Ok(Identity { username: response.user, role: response.role })
    }

    async fn register(&self, username: &str, password: &str, role: Role) -> Result<String> {
        let request = RegisterRequest { username, password, role: role.as_wire() };
        let response: MessageResponse = self.client.post("/register", &request).await?;

        Ok(response.message)
    }

    async fn logout(&self) -> Result<()> {
        let _: MessageResponse = self.client.post_empty("/logout").await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for ScheduleGateway {
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        self.client.get("/events").await
    }

    async fn create_event(&self, input: &EventInput, duration: i64) -> Result<Event> {
        self.client.post("/events", &EventPayload::new(input, duration)).await
    }

    async fn update_event(&self, id: i64, input: &EventInput, duration: i64) -> Result<Event> {
        self.client.put(&format!("/events/{id}"), &EventPayload::new(input, duration)).await
    }

    async fn delete_event(&self, id: i64) -> Result<()> {
        let _: MessageResponse = self.client.delete(&format!("/events/{id}")).await?;
        Ok(())
    }
}

#[async_trait]
impl PlannerGateway for ScheduleGateway {
    async fn generate_routes(&self, selected_ids: &[i64]) -> Result<Vec<Route>> {
        self.client.post("/generate-routes", &selected_ids).await
    }
}
