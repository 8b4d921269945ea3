//! Shared context for command integration tests.

use std::sync::Arc;

use parking_lot::Mutex;
use wayfest_app::AppContext;
use wayfest_core::Presenter;
use wayfest_domain::{ApiConfig, Config, Event, Identity, LogConfig, Route};
use wiremock::MockServer;

/// One presenter call, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    AuthPanel,
    UserPanel(String),
    /// Rendered event ids and whether mutation affordances were exposed.
    Events { ids: Vec<i64>, organizer: bool },
    /// Event count of each rendered route, in render order.
    Routes(Vec<usize>),
    Notice(String),
    Alert(String),
}

/// Presenter that records every call for assertions.
#[derive(Default)]
pub struct RecordingPresenter {
    shown: Mutex<Vec<Shown>>,
}

impl RecordingPresenter {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.shown
            .lock()
            .iter()
            .filter_map(|entry| match entry {
                Shown::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent catalog rendering, if any.
    pub fn last_events(&self) -> Option<(Vec<i64>, bool)> {
        self.shown.lock().iter().rev().find_map(|entry| match entry {
            Shown::Events { ids, organizer } => Some((ids.clone(), *organizer)),
            _ => None,
        })
    }

    fn push(&self, entry: Shown) {
        self.shown.lock().push(entry);
    }
}

impl Presenter for RecordingPresenter {
    fn show_auth_panel(&self) {
        self.push(Shown::AuthPanel);
    }

    fn show_user_panel(&self, identity: &Identity) {
        self.push(Shown::UserPanel(identity.username.clone()));
    }

    fn render_events(&self, events: &[Event], organizer: bool) {
        let ids = events.iter().map(|event| event.id).collect();
        self.push(Shown::Events { ids, organizer });
    }

    fn render_routes(&self, routes: &[Route]) {
        self.push(Shown::Routes(routes.iter().map(Route::len).collect()));
    }

    fn notify(&self, message: &str) {
        self.push(Shown::Notice(message.to_string()));
    }

    fn alert(&self, message: &str) {
        self.push(Shown::Alert(message.to_string()));
    }
}

/// Build an application context pointed at the given mock server.
pub fn test_context(server: &MockServer) -> (Arc<RecordingPresenter>, AppContext) {
    test_context_for(server.uri())
}

/// Build an application context pointed at an arbitrary base URL.
pub fn test_context_for(base_url: String) -> (Arc<RecordingPresenter>, AppContext) {
    let presenter = Arc::new(RecordingPresenter::default());
    let config = Config {
        api: ApiConfig { base_url, timeout_secs: 5 },
        log: LogConfig::default(),
    };
    let ctx = AppContext::new(config, presenter.clone()).expect("app context");

    (presenter, ctx)
}

/// JSON body for one catalog event.
pub fn event_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "start_time": "10:00",
        "end_time": "11:00",
        "location": "Main stage",
        "duration": 60
    })
}

/// JSON body for a profile/login identity response.
pub fn identity_json(user: &str, role: &str) -> serde_json::Value {
    serde_json::json!({ "user": user, "role": role })
}
