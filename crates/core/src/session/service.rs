//! Session state machine - core business logic.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};
use wayfest_domain::{Identity, Result, Role};

use super::ports::{AuthGateway, SessionProbe};

/// The two states a client session can be in.
///
/// Every transition changes which catalog-mutation affordances the UI may
/// expose; there is no third state and no partially-authenticated limbo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(Identity),
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated(identity) => Some(identity),
        }
    }
}

/// Injectable session context.
///
/// Owns the one authoritative [`SessionState`] value; components receive an
/// `Arc<SessionService>` instead of reading ambient globals. State is only
/// ever replaced wholesale, never merged.
pub struct SessionService {
    gateway: Arc<dyn AuthGateway>,
    state: RwLock<SessionState>,
}

impl SessionService {
    /// Create a new session service in the unauthenticated state.
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway, state: RwLock::new(SessionState::Unauthenticated) }
    }

    /// Resolve the current identity from the server, once at startup.
    ///
    /// Both a "no active session" probe and a transport failure degrade
    /// silently to [`SessionState::Unauthenticated`]; neither surfaces an
    /// error to the user at this stage.
    pub async fn resolve(&self) -> SessionState {
        let next = match self.gateway.resolve_session().await {
            Ok(SessionProbe::Active(identity)) => {
                info!(user = %identity.username, role = %identity.role, "session resolved");
                SessionState::Authenticated(identity)
            }
            Ok(SessionProbe::NoSession) => {
                debug!("no active session");
                SessionState::Unauthenticated
            }
            Err(err) => {
                warn!(error = %err, "session probe failed; starting unauthenticated");
                SessionState::Unauthenticated
            }
        };

        *self.state.write() = next.clone();
        next
    }

    /// Log in with the given credentials.
    ///
    /// On success the session transitions to authenticated and the identity
    /// is returned; on failure the previous state is left untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity> {
        let identity = self.gateway.login(username, password).await?;

        info!(user = %identity.username, role = %identity.role, "login successful");
        *self.state.write() = SessionState::Authenticated(identity.clone());
        Ok(identity)
    }

    /// Register a new account, then immediately log in with the same
    /// credentials (registration alone does not authenticate).
    pub async fn register(&self, username: &str, password: &str, role: Role) -> Result<Identity> {
        let message = self.gateway.register(username, password, role).await?;
        debug!(message = %message, "registration accepted");

        self.login(username, password).await
    }

    /// Log out. Best-effort server notification, then unconditionally
    /// unauthenticated - logout never fails client-side.
    pub async fn logout(&self) {
        if let Err(err) = self.gateway.logout().await {
            warn!(error = %err, "logout notification failed; clearing session anyway");
        }

        *self.state.write() = SessionState::Unauthenticated;
        info!("session cleared");
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> SessionState {
        self.state.read().clone()
    }

    /// The authenticated identity, if any.
    pub fn identity(&self) -> Option<Identity> {
        self.state.read().identity().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    /// Whether catalog-mutation affordances may be exposed.
    pub fn is_organizer(&self) -> bool {
        self.identity().is_some_and(|identity| identity.role.is_organizer())
    }
}
