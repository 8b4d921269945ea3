//! Port interface for authentication and session resolution.
//!
//! These traits define the boundary between the session state machine and
//! the HTTP infrastructure that talks to the server.

use async_trait::async_trait;
use wayfest_domain::{Identity, Result, Role};

/// Outcome of the startup session probe.
///
/// "No active session" and a transport failure both leave the client
/// unauthenticated, but they are distinct results so the state machine can
/// log them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionProbe {
    /// The server recognised an existing session and returned its identity.
    Active(Identity),
    /// The server answered: nobody is logged in.
    NoSession,
}

/// Authentication operations against the scheduling server.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Query the session-status endpoint.
    async fn resolve_session(&self) -> Result<SessionProbe>;

    /// Exchange credentials for an authenticated session.
    async fn login(&self, username: &str, password: &str) -> Result<Identity>;

    /// Create an account. Registration does not by itself authenticate;
    /// the returned string is the server's acknowledgement message.
    async fn register(&self, username: &str, password: &str, role: Role) -> Result<String>;

    /// Terminate the server-side session.
    async fn logout(&self) -> Result<()>;
}
