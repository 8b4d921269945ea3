//! Rendering capability the core invokes.
//!
//! The presentation layer (DOM, terminal, anything else) is an external
//! collaborator; the core only ever talks to it through this trait, so the
//! state machines stay independent of any rendering technology.

use wayfest_domain::{Event, Identity, Route};

/// Everything the core needs to show to the user.
pub trait Presenter: Send + Sync {
    /// Show the login/registration panel (unauthenticated state).
    fn show_auth_panel(&self);

    /// Show the main interface for an authenticated identity.
    fn show_user_panel(&self, identity: &Identity);

    /// Render the event catalog.
    ///
    /// `organizer` gates the edit/delete affordances: when it is `false`
    /// they must not be exposed, regardless of what the event data looks
    /// like.
    fn render_events(&self, events: &[Event], organizer: bool);

    /// Render candidate routes, numbered in the order given.
    fn render_routes(&self, routes: &[Route]);

    /// Non-blocking informational message.
    fn notify(&self, message: &str);

    /// Error message requiring the user's attention.
    fn alert(&self, message: &str);
}
