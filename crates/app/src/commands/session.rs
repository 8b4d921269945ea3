//! Session commands: startup, login, register, logout.

use std::time::Instant;

use wayfest_core::SessionState;
use wayfest_domain::{messages, Role};

use super::{catalog, user_message};
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Resolve the session once at startup and show the matching interface.
///
/// Nothing surfaces to the user here: a failed probe silently starts the
/// client unauthenticated.
pub async fn startup(ctx: &AppContext) {
    let start = Instant::now();

    match ctx.session.resolve().await {
        SessionState::Authenticated(identity) => {
            ctx.presenter.show_user_panel(&identity);
            catalog::load_events(ctx).await;
        }
        SessionState::Unauthenticated => ctx.presenter.show_auth_panel(),
    }

    log_command_execution("session::startup", start.elapsed(), true);
}

/// Log in and, on success, switch to the main interface and load events.
pub async fn login(ctx: &AppContext, username: &str, password: &str) {
    let command = "session::login";
    let start = Instant::now();
    let Some(_token) = ctx.guard.begin("login") else {
        ctx.presenter.alert(messages::OPERATION_IN_FLIGHT);
        return;
    };

    let result = ctx.session.login(username, password).await;
    let success = result.is_ok();

    match result {
        Ok(identity) => {
            ctx.presenter.show_user_panel(&identity);
            catalog::load_events(ctx).await;
        }
        Err(err) => ctx.presenter.alert(&user_message(&err)),
    }

    log_command_execution(command, start.elapsed(), success);
}

/// Register a new account and, on success, continue straight into login.
pub async fn register(ctx: &AppContext, username: &str, password: &str, role: Role) {
    let command = "session::register";
    let start = Instant::now();
    let Some(_token) = ctx.guard.begin("register") else {
        ctx.presenter.alert(messages::OPERATION_IN_FLIGHT);
        return;
    };

    let result = ctx.session.register(username, password, role).await;
    let success = result.is_ok();

    match result {
        Ok(identity) => {
            ctx.presenter.show_user_panel(&identity);
            catalog::load_events(ctx).await;
        }
        Err(err) => ctx.presenter.alert(&user_message(&err)),
    }

    log_command_execution(command, start.elapsed(), success);
}

/// Log out and return to the auth panel.
///
/// Always succeeds client-side, whatever the server answers.
pub async fn logout(ctx: &AppContext) {
    let start = Instant::now();

    ctx.session.logout().await;
    ctx.presenter.show_auth_panel();

    log_command_execution("session::logout", start.elapsed(), true);
}
