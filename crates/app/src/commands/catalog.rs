//! Catalog commands: load, add, edit, delete.

use std::time::Instant;

use wayfest_domain::{messages, EventInput};

use super::user_message;
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Fetch the catalog and render it.
///
/// This is the background refresh path: a failure is logged by the service
/// and the previous rendering stays up - no user-facing error.
pub async fn load_events(ctx: &AppContext) {
    let start = Instant::now();

    let success = match ctx.catalog.refresh().await {
        Ok(events) => {
            ctx.presenter.render_events(&events, ctx.session.is_organizer());
            true
        }
        Err(_) => false,
    };

    log_command_execution("catalog::load_events", start.elapsed(), success);
}

/// Create an event from user input and re-render the catalog.
pub async fn add_event(ctx: &AppContext, input: EventInput) {
    let command = "catalog::add_event";
    let start = Instant::now();
    let Some(_token) = ctx.guard.begin("add_event") else {
        ctx.presenter.alert(messages::OPERATION_IN_FLIGHT);
        return;
    };

    let result = ctx.catalog.create(&input).await;
    let success = result.is_ok();

    match result {
        Ok(event) => {
            ctx.presenter.notify(&format!("Event added! Duration: {} min", event.duration));
            render_catalog(ctx);
        }
        Err(err) => ctx.presenter.alert(&user_message(&err)),
    }

    log_command_execution(command, start.elapsed(), success);
}

/// Replace an event's fields and re-render the catalog.
pub async fn edit_event(ctx: &AppContext, id: i64, input: EventInput) {
    let command = "catalog::edit_event";
    let start = Instant::now();
    let Some(_token) = ctx.guard.begin("edit_event") else {
        ctx.presenter.alert(messages::OPERATION_IN_FLIGHT);
        return;
    };

    // The edit affordance came from the cached rendering; a stale id means
    // the event vanished since the last fetch.
    if ctx.catalog.find(id).is_none() {
        ctx.presenter.alert(messages::EVENT_NOT_FOUND);
        log_command_execution(command, start.elapsed(), false);
        return;
    }

    let result = ctx.catalog.update(id, &input).await;
    let success = result.is_ok();

    match result {
        Ok(event) => {
            ctx.presenter.notify(&format!("Event updated! Duration: {} min", event.duration));
            render_catalog(ctx);
        }
        Err(err) => ctx.presenter.alert(&user_message(&err)),
    }

    log_command_execution(command, start.elapsed(), success);
}

/// Delete an event after explicit confirmation and re-render the catalog.
///
/// `confirmed` is the user's answer to the destructive-action prompt; an
/// unconfirmed delete never reaches the network.
pub async fn delete_event(ctx: &AppContext, id: i64, confirmed: bool) {
    let command = "catalog::delete_event";
    let start = Instant::now();
    let Some(_token) = ctx.guard.begin("delete_event") else {
        ctx.presenter.alert(messages::OPERATION_IN_FLIGHT);
        return;
    };

    let result = ctx.catalog.delete(id, confirmed).await;
    let success = result.is_ok();

    match result {
        Ok(true) => render_catalog(ctx),
        Ok(false) => {}
        Err(err) => ctx.presenter.alert(&user_message(&err)),
    }

    log_command_execution(command, start.elapsed(), success);
}

fn render_catalog(ctx: &AppContext) {
    let events = ctx.catalog.cached();
    ctx.presenter.render_events(&events, ctx.session.is_organizer());
}
