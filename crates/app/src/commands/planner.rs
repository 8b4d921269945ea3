//! Route-generation command.

use std::time::Instant;

use wayfest_domain::messages;

use super::user_message;
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Request candidate routes for the selected events and render them.
///
/// The empty-selection check happens in the planner service before any
/// network call; routes are rendered numbered in server order.
pub async fn generate_routes(ctx: &AppContext, selected_ids: &[i64]) {
    let command = "planner::generate_routes";
    let start = Instant::now();
    let Some(_token) = ctx.guard.begin("generate_routes") else {
        ctx.presenter.alert(messages::OPERATION_IN_FLIGHT);
        return;
    };

    let result = ctx.planner.generate(selected_ids).await;
    let success = result.is_ok();

    match result {
        Ok(routes) => ctx.presenter.render_routes(&routes),
        Err(err) => ctx.presenter.alert(&user_message(&err)),
    }

    log_command_execution(command, start.elapsed(), success);
}
