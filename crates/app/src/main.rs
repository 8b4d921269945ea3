//! Wayfest - event-scheduling client.
//!
//! Terminal entry point: loads configuration, resolves the current session
//! and renders the catalog through the terminal presenter.

use std::sync::Arc;

use wayfest_app::utils::logging::init_tracing;
use wayfest_app::{commands, AppContext, TerminalPresenter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment variables from .env take part in config loading
    dotenvy::dotenv().ok();

    let config = wayfest_infra::config::load()?;
    init_tracing(&config.log);
    tracing::info!(base_url = %config.api.base_url, "Wayfest starting");

    let presenter = Arc::new(TerminalPresenter);
    let ctx = AppContext::new(config, presenter)?;

    commands::session::startup(&ctx).await;

    Ok(())
}
