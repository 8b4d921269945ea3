//! Terminal presenter.
//!
//! Stdout rendering for the binary entry point; real deployments plug a
//! DOM-backed presenter in through the same trait.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use wayfest_core::Presenter;
use wayfest_domain::{Event, Identity, Route};

/// Renders the core's output as plain terminal text.
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn show_auth_panel(&self) {
        println!("Not logged in. Please log in or register.");
    }

    fn show_user_panel(&self, identity: &Identity) {
        println!("Logged in as {} ({})", identity.username, identity.role);
    }

    fn render_events(&self, events: &[Event], organizer: bool) {
        println!("Events:");
        for event in events {
            println!(
                "  [{}] {} ({}, {}, {} min)",
                event.id,
                event.name,
                event.time_window(),
                event.location,
                event.duration
            );
            if organizer {
                println!("       actions: edit, delete");
            }
        }
    }

    fn render_routes(&self, routes: &[Route]) {
        println!("Suggested routes:");
        for (index, route) in routes.iter().enumerate() {
            println!("Route {}", index + 1);
            for event in &route.events {
                println!("  {} ({}, {})", event.name, event.time_window(), event.location);
            }
        }
    }

    fn notify(&self, message: &str) {
        println!("{message}");
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}
