//! Candidate itinerary returned by the route-generation service.

use serde::{Deserialize, Serialize};

use super::Event;

/// One candidate itinerary: an ordered, non-overlapping sequence of events.
///
/// Produced only by the server; the client renders routes in the order they
/// arrive and never reorders or ranks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    pub events: Vec<Event>,
}

impl Route {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
