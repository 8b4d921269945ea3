//! Catalog event types.

use serde::{Deserialize, Serialize};

/// A time-boxed catalog event.
///
/// The authoritative copy lives server-side; the client only ever holds a
/// transient cached sequence. `duration` is the wraparound-aware minute
/// difference of the endpoints, computed client-side before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub duration: i64,
}

impl Event {
    /// The `"HH:MM - HH:MM"` window shown next to the event name.
    pub fn time_window(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// User-entered fields for a new or edited event, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInput {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
}

impl EventInput {
    pub fn new(
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            location: location.into(),
        }
    }

    /// True when any field is empty.
    pub fn has_missing_fields(&self) -> bool {
        [&self.name, &self.start_time, &self.end_time, &self.location]
            .iter()
            .any(|field| field.is_empty())
    }
}
