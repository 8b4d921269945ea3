//! User-facing message strings.
//!
//! Server-produced error messages are surfaced verbatim; the constants here
//! cover failures the client detects itself.

/// Generic transport-failure message for user-initiated actions.
pub const NETWORK_ERROR: &str = "Network error, please try again";

/// Route generation requires a non-empty selection.
pub const EMPTY_SELECTION: &str = "Select at least one event";

/// Event create/update requires every field.
pub const MISSING_FIELDS: &str = "Fill in all fields";

/// Computed duration must be positive.
pub const INVALID_TIME_RANGE: &str = "End time must be later than start time";

/// Edit target disappeared between the catalog fetch and the edit.
pub const EVENT_NOT_FOUND: &str = "Event not found";

/// A second click while the same action is still in flight.
pub const OPERATION_IN_FLIGHT: &str = "Operation already in progress";
