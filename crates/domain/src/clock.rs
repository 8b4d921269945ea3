//! Clock-time parsing and wraparound duration arithmetic.
//!
//! Events carry wall-clock `"HH:MM"` endpoints with no date component. An
//! end time that sorts before its start means the event crosses midnight,
//! so durations are computed modulo 24 hours rather than signed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minutes in a full day, added when a nominal duration goes negative.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// One-or-two-digit hour, colon, exactly-two-digit minute.
static CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("CLOCK_RE should compile - this is a bug"));

/// A wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u8,
    pub minutes: u8,
}

impl ClockTime {
    /// Minutes since midnight.
    pub fn minutes_of_day(self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }
}

/// Parse a `"HH:MM"` string into a [`ClockTime`].
///
/// Accepts a one-or-two-digit hour and an exactly-two-digit minute; the
/// hour must be in `0..=23` and the minute in `0..=59`. Anything else,
/// including surrounding whitespace, returns `None`.
pub fn parse_clock(text: &str) -> Option<ClockTime> {
    let caps = CLOCK_RE.captures(text)?;

    let hours: u8 = caps.get(1)?.as_str().parse().ok()?;
    let minutes: u8 = caps.get(2)?.as_str().parse().ok()?;

    if hours > 23 || minutes > 59 {
        return None;
    }

    Some(ClockTime { hours, minutes })
}

/// Compute the duration in minutes between two `"HH:MM"` endpoints.
///
/// Either endpoint failing to parse yields 0, which callers treat as "no
/// valid duration". A nominal negative difference gains 24 hours so an
/// overnight event (23:00–01:00) reads as 120 minutes. The result is never
/// negative.
pub fn duration_minutes(start: &str, end: &str) -> i64 {
    let (Some(start), Some(end)) = (parse_clock(start), parse_clock(end)) else {
        return 0;
    };

    let mut duration = end.minutes_of_day() - start.minutes_of_day();
    if duration < 0 {
        duration += MINUTES_PER_DAY;
    }

    duration
}
