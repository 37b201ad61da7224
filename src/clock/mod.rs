//! Clock module
//!
//! Source of "now" for arrival logging, and parsing of operator call times

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

/// Clock errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// Call time not in `HH:MM AM/PM` form
    #[error("Invalid call time {0:?}, expected HH:MM AM/PM")]
    InvalidCallTime(String),
}

/// Trait for time sources
pub trait Clock: Send + Sync {
    /// Current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parse an `HH:MM AM/PM` call time onto `date`
///
/// 12 AM is midnight and 12 PM is noon. The result is taken as UTC.
pub fn parse_call_time(input: &str, date: NaiveDate) -> Result<DateTime<Utc>, ClockError> {
    let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let time = NaiveTime::parse_from_str(&normalized, "%I:%M %p")
        .map_err(|_| ClockError::InvalidCallTime(input.to_string()))?;
    Ok(date.and_time(time).and_utc())
}
