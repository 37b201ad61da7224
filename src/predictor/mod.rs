//! Line time prediction module
//!
//! Derives the over/under line for a new entry from the subject's history

mod lateness;

pub use lateness::{line_time_from_stats, LatenessPredictor, LatenessStats};

use crate::entry::Entry;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// Prediction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictorError {
    /// Mean lateness does not fit a millisecond duration
    #[error("Lateness of {0} minutes is out of range")]
    OffsetOutOfRange(Decimal),
    /// Scheduled time plus lateness falls outside the representable range
    #[error("Line for {scheduled_time} plus {minutes} minutes is out of range")]
    LineOutOfRange {
        scheduled_time: DateTime<Utc>,
        minutes: Decimal,
    },
}

/// Predict a line time using the default 5 minute fallback
pub fn predict_line_time<'a, I>(
    entries: I,
    subject: &str,
    scheduled_time: DateTime<Utc>,
) -> Result<DateTime<Utc>, PredictorError>
where
    I: IntoIterator<Item = &'a Entry>,
{
    LatenessPredictor::default().predict_line_time(entries, subject, scheduled_time)
}
