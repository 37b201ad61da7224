//! Lateness-based line time prediction
//!
//! The line for a new entry is its scheduled time pushed back by the
//! subject's mean lateness over previously settled entries.

use super::PredictorError;
use crate::config::PredictorConfig;
use crate::entry::Entry;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

const MILLIS_PER_MINUTE: Decimal = dec!(60000);

/// Lateness summary for one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatenessStats {
    /// Number of arrived entries considered
    pub samples: usize,
    /// Mean lateness in minutes (the default when there are no samples)
    pub average_minutes: Decimal,
}

/// Predicts line times from a subject's arrival history
#[derive(Debug, Clone)]
pub struct LatenessPredictor {
    /// Lateness assumed for subjects with no arrival history
    pub default_lateness_minutes: Decimal,
}

impl LatenessPredictor {
    /// Create a predictor with the given fallback lateness
    pub fn new(default_lateness_minutes: Decimal) -> Self {
        Self {
            default_lateness_minutes,
        }
    }

    /// Create from PredictorConfig
    pub fn from_config(config: &PredictorConfig) -> Self {
        Self::new(config.default_lateness_minutes)
    }

    /// Mean lateness for `subject` over entries that have an arrival time
    pub fn stats<'a, I>(&self, history: I, subject: &str) -> LatenessStats
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let (samples, total_millis) = history
            .into_iter()
            .filter(|entry| entry.subject == subject)
            .filter_map(Entry::lateness)
            .fold((0usize, 0i128), |(n, total), lateness| {
                (n + 1, total + i128::from(lateness.num_milliseconds()))
            });

        let average_minutes = if samples == 0 {
            self.default_lateness_minutes
        } else {
            Decimal::from_i128_with_scale(total_millis, 0)
                / Decimal::from(samples)
                / MILLIS_PER_MINUTE
        };

        LatenessStats {
            samples,
            average_minutes,
        }
    }

    /// Predicted line time for a new entry of `subject` called at `scheduled_time`
    pub fn predict_line_time<'a, I>(
        &self,
        history: I,
        subject: &str,
        scheduled_time: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, PredictorError>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let stats = self.stats(history, subject);
        let line_time = line_time_from_stats(&stats, scheduled_time)?;

        tracing::debug!(
            subject,
            samples = stats.samples,
            average_minutes = %stats.average_minutes,
            "Predicted line time"
        );

        Ok(line_time)
    }
}

impl Default for LatenessPredictor {
    fn default() -> Self {
        Self::new(dec!(5))
    }
}

/// Line time for `scheduled_time` pushed back by the mean lateness in `stats`
pub fn line_time_from_stats(
    stats: &LatenessStats,
    scheduled_time: DateTime<Utc>,
) -> Result<DateTime<Utc>, PredictorError> {
    let offset = minutes_to_duration(stats.average_minutes)?;
    scheduled_time
        .checked_add_signed(offset)
        .ok_or(PredictorError::LineOutOfRange {
            scheduled_time,
            minutes: stats.average_minutes,
        })
}

/// Convert fractional minutes to a duration, rounded to the millisecond
fn minutes_to_duration(minutes: Decimal) -> Result<Duration, PredictorError> {
    minutes
        .checked_mul(MILLIS_PER_MINUTE)
        .map(|millis| millis.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|millis| millis.to_i64())
        .and_then(Duration::try_milliseconds)
        .ok_or(PredictorError::OffsetOutOfRange(minutes))
}
