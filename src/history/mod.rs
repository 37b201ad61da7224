//! History module
//!
//! Audit trail written once per settled entry

mod recorder;

pub use recorder::{record_history, record_settlement, HistoryLog, HistoryRecord};

use crate::entry::EntryId;
use thiserror::Error;

/// History errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Entry has no arrival yet
    #[error("Cannot record history for entry {0} before arrival")]
    NotArrived(EntryId),
    /// Entry already has a history record
    #[error("History already recorded for entry {0}")]
    Duplicate(EntryId),
}
