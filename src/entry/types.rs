//! Entry types

use super::EntryId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entry lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Accepting wagers
    Open,
    /// Arrival recorded, pool not yet paid out
    Arrived,
    /// Pool paid out
    Settled,
}

/// Entry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Subject name is blank
    #[error("Entry subject must not be empty")]
    EmptySubject,
    /// Wager placed after arrival was recorded
    #[error("Entry {0} is closed to new wagers")]
    Closed(EntryId),
    /// Arrival recorded twice
    #[error("Arrival already recorded for entry {0}")]
    AlreadyArrived(EntryId),
}
