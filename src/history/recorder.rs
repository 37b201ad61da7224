//! History records for settled entries

use super::HistoryError;
use crate::entry::{Entry, EntryId};
use crate::settlement::{Ledger, Settlement};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable audit record of one settled entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Settled entry
    pub entry_id: EntryId,
    /// Subject of the entry
    pub subject: String,
    /// Call time
    pub scheduled_time: DateTime<Utc>,
    /// Line the wagers resolved against
    pub line_time: DateTime<Utc>,
    /// Recorded arrival
    pub arrived_time: DateTime<Utc>,
    /// Profit credited per bettor
    pub profit_by_bettor: Ledger,
    /// Stake lost per bettor
    pub loss_by_bettor: Ledger,
}

/// Build the history record for an arrived entry
pub fn record_history(
    entry: &Entry,
    profit_by_bettor: Ledger,
    loss_by_bettor: Ledger,
) -> Result<HistoryRecord, HistoryError> {
    let arrived_time = entry
        .arrived_time
        .ok_or(HistoryError::NotArrived(entry.id))?;

    Ok(HistoryRecord {
        entry_id: entry.id,
        subject: entry.subject.clone(),
        scheduled_time: entry.scheduled_time,
        line_time: entry.line_time,
        arrived_time,
        profit_by_bettor,
        loss_by_bettor,
    })
}

/// Build the history record straight from a settlement result
pub fn record_settlement(
    entry: &Entry,
    settlement: &Settlement,
) -> Result<HistoryRecord, HistoryError> {
    record_history(
        entry,
        settlement.profit_by_bettor.clone(),
        settlement.loss_by_bettor.clone(),
    )
}

/// Append-only history keyed by entry id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: BTreeMap<EntryId, HistoryRecord>,
}

impl HistoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record; an entry can only be recorded once
    pub fn insert(&mut self, record: HistoryRecord) -> Result<(), HistoryError> {
        if self.records.contains_key(&record.entry_id) {
            return Err(HistoryError::Duplicate(record.entry_id));
        }
        self.records.insert(record.entry_id, record);
        Ok(())
    }

    /// Look up the record for an entry
    pub fn get(&self, entry_id: &EntryId) -> Option<&HistoryRecord> {
        self.records.get(entry_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
