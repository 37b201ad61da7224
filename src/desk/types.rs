//! Desk types

use crate::entry::{EntryError, EntryId};
use crate::history::{HistoryError, HistoryRecord};
use crate::ledger::LedgerError;
use crate::predictor::PredictorError;
use crate::settlement::{Settlement, SettlementError};
use crate::wager::WagerError;
use serde::Serialize;
use thiserror::Error;

/// Desk errors
#[derive(Debug, Error)]
pub enum DeskError {
    /// No entry with that id
    #[error("Unknown entry: {0}")]
    UnknownEntry(EntryId),
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Wager(#[from] WagerError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Predictor(#[from] PredictorError),
}

/// Everything produced by logging an arrival
#[derive(Debug, Clone, Serialize)]
pub struct SettlementReport {
    /// Outcome and payouts
    pub settlement: Settlement,
    /// Audit record written to history
    pub record: HistoryRecord,
}
