//! Settlement types

use crate::entry::EntryId;
use crate::wager::{Side, WagerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Points per bettor
pub type Ledger = BTreeMap<String, u64>;

/// Settlement errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// No arrival time recorded yet
    #[error("Entry {0} has no recorded arrival")]
    NotArrived(EntryId),
    /// Pool was already paid out
    #[error("Entry {0} is already settled")]
    AlreadySettled(EntryId),
    /// A stored wager token could not be decoded
    #[error("Entry {entry_id} holds an invalid wager: {source}")]
    Wager {
        entry_id: EntryId,
        #[source]
        source: WagerError,
    },
    /// Total stake on one side does not fit in u64
    #[error("Pool total overflowed for entry {0}")]
    PoolOverflow(EntryId),
}

/// Result of splitting a pool between winning and losing wagers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSplit {
    /// Sum of Over stakes
    pub over_pool: u64,
    /// Sum of Under stakes
    pub under_pool: u64,
    /// Profit owed to each winning bettor
    pub profit_by_bettor: Ledger,
    /// Stake lost by each losing bettor
    pub loss_by_bettor: Ledger,
}

/// A settled entry's outcome and payouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Settled entry
    pub entry_id: EntryId,
    /// Winning side
    pub outcome: Side,
    /// Line the wagers resolved against
    pub line_time: DateTime<Utc>,
    /// Recorded arrival
    pub arrived_time: DateTime<Utc>,
    /// Arrival minus line, in seconds
    pub delta_seconds: i64,
    /// Sum of Over stakes
    pub over_pool: u64,
    /// Sum of Under stakes
    pub under_pool: u64,
    /// Profit credited to each winning bettor
    pub profit_by_bettor: Ledger,
    /// Stake lost by each losing bettor
    pub loss_by_bettor: Ledger,
}

impl Settlement {
    /// Total staked on the winning side
    pub fn winning_pool(&self) -> u64 {
        match self.outcome {
            Side::Over => self.over_pool,
            Side::Under => self.under_pool,
        }
    }

    /// Total staked on the losing side
    pub fn losing_pool(&self) -> u64 {
        match self.outcome {
            Side::Over => self.under_pool,
            Side::Under => self.over_pool,
        }
    }

    /// Total profit paid out
    pub fn distributed(&self) -> u64 {
        self.profit_by_bettor.values().sum()
    }

    /// Part of the losing pool nobody receives (rounding or forfeit)
    pub fn undistributed(&self) -> u64 {
        self.losing_pool() - self.distributed()
    }

    /// True when nobody backed the winning side
    pub fn is_forfeit(&self) -> bool {
        self.winning_pool() == 0
    }
}
