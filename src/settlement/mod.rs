//! Settlement module
//!
//! Resolves an arrived entry's over/under pool into profit and loss ledgers

mod engine;
mod types;

pub use engine::{resolve_outcome, settle, split_pool};
pub use types::{Ledger, PoolSplit, Settlement, SettlementError};
