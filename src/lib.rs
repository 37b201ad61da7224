//! lateline: over/under lines on lateness, settled as pari-mutuel pools
//!
//! This library provides the core components for:
//! - Line time prediction from a subject's arrival history
//! - Compact wager tokens stored on entries
//! - Pari-mutuel settlement into profit and loss ledgers
//! - Immutable history records for settled entries
//! - An in-memory desk that sequences placement and settlement
//! - Account balances behind a pluggable store
//! - Logging and metrics

pub mod cli;
pub mod clock;
pub mod config;
pub mod desk;
pub mod entry;
pub mod history;
pub mod ledger;
pub mod predictor;
pub mod settlement;
pub mod telemetry;
pub mod wager;
