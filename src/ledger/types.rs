//! Ledger types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ledger errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No account with that username
    #[error("Unknown account: {0}")]
    UnknownAccount(String),
    /// Username already taken
    #[error("Account already exists: {0}")]
    AccountExists(String),
    /// Username cannot be used as a bettor name
    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),
    /// Balance too low for the requested debit
    #[error("Insufficient funds for {username}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        username: String,
        balance: u64,
        requested: u64,
    },
    /// Credit would overflow the balance
    #[error("Balance overflow for {0}")]
    Overflow(String),
}

/// A bettor's points balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Lower-cased username, also the bettor name on wagers
    pub username: String,
    /// Spendable points
    pub balance: u64,
}
