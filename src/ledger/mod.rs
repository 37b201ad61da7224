//! Ledger module
//!
//! User point balances: debited when a wager is placed, credited with
//! settlement profit

mod memory;
mod types;

pub use memory::InMemoryAccounts;
pub use types::{LedgerError, UserAccount};

use crate::wager::is_valid_bettor;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Trait for account store implementations
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Open a new account with the store's starting balance
    async fn open(&self, username: &str) -> Result<UserAccount, LedgerError>;
    /// Look up an account
    async fn get(&self, username: &str) -> Option<UserAccount>;
    /// Remove points, failing if the balance is too low; returns the new balance
    async fn debit(&self, username: &str, amount: u64) -> Result<u64, LedgerError>;
    /// Add points to several accounts at once; applies nothing on error
    async fn credit_all(&self, credits: &BTreeMap<String, u64>) -> Result<(), LedgerError>;
}

/// Lower-case a username and check it is usable as a bettor name
pub fn normalize_username(username: &str) -> Result<String, LedgerError> {
    let lower = username.trim().to_ascii_lowercase();
    if !is_valid_bettor(&lower) {
        return Err(LedgerError::InvalidUsername(username.to_string()));
    }
    Ok(lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username(" Bob42 ").unwrap(), "bob42");
        assert!(normalize_username("").is_err());
        assert!(normalize_username("bob_").is_err());
    }
}
