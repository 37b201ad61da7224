//! In-memory account store

use super::{normalize_username, AccountStore, LedgerError, UserAccount};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Account balances held in process memory
pub struct InMemoryAccounts {
    starting_balance: u64,
    accounts: Arc<RwLock<HashMap<String, UserAccount>>>,
}

impl InMemoryAccounts {
    /// Create an empty store; new accounts start with `starting_balance`
    pub fn new(starting_balance: u64) -> Self {
        Self {
            starting_balance,
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl AccountStore for InMemoryAccounts {
    async fn open(&self, username: &str) -> Result<UserAccount, LedgerError> {
        let username = normalize_username(username)?;
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&username) {
            return Err(LedgerError::AccountExists(username));
        }

        let account = UserAccount {
            username: username.clone(),
            balance: self.starting_balance,
        };
        accounts.insert(username, account.clone());
        tracing::info!(username = %account.username, balance = account.balance, "Account opened");
        Ok(account)
    }

    async fn get(&self, username: &str) -> Option<UserAccount> {
        let accounts = self.accounts.read().await;
        accounts.get(&username.to_ascii_lowercase()).cloned()
    }

    async fn debit(&self, username: &str, amount: u64) -> Result<u64, LedgerError> {
        let key = username.to_ascii_lowercase();
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(&key)
            .ok_or_else(|| LedgerError::UnknownAccount(key.clone()))?;

        if account.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                username: key,
                balance: account.balance,
                requested: amount,
            });
        }
        account.balance -= amount;
        Ok(account.balance)
    }

    async fn credit_all(&self, credits: &BTreeMap<String, u64>) -> Result<(), LedgerError> {
        let mut accounts = self.accounts.write().await;

        // Validate everything before touching any balance
        for (username, amount) in credits {
            let account = accounts
                .get(&username.to_ascii_lowercase())
                .ok_or_else(|| LedgerError::UnknownAccount(username.clone()))?;
            if account.balance.checked_add(*amount).is_none() {
                return Err(LedgerError::Overflow(username.clone()));
            }
        }

        for (username, amount) in credits {
            if let Some(account) = accounts.get_mut(&username.to_ascii_lowercase()) {
                account.balance += amount;
            }
        }
        Ok(())
    }
}
