//! Betting desk
//!
//! Owns the entry book and history, and sequences prediction, wager
//! placement and settlement against an account store. Placing a wager and
//! logging an arrival both hold the book's write lock, so an entry can never
//! take a wager after its arrival is recorded, and is settled at most once.

mod types;

pub use types::{DeskError, SettlementReport};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::entry::{Entries, Entry, EntryError, EntryId};
use crate::history::{record_settlement, HistoryError, HistoryLog, HistoryRecord};
use crate::ledger::{normalize_username, AccountStore, InMemoryAccounts, UserAccount};
use crate::predictor::{line_time_from_stats, LatenessPredictor, LatenessStats};
use crate::settlement::settle;
use crate::telemetry::{self, GaugeMetric};
use crate::wager::{decode, Side, Wager};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Book {
    entries: Entries,
    history: HistoryLog,
    /// Running totals over entries still taking wagers
    open_entries: usize,
    open_stake: u64,
}

impl Book {
    /// Recount open totals from scratch, used after a restore
    fn recount_open(&mut self) {
        let open: Vec<&Entry> = self.entries.values().filter(|e| e.is_open()).collect();
        self.open_entries = open.len();
        self.open_stake = open
            .iter()
            .flat_map(|e| e.wagers.iter())
            .filter_map(|token| decode(token).ok())
            .map(|w| w.stake)
            .fold(0u64, u64::saturating_add);
    }

    fn update_gauges(&self) {
        telemetry::set_gauge(GaugeMetric::OpenEntries, self.open_entries as f64);
        telemetry::set_gauge(GaugeMetric::SettledEntries, self.history.len() as f64);
        telemetry::set_gauge(GaugeMetric::OpenStake, self.open_stake as f64);
    }
}

/// In-memory betting desk
pub struct Desk {
    predictor: LatenessPredictor,
    accounts: Arc<dyn AccountStore>,
    clock: Arc<dyn Clock>,
    book: Arc<RwLock<Book>>,
}

impl Desk {
    /// Create an empty desk
    pub fn new(
        predictor: LatenessPredictor,
        accounts: Arc<dyn AccountStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            predictor,
            accounts,
            clock,
            book: Arc::new(RwLock::new(Book::default())),
        }
    }

    /// Create a desk with in-memory accounts and the system clock
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            LatenessPredictor::from_config(&config.predictor),
            Arc::new(InMemoryAccounts::new(config.accounts.starting_balance)),
            Arc::new(SystemClock),
        )
    }

    /// Load previously stored entries and history
    pub async fn restore(&self, entries: Entries, history: HistoryLog) {
        let mut book = self.book.write().await;
        book.entries = entries;
        book.history = history;
        book.recount_open();
        book.update_gauges();
        tracing::info!(
            entries = book.entries.len(),
            history = book.history.len(),
            "Desk restored"
        );
    }

    /// Open a bettor account
    pub async fn open_account(&self, username: &str) -> Result<UserAccount, DeskError> {
        Ok(self.accounts.open(username).await?)
    }

    /// Current balance for a bettor
    pub async fn balance(&self, username: &str) -> Option<u64> {
        self.accounts.get(username).await.map(|a| a.balance)
    }

    /// Lateness statistics behind a subject's next line
    pub async fn line_stats(&self, subject: &str) -> LatenessStats {
        let book = self.book.read().await;
        self.predictor.stats(book.entries.values(), subject)
    }

    /// Create an entry with a line predicted from the subject's history
    pub async fn open_entry(
        &self,
        subject: &str,
        context: &str,
        scheduled_time: DateTime<Utc>,
    ) -> Result<Entry, DeskError> {
        let mut book = self.book.write().await;

        let stats = self.predictor.stats(book.entries.values(), subject.trim());
        let line_time = line_time_from_stats(&stats, scheduled_time)?;
        let entry = Entry::new(subject, context, scheduled_time, line_time)?;

        telemetry::record_prediction(stats.samples);
        tracing::info!(
            entry_id = %entry.id,
            subject = %entry.subject,
            %scheduled_time,
            %line_time,
            samples = stats.samples,
            "Entry opened"
        );

        book.entries.insert(entry.id, entry.clone());
        book.open_entries += 1;
        book.update_gauges();
        Ok(entry)
    }

    /// Place a wager, debiting the stake from the bettor's balance
    pub async fn place_wager(
        &self,
        entry_id: EntryId,
        username: &str,
        side: Side,
        stake: u64,
    ) -> Result<Wager, DeskError> {
        let mut book = self.book.write().await;
        let entry = book
            .entries
            .get_mut(&entry_id)
            .ok_or(DeskError::UnknownEntry(entry_id))?;

        let bettor = normalize_username(username)?;
        let wager = Wager::new(bettor, side, stake)?;
        if !entry.is_open() {
            return Err(EntryError::Closed(entry_id).into());
        }

        self.accounts.debit(&wager.bettor, stake).await?;
        entry.place(&wager)?;

        book.open_stake = book.open_stake.saturating_add(stake);
        telemetry::record_wager_placed(side, stake);
        tracing::info!(
            entry_id = %entry_id,
            bettor = %wager.bettor,
            %side,
            stake,
            "Wager placed"
        );

        book.update_gauges();
        Ok(wager)
    }

    /// Record arrival now and settle the entry
    pub async fn log_arrival(&self, entry_id: EntryId) -> Result<SettlementReport, DeskError> {
        let arrived_time = self.clock.now();
        self.log_arrival_at(entry_id, arrived_time).await
    }

    /// Record arrival at `arrived_time`, settle, write history and credit winners
    ///
    /// Nothing is changed unless every step succeeds.
    pub async fn log_arrival_at(
        &self,
        entry_id: EntryId,
        arrived_time: DateTime<Utc>,
    ) -> Result<SettlementReport, DeskError> {
        let mut book = self.book.write().await;
        let stored = book
            .entries
            .get(&entry_id)
            .ok_or(DeskError::UnknownEntry(entry_id))?;
        if book.history.get(&entry_id).is_some() {
            return Err(HistoryError::Duplicate(entry_id).into());
        }

        let mut entry = stored.clone();
        entry.record_arrival(arrived_time)?;
        let settlement = settle(&mut entry)?;
        let record = record_settlement(&entry, &settlement)?;

        self.accounts
            .credit_all(&settlement.profit_by_bettor)
            .await?;

        book.history.insert(record.clone())?;
        book.entries.insert(entry_id, entry);
        book.open_entries = book.open_entries.saturating_sub(1);
        book.open_stake = book
            .open_stake
            .saturating_sub(settlement.over_pool.saturating_add(settlement.under_pool));

        telemetry::record_settlement_metrics(&settlement);
        book.update_gauges();

        Ok(SettlementReport { settlement, record })
    }

    /// Look up an entry
    pub async fn entry(&self, entry_id: EntryId) -> Option<Entry> {
        let book = self.book.read().await;
        book.entries.get(&entry_id).cloned()
    }

    /// All entries, ordered by scheduled time
    pub async fn entries(&self) -> Vec<Entry> {
        let book = self.book.read().await;
        let mut entries: Vec<Entry> = book.entries.values().cloned().collect();
        entries.sort_by_key(|e| (e.scheduled_time, e.id));
        entries
    }

    /// History record for an entry
    pub async fn history_record(&self, entry_id: EntryId) -> Option<HistoryRecord> {
        let book = self.book.read().await;
        book.history.get(&entry_id).cloned()
    }

    /// Copy of the full history
    pub async fn history(&self) -> HistoryLog {
        self.book.read().await.history.clone()
    }
}
