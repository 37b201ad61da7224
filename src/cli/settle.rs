//! Settle command implementation

use super::load_entries;
use crate::desk::SettlementReport;
use crate::entry::EntryId;
use crate::history::record_settlement;
use crate::settlement::settle;
use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Entry snapshot (JSON)
    #[arg(long)]
    pub entries: PathBuf,

    /// Entry to settle
    #[arg(long)]
    pub id: EntryId,

    /// Arrival time (RFC 3339); required unless the entry already has one
    #[arg(long)]
    pub arrived: Option<DateTime<Utc>>,
}

impl SettleArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let report = self.run()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    fn run(&self) -> anyhow::Result<SettlementReport> {
        let entries = load_entries(&self.entries)?;
        let mut entry = entries
            .get(&self.id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No entry {} in {}", self.id, self.entries.display()))?;

        if let Some(arrived) = self.arrived {
            entry.record_arrival(arrived)?;
        }
        let settlement = settle(&mut entry)?;
        let record = record_settlement(&entry, &settlement)?;

        tracing::info!(entry_id = %self.id, "Dry-run settlement complete");
        Ok(SettlementReport { settlement, record })
    }
}
