//! Predict command implementation

use super::load_entries;
use crate::clock::parse_call_time;
use crate::config::Config;
use crate::entry::Entries;
use crate::predictor::{line_time_from_stats, LatenessPredictor};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Entry snapshot (JSON); no history when omitted
    #[arg(long)]
    pub entries: Option<PathBuf>,

    /// Subject name
    #[arg(long)]
    pub subject: String,

    /// Call time: RFC 3339, or HH:MM AM/PM on --date
    #[arg(long)]
    pub scheduled: String,

    /// Date for an HH:MM AM/PM call time (defaults to today, UTC)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl PredictArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let entries = match &self.entries {
            Some(path) => load_entries(path)?,
            None => Entries::new(),
        };
        let scheduled = self.scheduled_time()?;

        let predictor = LatenessPredictor::from_config(&config.predictor);
        let stats = predictor.stats(entries.values(), &self.subject);
        let line_time = line_time_from_stats(&stats, scheduled)?;

        println!("Subject:   {}", self.subject);
        println!("Scheduled: {}", scheduled.to_rfc3339());
        println!(
            "Lateness:  {} min over {} settled entries",
            stats.average_minutes.round_dp(2),
            stats.samples
        );
        println!("Line:      {}", line_time.to_rfc3339());
        Ok(())
    }

    fn scheduled_time(&self) -> anyhow::Result<DateTime<Utc>> {
        if let Ok(t) = DateTime::parse_from_rfc3339(&self.scheduled) {
            return Ok(t.with_timezone(&Utc));
        }
        let date = self.date.unwrap_or_else(|| Utc::now().date_naive());
        Ok(parse_call_time(&self.scheduled, date)?)
    }
}
