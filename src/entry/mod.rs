//! Entry module
//!
//! A scheduled arrival for a subject: the unit wagers are placed on and
//! settled against.

mod types;

pub use types::{EntryError, EntryStatus};

use crate::wager::{encode, Wager};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Entry identifier
pub type EntryId = Uuid;

/// Caller-owned entry collection keyed by id
pub type Entries = HashMap<EntryId, Entry>;

/// One scheduled arrival event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,
    /// Subject whose lateness is tracked
    pub subject: String,
    /// Free-form label (venue, occasion)
    #[serde(default)]
    pub context: String,
    /// When the subject is called for
    pub scheduled_time: DateTime<Utc>,
    /// Predicted arrival that wagers resolve against
    pub line_time: DateTime<Utc>,
    /// Actual arrival, set once
    #[serde(default)]
    pub arrived_time: Option<DateTime<Utc>>,
    /// Wager tokens in placement order
    #[serde(default)]
    pub wagers: Vec<String>,
    /// Whether the pool has been paid out
    #[serde(default)]
    pub settled: bool,
}

impl Entry {
    /// Create an open entry with a fresh id
    pub fn new(
        subject: impl Into<String>,
        context: impl Into<String>,
        scheduled_time: DateTime<Utc>,
        line_time: DateTime<Utc>,
    ) -> Result<Self, EntryError> {
        let subject = subject.into().trim().to_string();
        if subject.is_empty() {
            return Err(EntryError::EmptySubject);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            subject,
            context: context.into(),
            scheduled_time,
            line_time,
            arrived_time: None,
            wagers: vec![],
            settled: false,
        })
    }

    /// Current lifecycle state
    pub fn status(&self) -> EntryStatus {
        match (self.arrived_time, self.settled) {
            (None, _) => EntryStatus::Open,
            (Some(_), false) => EntryStatus::Arrived,
            (Some(_), true) => EntryStatus::Settled,
        }
    }

    /// True while wagers may still be placed
    pub fn is_open(&self) -> bool {
        self.arrived_time.is_none()
    }

    /// Append a wager token; only allowed while the entry is open
    pub fn place(&mut self, wager: &Wager) -> Result<(), EntryError> {
        if !self.is_open() {
            return Err(EntryError::Closed(self.id));
        }
        self.wagers.push(encode(wager));
        Ok(())
    }

    /// Record the actual arrival time; allowed exactly once
    pub fn record_arrival(&mut self, arrived_time: DateTime<Utc>) -> Result<(), EntryError> {
        if self.arrived_time.is_some() {
            return Err(EntryError::AlreadyArrived(self.id));
        }
        self.arrived_time = Some(arrived_time);
        Ok(())
    }

    /// Arrival minus scheduled time, once arrived
    pub fn lateness(&self) -> Option<chrono::Duration> {
        self.arrived_time.map(|t| t - self.scheduled_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wager::Side;
    use chrono::{Duration, TimeZone};

    fn call_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap()
    }

    fn create_test_entry() -> Entry {
        Entry::new(
            "alice",
            "dress rehearsal",
            call_time(),
            call_time() + Duration::minutes(5),
        )
        .unwrap()
    }

    #[test]
    fn test_entry_creation() {
        let entry = create_test_entry();
        assert_eq!(entry.subject, "alice");
        assert_eq!(entry.context, "dress rehearsal");
        assert_eq!(entry.status(), EntryStatus::Open);
        assert!(entry.wagers.is_empty());
        assert!(!entry.settled);
    }

    #[test]
    fn test_entry_rejects_blank_subject() {
        let result = Entry::new("   ", "", call_time(), call_time());
        assert_eq!(result, Err(EntryError::EmptySubject));
    }

    #[test]
    fn test_entry_trims_subject() {
        let entry = Entry::new(" alice ", "", call_time(), call_time()).unwrap();
        assert_eq!(entry.subject, "alice");
    }

    #[test]
    fn test_place_appends_tokens_in_order() {
        let mut entry = create_test_entry();
        entry
            .place(&Wager::new("bob", Side::Over, 30).unwrap())
            .unwrap();
        entry
            .place(&Wager::new("dave", Side::Under, 40).unwrap())
            .unwrap();
        assert_eq!(entry.wagers, vec!["bob^30", "dave_40"]);
    }

    #[test]
    fn test_place_after_arrival_rejected() {
        let mut entry = create_test_entry();
        entry.record_arrival(call_time()).unwrap();

        let result = entry.place(&Wager::new("bob", Side::Over, 30).unwrap());
        assert_eq!(result, Err(EntryError::Closed(entry.id)));
        assert!(entry.wagers.is_empty());
    }

    #[test]
    fn test_record_arrival_once() {
        let mut entry = create_test_entry();
        let arrived = call_time() + Duration::minutes(7);
        entry.record_arrival(arrived).unwrap();
        assert_eq!(entry.status(), EntryStatus::Arrived);
        assert_eq!(entry.lateness(), Some(Duration::minutes(7)));

        let again = entry.record_arrival(call_time());
        assert_eq!(again, Err(EntryError::AlreadyArrived(entry.id)));
        assert_eq!(entry.arrived_time, Some(arrived));
    }

    #[test]
    fn test_status_settled() {
        let mut entry = create_test_entry();
        entry.record_arrival(call_time()).unwrap();
        entry.settled = true;
        assert_eq!(entry.status(), EntryStatus::Settled);
    }

    #[test]
    fn test_entry_serde_defaults() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{
                "id": "{id}",
                "subject": "alice",
                "scheduled_time": "2024-03-01T19:00:00Z",
                "line_time": "2024-03-01T19:05:00Z"
            }}"#
        );
        let entry: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.context, "");
        assert!(entry.arrived_time.is_none());
        assert!(entry.wagers.is_empty());
        assert!(!entry.settled);
    }
}
