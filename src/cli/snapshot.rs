//! Entry snapshot files
//!
//! A snapshot is a JSON object mapping entry id to entry.

use crate::entry::Entries;
use anyhow::Context;
use std::path::Path;

/// Read an entry snapshot
pub fn load_entries(path: impl AsRef<Path>) -> anyhow::Result<Entries> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read entries from {}", path.display()))?;
    let entries: Entries = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse entries in {}", path.display()))?;

    for (id, entry) in &entries {
        anyhow::ensure!(
            *id == entry.id,
            "Entry keyed {} carries id {}",
            id,
            entry.id
        );
    }

    tracing::debug!(count = entries.len(), path = %path.display(), "Loaded entries");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use chrono::{TimeZone, Utc};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_snapshot(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_round_trip() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap();
        let entry = Entry::new("alice", "tech", t, t).unwrap();
        let mut entries = Entries::new();
        entries.insert(entry.id, entry.clone());

        let file = write_snapshot(&serde_json::to_string_pretty(&entries).unwrap());
        let loaded = load_entries(file.path()).unwrap();

        assert_eq!(loaded.get(&entry.id), Some(&entry));
    }

    #[test]
    fn test_load_rejects_mismatched_key() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap();
        let entry = Entry::new("alice", "", t, t).unwrap();
        let other = uuid::Uuid::new_v4();
        let json = serde_json::json!({ other.to_string(): entry });

        let file = write_snapshot(&json.to_string());
        assert!(load_entries(file.path()).is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_snapshot("not json");
        assert!(load_entries(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_entries("/nonexistent/entries.json").is_err());
    }
}
