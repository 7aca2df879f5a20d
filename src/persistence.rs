//! History persistence: a flat JSON log of drill results, newest first,
//! rewritten wholesale on every append, plus the cosmetic last-username
//! prefill. Constructed once at startup and passed to whatever needs
//! read/append access.

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use thiserror::Error;

use crate::drill_engine::models::DrillResult;

const APP_DIR: &str = "math_drill";
const HISTORY_FILE: &str = "drill_history.json";
const USERNAME_FILE: &str = "last_username.txt";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access the history store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    /// Store under the platform data directory, created on demand.
    pub fn open_default() -> Self {
        let dir = match dirs::data_local_dir() {
            Some(base) => base.join(APP_DIR),
            None => PathBuf::from("."),
        };
        let _ = fs::create_dir_all(&dir);
        HistoryStore { dir }
    }

    /// Store rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let _ = fs::create_dir_all(&dir);
        HistoryStore { dir }
    }

    fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    fn username_path(&self) -> PathBuf {
        self.dir.join(USERNAME_FILE)
    }

    /// The newest-first history list. A missing or malformed file reads
    /// as empty history; loading never fails.
    pub fn load(&self) -> Vec<DrillResult> {
        let path = self.history_path();
        if !path.exists() {
            return Vec::new();
        }
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "could not read {}: {err}; treating history as empty",
                    path.display()
                );
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(err) => {
                warn!(
                    "malformed history in {}: {err}; treating as empty",
                    path.display()
                );
                Vec::new()
            }
        }
    }

    /// Prepend one result and rewrite the whole log. Returns the updated
    /// list.
    pub fn append(&self, result: DrillResult) -> Result<Vec<DrillResult>, PersistenceError> {
        let mut history = self.load();
        history.insert(0, result);
        let json = serde_json::to_string_pretty(&history)?;
        fs::write(self.history_path(), json)?;
        debug!("history now holds {} records", history.len());
        Ok(history)
    }

    /// Drop the whole history by deleting the log file.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        let path = self.history_path();
        if path.exists() {
            fs::remove_file(&path)?;
            debug!("cleared history at {}", path.display());
        }
        Ok(())
    }

    /// Last display name used, for prefilling the login form only.
    pub fn load_last_username(&self) -> Option<String> {
        let name = fs::read_to_string(self.username_path()).ok()?;
        let name = name.trim().to_string();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    pub fn save_last_username(&self, name: &str) -> Result<(), PersistenceError> {
        fs::write(self.username_path(), name.trim())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_result(id: &str, score: u32) -> DrillResult {
        DrillResult {
            id: id.to_string(),
            date: Utc::now(),
            username: "mio".to_string(),
            operations: vec!["Addition".to_string()],
            problem_count: 0,
            correct_count: 0,
            time_limit_min: 5,
            time_spent_secs: 60,
            score,
            problems: Vec::new(),
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::with_dir(dir.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn append_keeps_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::with_dir(dir.path());

        store.append(sample_result("RS-1", 80)).unwrap();
        let history = store.append(sample_result("RS-2", 90)).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, "RS-2");
        assert_eq!(history[1].id, "RS-1");

        // The file round-trips to the same list.
        assert_eq!(store.load(), history);
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::with_dir(dir.path());
        fs::write(dir.path().join(HISTORY_FILE), "not json {").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn clear_removes_the_log() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::with_dir(dir.path());
        store.append(sample_result("RS-1", 100)).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_empty());
        // Clearing an already-empty store is fine.
        store.clear().unwrap();
    }

    #[test]
    fn last_username_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::with_dir(dir.path());
        assert_eq!(store.load_last_username(), None);
        store.save_last_username("  hana ").unwrap();
        assert_eq!(store.load_last_username(), Some("hana".to_string()));
    }
}
