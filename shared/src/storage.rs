//! Key-value persistence used by the progress store.
//!
//! Values are JSON text under fixed string keys, except `lastUpdateDate`
//! which is stored as a raw date string.

use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub const COMPLETED_CHALLENGES_KEY: &str = "completedChallenges";
pub const TOTAL_POINTS_KEY: &str = "totalPoints";
pub const UNLOCKED_ACHIEVEMENTS_KEY: &str = "unlockedAchievements";
pub const CUSTOM_CHALLENGES_KEY: &str = "customChallenges";
pub const LAST_UPDATE_DATE_KEY: &str = "lastUpdateDate";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {key}: {message}")]
    Read { key: String, message: String },
    #[error("Failed to write {key}: {message}")]
    Write { key: String, message: String },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String-keyed storage medium. Browser `localStorage` in the app, memory in tests.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes all fail, like a browser over its storage quota.
    pub fn read_only() -> Self {
        Self {
            entries: HashMap::new(),
            reject_writes: true,
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and decodes a JSON value. Missing keys, read failures and malformed
/// JSON all come back as `None`.
pub fn read_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("{}", e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed value under {}: {}", key, e);
            None
        }
    }
}

fn try_write_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set_raw(key, &json)
}

/// Fire-and-forget write: failures are logged and the caller carries on.
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    match try_write_json(store, key, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Progress not saved: {}", e);
            false
        }
    }
}

pub fn read_string<S>(store: &S, key: &str) -> Option<String>
where
    S: KeyValueStore + ?Sized,
{
    match store.get_raw(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

pub fn write_string<S>(store: &mut S, key: &str, value: &str) -> bool
where
    S: KeyValueStore + ?Sized,
{
    match store.set_raw(key, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Progress not saved: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(read_json::<Vec<i64>, _>(&store, COMPLETED_CHALLENGES_KEY), None);
    }

    #[test]
    fn test_read_json_malformed_value_falls_back() {
        let store = MemoryStore::new().with_entry(COMPLETED_CHALLENGES_KEY, "[1, 2,");
        assert_eq!(read_json::<Vec<i64>, _>(&store, COMPLETED_CHALLENGES_KEY), None);

        let store = MemoryStore::new().with_entry(TOTAL_POINTS_KEY, "\"lots\"");
        assert_eq!(read_json::<u64, _>(&store, TOTAL_POINTS_KEY), None);
    }

    #[test]
    fn test_write_json_uses_plain_json_text() {
        let mut store = MemoryStore::new();
        assert!(write_json(&mut store, COMPLETED_CHALLENGES_KEY, &[3i64, 1]));
        assert!(write_json(&mut store, TOTAL_POINTS_KEY, &125u64));

        assert_eq!(store.get(COMPLETED_CHALLENGES_KEY), Some("[3,1]"));
        assert_eq!(store.get(TOTAL_POINTS_KEY), Some("125"));
        assert_eq!(read_json::<Vec<i64>, _>(&store, COMPLETED_CHALLENGES_KEY), Some(vec![3, 1]));
    }

    #[test]
    fn test_read_only_store_rejects_writes() {
        let mut store = MemoryStore::read_only();
        assert!(!write_json(&mut store, TOTAL_POINTS_KEY, &1u64));
        assert!(!write_string(&mut store, LAST_UPDATE_DATE_KEY, "Fri Mar 21 2025"));
        assert!(matches!(
            try_write_json(&mut store, TOTAL_POINTS_KEY, &1u64),
            Err(StorageError::Write { .. })
        ));
        assert!(store.get(TOTAL_POINTS_KEY).is_none());
    }

    #[test]
    fn test_raw_date_string_round_trip() {
        let mut store = MemoryStore::new();
        assert!(write_string(&mut store, LAST_UPDATE_DATE_KEY, "Fri Mar 21 2025"));
        assert_eq!(
            read_string(&store, LAST_UPDATE_DATE_KEY).as_deref(),
            Some("Fri Mar 21 2025")
        );
    }
}
