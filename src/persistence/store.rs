use crate::persistence::{atomic_write, read_file};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// String key-value store for the event fields.
///
/// Values are raw strings: no schema, no versioning, no validation. The
/// app reads "eventName"/"eventDate" at startup and writes them back on
/// every change.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: a flat JSON object in state.json, rewritten
/// atomically on every set.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store at the given path. A missing or unreadable file loads
    /// as empty - stored garbage is never repaired, callers just see no
    /// value and fall back to their defaults.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = read_file(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        Self { path, entries }
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        atomic_write(&self.path, &json)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory store, for tests and anywhere persistence is unwanted
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("eventName"), None);

        store.set("eventName", "Launch day").unwrap();
        store.set("eventDate", "2026-03-01").unwrap();

        // Re-open from disk
        let store = FileStore::open(&path);
        assert_eq!(store.get("eventName"), Some("Launch day".to_string()));
        assert_eq!(store.get("eventDate"), Some("2026-03-01".to_string()));
    }

    #[test]
    fn test_file_store_set_overwrites() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("eventDate", "2026-03-01").unwrap();
        store.set("eventDate", "2027-01-01").unwrap();

        assert_eq!(store.get("eventDate"), Some("2027-01-01".to_string()));
    }

    #[test]
    fn test_file_store_corrupt_file_loads_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("eventName"), None);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("eventName"), None);

        store.set("eventName", "Birthday").unwrap();
        assert_eq!(store.get("eventName"), Some("Birthday".to_string()));
    }
}
