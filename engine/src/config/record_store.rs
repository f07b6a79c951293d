use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// Key-value storage for serialized records. Reading a key that was never
/// written yields `Ok(None)`.
pub trait RecordStore {
    fn read(&self, key: &str) -> Result<Option<String>, String>;
    fn write(&self, key: &str, content: &str) -> Result<(), String>;
}

/// One `<key>.yaml` file per record under `dir`.
#[derive(Clone, Debug)]
pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.yaml", key))
    }
}

impl RecordStore for FileRecordStore {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("Failed to read {}: {}", path.display(), e)),
        }
    }

    fn write(&self, key: &str, content: &str) -> Result<(), String> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create {}: {}", self.dir.display(), e))?;
        let path = self.path_for(key);
        std::fs::write(&path, content).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }
}

/// Shared in-memory store; clones see the same records.
#[derive(Clone, Debug, Default)]
pub struct MemoryRecordStore {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(key).cloned())
    }

    fn write(&self, key: &str, content: &str) -> Result<(), String> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.insert(key.to_string(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("snake_arena_records_{}", random_number))
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let store = FileRecordStore::new(temp_dir());
        assert_eq!(store.read("settings"), Ok(None));
    }

    #[test]
    fn test_file_store_round_trip_creates_dir() {
        let dir = temp_dir();
        let store = FileRecordStore::new(&dir);
        store.write("scoreboard", "[]\n").unwrap();
        assert!(store.path_for("scoreboard").ends_with("scoreboard.yaml"));
        assert_eq!(store.read("scoreboard"), Ok(Some("[]\n".to_string())));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_memory_store_clones_share_records() {
        let store = MemoryRecordStore::new();
        let other = store.clone();
        store.write("settings", "theme: dark").unwrap();
        assert_eq!(other.read("settings"), Ok(Some("theme: dark".to_string())));
        assert_eq!(other.read("scoreboard"), Ok(None));
    }
}
