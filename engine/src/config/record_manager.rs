use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::log;
use super::{FileRecordStore, RecordSerializer, RecordStore, Validate, YamlRecordSerializer};

pub struct RecordManager<TStore, TRecord, TSerializer = YamlRecordSerializer>
where
    TStore: RecordStore,
    TRecord: Clone + DeserializeOwned + Serialize + Validate + Default,
    TSerializer: RecordSerializer<TRecord>,
{
    key: String,
    store: TStore,
    serializer: TSerializer,
    cached: Arc<Mutex<Option<TRecord>>>,
}

impl<TRecord> RecordManager<FileRecordStore, TRecord, YamlRecordSerializer>
where
    TRecord: Clone + DeserializeOwned + Serialize + Validate + Default,
{
    pub fn yaml_in_dir(dir: impl Into<PathBuf>, key: &str) -> Self {
        Self::new(FileRecordStore::new(dir), YamlRecordSerializer::new(), key)
    }
}

impl<TStore, TRecord, TSerializer> RecordManager<TStore, TRecord, TSerializer>
where
    TStore: RecordStore,
    TRecord: Clone + DeserializeOwned + Serialize + Validate + Default,
    TSerializer: RecordSerializer<TRecord>,
{
    pub fn new(store: TStore, serializer: TSerializer, key: &str) -> Self {
        Self {
            key: key.to_string(),
            store,
            serializer,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    /// Reads, parses and validates the stored record. A missing record is
    /// the default; unreadable or invalid content is an error.
    pub fn get(&self) -> Result<TRecord, String> {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(record) = cached.as_ref() {
            return Ok(record.clone());
        }

        let Some(content) = self.store.read(&self.key)? else {
            return Ok(TRecord::default());
        };
        let record = self.serializer.deserialize(&content)?;
        record
            .validate()
            .map_err(|e| format!("Record '{}' validation error: {}", self.key, e))?;

        *cached = Some(record.clone());
        Ok(record)
    }

    /// Like `get`, but corrupt or invalid content falls back to the default.
    pub fn load(&self) -> TRecord {
        match self.get() {
            Ok(record) => record,
            Err(e) => {
                log!("Using default '{}' record: {}", self.key, e);
                TRecord::default()
            }
        }
    }

    pub fn save(&self, record: &TRecord) -> Result<(), String> {
        record
            .validate()
            .map_err(|e| format!("Record '{}' validation error: {}", self.key, e))?;

        let content = self.serializer.serialize(record)?;
        self.store.write(&self.key, &content)?;

        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        *cached = Some(record.clone());
        log!("Saved '{}' record", self.key);
        Ok(())
    }
}
