use serde::{de::DeserializeOwned, Serialize};

pub trait RecordSerializer<TRecord> {
    fn serialize(&self, record: &TRecord) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TRecord, String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct YamlRecordSerializer;

impl YamlRecordSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TRecord> RecordSerializer<TRecord> for YamlRecordSerializer
where
    TRecord: DeserializeOwned + Serialize,
{
    fn serialize(&self, record: &TRecord) -> Result<String, String> {
        serde_yaml_ng::to_string(record).map_err(|e| format!("Failed to serialize record: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TRecord, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize record: {}", e))
    }
}
