mod record_manager;
mod record_serializer;
mod record_store;
mod scoreboard;
mod settings;
mod validate;

pub use record_manager::RecordManager;
pub use record_serializer::{RecordSerializer, YamlRecordSerializer};
pub use record_store::{FileRecordStore, MemoryRecordStore, RecordStore};
pub use scoreboard::{ScoreEntry, Scoreboard, MAX_SCOREBOARD_ENTRIES, SCOREBOARD_KEY};
pub use settings::{GameSettings, GameSize, MAX_THEME_LEN, SETTINGS_KEY};
pub use validate::Validate;
