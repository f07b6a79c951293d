use serde::{Deserialize, Serialize};

use crate::game::Difficulty;
use super::Validate;

pub const SETTINGS_KEY: &str = "settings";
pub const MAX_THEME_LEN: usize = 32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl GameSize {
    pub fn tile_count(self) -> u32 {
        match self {
            GameSize::Small => 15,
            GameSize::Medium => 20,
            GameSize::Large => 25,
        }
    }
}

/// Player preferences kept between sessions. Fields missing from the stored
/// record take their defaults.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub theme: String,
    pub sound_enabled: bool,
    pub game_size: GameSize,
    pub ai_enabled: bool,
    pub ai_difficulty: Difficulty,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            theme: "default".to_string(),
            sound_enabled: true,
            game_size: GameSize::Medium,
            ai_enabled: false,
            ai_difficulty: Difficulty::Easy,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.theme.trim().is_empty() {
            return Err("theme must not be empty".to_string());
        }
        if self.theme.len() > MAX_THEME_LEN {
            return Err(format!("theme must be at most {} characters", MAX_THEME_LEN));
        }
        Ok(())
    }
}
