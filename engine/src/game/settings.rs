use crate::config::GameSettings;
use super::types::Difficulty;

/// The subset of the saved settings that shapes a session. Fixed from
/// `start` until the session is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub tile_count: u32,
    pub difficulty: Difficulty,
    pub ai_enabled: bool,
    pub ai_difficulty: Difficulty,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&GameSettings::default())
    }
}

impl From<&GameSettings> for SessionSettings {
    fn from(settings: &GameSettings) -> Self {
        Self {
            tile_count: settings.game_size.tile_count(),
            difficulty: settings.difficulty,
            ai_enabled: settings.ai_enabled,
            ai_difficulty: settings.ai_difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSize;

    #[test]
    fn test_from_saved_settings() {
        let saved = GameSettings {
            difficulty: Difficulty::Hard,
            game_size: GameSize::Large,
            ai_enabled: true,
            ai_difficulty: Difficulty::Medium,
            ..GameSettings::default()
        };
        let settings = SessionSettings::from(&saved);
        assert_eq!(settings.tile_count, 25);
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert!(settings.ai_enabled);
        assert_eq!(settings.ai_difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_default_is_medium_board_easy_solo() {
        let settings = SessionSettings::default();
        assert_eq!(settings.tile_count, 20);
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert!(!settings.ai_enabled);
    }
}
