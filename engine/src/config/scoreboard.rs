use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::game::Difficulty;
use super::Validate;

pub const SCOREBOARD_KEY: &str = "scoreboard";
pub const MAX_SCOREBOARD_ENTRIES: usize = 10;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub difficulty: Difficulty,
    pub date: String,
}

impl ScoreEntry {
    /// Entry dated today.
    pub fn new(name: &str, score: u32, difficulty: Difficulty) -> Self {
        Self {
            name: name.to_string(),
            score,
            difficulty,
            date: Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Top scores, best first, stored as a plain YAML list.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        match self.entries.get(MAX_SCOREBOARD_ENTRIES - 1) {
            Some(last) => score > last.score,
            None => true,
        }
    }

    /// Inserts behind any equal scores and keeps the best ten. Returns the
    /// 1-based rank, or `None` if the entry did not make the board.
    pub fn add(&mut self, entry: ScoreEntry) -> Option<usize> {
        let position = self
            .entries
            .iter()
            .position(|existing| existing.score < entry.score)
            .unwrap_or(self.entries.len());
        if position >= MAX_SCOREBOARD_ENTRIES {
            return None;
        }
        self.entries.insert(position, entry);
        self.entries.truncate(MAX_SCOREBOARD_ENTRIES);
        Some(position + 1)
    }

    pub fn add_score(&mut self, name: &str, score: u32, difficulty: Difficulty) -> Option<usize> {
        self.add(ScoreEntry::new(name, score, difficulty))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Validate for Scoreboard {
    fn validate(&self) -> Result<(), String> {
        if self.entries.len() > MAX_SCOREBOARD_ENTRIES {
            return Err(format!(
                "scoreboard holds {} entries, at most {} allowed",
                self.entries.len(),
                MAX_SCOREBOARD_ENTRIES
            ));
        }
        if self.entries.iter().any(|entry| entry.name.trim().is_empty()) {
            return Err("scoreboard entry name must not be empty".to_string());
        }
        if self.entries.windows(2).any(|pair| pair[0].score < pair[1].score) {
            return Err("scoreboard must be sorted by score, best first".to_string());
        }
        Ok(())
    }
}
