use super::types::Difficulty;

pub const MEGA_FOOD_POINTS: u32 = 5;
const DOUBLE_SCORE_MULTIPLIER: u32 = 2;

impl Difficulty {
    /// Points for one food item before any multiplier.
    pub fn food_points(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

fn multiplier(double_score: bool) -> u32 {
    if double_score { DOUBLE_SCORE_MULTIPLIER } else { 1 }
}

pub fn player_food_award(difficulty: Difficulty, double_score: bool) -> u32 {
    difficulty.food_points() * multiplier(double_score)
}

/// The AI scores off the same table but never benefits from power-ups.
pub fn ai_food_award(difficulty: Difficulty) -> u32 {
    difficulty.food_points()
}

pub fn mega_food_award(double_score: bool) -> u32 {
    MEGA_FOOD_POINTS * multiplier(double_score)
}
