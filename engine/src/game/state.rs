use std::collections::HashSet;

use crate::{log, SessionRng};
use super::ai::AiPlayer;
use super::clock::frame_interval_ms;
use super::collision::{self, CollisionKind, CollisionVerdict};
use super::events::{Competitor, GameEvent};
use super::grid::{Grid, PLACEMENT_ATTEMPTS};
use super::power_ups::{EffectTarget, PlayerVisibility, PowerUpKind, PowerUps};
use super::scoring;
use super::settings::SessionSettings;
use super::snake::Snake;
use super::types::{Difficulty, Point};

/// Food position before the first placement.
const INITIAL_FOOD: Point = Point { x: 15, y: 15 };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    PlayerDied(CollisionKind),
}

/// Everything that changes while a session runs. Mutated only by
/// `GameSession`.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub difficulty: Difficulty,
    pub player: Snake,
    pub player_score: u32,
    pub ai: Option<AiPlayer>,
    pub food: Point,
    pub power_ups: PowerUps,
    pub target_fps: f64,
}

impl GameState {
    pub fn new(settings: &SessionSettings) -> Self {
        let grid = Grid::new(settings.tile_count);
        let ai = settings
            .ai_enabled
            .then(|| AiPlayer::new(&grid, settings.ai_difficulty));

        Self {
            grid,
            difficulty: settings.difficulty,
            player: Snake::new(grid.center()),
            player_score: 0,
            ai,
            food: grid.clamp(INITIAL_FOOD),
            power_ups: PowerUps::new(),
            target_fps: settings.difficulty.target_fps(),
        }
    }

    pub fn frame_interval_ms(&self) -> f64 {
        frame_interval_ms(self.target_fps)
    }

    pub fn ai_score(&self) -> Option<u32> {
        self.ai.as_ref().map(|ai| ai.score)
    }

    pub fn player_visibility(&self, now_ms: u64) -> PlayerVisibility {
        self.power_ups.player_visibility(now_ms)
    }

    fn snake_cells(&self) -> HashSet<Point> {
        let mut cells: HashSet<Point> = self.player.segments().collect();
        if let Some(ai) = &self.ai {
            cells.extend(ai.snake.segments());
        }
        cells
    }

    /// Moves the food to a cell clear of both snakes and the spawned
    /// power-up, then rolls for a power-up spawn clear of the snakes and the
    /// new food.
    pub fn regenerate_food(&mut self, rng: &mut SessionRng, now_ms: u64, events: &mut Vec<GameEvent>) {
        let mut occupied = self.snake_cells();
        if let Some(spawned) = self.power_ups.spawned() {
            occupied.insert(spawned.position);
        }
        self.food = self.grid.random_free_cell(rng, &occupied, PLACEMENT_ATTEMPTS);
        log!("Food placed at ({}, {})", self.food.x, self.food.y);

        occupied.insert(self.food);
        if let Some(spawned) = self.power_ups.try_spawn(rng, &self.grid, &occupied, now_ms) {
            events.push(GameEvent::PowerUpSpawned(spawned));
        }
    }

    /// One simulation step: effect expiry, the player's move, the AI's move,
    /// then the player's head against the AI body.
    pub fn update(&mut self, now_ms: u64, rng: &mut SessionRng, events: &mut Vec<GameEvent>) -> TickOutcome {
        for kind in self.power_ups.expire(now_ms, &mut self.target_fps) {
            events.push(GameEvent::EffectExpired(kind));
        }

        if let Some(kind) = self.move_player(now_ms, rng, events) {
            return TickOutcome::PlayerDied(kind);
        }

        self.move_ai(now_ms, rng, events);

        let head = self.player.head();
        if self.ai.as_ref().is_some_and(|ai| ai.snake.contains(head)) {
            return TickOutcome::PlayerDied(CollisionKind::Opponent);
        }
        TickOutcome::Continue
    }

    /// Returns the fatal collision, if any. An idle snake does not move.
    fn move_player(&mut self, now_ms: u64, rng: &mut SessionRng, events: &mut Vec<GameEvent>) -> Option<CollisionKind> {
        self.player.apply_pending_direction();
        let next_head = self.player.next_head()?;

        let collision = collision::detect(next_head, &self.player, None, &self.grid);
        let shielded = self.power_ups.is_active(PowerUpKind::Shield, now_ms);
        match collision::resolve(collision, shielded) {
            CollisionVerdict::Clear => {}
            CollisionVerdict::Survived(kind) => {
                self.power_ups.consume_shield(now_ms);
                log!("Shield absorbed a hit: player {}", kind.describe());
                events.push(GameEvent::ShieldBroken);
                return None;
            }
            CollisionVerdict::Fatal(kind) => return Some(kind),
        }

        self.player.push_head(next_head);

        let ate_food = next_head == self.food;
        if ate_food {
            let double = self.power_ups.is_active(PowerUpKind::DoubleScore, now_ms);
            let points = scoring::player_food_award(self.difficulty, double);
            self.player_score += points;
            events.push(GameEvent::FoodEaten {
                by: Competitor::Player,
                points,
            });
            self.regenerate_food(rng, now_ms, events);
        }

        let picked = self.power_ups.check_pickup(
            next_head,
            now_ms,
            EffectTarget {
                snake: &mut self.player,
                score: &mut self.player_score,
                target_fps: &mut self.target_fps,
            },
        );
        if let Some(kind) = picked {
            events.push(GameEvent::PowerUpApplied(kind));
        }

        self.player.settle_tail(ate_food || picked.is_some());
        None
    }

    /// The AI dies into a reset instead of ending the session.
    fn move_ai(&mut self, now_ms: u64, rng: &mut SessionRng, events: &mut Vec<GameEvent>) {
        let difficulty = self.difficulty;
        let Some(ai) = self.ai.as_mut() else {
            return;
        };

        let direction = ai.next_direction(Some(&self.player), self.food, &self.grid, rng);
        let next_head = ai.snake.head().step(direction);
        if let Some(kind) = collision::detect(next_head, &ai.snake, Some(&self.player), &self.grid) {
            log!("AI {} with score {}, resetting", kind.describe(), ai.score);
            events.push(GameEvent::AiReset {
                reason: kind,
                final_score: ai.score,
            });
            ai.reset();
            return;
        }

        ai.snake.push_head(next_head);
        let ate_food = next_head == self.food;
        if ate_food {
            let points = scoring::ai_food_award(difficulty);
            ai.score += points;
            events.push(GameEvent::FoodEaten {
                by: Competitor::Ai,
                points,
            });
            self.regenerate_food(rng, now_ms, events);
        }

        let taken = self.power_ups.remove_at(next_head);
        if let Some(kind) = taken {
            log!("AI took {}", kind.name());
            events.push(GameEvent::PowerUpTakenByAi(kind));
        }

        if let Some(ai) = self.ai.as_mut() {
            ai.snake.settle_tail(ate_food || taken.is_some());
        }
    }

    #[cfg(test)]
    pub(crate) fn apply_power_up(&mut self, kind: PowerUpKind, now_ms: u64) {
        self.power_ups.apply(
            kind,
            now_ms,
            EffectTarget {
                snake: &mut self.player,
                score: &mut self.player_score,
                target_fps: &mut self.target_fps,
            },
        );
    }
}
