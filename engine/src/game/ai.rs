use crate::SessionRng;
use super::grid::{manhattan, Grid};
use super::snake::Snake;
use super::state::GameState;
use super::types::{Difficulty, Direction, Point};

/// Where the AI snake (re)starts.
pub const AI_START: Point = Point { x: 5, y: 5 };
/// Chance that the easy AI takes a strictly closer move when it sees one.
pub const EASY_ADOPT_CHANCE: f64 = 0.7;

pub struct AiInput<'a> {
    pub snake: &'a Snake,
    pub opponent: Option<&'a Snake>,
    pub food: Point,
    pub grid: &'a Grid,
    pub last_direction: Option<Direction>,
    pub difficulty: Difficulty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiMove {
    /// Best safe move toward the food.
    Greedy(Direction),
    /// No safe move existed; delays death by one tick at best.
    Fallback(Direction),
}

impl AiMove {
    pub fn direction(self) -> Direction {
        match self {
            AiMove::Greedy(direction) | AiMove::Fallback(direction) => direction,
        }
    }
}

pub struct AiController;

impl AiController {
    pub fn calculate_move(input: &AiInput<'_>, rng: &mut SessionRng) -> AiMove {
        let head = input.snake.head();
        let safe_moves: Vec<Direction> = Direction::MOVES
            .into_iter()
            .filter(|&dir| Self::is_safe_move(head, dir, input))
            .collect();

        let Some(&first) = safe_moves.first() else {
            return AiMove::Fallback(Self::fallback_move(head, input.grid));
        };

        let mut best_dir = first;
        let mut best_distance = manhattan(head.step(first), input.food);

        for dir in safe_moves {
            let distance = manhattan(head.step(dir), input.food);
            if distance >= best_distance {
                continue;
            }
            let adopt = match input.difficulty {
                Difficulty::Easy => rng.chance(EASY_ADOPT_CHANCE),
                Difficulty::Medium | Difficulty::Hard => true,
            };
            if adopt {
                best_distance = distance;
                best_dir = dir;
            }
        }

        AiMove::Greedy(best_dir)
    }

    fn is_safe_move(head: Point, dir: Direction, input: &AiInput<'_>) -> bool {
        if let Some(last) = input.last_direction
            && dir.is_opposite(&last)
        {
            return false;
        }

        let next_pos = head.step(dir);
        if !input.grid.in_bounds(next_pos) || input.snake.contains(next_pos) {
            return false;
        }
        !input.opponent.is_some_and(|other| other.contains(next_pos))
    }

    fn fallback_move(head: Point, grid: &Grid) -> Direction {
        Direction::MOVES
            .into_iter()
            .find(|&dir| grid.in_bounds(head.step(dir)))
            .unwrap_or(Direction::Down)
    }
}

/// Steers the player with the hard greedy policy (used by autopilot).
/// Returns `None` when only a fallback move is left, so the snake keeps its
/// current heading.
pub fn suggest_player_move(state: &GameState, rng: &mut SessionRng) -> Option<Direction> {
    let current = state.player.direction();
    let input = AiInput {
        snake: &state.player,
        opponent: state.ai.as_ref().map(|ai| &ai.snake),
        food: state.food,
        grid: &state.grid,
        last_direction: (!current.is_idle()).then_some(current),
        difficulty: Difficulty::Hard,
    };
    match AiController::calculate_move(&input, rng) {
        AiMove::Greedy(direction) => Some(direction),
        AiMove::Fallback(_) => None,
    }
}

/// The computer-controlled competitor.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    pub snake: Snake,
    pub score: u32,
    pub difficulty: Difficulty,
    start: Point,
    last_direction: Option<Direction>,
}

impl AiPlayer {
    /// Starts at `AI_START` pulled onto the board. Where that lands on the
    /// player's centre cell the AI starts one row up instead; a 1-tile grid
    /// has no other cell, so both snakes share it there.
    pub fn new(grid: &Grid, difficulty: Difficulty) -> Self {
        let mut start = grid.clamp(AI_START);
        if start == grid.center() {
            start = grid.clamp(start.step(Direction::Up));
        }
        Self {
            snake: Snake::new(start),
            score: 0,
            difficulty,
            start,
            last_direction: None,
        }
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Picks and commits this tick's direction. Only greedy choices are
    /// remembered for the reversal filter.
    pub fn next_direction(
        &mut self,
        opponent: Option<&Snake>,
        food: Point,
        grid: &Grid,
        rng: &mut SessionRng,
    ) -> Direction {
        let input = AiInput {
            snake: &self.snake,
            opponent,
            food,
            grid,
            last_direction: self.last_direction,
            difficulty: self.difficulty,
        };
        let ai_move = AiController::calculate_move(&input, rng);
        if let AiMove::Greedy(dir) = ai_move {
            self.last_direction = Some(dir);
        }
        self.snake.set_direction(ai_move.direction());
        ai_move.direction()
    }

    /// Back to the start cell with no score; the session keeps running.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.start);
        self.score = 0;
        self.last_direction = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::from_segments(cells.iter().map(|&(x, y)| Point::new(x, y)).collect(), Direction::Idle)
            .unwrap()
    }

    fn input<'a>(
        snake: &'a Snake,
        opponent: Option<&'a Snake>,
        food: Point,
        grid: &'a Grid,
        difficulty: Difficulty,
    ) -> AiInput<'a> {
        AiInput {
            snake,
            opponent,
            food,
            grid,
            last_direction: None,
            difficulty,
        }
    }

    #[test]
    fn test_hard_ai_walks_straight_to_food() {
        let grid = Grid::new(20);
        let mut rng = SessionRng::new(42);
        let mut ai = AiPlayer::new(&grid, Difficulty::Hard);
        ai.snake = snake(&[(1, 1)]);
        let food = Point::new(5, 1);

        for step in 1..=4 {
            let dir = ai.next_direction(None, food, &grid, &mut rng);
            assert_eq!(dir, Direction::Right);
            let next = ai.snake.head().step(dir);
            ai.snake.push_head(next);
            ai.snake.settle_tail(false);
            assert_eq!(ai.snake.head(), Point::new(1 + step, 1));
        }
    }

    #[test]
    fn test_avoids_opponent_body() {
        let grid = Grid::new(20);
        let mut rng = SessionRng::new(1);
        let me = snake(&[(1, 1)]);
        let wall = snake(&[(2, 1), (2, 2), (2, 0)]);
        let chosen = AiController::calculate_move(
            &input(&me, Some(&wall), Point::new(5, 1), &grid, Difficulty::Hard),
            &mut rng,
        );
        assert!(matches!(chosen, AiMove::Greedy(d) if d != Direction::Right));
    }

    #[test]
    fn test_never_reverses_last_direction() {
        let grid = Grid::new(20);
        let mut rng = SessionRng::new(1);
        let me = snake(&[(5, 5)]);
        let mut ai_input = input(&me, None, Point::new(0, 5), &grid, Difficulty::Hard);
        ai_input.last_direction = Some(Direction::Right);

        let chosen = AiController::calculate_move(&ai_input, &mut rng);
        assert_ne!(chosen.direction(), Direction::Left);
        assert!(matches!(chosen, AiMove::Greedy(_)));
    }

    #[test]
    fn test_trapped_ai_falls_back_to_first_in_bounds_move() {
        let grid = Grid::new(20);
        let mut rng = SessionRng::new(1);
        // Head in the corner, boxed in by its own body.
        let me = snake(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let chosen = AiController::calculate_move(
            &input(&me, None, Point::new(10, 10), &grid, Difficulty::Hard),
            &mut rng,
        );
        assert_eq!(chosen, AiMove::Fallback(Direction::Down));
    }

    #[test]
    fn test_single_cell_grid_defaults_down() {
        let grid = Grid::new(1);
        let mut rng = SessionRng::new(1);
        let me = snake(&[(0, 0)]);
        let chosen = AiController::calculate_move(
            &input(&me, None, Point::new(0, 0), &grid, Difficulty::Easy),
            &mut rng,
        );
        assert_eq!(chosen, AiMove::Fallback(Direction::Down));
    }

    #[test]
    fn test_easy_ai_sometimes_hesitates() {
        let grid = Grid::new(20);
        let me = snake(&[(10, 10)]);
        // Food straight down; "up" is first in candidate order and worst.
        let food = Point::new(10, 15);
        let mut hesitated = 0;
        let mut optimal = 0;
        for seed in 0..200 {
            let mut rng = SessionRng::new(seed);
            let chosen = AiController::calculate_move(
                &input(&me, None, food, &grid, Difficulty::Easy),
                &mut rng,
            );
            if chosen.direction() == Direction::Down {
                optimal += 1;
            } else {
                hesitated += 1;
            }
        }
        assert!(optimal > 0);
        assert!(hesitated > 0);
    }

    #[test]
    fn test_fallback_does_not_update_last_direction() {
        let grid = Grid::new(20);
        let mut rng = SessionRng::new(1);
        let mut ai = AiPlayer::new(&grid, Difficulty::Hard);
        ai.snake = snake(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let dir = ai.next_direction(None, Point::new(9, 9), &grid, &mut rng);
        assert_eq!(dir, Direction::Down);
        assert_eq!(ai.last_direction(), None);
    }

    #[test]
    fn test_reset_restores_start() {
        let grid = Grid::new(20);
        let mut ai = AiPlayer::new(&grid, Difficulty::Easy);
        ai.score = 12;
        ai.snake = snake(&[(8, 8), (8, 9)]);
        ai.reset();
        assert_eq!(ai.snake.head(), AI_START);
        assert_eq!(ai.snake.len(), 1);
        assert_eq!(ai.score, 0);
    }
}
