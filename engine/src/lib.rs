//! Simulation core for the snake arena: grid, snakes, power-ups, the greedy
//! AI opponent, the frame clock and the session state machine, plus the
//! settings/scoreboard records the host persists between sessions.

pub mod config;
pub mod game;
pub mod logger;
pub mod names;
mod session_rng;

pub use session_rng::SessionRng;
