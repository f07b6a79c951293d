mod ai;
mod clock;
mod collision;
mod events;
mod grid;
mod power_ups;
mod renderer;
mod scoring;
mod session;
mod settings;
mod snake;
mod state;
mod types;

pub use ai::{suggest_player_move, AiController, AiInput, AiMove, AiPlayer, AI_START};
pub use clock::{frame_interval_ms, slowed_fps, FrameClock, MIN_TARGET_FPS};
pub use collision::{CollisionKind, CollisionVerdict};
pub use events::{Competitor, EndReason, GameEvent};
pub use grid::{manhattan, Grid};
pub use power_ups::{
    ActiveEffect, PlayerVisibility, PowerUpKind, PowerUps, SpawnedPowerUp, POWER_UP_LIFETIME_MS,
};
pub use renderer::{FrameView, Renderer};
pub use scoring::MEGA_FOOD_POINTS;
pub use session::{FrameOutcome, GameSession, SessionCommand, SessionPhase};
pub use settings::SessionSettings;
pub use snake::Snake;
pub use state::{GameState, TickOutcome};
pub use types::{Difficulty, Direction, Point};
