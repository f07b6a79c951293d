use crate::{log, SessionRng};
use super::clock::FrameClock;
use super::collision::CollisionKind;
use super::events::{EndReason, GameEvent};
use super::renderer::{FrameView, Renderer};
use super::settings::SessionSettings;
use super::state::{GameState, TickOutcome};
use super::types::Direction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    Paused,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No session is running; the host should stop scheduling frames.
    Stopped,
    Paused,
    /// Too early for the next tick.
    Skipped,
    Ticked,
    GameOver(CollisionKind),
}

impl FrameOutcome {
    pub fn keeps_running(self) -> bool {
        !matches!(self, FrameOutcome::Stopped | FrameOutcome::GameOver(_))
    }
}

/// Host-to-session messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Direction),
    TogglePause,
    DespawnPowerUp { token: u64 },
    End,
}

pub struct GameSession {
    settings: SessionSettings,
    state: GameState,
    phase: SessionPhase,
    clock: FrameClock,
    rng: SessionRng,
    events: Vec<GameEvent>,
    end_reason: Option<EndReason>,
}

impl GameSession {
    pub fn new(settings: SessionSettings, rng: SessionRng) -> Self {
        Self {
            state: GameState::new(&settings),
            settings,
            phase: SessionPhase::Idle,
            clock: FrameClock::new(),
            rng,
            events: Vec::new(),
            end_reason: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn score(&self) -> u32 {
        self.state.player_score
    }

    /// Resets the board and places the first food. Valid from any phase.
    pub fn start(&mut self, now_ms: u64) {
        self.state = GameState::new(&self.settings);
        self.clock.reset();
        self.end_reason = None;
        self.events.push(GameEvent::SessionStarted { seed: self.rng.seed() });
        self.state.regenerate_food(&mut self.rng, now_ms, &mut self.events);
        self.phase = SessionPhase::Running;
        log!(
            "Session started: {} board, {} difficulty, AI {}",
            self.settings.tile_count,
            self.settings.difficulty.label(),
            match self.state.ai {
                Some(ref ai) => ai.difficulty.label(),
                None => "off",
            }
        );
    }

    /// Queues a player turn. Ignored unless running, and for reversals.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        self.state.player.request_direction(direction)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            SessionPhase::Running => SessionPhase::Paused,
            SessionPhase::Paused => SessionPhase::Running,
            SessionPhase::Idle | SessionPhase::Over => return false,
        };
        log!("Session {}", if self.phase == SessionPhase::Paused { "paused" } else { "resumed" });
        true
    }

    pub fn end(&mut self) -> bool {
        match self.phase {
            SessionPhase::Running | SessionPhase::Paused => {
                self.finish(EndReason::Ended);
                true
            }
            SessionPhase::Idle | SessionPhase::Over => false,
        }
    }

    /// Lifetime timer for a spawned power-up. Stale tokens are ignored.
    pub fn despawn_power_up(&mut self, token: u64) -> bool {
        match self.state.power_ups.despawn(token) {
            Some(kind) => {
                self.events.push(GameEvent::PowerUpDespawned(kind));
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::Turn(direction) => self.turn(direction),
            SessionCommand::TogglePause => self.toggle_pause(),
            SessionCommand::DespawnPowerUp { token } => self.despawn_power_up(token),
            SessionCommand::End => self.end(),
        }
    }

    /// Host frame callback. Runs at most one tick, and only once the current
    /// frame interval has elapsed since the previous tick.
    pub fn on_frame(&mut self, now_ms: u64, renderer: &mut impl Renderer) -> FrameOutcome {
        match self.phase {
            SessionPhase::Idle | SessionPhase::Over => return FrameOutcome::Stopped,
            SessionPhase::Paused => {
                self.render(now_ms, renderer);
                return FrameOutcome::Paused;
            }
            SessionPhase::Running => {}
        }

        if !self.clock.is_due(now_ms, self.state.frame_interval_ms()) {
            return FrameOutcome::Skipped;
        }
        self.clock.mark_tick(now_ms);

        let outcome = match self.state.update(now_ms, &mut self.rng, &mut self.events) {
            TickOutcome::Continue => FrameOutcome::Ticked,
            TickOutcome::PlayerDied(kind) => {
                log!("Player {}", kind.describe());
                self.finish(EndReason::Collision(kind));
                FrameOutcome::GameOver(kind)
            }
        };
        self.render(now_ms, renderer);
        outcome
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn render(&self, now_ms: u64, renderer: &mut impl Renderer) {
        renderer.render(&FrameView {
            state: &self.state,
            phase: self.phase,
            now_ms,
        });
    }

    fn finish(&mut self, reason: EndReason) {
        self.phase = SessionPhase::Over;
        self.end_reason = Some(reason);
        let score = self.state.player_score;
        self.events.push(GameEvent::SessionOver { reason, score });
        log!("Session over with score {}", score);
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
