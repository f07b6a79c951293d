use super::types::Difficulty;

pub const MIN_TARGET_FPS: f64 = 3.0;

impl Difficulty {
    /// Simulation ticks per second.
    pub fn target_fps(self) -> f64 {
        match self {
            Difficulty::Easy => 8.0,
            Difficulty::Medium => 12.0,
            Difficulty::Hard => 18.0,
        }
    }
}

pub fn slowed_fps(fps: f64) -> f64 {
    (fps * 0.5).max(MIN_TARGET_FPS)
}

pub fn frame_interval_ms(fps: f64) -> f64 {
    1000.0 / fps.max(MIN_TARGET_FPS)
}

/// Gate between host frames and simulation ticks. At most one tick is
/// accepted per frame and late frames never queue catch-up ticks.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_tick_at_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_due(&self, now_ms: u64, interval_ms: f64) -> bool {
        match self.last_tick_at_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) as f64 >= interval_ms,
        }
    }

    pub fn mark_tick(&mut self, now_ms: u64) {
        self.last_tick_at_ms = Some(now_ms);
    }

    pub fn reset(&mut self) {
        self.last_tick_at_ms = None;
    }
}
