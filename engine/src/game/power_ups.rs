use std::collections::HashSet;

use crate::{log, SessionRng};
use super::clock::slowed_fps;
use super::grid::{Grid, PLACEMENT_ATTEMPTS};
use super::scoring::mega_food_award;
use super::snake::Snake;
use super::types::Point;

/// Wall-clock lifetime of a power-up lying on the board.
pub const POWER_UP_LIFETIME_MS: u64 = 10_000;
/// Probability of a spawn attempt after each food pickup.
pub const POWER_UP_SPAWN_CHANCE: f64 = 0.3;
pub const MEGA_FOOD_GROWTH: u32 = 3;
pub const SHRINK_SEGMENTS: usize = 2;
/// SHRINK only bites when the snake is longer than this.
pub const SHRINK_MIN_LENGTH: usize = 3;
const INVISIBLE_BLINK_MS: u64 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    DoubleScore,
    SlowMotion,
    Invisible,
    MegaFood,
    Shrink,
    Shield,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::DoubleScore,
        PowerUpKind::SlowMotion,
        PowerUpKind::Invisible,
        PowerUpKind::MegaFood,
        PowerUpKind::Shrink,
        PowerUpKind::Shield,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PowerUpKind::DoubleScore => "Double Score",
            PowerUpKind::SlowMotion => "Slow Motion",
            PowerUpKind::Invisible => "Invisible",
            PowerUpKind::MegaFood => "Mega Food",
            PowerUpKind::Shrink => "Shrink",
            PowerUpKind::Shield => "Shield",
        }
    }

    /// Effect duration; zero means the effect is applied once on pickup.
    pub fn duration_ms(self) -> u64 {
        match self {
            PowerUpKind::DoubleScore => 10_000,
            PowerUpKind::SlowMotion => 8_000,
            PowerUpKind::Invisible => 5_000,
            PowerUpKind::MegaFood => 0,
            PowerUpKind::Shrink => 0,
            PowerUpKind::Shield => 15_000,
        }
    }

    pub fn is_instant(self) -> bool {
        self.duration_ms() == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnedPowerUp {
    pub position: Point,
    pub kind: PowerUpKind,
    pub spawned_at_ms: u64,
    /// Identifies this spawn so a late despawn timer cannot clear a newer one.
    pub token: u64,
}

impl SpawnedPowerUp {
    pub fn despawn_at_ms(&self) -> u64 {
        self.spawned_at_ms + POWER_UP_LIFETIME_MS
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    pub expires_at_ms: u64,
    /// Target FPS to restore when a SLOW_MOTION effect ends.
    pub restore_fps: Option<f64>,
}

impl ActiveEffect {
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at_ms.saturating_sub(now_ms)
    }
}

/// Everything a power-up may change when the player collects it.
pub struct EffectTarget<'a> {
    pub snake: &'a mut Snake,
    pub score: &'a mut u32,
    pub target_fps: &'a mut f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerVisibility {
    Full,
    HeadOnly,
    Hidden,
}

#[derive(Clone, Debug, Default)]
pub struct PowerUps {
    spawned: Option<SpawnedPowerUp>,
    active: Vec<ActiveEffect>,
    next_token: u64,
}

impl PowerUps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawned(&self) -> Option<&SpawnedPowerUp> {
        self.spawned.as_ref()
    }

    pub fn active_effects(&self) -> &[ActiveEffect] {
        &self.active
    }

    pub fn is_active(&self, kind: PowerUpKind, now_ms: u64) -> bool {
        self.active
            .iter()
            .any(|effect| effect.kind == kind && effect.expires_at_ms > now_ms)
    }

    /// Rolls the spawn chance and, when no power-up is on the board, places a
    /// random kind on a cell outside `occupied`.
    pub fn try_spawn(
        &mut self,
        rng: &mut SessionRng,
        grid: &Grid,
        occupied: &HashSet<Point>,
        now_ms: u64,
    ) -> Option<SpawnedPowerUp> {
        if self.spawned.is_some() || !rng.chance(POWER_UP_SPAWN_CHANCE) {
            return None;
        }
        Some(self.spawn(rng, grid, occupied, now_ms))
    }

    pub fn spawn(
        &mut self,
        rng: &mut SessionRng,
        grid: &Grid,
        occupied: &HashSet<Point>,
        now_ms: u64,
    ) -> SpawnedPowerUp {
        let kind = rng
            .pick(&PowerUpKind::ALL)
            .copied()
            .unwrap_or(PowerUpKind::DoubleScore);
        let position = grid.random_free_cell(rng, occupied, PLACEMENT_ATTEMPTS);
        self.place(kind, position, now_ms)
    }

    pub fn place(&mut self, kind: PowerUpKind, position: Point, now_ms: u64) -> SpawnedPowerUp {
        self.next_token += 1;
        let spawned = SpawnedPowerUp {
            position,
            kind,
            spawned_at_ms: now_ms,
            token: self.next_token,
        };
        self.spawned = Some(spawned);
        log!(
            "{} spawned at ({}, {}), despawns at {}ms",
            kind.name(),
            position.x,
            position.y,
            spawned.despawn_at_ms()
        );
        spawned
    }

    /// Lifetime timer callback. Ignored when the power-up it was armed for
    /// is already gone.
    pub fn despawn(&mut self, token: u64) -> Option<PowerUpKind> {
        match self.spawned {
            Some(spawned) if spawned.token == token => {
                self.spawned = None;
                log!("{} despawned", spawned.kind.name());
                Some(spawned.kind)
            }
            _ => None,
        }
    }

    /// Removes the spawned power-up if it lies at `position`.
    pub fn remove_at(&mut self, position: Point) -> Option<PowerUpKind> {
        match self.spawned {
            Some(spawned) if spawned.position == position => {
                self.spawned = None;
                Some(spawned.kind)
            }
            _ => None,
        }
    }

    /// Player pickup: clears the spawned power-up at `head` and applies it.
    pub fn check_pickup(
        &mut self,
        head: Point,
        now_ms: u64,
        target: EffectTarget<'_>,
    ) -> Option<PowerUpKind> {
        let kind = self.remove_at(head)?;
        self.apply(kind, now_ms, target);
        Some(kind)
    }

    pub fn apply(&mut self, kind: PowerUpKind, now_ms: u64, target: EffectTarget<'_>) {
        match kind {
            PowerUpKind::MegaFood => {
                let double = self.is_active(PowerUpKind::DoubleScore, now_ms);
                *target.score += mega_food_award(double);
                target.snake.grow(MEGA_FOOD_GROWTH);
            }
            PowerUpKind::Shrink => {
                if target.snake.len() > SHRINK_MIN_LENGTH {
                    target.snake.cut_tail(SHRINK_SEGMENTS);
                }
            }
            PowerUpKind::SlowMotion => {
                if !self.refresh(kind, now_ms) {
                    let restore = *target.target_fps;
                    *target.target_fps = slowed_fps(restore);
                    self.activate(kind, now_ms, Some(restore));
                }
            }
            PowerUpKind::DoubleScore | PowerUpKind::Invisible | PowerUpKind::Shield => {
                if !self.refresh(kind, now_ms) {
                    self.activate(kind, now_ms, None);
                }
            }
        }
        log!("{} applied", kind.name());
    }

    fn activate(&mut self, kind: PowerUpKind, now_ms: u64, restore_fps: Option<f64>) {
        self.active.push(ActiveEffect {
            kind,
            expires_at_ms: now_ms + kind.duration_ms(),
            restore_fps,
        });
    }

    /// Re-collecting a timed kind extends the running effect instead of
    /// stacking a second entry, so its rollback still restores the first
    /// snapshot.
    fn refresh(&mut self, kind: PowerUpKind, now_ms: u64) -> bool {
        match self.active.iter_mut().find(|effect| effect.kind == kind) {
            Some(effect) => {
                effect.expires_at_ms = now_ms + kind.duration_ms();
                true
            }
            None => false,
        }
    }

    /// Drops every effect with `expires_at_ms <= now_ms`, running its rollback
    /// once. Returns the kinds that ended.
    pub fn expire(&mut self, now_ms: u64, target_fps: &mut f64) -> Vec<PowerUpKind> {
        let mut expired = Vec::new();
        self.active.retain(|effect| {
            if effect.expires_at_ms > now_ms {
                return true;
            }
            if let Some(fps) = effect.restore_fps {
                *target_fps = fps;
            }
            expired.push(effect.kind);
            false
        });
        for kind in &expired {
            log!("{} wore off", kind.name());
        }
        expired
    }

    /// Spends the shield. Returns false when no shield was up.
    pub fn consume_shield(&mut self, now_ms: u64) -> bool {
        let was_active = self.is_active(PowerUpKind::Shield, now_ms);
        self.active.retain(|effect| effect.kind != PowerUpKind::Shield);
        was_active
    }

    pub fn player_visibility(&self, now_ms: u64) -> PlayerVisibility {
        if !self.is_active(PowerUpKind::Invisible, now_ms) {
            return PlayerVisibility::Full;
        }
        if (now_ms / INVISIBLE_BLINK_MS) % 2 == 0 {
            PlayerVisibility::Hidden
        } else {
            PlayerVisibility::HeadOnly
        }
    }

    pub fn clear(&mut self) {
        self.spawned = None;
        self.active.clear();
    }
}
