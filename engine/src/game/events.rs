use super::collision::CollisionKind;
use super::power_ups::{PowerUpKind, SpawnedPowerUp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Competitor {
    Player,
    Ai,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Collision(CollisionKind),
    /// The host ended the session explicitly.
    Ended,
}

/// Fire-and-forget notifications for audio/visual collaborators. The host
/// also arms a despawn timer for every `PowerUpSpawned`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    SessionStarted { seed: u64 },
    FoodEaten { by: Competitor, points: u32 },
    PowerUpSpawned(SpawnedPowerUp),
    PowerUpApplied(PowerUpKind),
    PowerUpTakenByAi(PowerUpKind),
    PowerUpDespawned(PowerUpKind),
    EffectExpired(PowerUpKind),
    ShieldBroken,
    AiReset { reason: CollisionKind, final_score: u32 },
    SessionOver { reason: EndReason, score: u32 },
}
