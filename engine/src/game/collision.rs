use super::grid::Grid;
use super::snake::Snake;
use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    OwnBody,
    Opponent,
}

impl CollisionKind {
    /// Only wall and self hits can be absorbed by a shield.
    pub fn is_shieldable(self) -> bool {
        matches!(self, CollisionKind::Wall | CollisionKind::OwnBody)
    }

    pub fn describe(self) -> &'static str {
        match self {
            CollisionKind::Wall => "hit the wall",
            CollisionKind::OwnBody => "bit itself",
            CollisionKind::Opponent => "ran into the other snake",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionVerdict {
    Clear,
    /// A shield absorbed the hit; the move is cancelled for this tick.
    Survived(CollisionKind),
    Fatal(CollisionKind),
}

/// Checks where `snake` would put its head. The own-body test runs against
/// the whole current body, tail included, since the tail has not moved yet.
/// Stepping onto the cell your own tail is leaving is therefore fatal.
pub fn detect(
    next_head: Point,
    snake: &Snake,
    opponent: Option<&Snake>,
    grid: &Grid,
) -> Option<CollisionKind> {
    if !grid.in_bounds(next_head) {
        return Some(CollisionKind::Wall);
    }
    if snake.contains(next_head) {
        return Some(CollisionKind::OwnBody);
    }
    if let Some(opponent) = opponent
        && opponent.contains(next_head)
    {
        return Some(CollisionKind::Opponent);
    }
    None
}

pub fn resolve(collision: Option<CollisionKind>, shielded: bool) -> CollisionVerdict {
    match collision {
        None => CollisionVerdict::Clear,
        Some(kind) if shielded && kind.is_shieldable() => CollisionVerdict::Survived(kind),
        Some(kind) => CollisionVerdict::Fatal(kind),
    }
}
