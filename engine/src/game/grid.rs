use std::collections::HashSet;

use crate::SessionRng;
use super::types::Point;

/// Placement retries before a possibly-overlapping cell is accepted.
pub const PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    tile_count: i32,
}

impl Grid {
    pub fn new(tile_count: u32) -> Self {
        Self {
            tile_count: tile_count.clamp(1, i32::MAX as u32) as i32,
        }
    }

    pub fn tile_count(&self) -> i32 {
        self.tile_count
    }

    pub fn center(&self) -> Point {
        Point::new(self.tile_count / 2, self.tile_count / 2)
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.tile_count && p.y >= 0 && p.y < self.tile_count
    }

    /// Pulls `p` onto the board; used for fixed start cells on small grids.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0, self.tile_count - 1), p.y.clamp(0, self.tile_count - 1))
    }

    pub fn random_cell(&self, rng: &mut SessionRng) -> Point {
        Point::new(
            rng.random_range(0..self.tile_count),
            rng.random_range(0..self.tile_count),
        )
    }

    /// Uniform draw that avoids `occupied`. After `max_attempts` draws the
    /// last candidate is returned even if it is occupied.
    pub fn random_free_cell(
        &self,
        rng: &mut SessionRng,
        occupied: &HashSet<Point>,
        max_attempts: usize,
    ) -> Point {
        let mut candidate = self.random_cell(rng);
        for _ in 1..max_attempts {
            if !occupied.contains(&candidate) {
                return candidate;
            }
            candidate = self.random_cell(rng);
        }
        candidate
    }
}

pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
