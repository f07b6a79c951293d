use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Head-first body. `body_set` mirrors `body`; the collision check keeps
/// segments unique, so the two always hold the same cells.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
    pending_growth: u32,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start_pos);
        let mut body_set = HashSet::new();
        body_set.insert(start_pos);

        Self {
            body,
            body_set,
            direction: Direction::Idle,
            pending_direction: None,
            pending_growth: 0,
        }
    }

    /// Builds a snake from head-first segments. `None` if `segments` is empty
    /// or repeats a cell.
    pub fn from_segments(segments: Vec<Point>, direction: Direction) -> Option<Self> {
        let body: VecDeque<Point> = segments.into_iter().collect();
        let body_set: HashSet<Point> = body.iter().copied().collect();
        if body.is_empty() || body_set.len() != body.len() {
            return None;
        }

        Some(Self {
            body,
            body_set,
            direction,
            pending_direction: None,
            pending_growth: 0,
        })
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.body_set.contains(&p)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Queues a turn for the next tick. Rejects idle and the reverse of the
    /// current travel direction.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.is_idle() || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Unchecked; the AI policy does its own reversal filtering.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.pending_direction = None;
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Where the head lands this tick, `None` while idle.
    pub fn next_head(&self) -> Option<Point> {
        if self.direction.is_idle() {
            return None;
        }
        Some(self.head().step(self.direction))
    }

    pub fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    /// Finishes a move started by `push_head`: the tail stays when something
    /// was eaten this tick or queued growth remains, otherwise it is dropped.
    pub fn settle_tail(&mut self, grew: bool) {
        if grew {
            return;
        }
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
            return;
        }
        if self.body.len() > 1
            && let Some(tail) = self.body.pop_back()
        {
            self.body_set.remove(&tail);
        }
    }

    /// Adds `segments` to be realised over the following moves.
    pub fn grow(&mut self, segments: u32) {
        self.pending_growth += segments;
    }

    /// Drops up to `segments` tail cells, never below one segment.
    pub fn cut_tail(&mut self, segments: usize) -> usize {
        let mut removed = 0;
        while removed < segments && self.body.len() > 1 {
            if let Some(tail) = self.body.pop_back() {
                self.body_set.remove(&tail);
                removed += 1;
            }
        }
        removed
    }

    pub fn has_unique_segments(&self) -> bool {
        self.body_set.len() == self.body.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(cells: &[(i32, i32)], direction: Direction) -> Snake {
        Snake::from_segments(cells.iter().map(|&(x, y)| Point::new(x, y)).collect(), direction)
            .unwrap()
    }

    #[test]
    fn test_new_snake_is_idle_single_segment() {
        let s = Snake::new(Point::new(10, 10));
        assert_eq!(s.len(), 1);
        assert_eq!(s.direction(), Direction::Idle);
        assert_eq!(s.next_head(), None);
    }

    #[test]
    fn test_from_segments_rejects_empty_and_duplicates() {
        assert!(Snake::from_segments(vec![], Direction::Right).is_none());
        assert!(
            Snake::from_segments(vec![Point::new(1, 1), Point::new(1, 1)], Direction::Right)
                .is_none()
        );
    }

    #[test]
    fn test_reverse_request_rejected() {
        let mut s = snake(&[(5, 5), (4, 5)], Direction::Right);
        assert!(!s.request_direction(Direction::Left));
        assert!(!s.request_direction(Direction::Idle));
        assert!(s.request_direction(Direction::Up));
        s.apply_pending_direction();
        assert_eq!(s.direction(), Direction::Up);
    }

    #[test]
    fn test_reverse_checked_against_travel_not_pending() {
        let mut s = snake(&[(5, 5), (4, 5)], Direction::Right);
        assert!(s.request_direction(Direction::Up));
        // Still travelling right until the next tick.
        assert!(!s.request_direction(Direction::Left));
        assert!(s.request_direction(Direction::Down));
    }

    #[test]
    fn test_move_without_growth_keeps_length() {
        let mut s = snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        let next = s.next_head().unwrap();
        s.push_head(next);
        s.settle_tail(false);
        assert_eq!(s.len(), 3);
        assert_eq!(s.head(), Point::new(6, 5));
        assert_eq!(s.segments().last(), Some(Point::new(4, 5)));
        assert!(!s.contains(Point::new(3, 5)));
    }

    #[test]
    fn test_pending_growth_spreads_over_moves() {
        let mut s = snake(&[(5, 5)], Direction::Right);
        s.grow(3);
        for _ in 0..4 {
            let next = s.next_head().unwrap();
            s.push_head(next);
            s.settle_tail(false);
        }
        assert_eq!(s.len(), 4);
        assert_eq!(s.pending_growth(), 0);
        assert!(s.has_unique_segments());
    }

    #[test]
    fn test_cut_tail_keeps_one_segment() {
        let mut s = snake(&[(1, 1), (2, 1)], Direction::Left);
        assert_eq!(s.cut_tail(5), 1);
        assert_eq!(s.len(), 1);
        assert_eq!(s.head(), Point::new(1, 1));
    }
}
