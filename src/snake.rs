use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Displacement of one step in this direction, in board units.
    pub fn offset(self, cell_size: i32) -> Coords {
        match self {
            Up => (0, -cell_size),
            Down => (0, cell_size),
            Left => (-cell_size, 0),
            Right => (cell_size, 0),
        }
    }
}

/// Snake body, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coords>,
}

impl Snake {
    /// A snake of `size` segments all stacked on `pos`.
    pub fn new(pos: Coords, size: usize) -> Self {
        let body = std::iter::repeat(pos).take(size.max(1)).collect();
        Snake { body }
    }

    pub fn from_body(positions: &[Coords]) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }
        Some(Snake { body: positions.iter().copied().collect() })
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn body(&self) -> impl Iterator<Item = &Coords> + '_ {
        self.body.iter()
    }

    /// Everything but the head.
    pub fn rest(&self) -> impl Iterator<Item = &Coords> + '_ {
        self.body.iter().skip(1)
    }

    pub fn contains(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    pub fn push_head(&mut self, pos: Coords) {
        self.body.push_front(pos);
    }

    /// Drops the last segment. A single-segment snake keeps its only segment.
    pub fn pop_tail(&mut self) -> Option<Coords> {
        if self.body.len() <= 1 {
            return None;
        }
        self.body.pop_back()
    }
}
