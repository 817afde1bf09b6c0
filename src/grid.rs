use crate::error::GridError;
use std::collections::HashSet;

/// A cell coordinate, `(x, y)`.
pub type Position = (u32, u32);

/// The rectangle the robot lives on, with a fixed set of blocked cells.
///
/// Valid cells are `0..length` along `x` and `0..width` along `y`. Obstacles are not
/// checked against the bounds: one placed outside the rectangle is simply unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    length: u32,
    width: u32,
    obstacles: HashSet<Position>,
}

impl Grid {
    /// Build a grid, failing if either dimension is zero.
    pub fn new(
        length: u32,
        width: u32,
        obstacles: impl IntoIterator<Item = Position>,
    ) -> Result<Self, GridError> {
        if length == 0 || width == 0 {
            return Err(GridError::ZeroDimension { length, width });
        }
        Ok(Self {
            length,
            width,
            obstacles: obstacles.into_iter().collect(),
        })
    }

    /// A grid with no obstacles.
    pub fn empty(length: u32, width: u32) -> Result<Self, GridError> {
        Self::new(length, width, [])
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Position> {
        self.obstacles.iter()
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.length && y < self.width
    }

    pub fn has_obstacle(&self, x: u32, y: u32) -> bool {
        self.obstacles.contains(&(x, y))
    }

    /// In bounds and not blocked: the robot may stand here.
    pub fn is_open(&self, x: u32, y: u32) -> bool {
        self.contains(x, y) && !self.has_obstacle(x, y)
    }
}
