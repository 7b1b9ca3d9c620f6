//! # Game Module
//!
//! Core world representation and session state.
//!
//! This module contains the building blocks shared by generation and play:
//! - Grid coordinates and the four movement directions
//! - The occupancy grid, tiles and the generated world
//! - Session state (movement, teleports, coins, move budget)
//! - Save files that reproduce a session from its seed and input history

pub mod save;
pub mod state;
pub mod world;

pub use save::*;
pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate on the grid.
///
/// `y` grows upwards: row `0` is the bottom of the rendered map.
///
/// # Examples
///
/// ```
/// use burrow::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let adjacent = pos.cardinal_adjacent_positions();
/// assert_eq!(adjacent.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position one step away in `direction`.
    pub fn step(self, direction: Direction) -> Position {
        self + direction.to_delta()
    }

    /// Returns the 4 cardinal adjacent positions (no diagonals).
    pub fn cardinal_adjacent_positions(self) -> [Position; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// The four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in `W`, `S`, `D`, `A` key order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Converts a direction to a position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Direction, Position};
    ///
    /// assert_eq!(Direction::North.to_delta(), Position::new(0, 1));
    /// assert_eq!(Direction::West.to_delta(), Position::new(-1, 0));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::North => Position::new(0, 1),
            Direction::South => Position::new(0, -1),
            Direction::East => Position::new(1, 0),
            Direction::West => Position::new(-1, 0),
        }
    }

    /// The key that issues this move.
    pub fn key(self) -> char {
        match self {
            Direction::North => 'W',
            Direction::South => 'S',
            Direction::East => 'D',
            Direction::West => 'A',
        }
    }
}
