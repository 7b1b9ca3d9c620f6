//! # Input Module
//!
//! Key mapping and replayable input scripts.

pub mod commands;

pub use commands::*;

use crate::game::Direction;
use serde::{Deserialize, Serialize};

/// An input that can change a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerInput {
    /// Step one tile in a direction
    Move(Direction),
    /// Jump to the centre of a random room
    Teleport,
}

impl PlayerInput {
    /// Maps a key to an input. `W`/`A`/`S`/`D` move, `T` teleports; case is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Direction, PlayerInput};
    ///
    /// assert_eq!(PlayerInput::from_key('w'), Some(PlayerInput::Move(Direction::North)));
    /// assert_eq!(PlayerInput::from_key('T'), Some(PlayerInput::Teleport));
    /// assert_eq!(PlayerInput::from_key('x'), None);
    /// ```
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_uppercase() {
            'W' => Some(Self::Move(Direction::North)),
            'S' => Some(Self::Move(Direction::South)),
            'A' => Some(Self::Move(Direction::West)),
            'D' => Some(Self::Move(Direction::East)),
            'T' => Some(Self::Teleport),
            _ => None,
        }
    }

    /// The upper-case key recorded in a session history.
    pub fn key(self) -> char {
        match self {
            Self::Move(direction) => direction.key(),
            Self::Teleport => 'T',
        }
    }
}
