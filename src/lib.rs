//! # Burrow
//!
//! Deterministic room-and-corridor dungeon generation with a small coin-hunt
//! game layered on top.
//!
//! ## Architecture Overview
//!
//! The crate is built around a single occupancy grid that is the only source of
//! truth for what has been built where:
//!
//! - **Generation**: seeded room sampling, placement validation, and the
//!   three-case corridor router that connects a new room to an existing one
//! - **Game**: grid, world and session state (movement, teleports, coins,
//!   move budget) plus save/load by seed and input replay
//! - **Input**: key mapping and replayable input scripts such as `N42SWWDD:Q`
//! - **Rendering**: plain-text rendering of the grid and the status line
//!
//! The same seed always yields the same world:
//!
//! ```
//! let first = burrow::generate_world(7).unwrap();
//! let second = burrow::generate_world(7).unwrap();
//! assert_eq!(first, second);
//! assert_eq!(first.coin_goal as usize, first.rooms.len() * 2);
//! ```

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the Burrow crate.
#[derive(thiserror::Error, Debug)]
pub enum BurrowError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A grid access fell outside the grid
    #[error("Position ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    /// A room does not satisfy the room invariants
    #[error("Invalid room: {0}")]
    InvalidRoom(String),

    /// Generation configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input script or seed could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Burrow codebase.
pub type BurrowResult<T> = Result<T, BurrowError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation and game constants.
pub mod config {
    /// Grid width in tiles
    pub const WIDTH: i32 = 80;

    /// Grid height in tiles
    pub const HEIGHT: i32 = 30;

    /// Largest accepted grid side for custom configurations
    pub const MAX_GRID_SIDE: i32 = 4096;

    /// Smallest accepted room side, walls included
    pub const MIN_ROOM_SIZE: i32 = 5;

    /// Exclusive upper bound of the raw room side draw
    pub const ROOM_SIZE_BOUND: i32 = 14;

    /// Number of growth-phase attempts after the bootstrap room
    pub const GROWTH_ATTEMPTS: u32 = 500;

    /// Coins scattered per placed room
    pub const COINS_PER_ROOM: u32 = 2;

    /// Moves granted per placed room
    pub const MOVES_PER_ROOM: i32 = 50;

    /// Moves charged for a teleport
    pub const TELEPORT_COST: i32 = 50;

    /// Redraws allowed in one rejection loop before giving up
    pub const MAX_REJECTION_DRAWS: u32 = 10_000;

    /// Coordinate pairs drawn per collectible before giving up
    pub const MAX_PLACEMENT_DRAWS: u32 = 1_000_000;
}
