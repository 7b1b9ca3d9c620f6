//! # Generation Module
//!
//! Procedural world generation: seeded room sampling, placement validation,
//! corridor routing, and the final spawn/collectible placement.
//!
//! Generation is single-threaded and fully deterministic. One seeded stream
//! drives rooms and corridors; spawn and collectible placement use separate
//! streams seeded from the room count.

pub mod corridors;
pub mod dungeon;
pub mod items;
pub mod random;
pub mod rooms;
pub mod spawn;

pub use corridors::*;
pub use dungeon::*;
pub use items::*;
pub use random::*;
pub use rooms::*;
pub use spawn::*;

use crate::game::{Grid, Position};
use crate::{config, BurrowError, BurrowResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for world generation.
///
/// Defaults reproduce the standard 80×30 world; any change to the sizes or
/// draw counts changes which world a seed produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Grid width in tiles
    pub width: i32,
    /// Grid height in tiles
    pub height: i32,
    /// Smallest accepted room side (walls included)
    pub min_room_size: i32,
    /// Exclusive bound of the raw room side draw
    pub room_size_bound: i32,
    /// Growth-phase attempts after the bootstrap room
    pub growth_attempts: u32,
    /// Coins scattered per placed room
    pub coins_per_room: u32,
    /// Moves granted per placed room
    pub moves_per_room: i32,
    /// Redraws allowed in one rejection loop
    pub max_rejection_draws: u32,
    /// Coordinate pairs drawn per collectible before giving up
    pub max_placement_draws: u32,
}

impl GenerationConfig {
    /// Creates the standard generation configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::GenerationConfig;
    ///
    /// let config = GenerationConfig::new();
    /// assert_eq!((config.width, config.height), (80, 30));
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new() -> Self {
        Self {
            width: config::WIDTH,
            height: config::HEIGHT,
            min_room_size: config::MIN_ROOM_SIZE,
            room_size_bound: config::ROOM_SIZE_BOUND,
            growth_attempts: config::GROWTH_ATTEMPTS,
            coins_per_room: config::COINS_PER_ROOM,
            moves_per_room: config::MOVES_PER_ROOM,
            max_rejection_draws: config::MAX_REJECTION_DRAWS,
            max_placement_draws: config::MAX_PLACEMENT_DRAWS,
        }
    }

    /// Creates a configuration for quick tests with fewer growth attempts.
    pub fn for_testing() -> Self {
        Self {
            growth_attempts: 50,
            ..Self::new()
        }
    }

    /// Loads a configuration from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> BurrowResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can produce a playable world.
    ///
    /// Besides fitting rooms on the grid, every room interior must hold the
    /// avatar plus its share of coins, and each room must grant moves.
    pub fn validate(&self) -> BurrowResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(BurrowError::InvalidConfig(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > config::MAX_GRID_SIDE || self.height > config::MAX_GRID_SIDE {
            return Err(BurrowError::InvalidConfig(format!(
                "grid {}x{} exceeds {} tiles per side",
                self.width,
                self.height,
                config::MAX_GRID_SIDE
            )));
        }
        if self.min_room_size < config::MIN_ROOM_SIZE {
            return Err(BurrowError::InvalidConfig(format!(
                "min_room_size {} < {}",
                self.min_room_size,
                config::MIN_ROOM_SIZE
            )));
        }
        if self.room_size_bound <= self.min_room_size {
            return Err(BurrowError::InvalidConfig(format!(
                "room_size_bound {} must exceed min_room_size {}",
                self.room_size_bound, self.min_room_size
            )));
        }
        if self.room_size_bound - 1 > self.width || self.room_size_bound - 1 > self.height {
            return Err(BurrowError::InvalidConfig(format!(
                "rooms up to {} tiles do not fit a {}x{} grid",
                self.room_size_bound - 1,
                self.width,
                self.height
            )));
        }
        let interior = (self.min_room_size - 2) * (self.min_room_size - 2);
        if self.coins_per_room == 0 || i64::from(self.coins_per_room) >= i64::from(interior) {
            return Err(BurrowError::InvalidConfig(format!(
                "coins_per_room {} must be in 1..{} for {}x{} rooms",
                self.coins_per_room, interior, self.min_room_size, self.min_room_size
            )));
        }
        if self.moves_per_room < 1 {
            return Err(BurrowError::InvalidConfig(format!(
                "moves_per_room {} must be positive",
                self.moves_per_room
            )));
        }
        if self.max_rejection_draws == 0 || self.max_placement_draws == 0 {
            return Err(BurrowError::InvalidConfig(
                "draw budgets must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A finalize-phase step that writes onto the grid of a finished layout.
///
/// Placers run after the room/corridor loop and draw from their own streams,
/// never from the structural one.
pub trait Placer<T> {
    /// Places content on `grid`, given the rooms in placement order.
    fn place(&self, grid: &mut Grid, rooms: &[Room]) -> BurrowResult<T>;

    /// Gets the placer name for logging.
    fn placer_type(&self) -> &'static str;
}

/// An axis-aligned rectangular room with a one-tile wall border.
///
/// `(x, y)` is the bottom-left corner; width and height include the walls.
/// Rooms are plain values and never change once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    /// Creates a room without checking it against any grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::Room;
    ///
    /// let room = Room::new(1, 10, 5, 5);
    /// assert_eq!(room.right(), 5);
    /// assert_eq!(room.top(), 14);
    /// ```
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a room, enforcing the minimum size and that it fits the grid.
    pub fn checked(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        config: &GenerationConfig,
    ) -> BurrowResult<Self> {
        let room = Self::new(x, y, width, height);
        if width < config.min_room_size || height < config.min_room_size {
            return Err(BurrowError::InvalidRoom(format!(
                "{}x{} is smaller than {}x{}",
                width, height, config.min_room_size, config.min_room_size
            )));
        }
        if x < 0 || y < 0 || room.right() >= config.width || room.top() >= config.height {
            return Err(BurrowError::InvalidRoom(format!(
                "{:?} does not fit a {}x{} grid",
                room, config.width, config.height
            )));
        }
        Ok(room)
    }

    /// Column of the right wall.
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Row of the top wall.
    pub fn top(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Gets the center position of the room.
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Checks if a position is inside this room's footprint.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x && pos.y >= self.y && pos.x <= self.right() && pos.y <= self.top()
    }

    /// Checks if a position is on the wall border of this room.
    pub fn is_border(&self, pos: Position) -> bool {
        self.contains(pos)
            && (pos.x == self.x || pos.y == self.y || pos.x == self.right() || pos.y == self.top())
    }

    /// Checks if the two footprints share any cell.
    pub fn overlaps(&self, other: &Room) -> bool {
        !(self.x > other.right()
            || other.x > self.right()
            || self.y > other.top()
            || other.y > self.top())
    }

    /// Every position of the footprint, walls included.
    pub fn footprint(&self) -> impl Iterator<Item = Position> {
        let room = *self;
        (room.x..=room.right())
            .flat_map(move |x| (room.y..=room.top()).map(move |y| Position::new(x, y)))
    }

    /// Gets all wall positions.
    pub fn wall_positions(&self) -> Vec<Position> {
        self.footprint().filter(|pos| self.is_border(*pos)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new();
        assert_eq!(config.growth_attempts, 500);
        assert_eq!(config.min_room_size, 5);
        assert_eq!(config.room_size_bound, 14);
        assert!(config.validate().is_ok());
        assert!(GenerationConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_generation_config_rejects_unusable_values() {
        let tiny_grid = GenerationConfig {
            width: 8,
            ..GenerationConfig::new()
        };
        assert!(matches!(
            tiny_grid.validate(),
            Err(BurrowError::InvalidConfig(_))
        ));

        let inverted = GenerationConfig {
            room_size_bound: 5,
            ..GenerationConfig::new()
        };
        assert!(inverted.validate().is_err());

        let no_budget = GenerationConfig {
            max_rejection_draws: 0,
            ..GenerationConfig::new()
        };
        assert!(no_budget.validate().is_err());
    }

    #[test]
    fn test_generation_config_rejects_overflowing_values() {
        let huge_grid = GenerationConfig {
            width: i32::MAX,
            ..GenerationConfig::new()
        };
        assert!(matches!(
            huge_grid.validate(),
            Err(BurrowError::InvalidConfig(_))
        ));

        for moves_per_room in [0, -1, i32::MIN] {
            let config = GenerationConfig {
                moves_per_room,
                ..GenerationConfig::new()
            };
            assert!(config.validate().is_err(), "{}", moves_per_room);
        }

        for coins_per_room in [0, 9, u32::MAX] {
            let config = GenerationConfig {
                coins_per_room,
                ..GenerationConfig::new()
            };
            assert!(config.validate().is_err(), "{}", coins_per_room);
        }
        let crowded = GenerationConfig {
            coins_per_room: 8,
            ..GenerationConfig::new()
        };
        assert!(crowded.validate().is_ok());

        let config: GenerationConfig =
            serde_json::from_str(r#"{"min_room_size": 3, "room_size_bound": 5}"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(BurrowError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_generation_config_partial_json() {
        let config: GenerationConfig = serde_json::from_str(r#"{"growth_attempts": 20}"#).unwrap();
        assert_eq!(config.growth_attempts, 20);
        assert_eq!(config.width, 80);
    }

    #[test]
    fn test_room_geometry() {
        let room = Room::new(5, 5, 10, 8);

        assert_eq!(room.right(), 14);
        assert_eq!(room.top(), 12);
        assert_eq!(room.center(), Position::new(10, 9));

        assert!(room.contains(Position::new(7, 7)));
        assert!(room.contains(Position::new(5, 5))); // Bottom-left corner
        assert!(room.contains(Position::new(14, 12))); // Top-right corner
        assert!(!room.contains(Position::new(4, 5))); // Outside left
        assert!(!room.contains(Position::new(15, 12))); // Outside right

        assert!(room.is_border(Position::new(5, 5)));
        assert!(room.is_border(Position::new(10, 12)));
        assert!(!room.is_border(Position::new(7, 7)));
    }

    #[test]
    fn test_room_overlap() {
        let room1 = Room::new(5, 5, 10, 8);
        let room2 = Room::new(10, 8, 6, 6); // Overlaps
        let room3 = Room::new(20, 20, 5, 5); // No overlap
        let touching = Room::new(15, 5, 5, 5); // Shares no cell

        assert!(room1.overlaps(&room2));
        assert!(room2.overlaps(&room1));
        assert!(!room1.overlaps(&room3));
        assert!(!room3.overlaps(&room1));
        assert!(!room1.overlaps(&touching));
    }

    #[test]
    fn test_room_positions() {
        let room = Room::new(5, 5, 5, 6);

        let wall_positions = room.wall_positions();
        assert_eq!(wall_positions.len(), 30 - 12);
        assert_eq!(room.footprint().count(), 30);

        let wall_set: HashSet<_> = wall_positions.into_iter().collect();
        let interior: HashSet<_> = room
            .footprint()
            .filter(|pos| !wall_set.contains(pos))
            .collect();
        assert_eq!(interior.len(), 3 * 4);
        assert!(interior.contains(&room.center()));
    }

    #[test]
    fn test_checked_room_invariants() {
        let config = GenerationConfig::new();
        assert!(Room::checked(75, 25, 5, 5, &config).is_ok());
        assert!(Room::checked(76, 0, 5, 5, &config).is_err());
        assert!(Room::checked(0, 26, 5, 5, &config).is_err());
        assert!(matches!(
            Room::checked(0, 0, 4, 9, &config),
            Err(BurrowError::InvalidRoom(_))
        ));
    }
}
