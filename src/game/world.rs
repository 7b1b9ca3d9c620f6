//! # World Representation
//!
//! The occupancy grid and the finished world handed from generation to play.

use crate::{config, BurrowError, BurrowResult, Position, Room};
use serde::{Deserialize, Serialize};

/// What occupies a single grid cell.
///
/// A tile carries no identity beyond its kind; the grid cell is the unit of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Floor,
    Wall,
    Avatar,
    Coin,
}

impl Tile {
    /// Whether the avatar may stand on or walk through this tile.
    pub fn is_passable(self) -> bool {
        matches!(self, Tile::Floor | Tile::Coin | Tile::Avatar)
    }

    /// Character used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Avatar => '@',
            Tile::Coin => '$',
        }
    }

    /// Short human-readable name.
    pub fn description(self) -> &'static str {
        match self {
            Tile::Empty => "nothing",
            Tile::Floor => "floor",
            Tile::Wall => "wall",
            Tile::Avatar => "you",
            Tile::Coin => "coin",
        }
    }
}

/// Fixed-size tile grid; the single source of truth for what is built where.
///
/// The grid never resizes. Reads outside it return `None`, writes outside it
/// return [`BurrowError::OutOfBounds`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

/// Serialized grid fields, checked before they become a [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = BurrowError;

    fn try_from(raw: RawGrid) -> BurrowResult<Self> {
        let expected = i64::from(raw.width.max(0)) * i64::from(raw.height.max(0));
        if raw.width < 0 || raw.height < 0 || raw.tiles.len() as i64 != expected {
            return Err(BurrowError::InvalidInput(format!(
                "{} tiles do not fill a {}x{} grid",
                raw.tiles.len(),
                raw.width,
                raw.height
            )));
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            tiles: raw.tiles,
        })
    }
}

impl Grid {
    /// Creates an all-`Empty` grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Grid, Position, Tile};
    ///
    /// let grid = Grid::new(80, 30);
    /// assert_eq!(grid.tile(Position::new(79, 29)), Some(Tile::Empty));
    /// assert_eq!(grid.tile(Position::new(80, 0)), None);
    /// ```
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; cells],
        }
    }

    /// Creates a grid with the standard dimensions.
    pub fn standard() -> Self {
        Self::new(config::WIDTH, config::HEIGHT)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Checks whether a position lies on the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    /// Returns the tile at `pos`, or `None` off the grid.
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|index| self.tiles[index])
    }

    /// Returns true when `pos` is on the grid and `Empty`.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.tile(pos) == Some(Tile::Empty)
    }

    /// Overwrites the tile at `pos`.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> BurrowResult<()> {
        let index = self
            .index(pos)
            .ok_or(BurrowError::OutOfBounds { x: pos.x, y: pos.y })?;
        self.tiles[index] = tile;
        Ok(())
    }

    /// Iterates over every position and its tile, row by row from `y = 0`.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().map(move |(index, tile)| {
            let index = index as i32;
            (Position::new(index % width, index / width), *tile)
        })
    }

    /// Counts tiles of the given kind.
    pub fn count(&self, kind: Tile) -> usize {
        self.tiles.iter().filter(|tile| **tile == kind).count()
    }

    /// All positions holding the given kind of tile.
    pub fn positions_of(&self, kind: Tile) -> Vec<Position> {
        self.iter()
            .filter(|(_, tile)| *tile == kind)
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

/// A finished world: the output of one generation call.
///
/// Immutable from the generator's point of view once returned; a game session
/// takes ownership and mutates the grid through avatar movement only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    /// Seed the world was generated from
    pub seed: i64,
    /// Final grid, avatar and coins included
    pub grid: Grid,
    /// Placed rooms in placement order
    pub rooms: Vec<Room>,
    /// Avatar start position
    pub spawn: Position,
    /// Number of coins scattered on the map
    pub coin_goal: u32,
    /// Moves granted to the player
    pub move_budget: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(10, 4);
        assert_eq!(grid.count(Tile::Empty), 40);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 4);
    }

    #[test]
    fn test_standard_grid_dimensions() {
        let grid = Grid::standard();
        assert_eq!(grid.width(), 80);
        assert_eq!(grid.height(), 30);
    }

    #[test]
    fn test_set_and_get_tile() {
        let mut grid = Grid::new(10, 10);
        grid.set_tile(Position::new(3, 7), Tile::Wall).unwrap();
        assert_eq!(grid.tile(Position::new(3, 7)), Some(Tile::Wall));
        assert_eq!(grid.tile(Position::new(7, 3)), Some(Tile::Empty));
        assert!(!grid.is_empty_at(Position::new(3, 7)));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(grid.tile(Position::new(-1, 0)), None);
        assert_eq!(grid.tile(Position::new(0, 10)), None);
        assert!(!grid.is_empty_at(Position::new(10, 0)));

        let err = grid.set_tile(Position::new(10, 2), Tile::Floor).unwrap_err();
        assert!(matches!(err, BurrowError::OutOfBounds { x: 10, y: 2 }));
    }

    #[test]
    fn test_iter_covers_every_cell_once() {
        let mut grid = Grid::new(4, 3);
        grid.set_tile(Position::new(3, 2), Tile::Coin).unwrap();

        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0].0, Position::new(0, 0));
        assert_eq!(cells[11], (Position::new(3, 2), Tile::Coin));
        assert_eq!(grid.positions_of(Tile::Coin), vec![Position::new(3, 2)]);
    }

    #[test]
    fn test_grid_json_requires_matching_tile_count() {
        let mut grid = Grid::new(3, 2);
        grid.set_tile(Position::new(2, 1), Tile::Wall).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);

        let short = r#"{"width": 2, "height": 2, "tiles": ["Empty"]}"#;
        assert!(serde_json::from_str::<Grid>(short).is_err());
        let negative = r#"{"width": -1, "height": 0, "tiles": []}"#;
        assert!(serde_json::from_str::<Grid>(negative).is_err());
    }

    #[test]
    fn test_tile_properties() {
        assert!(Tile::Floor.is_passable());
        assert!(Tile::Coin.is_passable());
        assert!(!Tile::Wall.is_passable());
        assert!(!Tile::Empty.is_passable());
        assert_eq!(Tile::Wall.glyph(), '#');
        assert_eq!(Tile::Avatar.description(), "you");
    }
}
