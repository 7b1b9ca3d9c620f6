//! # Display
//!
//! Text rendering of the tile grid. The top line is the highest row, so the
//! map reads the same way it is laid out in grid coordinates.

use crate::game::{Grid, Position};
use crate::generation::Room;
use std::fmt;

/// Renders the grid one line per row, from `y = height - 1` down to `y = 0`.
///
/// # Examples
///
/// ```
/// use burrow::{render_grid, Grid, Position, Tile};
///
/// let mut grid = Grid::new(3, 2);
/// grid.set_tile(Position::new(0, 0), Tile::Wall).unwrap();
/// grid.set_tile(Position::new(2, 1), Tile::Coin).unwrap();
/// assert_eq!(render_grid(&grid), "  $\n#  ");
/// ```
pub fn render_grid(grid: &Grid) -> String {
    (0..grid.height())
        .rev()
        .map(|y| {
            (0..grid.width())
                .filter_map(|x| grid.tile(Position::new(x, y)))
                .map(|tile| tile.glyph())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per room in placement order.
pub fn render_rooms(rooms: &[Room]) -> String {
    rooms
        .iter()
        .enumerate()
        .map(|(index, room)| {
            format!(
                "{}: x={} y={} w={} h={}\n",
                index, room.x, room.y, room.width, room.height
            )
        })
        .collect()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_grid(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Tile;
    use crate::generation::carve_room;

    #[test]
    fn test_render_room() {
        let mut grid = Grid::new(6, 5);
        carve_room(&mut grid, &Room::new(0, 0, 5, 5)).unwrap();
        grid.set_tile(Position::new(2, 2), Tile::Avatar).unwrap();

        let expected = ["##### ", "#...# ", "#.@.# ", "#...# ", "##### "].join("\n");
        assert_eq!(render_grid(&grid), expected);
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_top_row_printed_first() {
        let mut grid = Grid::new(2, 3);
        grid.set_tile(Position::new(1, 2), Tile::Floor).unwrap();
        let rendered = render_grid(&grid);
        assert_eq!(rendered.lines().next(), Some(" ."));
    }

    #[test]
    fn test_render_rooms() {
        let rooms = [Room::new(1, 2, 5, 6), Room::new(10, 2, 7, 5)];
        assert_eq!(render_rooms(&rooms), "0: x=1 y=2 w=5 h=6\n1: x=10 y=2 w=7 h=5\n");
    }
}
