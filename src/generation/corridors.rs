//! # Corridor Routing
//!
//! Connects two rooms with a one-tile-wide floor path flanked by walls.
//!
//! A room pair is classified into exactly one [`CorridorKind`], checked in
//! priority order: a straight horizontal run when the rooms share enough of
//! their rows, a straight vertical run when they share enough of their
//! columns, and an L-shaped hybrid otherwise. Each kind has its own
//! validation and carving routine.
//!
//! Validation only reads the grid. It requires every corridor cell and the
//! one-tile buffer on both sides of it to be `Empty`, so corridors never run
//! into each other or along unrelated walls.

use super::Room;
use crate::game::{Grid, Position, Tile};
use crate::BurrowResult;
use std::ops::RangeInclusive;

/// Geometry of a corridor, in absolute grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorridorKind {
    /// Floor along `row` for columns `x_start..=x_end`.
    Horizontal { row: i32, x_start: i32, x_end: i32 },
    /// Floor along `column` for rows `y_low..=y_high`.
    Vertical { column: i32, y_low: i32, y_high: i32 },
    /// Floor along `row` from `x_start` to `column + 1`, then along `column`
    /// towards `y_end`, going up when `upward` is set and down otherwise.
    Hybrid {
        row: i32,
        x_start: i32,
        column: i32,
        y_end: i32,
        upward: bool,
    },
}

/// A classified corridor between an ordered pair of rooms.
///
/// `begin` is the room with the smaller `(x, y)`; `end` is the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorridorPlan {
    pub begin: Room,
    pub end: Room,
    pub kind: CorridorKind,
}

impl CorridorPlan {
    /// Orders the two rooms and picks the corridor shape connecting them.
    pub fn classify(a: &Room, b: &Room) -> Self {
        let (begin, end) = if (a.x, a.y) <= (b.x, b.y) {
            (*a, *b)
        } else {
            (*b, *a)
        };
        let upward = begin.y <= end.y;

        let kind = if shares_rows(&begin, &end) {
            let row = if begin.y > end.y && begin.top() < end.top() {
                begin.y + 1
            } else if upward {
                end.y + 1
            } else {
                end.top() - 1
            };
            CorridorKind::Horizontal {
                row,
                x_start: begin.right() + 1,
                x_end: end.x - 1,
            }
        } else if shares_columns(&begin, &end) {
            let (y_low, y_high) = if upward {
                (begin.top() + 1, end.y - 1)
            } else {
                (end.top() + 1, begin.y - 1)
            };
            CorridorKind::Vertical {
                column: end.x + 1,
                y_low,
                y_high,
            }
        } else {
            CorridorKind::Hybrid {
                row: begin.y + 1,
                x_start: begin.right() + 1,
                column: end.x + 1,
                y_end: if upward { end.y - 1 } else { end.top() + 1 },
                upward,
            }
        };

        Self { begin, end, kind }
    }

    /// Whether the corridor and its side buffers are clear.
    pub fn is_buildable(&self, grid: &Grid) -> bool {
        match self.kind {
            CorridorKind::Horizontal {
                row,
                x_start,
                x_end,
            } => all_empty(grid, x_start..=x_end, row - 1..=row + 1),
            CorridorKind::Vertical {
                column,
                y_low,
                y_high,
            } => all_empty(grid, column - 1..=column + 1, y_low..=y_high),
            CorridorKind::Hybrid {
                row,
                x_start,
                column,
                y_end,
                upward,
            } => {
                if !all_empty(grid, x_start..=column + 1, row - 1..=row + 1) {
                    return false;
                }
                if upward {
                    all_empty(grid, column - 1..=column + 1, row + 1..=y_end)
                } else if row == y_end - 1 {
                    // The elbow would sit on the end room's wall row.
                    false
                } else {
                    all_empty(grid, column - 1..=column + 1, y_end..=row - 1)
                }
            }
        }
    }

    /// Lays the corridor: floor along the path, walls on both sides, and a
    /// floor tile through each room's wall.
    pub fn carve(&self, grid: &mut Grid) -> BurrowResult<()> {
        match self.kind {
            CorridorKind::Horizontal {
                row,
                x_start,
                x_end,
            } => {
                for x in x_start..=x_end {
                    lay_horizontal(grid, x, row)?;
                }
                grid.set_tile(Position::new(x_start - 1, row), Tile::Floor)?;
                grid.set_tile(Position::new(x_end + 1, row), Tile::Floor)
            }
            CorridorKind::Vertical {
                column,
                y_low,
                y_high,
            } => {
                for y in y_low..=y_high {
                    lay_vertical(grid, column, y)?;
                }
                grid.set_tile(Position::new(column, y_low - 1), Tile::Floor)?;
                grid.set_tile(Position::new(column, y_high + 1), Tile::Floor)
            }
            CorridorKind::Hybrid {
                row,
                x_start,
                column,
                y_end,
                upward,
            } => {
                grid.set_tile(Position::new(x_start - 1, row), Tile::Floor)?;
                for x in x_start..=column + 1 {
                    lay_horizontal(grid, x, row)?;
                }
                // Outer corner of the elbow
                grid.set_tile(Position::new(column + 1, row), Tile::Wall)?;

                if upward {
                    for y in row + 1..=y_end {
                        lay_vertical(grid, column, y)?;
                    }
                    grid.set_tile(Position::new(column, y_end + 1), Tile::Floor)
                } else {
                    for y in (y_end..row).rev() {
                        lay_vertical(grid, column, y)?;
                    }
                    grid.set_tile(Position::new(column, y_end - 1), Tile::Floor)
                }
            }
        }
    }
}

/// Whether the rooms overlap vertically enough for a straight horizontal run.
fn shares_rows(begin: &Room, end: &Room) -> bool {
    begin.top() == end.top()
        || begin.y == end.y
        || (begin.y < end.y && begin.top() - 1 > end.y)
        || (begin.y + 1 < end.top() && begin.top() > end.top())
        || (begin.y > end.y && begin.top() < end.top())
}

/// Whether the rooms overlap horizontally enough for a straight vertical run.
fn shares_columns(begin: &Room, end: &Room) -> bool {
    begin.right() == end.right()
        || begin.x == end.x
        || (begin.x < end.x && begin.right() - 1 > end.x)
}

fn all_empty(grid: &Grid, xs: RangeInclusive<i32>, ys: RangeInclusive<i32>) -> bool {
    xs.flat_map(|x| ys.clone().map(move |y| Position::new(x, y)))
        .all(|pos| grid.is_empty_at(pos))
}

fn lay_horizontal(grid: &mut Grid, x: i32, row: i32) -> BurrowResult<()> {
    grid.set_tile(Position::new(x, row), Tile::Floor)?;
    grid.set_tile(Position::new(x, row + 1), Tile::Wall)?;
    grid.set_tile(Position::new(x, row - 1), Tile::Wall)
}

fn lay_vertical(grid: &mut Grid, column: i32, y: i32) -> BurrowResult<()> {
    grid.set_tile(Position::new(column, y), Tile::Floor)?;
    grid.set_tile(Position::new(column + 1, y), Tile::Wall)?;
    grid.set_tile(Position::new(column - 1, y), Tile::Wall)
}

/// Validates and carves corridors between pairs of rooms.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorridorRouter;

impl CorridorRouter {
    pub fn plan(a: &Room, b: &Room) -> CorridorPlan {
        CorridorPlan::classify(a, b)
    }

    /// Whether a corridor between `a` and `b` can be carved on `grid` as it is now.
    pub fn can_build(grid: &Grid, a: &Room, b: &Room) -> bool {
        Self::plan(a, b).is_buildable(grid)
    }

    /// Carves the corridor between `a` and `b` without re-validating it.
    pub fn build(grid: &mut Grid, a: &Room, b: &Room) -> BurrowResult<()> {
        Self::plan(a, b).carve(grid)
    }
}
