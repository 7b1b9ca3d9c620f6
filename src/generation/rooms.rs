//! # Room Sampling and Placement
//!
//! Candidate rooms are drawn by rejection sampling: one raw draw per
//! dimension and coordinate, then redraws until each value fits. The draw
//! order (height, width, x, y) is part of a seed's identity.

use super::{resample, GenerationConfig, RandomSource, Room};
use crate::game::{Grid, Tile};
use crate::BurrowResult;

/// Draws candidate rooms that satisfy the room size and bounds invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSampler {
    grid_width: i32,
    grid_height: i32,
    min_size: i32,
    size_bound: i32,
    max_draws: u32,
}

impl RoomSampler {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            grid_width: config.width,
            grid_height: config.height,
            min_size: config.min_room_size,
            size_bound: config.room_size_bound,
            max_draws: config.max_rejection_draws,
        }
    }

    /// Samples one room, or `None` if a rejection loop ran out of draws.
    ///
    /// The result is not the uniform distribution over valid rectangles: it is
    /// the raw draws conditioned on acceptance, which seed compatibility requires.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<Room> {
        let size_bound = self.size_bound as u32;
        let width_bound = self.grid_width as u32;
        let height_bound = self.grid_height as u32;

        let height = rng.next_bounded(size_bound);
        let width = rng.next_bounded(size_bound);
        let x = rng.next_bounded(width_bound);
        let y = rng.next_bounded(height_bound);

        let min_size = self.min_size as u32;
        let height = resample(rng, height, size_bound, self.max_draws, |h| h >= min_size)? as i32;
        let width = resample(rng, width, size_bound, self.max_draws, |w| w >= min_size)? as i32;

        let x = resample(rng, x, width_bound, self.max_draws, |x| {
            x as i32 + width - 1 < self.grid_width
        })? as i32;
        let y = resample(rng, y, height_bound, self.max_draws, |y| {
            y as i32 + height - 1 < self.grid_height
        })? as i32;

        Some(Room::new(x, y, width, height))
    }
}

/// Whether every cell of the room's footprint, walls included, is on the grid
/// and `Empty`. Never mutates the grid.
pub fn is_placeable(grid: &Grid, room: &Room) -> bool {
    room.footprint().all(|pos| grid.is_empty_at(pos))
}

/// Fills the room with `Floor` and its perimeter with `Wall`.
///
/// Does not re-validate; call [`is_placeable`] first.
pub fn carve_room(grid: &mut Grid, room: &Room) -> BurrowResult<()> {
    for pos in room.footprint() {
        let tile = if room.is_border(pos) {
            Tile::Wall
        } else {
            Tile::Floor
        };
        grid.set_tile(pos, tile)?;
    }
    Ok(())
}
