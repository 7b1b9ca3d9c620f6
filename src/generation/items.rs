//! # Collectible Placement
//!
//! Scatters coins onto random floor tiles once the layout is final.

use super::{GenerationConfig, Placer, Room, SeededRandom};
use crate::game::{Grid, Position, Tile};
use crate::{BurrowError, BurrowResult};

/// Scatters a fixed quota of coins per room onto `Floor` tiles.
///
/// Coordinates are drawn uniformly over the whole grid and redrawn until they
/// land on floor, using a stream seeded with the room count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectiblePlacer {
    pub coins_per_room: u32,
    pub max_draws: u32,
}

impl CollectiblePlacer {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            coins_per_room: config.coins_per_room,
            max_draws: config.max_placement_draws,
        }
    }

    fn drop_coin(&self, grid: &mut Grid, rng: &mut SeededRandom) -> BurrowResult<Position> {
        let width = grid.width() as u32;
        let height = grid.height() as u32;

        for _ in 0..self.max_draws {
            let x = rng.next_bounded(width) as i32;
            let y = rng.next_bounded(height) as i32;
            let pos = Position::new(x, y);
            if grid.tile(pos) == Some(Tile::Floor) {
                grid.set_tile(pos, Tile::Coin)?;
                return Ok(pos);
            }
        }

        Err(BurrowError::GenerationFailed(format!(
            "no floor tile found for a coin after {} draws",
            self.max_draws
        )))
    }
}

impl Default for CollectiblePlacer {
    fn default() -> Self {
        Self::new(&GenerationConfig::default())
    }
}

impl Placer<u32> for CollectiblePlacer {
    /// Returns the number of coins placed, which is the coin goal.
    fn place(&self, grid: &mut Grid, rooms: &[Room]) -> BurrowResult<u32> {
        let goal = u32::try_from(rooms.len())
            .ok()
            .and_then(|count| count.checked_mul(self.coins_per_room))
            .ok_or_else(|| {
                BurrowError::GenerationFailed(format!(
                    "{} rooms at {} coins each overflow the coin goal",
                    rooms.len(),
                    self.coins_per_room
                ))
            })?;
        let mut rng = SeededRandom::new(rooms.len() as i64);

        for _ in 0..goal {
            self.drop_coin(grid, &mut rng)?;
        }

        log::debug!("Scattered {} coins", goal);
        Ok(goal)
    }

    fn placer_type(&self) -> &'static str {
        "CollectiblePlacer"
    }
}
