//! # Spawn Placement

use super::{Placer, RandomSource, Room, SeededRandom};
use crate::game::{Grid, Position, Tile};
use crate::{BurrowError, BurrowResult};

/// Puts the avatar at the centre of a uniformly chosen room.
///
/// The choice comes from a fresh stream seeded with the room count, so it
/// does not depend on how many structural draws generation consumed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnPlacer;

impl Placer<Position> for SpawnPlacer {
    fn place(&self, grid: &mut Grid, rooms: &[Room]) -> BurrowResult<Position> {
        if rooms.is_empty() {
            return Err(BurrowError::GenerationFailed(
                "no room to spawn in".to_string(),
            ));
        }

        let mut rng = SeededRandom::new(rooms.len() as i64);
        let room = rooms[rng.next_index(rooms.len())];
        let spawn = room.center();
        grid.set_tile(spawn, Tile::Avatar)?;

        log::debug!("Spawning in room {:?} at {:?}", room, spawn);
        Ok(spawn)
    }

    fn placer_type(&self) -> &'static str {
        "SpawnPlacer"
    }
}
