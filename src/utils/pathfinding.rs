//! # Reachability
//!
//! Flood-fill reachability over walkable tiles. Corridors are attached
//! opportunistically during generation, so nothing in the algorithm itself
//! promises that every room can be reached; these helpers check it.

use crate::game::{Grid, Position, World};
use ::pathfinding::prelude::bfs_reach;
use std::collections::HashSet;

/// Every passable tile reachable from `start` by four-directional steps.
///
/// Returns an empty set when `start` itself is not passable.
pub fn reachable_tiles(grid: &Grid, start: Position) -> HashSet<Position> {
    let passable = |pos: Position| grid.tile(pos).is_some_and(|tile| tile.is_passable());
    if !passable(start) {
        return HashSet::new();
    }

    bfs_reach(start, |pos| {
        pos.cardinal_adjacent_positions()
            .into_iter()
            .filter(|next| passable(*next))
            .collect::<Vec<_>>()
    })
    .collect()
}

/// Indices of rooms whose centre cannot be reached from the spawn point.
pub fn unreachable_rooms(world: &World) -> Vec<usize> {
    let reachable = reachable_tiles(&world.grid, world.spawn);
    world
        .rooms
        .iter()
        .enumerate()
        .filter(|(_, room)| !reachable.contains(&room.center()))
        .map(|(index, _)| index)
        .collect()
}
