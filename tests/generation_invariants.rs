//! Seed-quantified invariants of generated worlds.

use burrow::{config, generate_world, unreachable_rooms, Position, Room, Tile, World};
use proptest::prelude::*;
use std::collections::HashSet;

fn room_cells(world: &World) -> HashSet<Position> {
    world.rooms.iter().flat_map(|room| room.footprint()).collect()
}

fn check_world(world: &World) -> Result<(), TestCaseError> {
    // Room shape and containment
    for room in &world.rooms {
        prop_assert!(room.width >= config::MIN_ROOM_SIZE && room.height >= config::MIN_ROOM_SIZE);
        prop_assert!(room.width < config::ROOM_SIZE_BOUND && room.height < config::ROOM_SIZE_BOUND);
        prop_assert!(room.x >= 0 && room.y >= 0);
        prop_assert!(room.right() < config::WIDTH && room.top() < config::HEIGHT);
    }

    // No two rooms share a cell
    for (i, a) in world.rooms.iter().enumerate() {
        for b in &world.rooms[i + 1..] {
            prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
        }
    }

    // Budgets
    let rooms = world.rooms.len();
    prop_assert_eq!(world.coin_goal as usize, rooms * 2);
    prop_assert_eq!(world.move_budget as usize, rooms * 50);
    prop_assert_eq!(world.grid.count(Tile::Coin), rooms * 2);
    prop_assert_eq!(world.grid.count(Tile::Avatar), 1);
    prop_assert_eq!(world.grid.tile(world.spawn), Some(Tile::Avatar));

    // Corridors are one tile wide: every walkable cell outside the rooms
    // has exactly two walkable neighbours.
    let inside = room_cells(world);
    for (pos, tile) in world.grid.iter() {
        if inside.contains(&pos) || !tile.is_passable() {
            continue;
        }
        let neighbours = pos
            .cardinal_adjacent_positions()
            .into_iter()
            .filter(|next| world.grid.tile(*next).is_some_and(|t| t.is_passable()))
            .count();
        prop_assert_eq!(neighbours, 2, "corridor cell {:?}", pos);
    }

    // Room perimeters hold only walls and doors
    for room in &world.rooms {
        for pos in room.wall_positions() {
            let tile = world.grid.tile(pos);
            prop_assert!(matches!(tile, Some(Tile::Wall | Tile::Floor | Tile::Coin)));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_generated_worlds_hold_invariants(seed in any::<i64>()) {
        let world = generate_world(seed).unwrap();
        check_world(&world)?;
    }

    #[test]
    fn prop_generation_is_deterministic(seed in any::<i64>()) {
        prop_assert_eq!(generate_world(seed).unwrap(), generate_world(seed).unwrap());
    }
}

#[test]
fn test_seed_one_first_room_is_stable() {
    for _ in 0..3 {
        let world = generate_world(1).unwrap();
        assert_eq!(world.rooms[0], Room::new(7, 3, 6, 11));
        assert_eq!(world.rooms.len(), 11);
        assert_eq!(world.spawn, Position::new(2, 11));
    }
}

#[test]
fn test_known_seeds() {
    let world = generate_world(0).unwrap();
    assert_eq!(world.rooms[0], Room::new(29, 17, 11, 12));
    assert_eq!(world.rooms.len(), 12);
    assert_eq!(world.spawn, Position::new(46, 14));

    let world = generate_world(12345).unwrap();
    assert_eq!(world.rooms[0], Room::new(1, 18, 9, 5));
    assert_eq!(world.rooms.len(), 13);
}

#[test]
fn test_rooms_reachable_for_seed_range() {
    for seed in -20..60 {
        let world = generate_world(seed).unwrap();
        assert!(
            unreachable_rooms(&world).is_empty(),
            "seed {} has unreachable rooms",
            seed
        );
    }
}
