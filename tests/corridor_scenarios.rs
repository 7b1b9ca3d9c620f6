//! Direct room-pair scenarios for the corridor router.

use burrow::{carve_room, CorridorKind, CorridorRouter, Grid, Position, Room, Tile};
use std::collections::HashSet;

fn changed_cells(before: &Grid, after: &Grid) -> HashSet<Position> {
    before
        .iter()
        .zip(after.iter())
        .filter(|((_, a), (_, b))| a != b)
        .map(|((pos, _), _)| pos)
        .collect()
}

/// A grid with one existing room far from the scenario rooms.
fn busy_grid() -> Grid {
    let mut grid = Grid::standard();
    carve_room(&mut grid, &Room::new(50, 20, 8, 6)).unwrap();
    grid
}

#[test]
fn test_elbow_on_wall_row_is_not_buildable() {
    let existing = Room::new(1, 10, 5, 5);
    let candidate = Room::new(11, 7, 5, 5);
    let mut grid = busy_grid();
    carve_room(&mut grid, &existing).unwrap();

    let plan = CorridorRouter::plan(&existing, &candidate);
    assert!(matches!(
        plan.kind,
        CorridorKind::Hybrid { upward: false, .. }
    ));

    let before = grid.clone();
    assert!(!CorridorRouter::can_build(&grid, &existing, &candidate));
    assert!(!CorridorRouter::can_build(&grid, &existing, &candidate));
    assert_eq!(grid, before);
}

#[test]
fn test_hybrid_corridor_connects_rooms() {
    let existing = Room::new(1, 10, 5, 5);
    let candidate = Room::new(11, 5, 5, 5);
    let mut grid = busy_grid();
    carve_room(&mut grid, &existing).unwrap();

    assert!(CorridorRouter::can_build(&grid, &existing, &candidate));
    carve_room(&mut grid, &candidate).unwrap();
    let before = grid.clone();
    CorridorRouter::build(&mut grid, &existing, &candidate).unwrap();

    let reached = burrow::reachable_tiles(&grid, existing.center());
    assert!(reached.contains(&candidate.center()));

    // Everything that changed lies in the corridor band or on a room wall
    for pos in changed_cells(&before, &grid) {
        let in_band = (6..=13).contains(&pos.x) && (10..=12).contains(&pos.y);
        let door = existing.is_border(pos) || candidate.is_border(pos);
        assert!(in_band || door, "unexpected change at {:?}", pos);
    }
    assert_eq!(grid.tile(Position::new(5, 11)), Some(Tile::Floor));
    assert_eq!(grid.tile(Position::new(12, 9)), Some(Tile::Floor));
    assert_eq!(grid.count(Tile::Wall), before.count(Tile::Wall) + 14);
}

#[test]
fn test_straight_corridors_punch_two_doors() {
    let left = Room::new(2, 2, 7, 7);
    let right = Room::new(20, 3, 6, 5);
    let mut grid = busy_grid();
    carve_room(&mut grid, &left).unwrap();
    carve_room(&mut grid, &right).unwrap();
    let before = grid.clone();

    assert!(CorridorRouter::can_build(&grid, &right, &left));
    CorridorRouter::build(&mut grid, &right, &left).unwrap();

    let doors: Vec<Position> = changed_cells(&before, &grid)
        .into_iter()
        .filter(|pos| left.is_border(*pos) || right.is_border(*pos))
        .collect();
    assert_eq!(doors.len(), 2);
    assert!(doors
        .iter()
        .all(|pos| grid.tile(*pos) == Some(Tile::Floor)));
    assert!(burrow::reachable_tiles(&grid, left.center()).contains(&right.center()));
}

#[test]
fn test_corridor_blocked_by_existing_room() {
    let left = Room::new(2, 2, 7, 7);
    let right = Room::new(30, 3, 6, 5);
    let blocker = Room::new(15, 1, 5, 10);
    let mut grid = busy_grid();
    for room in [left, right, blocker] {
        carve_room(&mut grid, &room).unwrap();
    }
    assert!(!CorridorRouter::can_build(&grid, &left, &right));
}
