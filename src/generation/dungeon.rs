//! # Dungeon Generation
//!
//! The room-and-corridor growth loop.
//!
//! Generation runs in strictly sequential phases:
//! 1. Seed the structural stream and start from an all-`Empty` grid
//! 2. Bootstrap: sample one room and place it without validation
//! 3. Growth: a fixed number of attempts, each sampling a candidate room and
//!    connecting it to a random already-placed room, or discarding it whole
//! 4. Finalize: spawn the avatar and scatter coins from independent streams
//!
//! A rejected attempt never leaves anything on the grid. A world with a single
//! room is a valid result.

use super::{
    carve_room, is_placeable, CollectiblePlacer, CorridorPlan, GenerationConfig, Placer,
    RandomSource, Room, RoomSampler, SeededRandom, SpawnPlacer,
};
use crate::game::{Grid, World};
use crate::utils::unreachable_rooms;
use crate::{BurrowError, BurrowResult};

/// Mutable state threaded through one generation run.
///
/// Owns the grid, the ordered room list and the structural random stream;
/// nothing else touches them until the finished [`World`] is handed out.
#[derive(Debug, Clone)]
pub struct GenerationState {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub rng: SeededRandom,
}

impl GenerationState {
    pub fn new(seed: i64, config: &GenerationConfig) -> Self {
        Self {
            grid: Grid::new(config.width, config.height),
            rooms: Vec::new(),
            rng: SeededRandom::new(seed),
        }
    }

    /// Carves `room` and appends it to the room list. Does not validate.
    pub fn place_room(&mut self, room: Room) -> BurrowResult<()> {
        carve_room(&mut self.grid, &room)?;
        self.rooms.push(room);
        Ok(())
    }

    /// Runs one growth-phase attempt. Returns whether a room was added.
    pub fn grow(&mut self, sampler: &RoomSampler) -> BurrowResult<bool> {
        let Some(candidate) = sampler.sample(&mut self.rng) else {
            log::trace!("Room sampling ran out of draws");
            return Ok(false);
        };
        if !is_placeable(&self.grid, &candidate) {
            log::trace!("Rejected {:?}: footprint occupied", candidate);
            return Ok(false);
        }

        let target = self.rooms[self.rng.next_index(self.rooms.len())];
        let corridor = CorridorPlan::classify(&target, &candidate);
        if !corridor.is_buildable(&self.grid) {
            log::trace!("Rejected {:?}: no clear corridor to {:?}", candidate, target);
            return Ok(false);
        }

        self.place_room(candidate)?;
        corridor.carve(&mut self.grid)?;
        log::debug!(
            "Placed room #{} {:?} via {:?}",
            self.rooms.len(),
            candidate,
            corridor.kind
        );
        Ok(true)
    }
}

/// Builds worlds from seeds.
///
/// # Examples
///
/// ```
/// use burrow::{GenerationConfig, WorldGenerator};
///
/// let generator = WorldGenerator::new(GenerationConfig::new()).unwrap();
/// let world = generator.generate(1).unwrap();
/// assert_eq!(world.rooms.len(), 11);
/// assert_eq!(world.move_budget, 550);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorldGenerator {
    config: GenerationConfig,
}

impl WorldGenerator {
    /// Creates a generator, rejecting configurations that cannot produce a room.
    pub fn new(config: GenerationConfig) -> BurrowResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generates the world for `seed`.
    pub fn generate(&self, seed: i64) -> BurrowResult<World> {
        self.generate_with_stream(seed).map(|(world, _)| world)
    }

    /// Generates the world for `seed` and also returns the structural stream
    /// in the state generation left it, for a game session to keep drawing from.
    pub fn generate_with_stream(&self, seed: i64) -> BurrowResult<(World, SeededRandom)> {
        let mut state = GenerationState::new(seed, &self.config);
        let sampler = RoomSampler::new(&self.config);

        let first = sampler.sample(&mut state.rng).ok_or_else(|| {
            BurrowError::GenerationFailed(format!("seed {} never produced a first room", seed))
        })?;
        state.place_room(first)?;

        for _ in 0..self.config.growth_attempts {
            state.grow(&sampler)?;
        }

        let GenerationState {
            mut grid,
            rooms,
            rng,
        } = state;

        let spawner = SpawnPlacer;
        let spawn = spawner.place(&mut grid, &rooms)?;
        let collectibles = CollectiblePlacer::new(&self.config);
        let coin_goal = collectibles.place(&mut grid, &rooms)?;
        log::debug!(
            "Finalized with {} and {}",
            spawner.placer_type(),
            collectibles.placer_type()
        );

        let move_budget = i32::try_from(rooms.len())
            .ok()
            .and_then(|count| count.checked_mul(self.config.moves_per_room))
            .ok_or_else(|| {
                BurrowError::GenerationFailed(format!(
                    "{} rooms at {} moves each overflow the move budget",
                    rooms.len(),
                    self.config.moves_per_room
                ))
            })?;

        let world = World {
            seed,
            move_budget,
            grid,
            rooms,
            spawn,
            coin_goal,
        };

        let stranded = unreachable_rooms(&world);
        if !stranded.is_empty() {
            log::warn!(
                "Seed {}: rooms {:?} are not reachable from the spawn point",
                seed,
                stranded
            );
        }
        log::info!(
            "Generated seed {}: {} rooms, spawn {:?}, {} coins, {} moves",
            seed,
            world.rooms.len(),
            world.spawn,
            world.coin_goal,
            world.move_budget
        );

        Ok((world, rng))
    }
}

/// Generates the world for `seed` with the standard configuration.
pub fn generate_world(seed: i64) -> BurrowResult<World> {
    WorldGenerator::default().generate(seed)
}
