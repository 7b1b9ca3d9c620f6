//! # Game State Module
//!
//! A play session on top of a generated world: avatar movement, teleports,
//! coin collection and the move budget.
//!
//! The session owns its world and mutates the grid only through avatar
//! movement: the vacated cell becomes `Floor` and the new cell `Avatar`.

use crate::generation::{GenerationConfig, RandomSource, SeededRandom, WorldGenerator};
use crate::input::PlayerInput;
use crate::{config, BurrowError, BurrowResult, Direction, Position, Tile, World};
use serde::{Deserialize, Serialize};

/// Whether the session is still running and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Something that happened while applying an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The avatar took one step
    Moved { from: Position, to: Position },
    /// The step was refused; nothing changed
    Blocked { direction: Direction },
    /// The avatar jumped to the centre of a room
    Teleported { from: Position, to: Position },
    /// A coin was picked up
    CoinCollected { at: Position, total: u32 },
    /// All coins collected
    Won,
    /// Move budget spent before all coins were found
    Lost,
}

/// Session statistics for the summary line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatistics {
    /// Successful single steps
    pub steps_taken: u32,
    /// Steps refused by walls or empty space
    pub blocked_moves: u32,
    /// Teleports used
    pub teleports: u32,
}

impl SessionStatistics {
    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Moved { .. } => self.steps_taken += 1,
            GameEvent::Blocked { .. } => self.blocked_moves += 1,
            GameEvent::Teleported { .. } => self.teleports += 1,
            _ => {}
        }
    }
}

/// A running game.
///
/// # Examples
///
/// ```
/// use burrow::{GameSession, GameStatus, GenerationConfig};
///
/// let session = GameSession::new(1, &GenerationConfig::new()).unwrap();
/// assert_eq!(session.status(), GameStatus::Playing);
/// assert_eq!(session.moves_left(), 550);
/// assert_eq!(session.player(), session.world().spawn);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    seed: i64,
    world: World,
    rng: SeededRandom,
    player: Position,
    coins_collected: u32,
    moves_left: i32,
    history: String,
    statistics: SessionStatistics,
}

impl GameSession {
    /// Generates the world for `seed` and puts the player on its spawn point.
    pub fn new(seed: i64, config: &GenerationConfig) -> BurrowResult<Self> {
        let generator = WorldGenerator::new(config.clone())?;
        let (world, rng) = generator.generate_with_stream(seed)?;
        Self::from_world(world, rng)
    }

    /// Starts a session on an already generated world.
    ///
    /// `rng` continues the world's structural stream and drives teleports,
    /// so the world needs at least one room to teleport to.
    pub fn from_world(world: World, rng: SeededRandom) -> BurrowResult<Self> {
        if world.rooms.is_empty() {
            return Err(BurrowError::GenerationFailed(format!(
                "world for seed {} has no rooms",
                world.seed
            )));
        }
        Ok(Self {
            seed: world.seed,
            player: world.spawn,
            moves_left: world.move_budget,
            world,
            rng,
            coins_collected: 0,
            history: String::new(),
            statistics: SessionStatistics::default(),
        })
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn coins_collected(&self) -> u32 {
        self.coins_collected
    }

    pub fn coin_goal(&self) -> u32 {
        self.world.coin_goal
    }

    pub fn moves_left(&self) -> i32 {
        self.moves_left
    }

    /// Keys of every accepted input, in order.
    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    /// Won once every coin is collected; lost once the moves run out first.
    pub fn status(&self) -> GameStatus {
        if self.coins_collected >= self.world.coin_goal {
            GameStatus::Won
        } else if self.moves_left <= 0 {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Applies one input. Inputs after the game has ended are ignored.
    pub fn apply(&mut self, input: PlayerInput) -> BurrowResult<Vec<GameEvent>> {
        if self.status() != GameStatus::Playing {
            return Ok(Vec::new());
        }

        let mut events = match input {
            PlayerInput::Move(direction) => self.step(direction)?,
            PlayerInput::Teleport => self.teleport()?,
        };

        if !matches!(events.first(), Some(GameEvent::Blocked { .. })) {
            self.history.push(input.key());
        }
        match self.status() {
            GameStatus::Won => {
                log::info!("Seed {}: all {} coins collected", self.seed, self.coins_collected);
                events.push(GameEvent::Won);
            }
            GameStatus::Lost => {
                log::info!(
                    "Seed {}: out of moves with {}/{} coins",
                    self.seed,
                    self.coins_collected,
                    self.world.coin_goal
                );
                events.push(GameEvent::Lost);
            }
            GameStatus::Playing => {}
        }

        for event in &events {
            self.statistics.update_from_event(event);
        }
        Ok(events)
    }

    /// Applies each input in turn and collects the events.
    pub fn apply_all<I>(&mut self, inputs: I) -> BurrowResult<Vec<GameEvent>>
    where
        I: IntoIterator<Item = PlayerInput>,
    {
        let mut events = Vec::new();
        for input in inputs {
            events.extend(self.apply(input)?);
        }
        Ok(events)
    }

    fn step(&mut self, direction: Direction) -> BurrowResult<Vec<GameEvent>> {
        let from = self.player;
        let to = from.step(direction);

        let target = self.world.grid.tile(to);
        if !matches!(target, Some(Tile::Floor | Tile::Coin)) {
            log::trace!(
                "Blocked moving {:?} into {}",
                direction,
                target.map_or("the edge of the map", Tile::description)
            );
            return Ok(vec![GameEvent::Blocked { direction }]);
        }

        let mut events = Vec::new();
        if target == Some(Tile::Coin) {
            events.push(self.collect(to));
        }
        self.relocate(to)?;
        self.moves_left -= 1;
        events.insert(0, GameEvent::Moved { from, to });
        Ok(events)
    }

    fn teleport(&mut self) -> BurrowResult<Vec<GameEvent>> {
        let from = self.player;
        let room = self.world.rooms[self.rng.next_index(self.world.rooms.len())];
        let to = room.center();
        self.moves_left -= config::TELEPORT_COST;

        let mut events = vec![GameEvent::Teleported { from, to }];
        if self.world.grid.tile(to) == Some(Tile::Coin) {
            events.push(self.collect(to));
        }
        self.relocate(to)?;
        log::debug!("Teleported from {:?} to {:?}", from, to);
        Ok(events)
    }

    fn collect(&mut self, at: Position) -> GameEvent {
        self.coins_collected += 1;
        GameEvent::CoinCollected {
            at,
            total: self.coins_collected,
        }
    }

    fn relocate(&mut self, to: Position) -> BurrowResult<()> {
        self.world.grid.set_tile(self.player, Tile::Floor)?;
        self.world.grid.set_tile(to, Tile::Avatar)?;
        self.player = to;
        Ok(())
    }
}
