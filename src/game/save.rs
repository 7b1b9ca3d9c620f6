//! # Save Files
//!
//! A session is saved as its seed plus the keys of every accepted input.
//! Loading regenerates the world and replays the keys, which reproduces the
//! exact session, teleports included.

use super::GameSession;
use crate::generation::GenerationConfig;
use crate::input::PlayerInput;
use crate::{BurrowError, BurrowResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default save file name used by the command-line binary.
pub const DEFAULT_SAVE_FILE: &str = "burrow_save.json";

/// Persistent form of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub seed: i64,
    pub history: String,
}

impl SaveData {
    pub fn to_json(&self) -> BurrowResult<String> {
        serde_json::to_string_pretty(self).map_err(BurrowError::from)
    }

    pub fn from_json(json: &str) -> BurrowResult<Self> {
        serde_json::from_str(json).map_err(BurrowError::from)
    }

    /// Rebuilds the session this save describes.
    pub fn restore(&self, config: &GenerationConfig) -> BurrowResult<GameSession> {
        let mut session = GameSession::new(self.seed, config)?;
        for key in self.history.chars() {
            let input = PlayerInput::from_key(key).ok_or_else(|| {
                BurrowError::InvalidInput(format!("unexpected key {:?} in saved history", key))
            })?;
            session.apply(input)?;
        }
        Ok(session)
    }
}

impl GameSession {
    pub fn save_data(&self) -> SaveData {
        SaveData {
            seed: self.seed(),
            history: self.history().to_string(),
        }
    }

    /// Writes the save file, replacing any previous one.
    pub fn save(&self, path: impl AsRef<Path>) -> BurrowResult<()> {
        let path = path.as_ref();
        fs::write(path, self.save_data().to_json()?)?;
        log::info!(
            "Saved seed {} with {} inputs to {}",
            self.seed(),
            self.history().len(),
            path.display()
        );
        Ok(())
    }

    /// Reads a save file and replays it.
    pub fn load(path: impl AsRef<Path>, config: &GenerationConfig) -> BurrowResult<Self> {
        let path = path.as_ref();
        let data = SaveData::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loading seed {} from {}", data.seed, path.display());
        data.restore(config)
    }
}
