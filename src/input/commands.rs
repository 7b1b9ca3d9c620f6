//! # Input Scripts
//!
//! A script drives a whole session from one string, e.g. `N42SWWDD:Q`:
//! start a new game with seed 42, step up twice and right twice, then save
//! and quit. `L` instead of `N<seed>S` continues from the save file.

use super::PlayerInput;
use crate::game::GameSession;
use crate::generation::GenerationConfig;
use crate::{BurrowError, BurrowResult};
use std::path::Path;
use std::str::FromStr;

/// How a script obtains its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStart {
    /// Generate a fresh world from the seed
    New(i64),
    /// Replay the save file
    Load,
}

/// A parsed input script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub start: ScriptStart,
    pub inputs: Vec<PlayerInput>,
    /// Whether the script ended with `:Q`
    pub save_and_quit: bool,
}

impl Script {
    /// Parses a script.
    ///
    /// Characters before the first `N` or `L` are skipped. After the start
    /// command, mapped keys become inputs and anything else is ignored. `:Q`
    /// ends the script and requests a save; a `:` followed by anything else is
    /// skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Direction, PlayerInput, Script, ScriptStart};
    ///
    /// let script = Script::parse("n-5sWd:q").unwrap();
    /// assert_eq!(script.start, ScriptStart::New(-5));
    /// assert_eq!(
    ///     script.inputs,
    ///     vec![
    ///         PlayerInput::Move(Direction::North),
    ///         PlayerInput::Move(Direction::East),
    ///     ]
    /// );
    /// assert!(script.save_and_quit);
    /// ```
    pub fn parse(text: &str) -> BurrowResult<Self> {
        let chars: Vec<char> = text.chars().collect();
        let command = chars
            .iter()
            .position(|c| c.eq_ignore_ascii_case(&'n') || c.eq_ignore_ascii_case(&'l'))
            .ok_or_else(|| {
                BurrowError::InvalidInput(format!("{:?} has no N or L command", text))
            })?;

        let (start, keys) = if chars[command].eq_ignore_ascii_case(&'n') {
            let body = &chars[command + 1..];
            let end = body
                .iter()
                .position(|c| c.eq_ignore_ascii_case(&'s'))
                .ok_or_else(|| {
                    BurrowError::InvalidInput(format!("seed in {:?} is not closed by S", text))
                })?;
            let digits: String = body[..end].iter().collect();
            let seed = digits
                .parse::<i64>()
                .map_err(|_| BurrowError::InvalidInput(format!("invalid seed {:?}", digits)))?;
            (ScriptStart::New(seed), &body[end + 1..])
        } else {
            (ScriptStart::Load, &chars[command + 1..])
        };

        let mut inputs = Vec::new();
        let mut save_and_quit = false;
        let mut keys = keys.iter().peekable();
        while let Some(&key) = keys.next() {
            if key == ':' {
                if keys.peek().is_some_and(|next| next.eq_ignore_ascii_case(&'q')) {
                    save_and_quit = true;
                    break;
                }
                continue;
            }
            inputs.extend(PlayerInput::from_key(key));
        }

        Ok(Self {
            start,
            inputs,
            save_and_quit,
        })
    }
}

impl FromStr for Script {
    type Err = BurrowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Runs a script end to end and returns the resulting session.
///
/// `save_path` is read for `L` scripts and written when the script ends in `:Q`.
pub fn play_script(
    script: &Script,
    config: &GenerationConfig,
    save_path: impl AsRef<Path>,
) -> BurrowResult<GameSession> {
    let save_path = save_path.as_ref();
    let mut session = match script.start {
        ScriptStart::New(seed) => GameSession::new(seed, config)?,
        ScriptStart::Load => GameSession::load(save_path, config)?,
    };

    session.apply_all(script.inputs.iter().copied())?;

    if script.save_and_quit {
        session.save(save_path)?;
    }
    Ok(session)
}
