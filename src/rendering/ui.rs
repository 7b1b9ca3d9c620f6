//! # User Interface Elements
//!
//! The status line and the end-of-game banner.

use crate::game::{GameSession, GameStatus};

/// Coin progress and remaining moves, e.g. `Coins Collected: 3/22 | 410 moves left`.
pub fn status_line(session: &GameSession) -> String {
    format!(
        "Coins Collected: {}/{} | {} moves left",
        session.coins_collected(),
        session.coin_goal(),
        session.moves_left()
    )
}

/// The end-of-game banner; empty while the game is still running.
pub fn banner(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "",
        GameStatus::Won => "YOU WIN",
        GameStatus::Lost => "YOU LOSE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationConfig;

    #[test]
    fn test_status_line() {
        let session = GameSession::new(42, &GenerationConfig::new()).unwrap();
        assert_eq!(
            status_line(&session),
            "Coins Collected: 0/22 | 550 moves left"
        );
    }

    #[test]
    fn test_banners() {
        assert_eq!(banner(GameStatus::Playing), "");
        assert_eq!(banner(GameStatus::Won), "YOU WIN");
        assert_eq!(banner(GameStatus::Lost), "YOU LOSE");
    }
}
