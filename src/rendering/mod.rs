//! # Rendering Module
//!
//! Plain-text rendering of the grid and the in-game HUD.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;

use crate::game::GameSession;

/// Renders whole frames: the map, the status line and the end banner.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    /// Whether to append the ordered room list
    pub show_rooms: bool,
}

impl TextRenderer {
    pub fn new(show_rooms: bool) -> Self {
        Self { show_rooms }
    }

    /// Renders the current state of a session.
    pub fn render_frame(&self, session: &GameSession) -> String {
        let mut frame = render_grid(&session.world().grid);
        frame.push('\n');
        frame.push_str(&status_line(session));
        frame.push('\n');

        let banner = banner(session.status());
        if !banner.is_empty() {
            frame.push_str(banner);
            frame.push('\n');
        }
        if self.show_rooms {
            frame.push_str(&render_rooms(&session.world().rooms));
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationConfig;

    #[test]
    fn test_frame_layout() {
        let session = GameSession::new(1, &GenerationConfig::new()).unwrap();
        let frame = TextRenderer::default().render_frame(&session);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), 31);
        assert_eq!(lines[30], "Coins Collected: 0/22 | 550 moves left");
    }

    #[test]
    fn test_frame_with_rooms() {
        let session = GameSession::new(1, &GenerationConfig::new()).unwrap();
        let frame = TextRenderer::new(true).render_frame(&session);
        assert_eq!(frame.lines().count(), 31 + 11);
        assert!(frame.contains("0: x=7 y=3 w=6 h=11"));
    }
}
