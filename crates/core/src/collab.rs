//! Collaborator capabilities - drawing and sound
//!
//! The session never touches a terminal or an audio device. It draws through
//! a [`Renderer`] handed to `tick` and reports [`GameEvent`]s that the host
//! forwards to a [`Sound`].

use crate::board::Board;
use crate::shape::{Position, Shape};
use crate::types::GameEvent;

/// Drawing primitives, called once per tick in this order: `begin_frame`,
/// `draw_board`, ghost, active piece, previews, stats, overlay.
pub trait Renderer {
    fn begin_frame(&mut self) {}

    fn draw_board(&mut self, board: &Board);

    /// `ghost` marks the landing projection rather than the active piece.
    fn draw_piece(&mut self, shape: &Shape, pos: Position, ghost: bool);

    /// Upcoming piece in preview `slot` (0 is next).
    fn draw_preview(&mut self, shape: &Shape, slot: usize);

    fn draw_stats(&mut self, score: u32, level: u32);

    fn draw_overlay_text(&mut self, text: &str);
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_board(&mut self, _board: &Board) {}
    fn draw_piece(&mut self, _shape: &Shape, _pos: Position, _ghost: bool) {}
    fn draw_preview(&mut self, _shape: &Shape, _slot: usize) {}
    fn draw_stats(&mut self, _score: u32, _level: u32) {}
    fn draw_overlay_text(&mut self, _text: &str) {}
}

/// Fire-and-forget audio cues
pub trait Sound {
    fn on_lock(&mut self);
    fn on_level_up(&mut self, level: u32);
    fn on_game_start(&mut self);
    fn on_game_over(&mut self);
    fn on_restart(&mut self);
}

/// Route one event to the matching sound callback.
pub fn notify<S: Sound + ?Sized>(sound: &mut S, event: GameEvent) {
    match event {
        GameEvent::Lock => sound.on_lock(),
        GameEvent::LevelUp { level } => sound.on_level_up(level),
        GameEvent::GameStart => sound.on_game_start(),
        GameEvent::GameOver => sound.on_game_over(),
        GameEvent::Restart => sound.on_restart(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Calls(Vec<String>);

    impl Sound for Calls {
        fn on_lock(&mut self) {
            self.0.push("lock".into());
        }
        fn on_level_up(&mut self, level: u32) {
            self.0.push(format!("level {}", level));
        }
        fn on_game_start(&mut self) {
            self.0.push("start".into());
        }
        fn on_game_over(&mut self) {
            self.0.push("over".into());
        }
        fn on_restart(&mut self) {
            self.0.push("restart".into());
        }
    }

    #[test]
    fn notify_routes_every_event() {
        let mut calls = Calls::default();
        for event in [
            GameEvent::GameStart,
            GameEvent::Lock,
            GameEvent::LevelUp { level: 3 },
            GameEvent::GameOver,
            GameEvent::Restart,
        ] {
            notify(&mut calls, event);
        }
        assert_eq!(calls.0, vec!["start", "lock", "level 3", "over", "restart"]);
    }

    #[test]
    fn notify_through_trait_object() {
        let mut calls = Calls::default();
        let sound: &mut dyn Sound = &mut calls;
        notify(sound, GameEvent::Lock);
        assert_eq!(calls.0, vec!["lock"]);
    }
}
