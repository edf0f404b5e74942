//! Terminal host pieces for blockfall.
//!
//! A small, game-oriented rendering layer: [`GameView`] implements the core
//! `Renderer` trait by drawing into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes that buffer to the terminal as diffs.
//! [`BellSound`] implements `Sound` with the terminal bell.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sound;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sound::BellSound;
