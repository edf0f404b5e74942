//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and the session state machine. It
//! has no dependency on terminals, audio or input devices; those are reached
//! through the [`Renderer`] and [`Sound`] traits.
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven piece templates and their color ids
//! - [`shape`]: square color-id matrices and board positions
//! - [`board`]: 10x20 grid with collision test, merge and line sweep
//! - [`rotation`]: clockwise matrix rotation and SRS kick tables
//! - [`player`]: the active piece (move, drop, rotate, ghost projection)
//! - [`queue`]: five-piece lookahead filled by uniform random draws
//! - [`scoring`]: sweep points, level thresholds and gravity speed
//! - [`session`]: the game loop driven by `tick(timestamp)` and commands
//! - [`collab`]: renderer and sound capabilities
//! - [`config`]: tunable rule constants with validation
//!
//! # Example
//!
//! ```
//! use blockfall_core::{NullRenderer, Session};
//! use blockfall_core::types::Command;
//!
//! let mut session = Session::new(12345);
//!
//! session.handle(Command::MoveRight);
//! session.handle(Command::RotateCw);
//! session.handle(Command::HardDrop);
//!
//! // The host calls tick once per frame with a monotonic timestamp.
//! let mut renderer = NullRenderer;
//! session.tick(0, &mut renderer);
//! session.tick(16, &mut renderer);
//!
//! // Events queue up until the host takes them, once per frame.
//! let events: Vec<_> = session.drain_events().collect();
//! assert!(!events.is_empty());
//! assert!(!session.game_over());
//! ```
//!
//! # Timing
//!
//! The session accumulates the delta between consecutive tick timestamps.
//! Once the accumulated time exceeds the drop interval (1000ms at level 1,
//! 50ms less per level, never below 100ms) the active piece soft-drops one row.

pub mod board;
pub mod catalog;
pub mod collab;
pub mod config;
pub mod player;
pub mod queue;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod shape;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Sweep};
pub use catalog::get_shape;
pub use collab::{notify, NullRenderer, Renderer, Sound};
pub use config::{ConfigError, GameConfig};
pub use player::{Player, Step};
pub use queue::NextQueue;
pub use rotation::{kick_candidates, rotate_cw, try_rotate, KickClass, Rotated, Transition};
pub use scoring::{row_points, sweep_points, ScoreDelta, ScoreKeeper};
pub use session::{Frame, Session};
pub use shape::{Position, Shape};
