//! Shared types - constants and plain data used by every blockfall crate
//!
//! Everything here is pure data with no external dependencies, so it can be
//! used by the simulation core, the terminal host and tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing and Scoring Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame period (~60 FPS) |
//! | `INITIAL_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 50 | Interval reduction per level |
//! | `MIN_DROP_MS` | 100 | Interval floor |
//! | `LINE_BASE_POINTS` | 10 | Points for the first row of a sweep |
//! | `LEVEL_SCORE_STEP` | 100 | Level N ends at N * 100 points |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_color_id(1), Some(PieceKind::I));
//! assert_eq!(PieceKind::T.color_id(), 3);
//!
//! assert_eq!(Rotation::Spawn.rotate_cw(), Rotation::Right);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of upcoming pieces kept in the next queue
pub const NEXT_QUEUE_LEN: usize = 5;

/// Default host frame period in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1
pub const INITIAL_DROP_MS: u32 = 1000;

/// Gravity interval reduction applied on every level-up
pub const DROP_STEP_MS: u32 = 50;

/// Gravity interval floor
pub const MIN_DROP_MS: u32 = 100;

/// Points for the first row found in a sweep; each further row in the same
/// sweep doubles the multiplier.
pub const LINE_BASE_POINTS: u32 = 10;

/// Score needed per level: level N is left once the score reaches N * step.
pub const LEVEL_SCORE_STEP: u32 = 100;

/// Largest color id a board cell may hold.
pub const MAX_COLOR_ID: u8 = 7;

/// A board cell: 0 is empty, 1..=7 is the color id of the piece that locked there.
pub type Cell = u8;

/// Empty board cell.
pub const EMPTY: Cell = 0;

/// The seven piece kinds
///
/// Each kind owns a unique color id, which is what ends up in board cells
/// and what the rotation system reads back to classify a shape:
///
/// | Kind | Color id |
/// |------|----------|
/// | I | 1 |
/// | O | 2 |
/// | T | 3 |
/// | S | 4 |
/// | L | 5 |
/// | Z | 6 |
/// | J | 7 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// The color id written into board cells for this kind.
    pub fn color_id(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::L => 5,
            PieceKind::Z => 6,
            PieceKind::J => 7,
        }
    }

    /// Recover a kind from a color id found in an occupied cell.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// for kind in PieceKind::ALL {
    ///     assert_eq!(PieceKind::from_color_id(kind.color_id()), Some(kind));
    /// }
    /// assert_eq!(PieceKind::from_color_id(0), None);
    /// assert_eq!(PieceKind::from_color_id(8), None);
    /// ```
    pub fn from_color_id(id: Cell) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::L),
            6 => Some(PieceKind::Z),
            7 => Some(PieceKind::J),
            _ => None,
        }
    }
}

/// Rotation states, clockwise from the spawn orientation
///
/// - **Spawn** (0): 0°
/// - **Right** (R): 90° clockwise
/// - **Half** (2): 180°
/// - **Left** (L): 270° clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Spawn,
    Right,
    Half,
    Left,
}

impl Rotation {
    /// Numeric state 0..=3.
    pub fn index(&self) -> u8 {
        match self {
            Rotation::Spawn => 0,
            Rotation::Right => 1,
            Rotation::Half => 2,
            Rotation::Left => 3,
        }
    }

    /// Inverse of [`Rotation::index`], taken modulo 4.
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::Spawn,
            1 => Rotation::Right,
            2 => Rotation::Half,
            _ => Rotation::Left,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Spawn.rotate_cw(), Rotation::Right);
    /// assert_eq!(Rotation::Right.rotate_cw(), Rotation::Half);
    /// assert_eq!(Rotation::Half.rotate_cw(), Rotation::Left);
    /// assert_eq!(Rotation::Left.rotate_cw(), Rotation::Spawn);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Discrete input commands delivered to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell, locking it if it cannot move
    SoftDrop,
    /// Drop piece to its landing position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise (with wall kicks)
    RotateCw,
    /// Pause or resume
    TogglePause,
    /// Start a fresh game (the only command accepted after game over)
    Restart,
}

/// Events raised by the session for the sound collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece was merged into the board.
    Lock,
    /// The level went up; carries the new level.
    LevelUp { level: u32 },
    /// First game of the session started.
    GameStart,
    /// Spawn collided; the session is halted.
    GameOver,
    /// A fresh game replaced the previous one.
    Restart,
}
