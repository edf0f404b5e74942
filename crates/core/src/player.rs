//! Player module - the active falling piece
//!
//! The player owns a working copy of a catalog shape plus its position and
//! rotation state. Every move is tried first and reverted when the board
//! reports a collision, so the player never rests on an illegal position.

use crate::board::Board;
use crate::catalog::get_shape;
use crate::queue::NextQueue;
use crate::rotation::try_rotate;
use crate::shape::{Position, Shape};
use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Outcome of moving the piece down one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    /// The row below is blocked; the piece did not move.
    Landed,
}

/// Active piece state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    shape: Shape,
    pos: Position,
    rotation: Rotation,
}

impl Player {
    /// A piece in spawn orientation at its spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = get_shape(kind);
        Self {
            pos: Self::spawn_position(&shape),
            shape,
            rotation: Rotation::Spawn,
        }
    }

    /// x = W/2 - size/2, y = 0
    pub fn spawn_position(shape: &Shape) -> Position {
        Position::new((BOARD_WIDTH / 2) as i8 - (shape.size() / 2) as i8, 0)
    }

    /// Replace the active piece with the head of `queue`.
    ///
    /// The queue is topped back up to five. Returns `true` if the new piece
    /// already collides at its spawn position.
    pub fn reset(&mut self, queue: &mut NextQueue, board: &Board) -> bool {
        let kind = queue.pop();
        queue.refill();
        *self = Self::spawn(kind);
        self.collides(board)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn kind(&self) -> Option<PieceKind> {
        self.shape.kind()
    }

    pub fn collides(&self, board: &Board) -> bool {
        board.collide(&self.shape, self.pos)
    }

    /// Shift one column; `dir` is -1 (left) or +1 (right).
    ///
    /// Returns false and leaves the piece in place when blocked.
    pub fn shift(&mut self, board: &Board, dir: i8) -> bool {
        debug_assert!(dir == -1 || dir == 1, "shift direction must be -1 or 1");
        let next = self.pos.offset(dir, 0);
        if board.collide(&self.shape, next) {
            return false;
        }
        self.pos = next;
        true
    }

    pub fn step_down(&mut self, board: &Board) -> Step {
        let next = self.pos.offset(0, 1);
        if board.collide(&self.shape, next) {
            return Step::Landed;
        }
        self.pos = next;
        Step::Moved
    }

    /// Rows the piece can still fall before landing.
    pub fn drop_distance(&self, board: &Board) -> u8 {
        let mut distance = 0u8;
        while !board.collide(&self.shape, self.pos.offset(0, distance as i8 + 1)) {
            distance += 1;
        }
        distance
    }

    /// Where a hard drop would put the piece.
    pub fn ghost_position(&self, board: &Board) -> Position {
        self.pos.offset(0, self.drop_distance(board) as i8)
    }

    /// Move straight to the landing position; returns the rows fallen.
    pub fn hard_drop(&mut self, board: &Board) -> u8 {
        let distance = self.drop_distance(board);
        self.pos = self.pos.offset(0, distance as i8);
        distance
    }

    /// Rotate clockwise with wall kicks; false if no kick fits.
    pub fn rotate(&mut self, board: &Board) -> bool {
        match try_rotate(board, &self.shape, self.pos, self.rotation) {
            Some(rotated) => {
                self.shape = rotated.shape;
                self.pos = rotated.position;
                self.rotation = rotated.rotation;
                true
            }
            None => false,
        }
    }

    /// Write the piece into the board at its current position.
    pub fn lock_into(&self, board: &mut Board) {
        board.merge(&self.shape, self.pos);
    }
}
