//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of color ids (0 = empty) stored as a flat
//! row-major array. Coordinates: (x, y) where x ranges 0..9 (left to right)
//! and y ranges 0..19 (top to bottom).
//!
//! The board is only ever mutated by [`Board::merge`] (a piece locks) and
//! [`Board::sweep`] (full rows are removed).

use arrayvec::ArrayVec;

use crate::shape::{Position, Shape};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, MAX_COLOR_ID};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Rows removed by one [`Board::sweep`] call, in the order they were found.
///
/// Indices are the row positions at the time of removal; because the scan
/// re-examines the same index after a removal, the same index can appear
/// more than once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sweep {
    rows: ArrayVec<u8, { BOARD_HEIGHT as usize }>,
}

impl Sweep {
    /// Number of rows cleared.
    pub fn count(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cleared row indices, bottom-up.
    pub fn rows(&self) -> &[u8] {
        &self.rows
    }
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    ///
    /// Returns false if out of bounds or if `cell` is not a valid color id.
    /// Used to build positions for tests and benchmarks; gameplay only
    /// writes through [`Board::merge`].
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if cell > MAX_COLOR_ID {
            return false;
        }
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// One row of the board, left to right; `None` below the floor.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let width = BOARD_WIDTH as usize;
        let start = y * width;
        self.cells.get(start..start + width)
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|&cell| cell != EMPTY))
    }

    /// Would `shape` placed at `pos` overlap a wall, the floor or a filled cell?
    ///
    /// Cells above the board (y < 0) never collide, so pieces may spawn or
    /// kick partially out of view.
    pub fn collide(&self, shape: &Shape, pos: Position) -> bool {
        shape.occupied().any(|(dx, dy, _)| {
            let x = pos.x + dx;
            let y = pos.y + dy;
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Write the shape's color ids into the board at `pos`.
    ///
    /// The caller must have checked that `pos` does not collide. Cells that
    /// are still above the board are discarded.
    pub fn merge(&mut self, shape: &Shape, pos: Position) {
        debug_assert!(!self.collide(shape, pos), "merge at colliding position");
        for (dx, dy, color) in shape.occupied() {
            self.set(pos.x + dx, pos.y + dy, color);
        }
    }

    /// Clear a row and shift all rows above down, leaving an empty top row
    fn clear_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(EMPTY);
    }

    /// Remove every full row, scanning from the bottom up.
    ///
    /// After a removal the same index is examined again, since the row that
    /// was above has slid into it. Row 0 is part of the scan.
    pub fn sweep(&mut self) -> Sweep {
        let mut sweep = Sweep::default();
        let mut y = BOARD_HEIGHT as usize;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                sweep.rows.push(row as u8);
            } else {
                y -= 1;
            }
        }
        sweep
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_shape;
    use crate::types::PieceKind;

    fn fill_row(board: &mut Board, y: i8, color: Cell) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, color);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn row_access_is_bounds_checked() {
        let mut board = Board::new();
        fill_row(&mut board, 19, 3);
        assert_eq!(board.row(19), Some(&[3; 10][..]));
        assert_eq!(board.row(BOARD_HEIGHT as usize), None);
        assert_eq!(board.row(usize::MAX), None);
        assert!(!board.is_row_full(BOARD_HEIGHT as usize));
    }

    #[test]
    fn set_rejects_invalid_color_ids() {
        let mut board = Board::new();
        assert!(!board.set(0, 0, MAX_COLOR_ID + 1));
        assert_eq!(board.get(0, 0), Some(EMPTY));
        assert!(board.set(0, 0, MAX_COLOR_ID));
    }

    #[test]
    fn collide_ignores_cells_above_the_board() {
        let board = Board::new();
        let i = get_shape(PieceKind::I);
        // Vertical I with three cells above the board.
        assert!(!board.collide(&i, Position::new(3, -3)));
        // Entirely above the board.
        assert!(!board.collide(&i, Position::new(3, -10)));
    }

    #[test]
    fn collide_against_walls_and_floor() {
        let board = Board::new();
        let o = get_shape(PieceKind::O);
        assert!(board.collide(&o, Position::new(-1, 0)));
        assert!(board.collide(&o, Position::new(9, 0)));
        assert!(board.collide(&o, Position::new(4, 19)));
        assert!(!board.collide(&o, Position::new(8, 18)));
    }

    #[test]
    fn collide_skips_empty_matrix_cells() {
        let board = Board::new();
        // The I template only fills column 1, so column 0 may hang off the left wall.
        let i = get_shape(PieceKind::I);
        assert!(!board.collide(&i, Position::new(-1, 0)));
        assert!(board.collide(&i, Position::new(-2, 0)));
    }

    #[test]
    fn merge_writes_color_ids() {
        let mut board = Board::new();
        let t = get_shape(PieceKind::T);
        board.merge(&t, Position::new(0, 18));
        assert_eq!(board.get(1, 18), Some(3));
        assert_eq!(board.get(0, 19), Some(3));
        assert_eq!(board.get(1, 19), Some(3));
        assert_eq!(board.get(2, 19), Some(3));
        assert_eq!(board.get(0, 18), Some(EMPTY));
    }

    #[test]
    fn merge_drops_cells_above_the_board() {
        let mut board = Board::new();
        let i = get_shape(PieceKind::I);
        board.merge(&i, Position::new(0, -2));
        assert_eq!(board.get(1, 0), Some(1));
        assert_eq!(board.get(1, 1), Some(1));
        assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY).count(), 2);
    }

    #[test]
    fn sweep_rescans_row_that_slid_down() {
        let mut board = Board::new();
        fill_row(&mut board, 19, 1);
        fill_row(&mut board, 18, 2);
        board.set(0, 17, 3);

        let sweep = board.sweep();
        assert_eq!(sweep.count(), 2);
        assert_eq!(sweep.rows(), &[19, 19]);
        assert_eq!(board.get(0, 19), Some(3));
        assert!(board.rows().take(19).flatten().all(|&c| c == EMPTY));
    }

    #[test]
    fn sweep_includes_top_row() {
        let mut board = Board::new();
        fill_row(&mut board, 0, 4);
        let sweep = board.sweep();
        assert_eq!(sweep.rows(), &[0]);
        assert!(board.cells().iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn sweep_on_empty_board_clears_nothing() {
        let mut board = Board::new();
        assert!(board.sweep().is_empty());
    }
}
