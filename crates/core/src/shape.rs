//! Shape module - square color-id matrices
//!
//! A shape is a size x size matrix (size 2, 3 or 4) of color ids where 0 is an
//! empty cell. It is stored inline in a fixed 4x4 array so copies are plain
//! `Copy`s and never share storage with the catalog templates.

use crate::types::{Cell, PieceKind, EMPTY};

/// Largest supported matrix size (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Top-left corner of a shape's bounding box in board coordinates.
///
/// `y` may be negative while a piece pokes out above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Position moved by (dx, dy).
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square matrix of color ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from a padded 4x4 array; only the top-left `size` x `size`
    /// block is meaningful.
    pub const fn from_array(size: u8, cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        assert!(size >= 2 && size as usize <= MAX_SHAPE_SIZE);
        Self { size, cells }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell at column `x`, row `y`; 0 outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        let n = self.size as usize;
        if x >= n || y >= n {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// Rows of the matrix, each trimmed to `size` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let n = self.size as usize;
        self.cells[..n].iter().map(move |row| &row[..n])
    }

    /// Occupied cells as (dx, dy, color id) relative to the top-left corner.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, c)| **c != EMPTY)
                .map(move |(x, c)| (x as i8, y as i8, *c))
        })
    }

    /// Kind recovered from the color id of the first occupied cell.
    pub fn kind(&self) -> Option<PieceKind> {
        self.occupied()
            .next()
            .and_then(|(_, _, c)| PieceKind::from_color_id(c))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Shape = Shape::from_array(3, [[0, 3, 0, 0], [3, 3, 3, 0], [0, 0, 0, 0], [0; 4]]);

    #[test]
    fn occupied_lists_cells_row_major() {
        let cells: Vec<_> = T.occupied().collect();
        assert_eq!(cells, vec![(1, 0, 3), (0, 1, 3), (1, 1, 3), (2, 1, 3)]);
    }

    #[test]
    fn get_outside_matrix_is_empty() {
        assert_eq!(T.get(3, 0), EMPTY);
        assert_eq!(T.get(0, 3), EMPTY);
        assert_eq!(T.get(1, 1), 3);
    }

    #[test]
    fn rows_are_trimmed_to_size() {
        assert!(T.rows().all(|row| row.len() == 3));
        assert_eq!(T.rows().count(), 3);
    }

    #[test]
    fn kind_comes_from_color_id() {
        assert_eq!(T.kind(), Some(PieceKind::T));
        let empty = Shape::from_array(2, [[0; 4]; 4]);
        assert_eq!(empty.kind(), None);
    }
}
