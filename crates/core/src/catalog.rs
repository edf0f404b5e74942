//! Piece catalog - the seven templates
//!
//! Each template is a square matrix filled with its kind's color id, so a
//! shape alone is enough to tell which kind it is.

use crate::shape::Shape;
use crate::types::PieceKind;

const I_SHAPE: Shape = Shape::from_array(
    4,
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
);

const O_SHAPE: Shape = Shape::from_array(2, [[2, 2, 0, 0], [2, 2, 0, 0], [0; 4], [0; 4]]);

const T_SHAPE: Shape = Shape::from_array(3, [[0, 3, 0, 0], [3, 3, 3, 0], [0; 4], [0; 4]]);

const S_SHAPE: Shape = Shape::from_array(3, [[0, 4, 4, 0], [4, 4, 0, 0], [0; 4], [0; 4]]);

const L_SHAPE: Shape = Shape::from_array(3, [[0, 5, 0, 0], [0, 5, 0, 0], [5, 5, 0, 0], [0; 4]]);

const Z_SHAPE: Shape = Shape::from_array(3, [[6, 6, 0, 0], [0, 6, 6, 0], [0; 4], [0; 4]]);

const J_SHAPE: Shape = Shape::from_array(3, [[0, 7, 0, 0], [0, 7, 0, 0], [0, 7, 7, 0], [0; 4]]);

/// Fresh copy of the spawn shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_four_cells_of_its_own_color() {
        for kind in PieceKind::ALL {
            let shape = get_shape(kind);
            let cells: Vec<_> = shape.occupied().collect();
            assert_eq!(cells.len(), 4, "{:?}", kind);
            assert!(cells.iter().all(|&(_, _, c)| c == kind.color_id()));
            assert_eq!(shape.kind(), Some(kind));
        }
    }

    #[test]
    fn template_sizes() {
        assert_eq!(get_shape(PieceKind::I).size(), 4);
        assert_eq!(get_shape(PieceKind::O).size(), 2);
        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
            assert_eq!(get_shape(kind).size(), 3);
        }
    }

    #[test]
    fn copies_do_not_alias_the_template() {
        let mut shape = get_shape(PieceKind::T);
        shape.cells_mut()[0][0] = 3;
        assert_ne!(shape, get_shape(PieceKind::T));
    }
}
