//! Rotation module - matrix rotation and SRS wall kicks
//!
//! Rotation works on the color-id matrix itself: transpose, then reverse each
//! row. If the rotated matrix does not fit where the piece is, the SRS kick
//! candidates for the transition are tried in order.
//! Reference: https://tetris.wiki/Super_Rotation_System
//!
//! The kick tables below are the published ones, so their Δy points *up*.
//! The board's y axis points down, which is why a candidate (dx, dy) is
//! applied as (x + dx, y - dy).

use crate::board::Board;
use crate::shape::{Position, Shape};
use crate::types::{PieceKind, Rotation};

/// Rotate a square matrix 90° clockwise in place
pub fn rotate_cw(shape: &mut Shape) {
    let n = shape.size() as usize;
    let cells = shape.cells_mut();
    for y in 0..n {
        for x in 0..y {
            let tmp = cells[x][y];
            cells[x][y] = cells[y][x];
            cells[y][x] = tmp;
        }
    }
    for row in cells[..n].iter_mut() {
        row[..n].reverse();
    }
}

/// Which kick table a shape uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickClass {
    I,
    Jltsz,
    /// The O piece: rotation is a no-op and only the zero offset is tried.
    O,
}

impl KickClass {
    pub fn of_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => KickClass::I,
            PieceKind::O => KickClass::O,
            _ => KickClass::Jltsz,
        }
    }

    /// Classify by the color id found in the shape's occupied cells.
    pub fn of_shape(shape: &Shape) -> Self {
        shape.kind().map(Self::of_kind).unwrap_or(KickClass::Jltsz)
    }
}

/// A rotation between two adjacent states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    SpawnToRight,
    RightToSpawn,
    RightToHalf,
    HalfToRight,
    HalfToLeft,
    LeftToHalf,
    LeftToSpawn,
    SpawnToLeft,
}

impl Transition {
    pub const ALL: [Transition; 8] = [
        Transition::SpawnToRight,
        Transition::RightToSpawn,
        Transition::RightToHalf,
        Transition::HalfToRight,
        Transition::HalfToLeft,
        Transition::LeftToHalf,
        Transition::LeftToSpawn,
        Transition::SpawnToLeft,
    ];

    /// The clockwise transition leaving `from`.
    pub fn clockwise(from: Rotation) -> Self {
        match from {
            Rotation::Spawn => Transition::SpawnToRight,
            Rotation::Right => Transition::RightToHalf,
            Rotation::Half => Transition::HalfToLeft,
            Rotation::Left => Transition::LeftToSpawn,
        }
    }

    /// The transition from one state to another, if they are adjacent.
    pub fn between(from: Rotation, to: Rotation) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.from() == from && t.to() == to)
    }

    pub fn from(&self) -> Rotation {
        match self {
            Transition::SpawnToRight | Transition::SpawnToLeft => Rotation::Spawn,
            Transition::RightToSpawn | Transition::RightToHalf => Rotation::Right,
            Transition::HalfToRight | Transition::HalfToLeft => Rotation::Half,
            Transition::LeftToHalf | Transition::LeftToSpawn => Rotation::Left,
        }
    }

    pub fn to(&self) -> Rotation {
        match self {
            Transition::RightToSpawn | Transition::LeftToSpawn => Rotation::Spawn,
            Transition::SpawnToRight | Transition::HalfToRight => Rotation::Right,
            Transition::RightToHalf | Transition::LeftToHalf => Rotation::Half,
            Transition::HalfToLeft | Transition::SpawnToLeft => Rotation::Left,
        }
    }

    fn table_index(&self) -> usize {
        match self {
            Transition::SpawnToRight => 0,
            Transition::RightToSpawn => 1,
            Transition::RightToHalf => 2,
            Transition::HalfToRight => 3,
            Transition::HalfToLeft => 4,
            Transition::LeftToHalf => 5,
            Transition::LeftToSpawn => 6,
            Transition::SpawnToLeft => 7,
        }
    }
}

/// Kick candidates (dx, dy), y up, in the order they are tried
pub type KickTable = [[(i8, i8); 5]; 8];

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLTSZ_KICKS: KickTable = [
    // 0->R
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // R->0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // R->2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->R
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2->L
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // L->2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // L->0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0->L
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// I piece kick table
const I_KICKS: KickTable = [
    // 0->R
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // R->0
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // R->2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2->R
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2->L
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // L->2
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // L->0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 0->L
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

const O_KICKS: [(i8, i8); 1] = [(0, 0)];

/// Kick candidates for a class and transition
pub fn kick_candidates(class: KickClass, transition: Transition) -> &'static [(i8, i8)] {
    match class {
        KickClass::I => &I_KICKS[transition.table_index()],
        KickClass::Jltsz => &JLTSZ_KICKS[transition.table_index()],
        KickClass::O => &O_KICKS,
    }
}

/// Result of a successful rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotated {
    pub shape: Shape,
    pub position: Position,
    pub rotation: Rotation,
    /// The table entry that fit, y up.
    pub kick: (i8, i8),
}

/// Try to rotate clockwise with wall kicks
///
/// Works on a copy: the caller's shape and position are untouched and only
/// replaced if `Some` comes back. `None` means every candidate collided.
pub fn try_rotate(
    board: &Board,
    shape: &Shape,
    position: Position,
    rotation: Rotation,
) -> Option<Rotated> {
    let transition = Transition::clockwise(rotation);
    let class = KickClass::of_shape(shape);

    let mut rotated = *shape;
    rotate_cw(&mut rotated);

    kick_candidates(class, transition)
        .iter()
        .map(|&(dx, dy)| ((dx, dy), position.offset(dx, -dy)))
        .find(|&(_, pos)| !board.collide(&rotated, pos))
        .map(|(kick, pos)| Rotated {
            shape: rotated,
            position: pos,
            rotation: transition.to(),
            kick,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_shape;

    #[test]
    fn rotate_cw_turns_t_to_the_right() {
        let mut t = get_shape(PieceKind::T);
        rotate_cw(&mut t);
        let rows: Vec<Vec<u8>> = t.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 3, 0], vec![0, 3, 3], vec![0, 3, 0]]);
    }

    #[test]
    fn rotate_cw_lays_the_i_piece_flat() {
        let mut i = get_shape(PieceKind::I);
        rotate_cw(&mut i);
        let rows: Vec<Vec<u8>> = i.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows[1], vec![1, 1, 1, 1]);
        assert!(rows[0].iter().chain(&rows[2]).chain(&rows[3]).all(|&c| c == 0));
    }

    #[test]
    fn o_rotation_is_a_no_op() {
        let mut o = get_shape(PieceKind::O);
        rotate_cw(&mut o);
        assert_eq!(o, get_shape(PieceKind::O));
    }

    #[test]
    fn every_transition_has_a_table_entry() {
        for t in Transition::ALL {
            assert_eq!(Transition::between(t.from(), t.to()), Some(t));
            assert_eq!(kick_candidates(KickClass::I, t).len(), 5);
            assert_eq!(kick_candidates(KickClass::Jltsz, t).len(), 5);
            assert_eq!(kick_candidates(KickClass::I, t)[0], (0, 0));
            assert_eq!(kick_candidates(KickClass::O, t), &[(0, 0)]);
        }
    }

    #[test]
    fn opposite_states_have_no_transition() {
        assert_eq!(Transition::between(Rotation::Spawn, Rotation::Half), None);
        assert_eq!(Transition::between(Rotation::Right, Rotation::Left), None);
        assert_eq!(Transition::between(Rotation::Spawn, Rotation::Spawn), None);
    }

    #[test]
    fn clockwise_transitions_follow_the_cycle() {
        let mut r = Rotation::Spawn;
        for _ in 0..4 {
            let t = Transition::clockwise(r);
            assert_eq!(t.from(), r);
            assert_eq!(t.to(), r.rotate_cw());
            r = t.to();
        }
    }

    #[test]
    fn class_is_read_from_color_ids() {
        assert_eq!(KickClass::of_shape(&get_shape(PieceKind::I)), KickClass::I);
        assert_eq!(KickClass::of_shape(&get_shape(PieceKind::O)), KickClass::O);
        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
            assert_eq!(KickClass::of_shape(&get_shape(kind)), KickClass::Jltsz);
        }
    }

    #[test]
    fn unobstructed_rotation_uses_first_candidate() {
        let board = Board::new();
        let t = get_shape(PieceKind::T);
        let r = try_rotate(&board, &t, Position::new(4, 5), Rotation::Spawn).unwrap();
        assert_eq!(r.kick, (0, 0));
        assert_eq!(r.position, Position::new(4, 5));
        assert_eq!(r.rotation, Rotation::Right);
    }

    #[test]
    fn rotation_against_left_wall_kicks_right() {
        let board = Board::new();
        // T in state R only fills columns 1..=2, so it can sit at x = -1.
        let mut t = get_shape(PieceKind::T);
        rotate_cw(&mut t);
        let start = Position::new(-1, 5);
        assert!(!board.collide(&t, start));

        // R->2 needs all three columns; the second candidate (+1, 0) fits.
        let r = try_rotate(&board, &t, start, Rotation::Right).unwrap();
        assert_eq!(r.kick, (1, 0));
        assert_eq!(r.position, Position::new(0, 5));
        assert_eq!(r.rotation, Rotation::Half);
    }

    #[test]
    fn vertical_kick_moves_the_piece_up() {
        let mut board = Board::new();
        for x in 4..=6 {
            board.set(x, 19, 6);
        }
        // T in state 0 resting on the filled bottom row.
        let t = get_shape(PieceKind::T);
        let start = Position::new(4, 17);
        assert!(!board.collide(&t, start));

        // (0, 0) and (-1, 0) both push the new stem into row 19;
        // (-1, 1) is applied as one column left and one row up.
        let r = try_rotate(&board, &t, start, Rotation::Spawn).unwrap();
        assert_eq!(r.kick, (-1, 1));
        assert_eq!(r.position, Position::new(3, 16));
    }

    #[test]
    fn boxed_in_rotation_fails() {
        let mut board = Board::new();
        // Fill everything except the I piece's own column.
        for y in 0..20 {
            for x in 0..10 {
                if x != 4 {
                    board.set(x, y, 2);
                }
            }
        }
        let i = get_shape(PieceKind::I);
        let pos = Position::new(3, 10);
        assert!(!board.collide(&i, pos));
        assert!(try_rotate(&board, &i, pos, Rotation::Spawn).is_none());
    }
}
