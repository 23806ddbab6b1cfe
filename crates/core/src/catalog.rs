//! Shape catalog - tetromino geometry and wall kick candidates
//!
//! Every shape is 4 `(dx, dy)` offsets relative to the piece anchor, with `dy`
//! growing downwards. The number of rotation states differs by kind:
//! O has 1, S and Z have 2, and I, T, J, L have 4.
//!
//! Wall kicks are a fixed ordered list of anchor shifts per category rather
//! than per-transition tables: the first candidate is always `(0, 0)`.

use crate::types::PieceKind;

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i32, i32);

/// Shape of a piece - 4 mino offsets from the piece anchor
pub type PieceShape = [MinoOffset; 4];

const I_SHAPES: [PieceShape; 4] = [
    [(-2, 0), (-1, 0), (0, 0), (1, 0)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    [(-2, 0), (-1, 0), (0, 0), (1, 0)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
];

const O_SHAPES: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const T_SHAPES: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (0, -1)],
    [(0, -1), (0, 0), (0, 1), (1, 0)],
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    [(0, -1), (0, 0), (0, 1), (-1, 0)],
];

const S_SHAPES: [PieceShape; 2] = [
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    [(0, -1), (0, 0), (-1, 0), (-1, 1)],
];

const Z_SHAPES: [PieceShape; 2] = [
    [(-1, 1), (0, 1), (0, 0), (1, 0)],
    [(0, -1), (0, 0), (1, 0), (1, 1)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (-1, -1)],
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    [(1, 1), (-1, 0), (0, 0), (1, 0)],
    [(-1, 1), (0, 1), (0, 0), (0, -1)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (1, -1)],
    [(0, -1), (0, 0), (0, 1), (1, 1)],
    [(-1, 1), (-1, 0), (0, 0), (1, 0)],
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
];

/// Kick candidates for every kind except I: no shift, right, left, up, down.
const DEFAULT_KICKS: [MinoOffset; 5] = [(0, 0), (1, 0), (-1, 0), (0, -1), (0, 1)];

/// Kick candidates for I: horizontal hops reach two columns.
const I_KICKS: [MinoOffset; 7] = [(0, 0), (1, 0), (-1, 0), (2, 0), (-2, 0), (0, -1), (0, 1)];

/// All rotation states for a piece kind, in clockwise order
pub fn rotations(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    }
}

/// Get the shape (mino offsets) for a piece kind and rotation index
///
/// Panics if `rotation >= rotation_count(kind)`.
pub fn geometry(kind: PieceKind, rotation: usize) -> &'static PieceShape {
    &rotations(kind)[rotation]
}

/// Number of distinct rotation states for a piece kind
pub fn rotation_count(kind: PieceKind) -> usize {
    rotations(kind).len()
}

/// Ordered wall kick candidates tried when rotating a piece of this kind
pub fn wall_kicks(kind: PieceKind) -> &'static [MinoOffset] {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &DEFAULT_KICKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_counts_match_table() {
        assert_eq!(rotation_count(PieceKind::I), 4);
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::T), 4);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
    }

    #[test]
    fn every_state_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for (rotation, shape) in rotations(kind).iter().enumerate() {
                for i in 0..shape.len() {
                    for j in (i + 1)..shape.len() {
                        assert_ne!(
                            shape[i], shape[j],
                            "{:?} rotation {} repeats a cell",
                            kind, rotation
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn kicks_start_with_no_shift() {
        for kind in PieceKind::ALL {
            assert_eq!(wall_kicks(kind)[0], (0, 0));
        }
    }

    #[test]
    fn i_kicks_reach_two_columns() {
        let kicks = wall_kicks(PieceKind::I);
        assert!(kicks.contains(&(2, 0)));
        assert!(kicks.contains(&(-2, 0)));
        assert!(!wall_kicks(PieceKind::T).contains(&(2, 0)));
    }

    #[test]
    fn default_kick_order() {
        assert_eq!(
            wall_kicks(PieceKind::L),
            &[(0, 0), (1, 0), (-1, 0), (0, -1), (0, 1)]
        );
    }

    #[test]
    #[should_panic]
    fn out_of_range_rotation_panics() {
        let _ = geometry(PieceKind::O, 1);
    }
}
