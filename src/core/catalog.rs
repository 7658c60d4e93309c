//! Shape catalog - base matrices and wall-kick offset tables
//!
//! Everything here is a fixed constant; rotation states and bounding
//! boxes are derived from these matrices in [`crate::core::geometry`].

use crate::types::ShapeType;

/// Side length of the largest shape matrix (the I piece).
pub const MATRIX_MAX: usize = 4;

/// Matrix side length per shape: I is 4x4, O is 2x2, the rest 3x3.
pub fn matrix_size(shape: ShapeType) -> usize {
    match shape {
        ShapeType::I => 4,
        ShapeType::O => 2,
        _ => 3,
    }
}

/// Base (spawn orientation) occupancy matrix, padded to `MATRIX_MAX`.
/// Only the top-left `matrix_size` x `matrix_size` block is meaningful.
pub fn base_matrix(shape: ShapeType) -> [[u8; MATRIX_MAX]; MATRIX_MAX] {
    match shape {
        ShapeType::I => I_CELLS,
        ShapeType::J => J_CELLS,
        ShapeType::L => L_CELLS,
        ShapeType::O => O_CELLS,
        ShapeType::S => S_CELLS,
        ShapeType::T => T_CELLS,
        ShapeType::Z => Z_CELLS,
    }
}

const I_CELLS: [[u8; 4]; 4] = [
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const J_CELLS: [[u8; 4]; 4] = [
    [1, 0, 0, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const L_CELLS: [[u8; 4]; 4] = [
    [0, 0, 1, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const O_CELLS: [[u8; 4]; 4] = [
    [1, 1, 0, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const S_CELLS: [[u8; 4]; 4] = [
    [0, 1, 1, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const T_CELLS: [[u8; 4]; 4] = [
    [0, 1, 0, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const Z_CELLS: [[u8; 4]; 4] = [
    [1, 1, 0, 0],
    [0, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

/// Kick candidates for one (state, direction) pair, in try order.
///
/// Offsets are (dx, dy) with y pointing *up*: the rotation code adds
/// `dx` to the piece x and subtracts `dy` from the piece y.
pub type KickSet = [(i32, i32); 4];

/// Kick table for a shape, indexed `[current_state][direction]` where
/// direction 0 is clockwise and 1 is counter-clockwise.
pub type KickTable = [[KickSet; 2]; 4];

/// Kick table lookup. O shares the J/L/S/T/Z table, but its rotations
/// are all identical so the candidates are never consulted.
pub fn kick_table(shape: ShapeType) -> &'static KickTable {
    match shape {
        ShapeType::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

/// Wall kicks shared by J, L, S, T, Z (and nominally O).
const JLSTZ_KICKS: KickTable = [
    // state 0: cw (0->1), ccw (0->3)
    [
        [(-1, 0), (-1, 1), (0, -2), (-1, -2)],
        [(1, 0), (1, 1), (0, -2), (1, -2)],
    ],
    // state 1: cw (1->2), ccw (1->0)
    [
        [(1, 0), (1, -1), (0, 2), (1, 2)],
        [(1, 0), (1, -1), (0, 2), (1, 2)],
    ],
    // state 2: cw (2->3), ccw (2->1)
    [
        [(1, 0), (1, 1), (0, -2), (1, -2)],
        [(-1, 0), (-1, 1), (0, -2), (-1, -2)],
    ],
    // state 3: cw (3->0), ccw (3->2)
    [
        [(-1, 0), (-1, -1), (0, 2), (-1, 2)],
        [(-1, 0), (-1, -1), (0, 2), (-1, 2)],
    ],
];

/// Wall kicks for the I piece.
const I_KICKS: KickTable = [
    // state 0: cw (0->1), ccw (0->3)
    [
        [(-2, 0), (1, 0), (1, 2), (-2, -1)],
        [(2, 0), (-1, 0), (-1, 2), (2, -1)],
    ],
    // state 1: cw (1->2), ccw (1->0)
    [
        [(-1, 0), (2, 0), (-1, 2), (2, -1)],
        [(2, 0), (-1, 0), (2, 1), (-1, -2)],
    ],
    // state 2: cw (2->3), ccw (2->1)
    [
        [(2, 0), (-1, 0), (2, 1), (-1, -1)],
        [(-2, 0), (1, 0), (-2, 1), (1, -1)],
    ],
    // state 3: cw (3->0), ccw (3->2)
    [
        [(-2, 0), (1, 0), (-2, 1), (1, -2)],
        [(1, 0), (-2, 0), (1, 2), (-2, -1)],
    ],
];
