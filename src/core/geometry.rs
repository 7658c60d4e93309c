//! Rotation geometry - precomputed bitmaps and bounding boxes
//!
//! For every (shape, rotation state) pair this module derives, once per
//! process, the occupancy bitmap and its bounding box. State 0 is the
//! spawn orientation; states 1..3 are successive clockwise quarter
//! turns. The bounding box is recomputed after every turn because
//! rotated cells shift inside the fixed-size matrix.

use once_cell::sync::Lazy;

use crate::core::catalog::{base_matrix, matrix_size, MATRIX_MAX};
use crate::types::ShapeType;

/// Square occupancy matrix. Storage is padded to `MATRIX_MAX`; only the
/// top-left `size` x `size` block is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    size: usize,
    cells: [[bool; MATRIX_MAX]; MATRIX_MAX],
}

impl Bitmap {
    /// Base bitmap for a shape, from the catalog.
    pub fn base(shape: ShapeType) -> Self {
        let raw = base_matrix(shape);
        let mut cells = [[false; MATRIX_MAX]; MATRIX_MAX];
        for (r, row) in raw.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                cells[r][c] = cell != 0;
            }
        }
        Self {
            size: matrix_size(shape),
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at (row, col) is occupied.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Quarter turn clockwise: cell (r, c) moves to (c, size-1-r).
    pub fn rotate90(&self) -> Self {
        let n = self.size;
        let mut cells = [[false; MATRIX_MAX]; MATRIX_MAX];
        for (r, row) in cells.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - c][r];
            }
        }
        Self { size: n, cells }
    }
}

/// Bitmap plus bounding box for one (shape, rotation state) pair.
///
/// `width`/`height` count the distinct occupied columns/rows;
/// (`point_x`, `point_y`) is the top-left corner of the box inside the
/// matrix (leftmost occupied column, topmost occupied row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationProperties {
    pub bitmap: Bitmap,
    pub width: i32,
    pub height: i32,
    pub point_x: i32,
    pub point_y: i32,
}

impl RotationProperties {
    fn derive(bitmap: Bitmap) -> Self {
        let n = bitmap.size();

        let mut width = 0;
        let mut point_x = 0;
        let mut seen_col = false;
        // Column-major scan: leftmost occupied column first.
        for c in 0..n {
            if (0..n).any(|r| bitmap.get(r, c)) {
                if !seen_col {
                    point_x = c as i32;
                    seen_col = true;
                }
                width += 1;
            }
        }

        let mut height = 0;
        let mut point_y = 0;
        let mut seen_row = false;
        for r in 0..n {
            if (0..n).any(|c| bitmap.get(r, c)) {
                if !seen_row {
                    point_y = r as i32;
                    seen_row = true;
                }
                height += 1;
            }
        }

        Self {
            bitmap,
            width,
            height,
            point_x,
            point_y,
        }
    }
}

/// The process-wide table of precomputed rotation properties,
/// indexed by shape and rotation state.
pub struct ShapeTable {
    props: [[RotationProperties; 4]; 7],
}

impl ShapeTable {
    fn build() -> Self {
        let props = ShapeType::ALL.map(|shape| {
            let s0 = Bitmap::base(shape);
            let s1 = s0.rotate90();
            let s2 = s1.rotate90();
            let s3 = s2.rotate90();
            [s0, s1, s2, s3].map(RotationProperties::derive)
        });
        Self { props }
    }

    /// Properties for a shape in a given rotation state (0..3).
    pub fn props(&self, shape: ShapeType, state: u8) -> &RotationProperties {
        &self.props[shape.index()][state as usize % 4]
    }
}

/// Built on first access, immutable afterward; safe to share across
/// threads by reference.
pub static SHAPE_TABLE: Lazy<ShapeTable> = Lazy::new(ShapeTable::build);
