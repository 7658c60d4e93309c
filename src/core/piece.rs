//! Piece module - placement state of one falling tetromino
//!
//! A piece is the shape identity plus rotation state plus the grid
//! position of its full matrix origin (not the bounding box). Movement
//! is unconditional; callers validate against the board first.
//! Rotation validates itself, walking the wall-kick candidates.

use crate::core::board::Board;
use crate::core::catalog::kick_table;
use crate::core::geometry::{RotationProperties, SHAPE_TABLE};
use crate::types::{Color, RotateDir, ShapeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    shape: ShapeType,
    state: u8,
    x: i32,
    y: i32,
}

impl Piece {
    /// New piece in spawn orientation at the grid origin; position is
    /// meaningless until [`Piece::spawn`] runs.
    pub fn new(shape: ShapeType) -> Self {
        Self {
            shape,
            state: 0,
            x: 0,
            y: 0,
        }
    }

    pub fn shape(&self) -> ShapeType {
        self.shape
    }

    pub fn state(&self) -> u8 {
        self.state
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn color(&self) -> Color {
        self.shape.color()
    }

    /// Precomputed bitmap/bounds for the current rotation state.
    pub fn props(&self) -> &'static RotationProperties {
        SHAPE_TABLE.props(self.shape, self.state)
    }

    /// Reset to spawn orientation at top-center: the matrix is centered
    /// horizontally (columns/2 - size/2) and placed so the whole
    /// bounding box starts above the visible grid (y = -height).
    pub fn spawn(&mut self, board: &Board) {
        self.state = 0;
        let props = self.props();
        self.y = -props.height;
        self.x = board.columns() / 2 - props.bitmap.size() as i32 / 2;
    }

    pub fn move_down(&mut self) {
        self.y += 1;
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.x += 1;
    }

    /// Rotate with wall kicks. Tries the target state at the unchanged
    /// origin first, then each kick candidate in table order. A
    /// rotation with no legal placement is a silent no-op; the return
    /// value reports whether anything changed.
    pub fn rotate(&mut self, dir: RotateDir, board: &Board) -> bool {
        let next = dir.next_state(self.state);
        let next_props = SHAPE_TABLE.props(self.shape, next);

        if !board.collides(next_props, self.x, self.y) {
            self.state = next;
            return true;
        }

        let kicks = &kick_table(self.shape)[self.state as usize][dir.index()];
        for &(dx, dy) in kicks {
            // Table offsets are y-up; grid y grows downward.
            let new_x = self.x + dx;
            let new_y = self.y - dy;
            if !board.collides(next_props, new_x, new_y) {
                self.state = next;
                self.x = new_x;
                self.y = new_y;
                return true;
            }
        }

        false
    }
}
