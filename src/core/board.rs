//! Board module - manages the playing field grid
//!
//! A fixed 10-column grid whose row count derives from the play-area
//! panel size. Cells hold the color of a locked piece; falling pieces
//! are never written here until they lock. Row 0 is a buffer row:
//! spawn positions start above the grid, so collision treats rows <= 0
//! as always free while walls and the floor stay solid.
//!
//! Coordinates are (row, col) with row 0 at the top.

use crate::core::geometry::RotationProperties;
use crate::types::{Color, DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH, GRID_COLUMNS, PERFECT_CLEAR_SENTINEL};

/// The playing field - a flat row-major grid of optional colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: i32,
    rows: i32,
    cell_size: u32,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Board for the default panel size (30px cells, 20 rows).
    pub fn new() -> Self {
        Self::from_panel(DEFAULT_PANEL_WIDTH, DEFAULT_PANEL_HEIGHT)
    }

    /// Derive the grid from a play-area panel: cell size from the panel
    /// width, row count from the panel height.
    pub fn from_panel(panel_width: u32, panel_height: u32) -> Self {
        let cell_size = panel_width / GRID_COLUMNS as u32;
        let rows = (panel_height / cell_size) as i32;
        Self {
            columns: GRID_COLUMNS,
            rows,
            cell_size,
            cells: vec![None; (rows * GRID_COLUMNS) as usize],
        }
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= self.rows || col < 0 || col >= self.columns {
            return None;
        }
        Some((row * self.columns + col) as usize)
    }

    /// Cell at (row, col). Outer `None` means out of bounds; inner
    /// `None` means empty.
    pub fn get(&self, row: i32, col: i32) -> Option<Option<Color>> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set a cell. Returns false when out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Option<Color>) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Collision query for a candidate placement of a shape's bounding
    /// box at matrix origin (x, y).
    ///
    /// Walls and the floor always collide. Occupancy is consulted only
    /// for rows 1.. (the visible field); rows <= 0 never collide so
    /// pieces may overhang the top while spawning or kicking.
    pub fn collides(&self, props: &RotationProperties, x: i32, y: i32) -> bool {
        for r in props.point_y..props.point_y + props.height {
            for c in props.point_x..props.point_x + props.width {
                if !props.bitmap.get(r as usize, c as usize) {
                    continue;
                }
                let col = x + c;
                let row = y + r;
                if (0..self.columns).contains(&col) && row > 0 && row < self.rows {
                    if self.is_occupied(row, col) {
                        return true;
                    }
                } else if col < 0 || col >= self.columns {
                    return true;
                } else if row >= self.rows {
                    return true;
                }
            }
        }
        false
    }

    /// Commit a settled piece into the grid. Cells whose absolute row
    /// falls outside [1, rows) or column outside [0, columns) are
    /// silently dropped, mirroring the buffer-row tolerance in
    /// [`Board::collides`].
    pub fn lock(&mut self, props: &RotationProperties, x: i32, y: i32, color: Color) {
        for r in props.point_y..props.point_y + props.height {
            for c in props.point_x..props.point_x + props.width {
                if !props.bitmap.get(r as usize, c as usize) {
                    continue;
                }
                let col = x + c;
                let row = y + r;
                if row >= 1 && row < self.rows && col >= 0 && col < self.columns {
                    self.set(row, col, Some(color));
                }
            }
        }
    }

    pub fn is_row_full(&self, row: i32) -> bool {
        (0..self.columns).all(|col| self.is_occupied(row, col))
    }

    /// Empty every cell of a row.
    pub fn clear_row(&mut self, row: i32) {
        for col in 0..self.columns {
            self.set(row, col, None);
        }
    }

    /// Gravity on cleared rows: every row from `from_row` down to 1
    /// receives a copy of the row above it. Row 0 ends up duplicated
    /// into row 1; callers clear row 0 afterward.
    pub fn shift_down(&mut self, from_row: i32) {
        let mut row = from_row;
        while row > 0 {
            for col in 0..self.columns {
                let above = self.get(row - 1, col).unwrap_or(None);
                self.set(row, col, above);
            }
            row -= 1;
        }
    }

    /// Clear all completed rows, shifting the stack down.
    ///
    /// Scans bottom to top; after a clear the same index is rescanned
    /// because the row above has slid into place. Returns the cleared
    /// count, or [`PERFECT_CLEAR_SENTINEL`] when the bottom row (and
    /// therefore the whole stack) ends up empty.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = self.rows - 1;
        while row >= 0 {
            if self.is_row_full(row) {
                cleared += 1;
                self.clear_row(row);
                self.shift_down(row);
                self.clear_row(0);
            } else {
                row -= 1;
            }
        }

        for col in 0..self.columns {
            if self.is_occupied(self.rows - 1, col) {
                return cleared;
            }
        }
        PERFECT_CLEAR_SENTINEL
    }

    /// Empty the whole grid.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
