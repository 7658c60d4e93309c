//! Board tests - collision boundaries, locking, and line clears

use blockfall::core::{Board, SHAPE_TABLE};
use blockfall::types::{Color, ShapeType, PERFECT_CLEAR_SENTINEL};

fn fill_row_except(board: &mut Board, row: i32, open: &[i32]) {
    for col in 0..board.columns() {
        if !open.contains(&col) {
            board.set(row, col, Some(Color::RED));
        }
    }
}

#[test]
fn test_left_wall_collision() {
    let board = Board::new();
    let props = SHAPE_TABLE.props(ShapeType::J, 0);

    // J spawn box starts at matrix column 0: x = -1 puts its leftmost
    // column at grid column -1.
    assert!(board.collides(props, -1, 5));
    assert!(!board.collides(props, 0, 5));
}

#[test]
fn test_right_wall_collision() {
    let board = Board::new();
    let props = SHAPE_TABLE.props(ShapeType::J, 0);

    // Width 3: rightmost legal origin is columns - 3.
    assert!(!board.collides(props, 7, 5));
    assert!(board.collides(props, 8, 5));
}

#[test]
fn test_floor_collision() {
    let board = Board::new();
    let props = SHAPE_TABLE.props(ShapeType::J, 0);
    let rows = board.rows();

    // Height 2 from matrix row 0: lowest legal origin is rows - 2.
    assert!(!board.collides(props, 4, rows - 2));
    assert!(board.collides(props, 4, rows - 1));
}

#[test]
fn test_rows_above_the_field_never_collide() {
    let mut board = Board::new();
    // Even an occupied buffer row is ignored by the occupancy check.
    fill_row_except(&mut board, 0, &[]);

    let props = SHAPE_TABLE.props(ShapeType::J, 0);
    assert!(!board.collides(props, 4, -2));
    assert!(!board.collides(props, 4, -1));
    // At y = 0 the box covers rows 0..2; row 1 is empty, row 0 ignored.
    assert!(!board.collides(props, 4, 0));
}

#[test]
fn test_occupancy_collision_in_visible_rows() {
    let mut board = Board::new();
    board.set(5, 4, Some(Color::GREEN));

    let props = SHAPE_TABLE.props(ShapeType::O, 0);
    assert!(board.collides(props, 4, 4)); // box covers (5, 4)
    assert!(!board.collides(props, 5, 4));
    assert!(!board.collides(props, 4, 6));
}

#[test]
fn test_lock_writes_only_visible_cells() {
    let mut board = Board::new();
    let props = SHAPE_TABLE.props(ShapeType::J, 0);

    // Origin y = -1: box rows land at -1 and 0, both outside [1, rows).
    board.lock(props, 4, -1, Color::BLUE);
    for row in 0..board.rows() {
        for col in 0..board.columns() {
            assert_eq!(board.get(row, col), Some(None));
        }
    }

    // Origin y = 0: the box's second row lands on row 1.
    board.lock(props, 4, 0, Color::BLUE);
    assert!(!board.is_occupied(0, 4));
    assert!(board.is_occupied(1, 4));
    assert!(board.is_occupied(1, 5));
    assert!(board.is_occupied(1, 6));
}

#[test]
fn test_clear_lines_requires_full_row() {
    let mut board = Board::new();
    let bottom = board.rows() - 1;
    fill_row_except(&mut board, bottom, &[3]);
    // A survivor above so the board is never empty.
    board.set(bottom - 1, 0, Some(Color::BLUE));

    assert_eq!(board.clear_lines(), 0);

    board.set(bottom, 3, Some(Color::RED));
    assert_eq!(board.clear_lines(), 1);

    // The survivor shifted down by exactly one.
    assert!(board.is_occupied(bottom, 0));
    assert!(!board.is_occupied(bottom - 1, 0));
    assert!(!board.is_occupied(bottom, 3));
}

#[test]
fn test_clear_two_separated_rows() {
    let mut board = Board::new();
    let bottom = board.rows() - 1;
    fill_row_except(&mut board, bottom, &[]);
    fill_row_except(&mut board, bottom - 1, &[5]);
    fill_row_except(&mut board, bottom - 2, &[]);
    board.set(bottom - 3, 9, Some(Color::BLUE));

    assert_eq!(board.clear_lines(), 2);

    // The partial row slid to the bottom, the lone cell above it.
    assert!(board.is_occupied(bottom, 0));
    assert!(!board.is_occupied(bottom, 5));
    assert!(board.is_occupied(bottom - 1, 9));
}

#[test]
fn test_perfect_clear_reports_sentinel() {
    let mut board = Board::new();
    let bottom = board.rows() - 1;
    fill_row_except(&mut board, bottom, &[]);

    assert_eq!(board.clear_lines(), PERFECT_CLEAR_SENTINEL);
    for row in 0..board.rows() {
        for col in 0..board.columns() {
            assert!(!board.is_occupied(row, col));
        }
    }
}

#[test]
fn test_shift_down_then_clear_top() {
    let mut board = Board::new();
    board.set(3, 2, Some(Color::GREEN));
    board.set(0, 7, Some(Color::RED));

    board.shift_down(10);
    board.clear_row(0);

    assert!(board.is_occupied(4, 2));
    assert!(board.is_occupied(1, 7));
    assert!(!board.is_occupied(0, 7));
    assert!(!board.is_occupied(3, 2));
}
