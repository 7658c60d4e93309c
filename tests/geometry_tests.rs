//! Rotation geometry tests - bitmap rotation and bounding boxes

use blockfall::core::{Bitmap, SHAPE_TABLE};
use blockfall::types::ShapeType;

#[test]
fn test_bounds_enclose_every_occupied_cell() {
    for shape in ShapeType::ALL {
        for state in 0..4 {
            let props = SHAPE_TABLE.props(shape, state);
            let n = props.bitmap.size();

            for r in 0..n {
                for c in 0..n {
                    if !props.bitmap.get(r, c) {
                        continue;
                    }
                    let (r, c) = (r as i32, c as i32);
                    assert!(
                        c >= props.point_x && c < props.point_x + props.width,
                        "{:?} state {}: col {} outside box",
                        shape,
                        state,
                        c
                    );
                    assert!(
                        r >= props.point_y && r < props.point_y + props.height,
                        "{:?} state {}: row {} outside box",
                        shape,
                        state,
                        r
                    );
                }
            }
        }
    }
}

#[test]
fn test_bounds_are_tight() {
    // The box edges must actually touch occupied cells.
    for shape in ShapeType::ALL {
        for state in 0..4 {
            let props = SHAPE_TABLE.props(shape, state);
            let n = props.bitmap.size();
            let occupied = |r: i32, c: i32| props.bitmap.get(r as usize, c as usize);

            assert!(
                (0..n as i32).any(|r| occupied(r, props.point_x)),
                "{:?} state {}: leftmost column empty",
                shape,
                state
            );
            assert!(
                (0..n as i32).any(|r| occupied(r, props.point_x + props.width - 1)),
                "{:?} state {}: rightmost column empty",
                shape,
                state
            );
            assert!(
                (0..n as i32).any(|c| occupied(props.point_y, c)),
                "{:?} state {}: topmost row empty",
                shape,
                state
            );
            assert!(
                (0..n as i32).any(|c| occupied(props.point_y + props.height - 1, c)),
                "{:?} state {}: bottom row empty",
                shape,
                state
            );
        }
    }
}

#[test]
fn test_four_rotations_reproduce_the_base() {
    for shape in ShapeType::ALL {
        let base = Bitmap::base(shape);
        let mut rotated = base;
        for _ in 0..4 {
            rotated = rotated.rotate90();
        }
        assert_eq!(base, rotated, "{:?}: 360-degree round trip", shape);
    }
}

#[test]
fn test_every_state_keeps_four_cells() {
    for shape in ShapeType::ALL {
        for state in 0..4 {
            let props = SHAPE_TABLE.props(shape, state);
            let n = props.bitmap.size();
            let count = (0..n)
                .flat_map(|r| (0..n).map(move |c| (r, c)))
                .filter(|&(r, c)| props.bitmap.get(r, c))
                .count();
            assert_eq!(count, 4, "{:?} state {}", shape, state);
        }
    }
}

#[test]
fn test_known_boxes() {
    // Spot checks against hand-derived values.
    let i0 = SHAPE_TABLE.props(ShapeType::I, 0);
    assert_eq!(
        (i0.width, i0.height, i0.point_x, i0.point_y),
        (4, 1, 0, 1)
    );

    let i1 = SHAPE_TABLE.props(ShapeType::I, 1);
    assert_eq!(
        (i1.width, i1.height, i1.point_x, i1.point_y),
        (1, 4, 2, 0)
    );

    let t0 = SHAPE_TABLE.props(ShapeType::T, 0);
    assert_eq!(
        (t0.width, t0.height, t0.point_x, t0.point_y),
        (3, 2, 0, 0)
    );

    let o2 = SHAPE_TABLE.props(ShapeType::O, 2);
    assert_eq!(
        (o2.width, o2.height, o2.point_x, o2.point_y),
        (2, 2, 0, 0)
    );
}
