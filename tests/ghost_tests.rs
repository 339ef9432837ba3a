mod common;

use common::*;
use rstest::rstest;
use sculptforge::dispatch::KeyAction;
use sculptforge::geometry::{MatrixCoord, MatrixGrid};
use sculptforge::ghost::{self, LineCounts};
use sculptforge::keycodes::Keycode;

fn accept(matrix: &MatrixGrid, row: u8, col: u8) -> bool {
    ghost::should_accept(
        matrix,
        MatrixCoord::new(row, col),
        &KeyAction::Key(Keycode::A),
    )
}

#[test]
fn test_fourth_corner_of_rectangle_is_rejected() {
    // (1,2) (1,5) (4,2) closed, (4,5) reads as closed through the matrix
    let m = grid(&[(1, 2), (1, 5), (4, 2), (4, 5)]);
    assert!(!accept(&m, 4, 5));
}

#[test]
fn test_isolated_press_is_accepted() {
    let m = grid(&[(3, 7)]);
    assert!(accept(&m, 3, 7));
}

#[rstest]
// Two keys on the same row: the row is busy but the column is not.
#[case(&[(2, 3), (2, 9)], (2, 9), true)]
// Two keys on the same column.
#[case(&[(0, 4), (6, 4)], (6, 4), true)]
// L-shape: the corner key sits in a busy row and a busy column.
#[case(&[(1, 1), (1, 6), (5, 1)], (1, 1), false)]
// L-shape: the arm ends are only busy in one direction.
#[case(&[(1, 1), (1, 6), (5, 1)], (5, 1), true)]
#[case(&[(1, 1), (1, 6), (5, 1)], (1, 6), true)]
// Full rectangle: every corner is suspect.
#[case(&[(0, 0), (0, 17), (7, 0), (7, 17)], (0, 0), false)]
#[case(&[(0, 0), (0, 17), (7, 0), (7, 17)], (7, 17), false)]
// Unrelated keys elsewhere do not matter.
#[case(&[(0, 0), (3, 3), (5, 9), (7, 17)], (5, 9), true)]
fn test_ghost_rule(
    #[case] closed: &[(u8, u8)],
    #[case] pressed: (u8, u8),
    #[case] expected: bool,
) {
    let m = grid(closed);
    assert_eq!(
        accept(&m, pressed.0, pressed.1),
        expected,
        "closed={:?} pressed={:?}",
        closed,
        pressed
    );
}

#[test]
fn test_line_counts() {
    let m = grid(&[(1, 2), (1, 5), (4, 2)]);
    let counts = LineCounts::scan(&m);
    assert_eq!(counts.row(1), 2);
    assert_eq!(counts.row(4), 1);
    assert_eq!(counts.col(2), 2);
    assert_eq!(counts.col(5), 1);
    assert_eq!(counts.row(0), 0);
}

#[test]
fn test_out_of_range_coordinates_count_as_open() {
    let m = grid(&[(1, 2), (1, 5), (4, 2)]);
    let counts = LineCounts::scan(&m);
    assert_eq!(counts.row(200), 0);
    assert_eq!(counts.col(200), 0);
    assert!(accept(&m, 200, 200));
}

#[test]
fn test_filter_is_pure() {
    let m = grid(&[(1, 2), (1, 5), (4, 2), (4, 5)]);
    let first = ghost::is_ghost(&m, MatrixCoord::new(4, 5));
    let second = ghost::is_ghost(&m, MatrixCoord::new(4, 5));
    assert_eq!(first, second);
}
