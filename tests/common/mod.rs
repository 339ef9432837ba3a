#![allow(dead_code)]

use sculptforge::config::Config;
use sculptforge::controller::Controller;
use sculptforge::geometry::{MatrixCoord, MatrixGrid};
use sculptforge::keymap::Keymap;
use sculptforge::sim::SimBoard;

pub const ROWS: u8 = 8;
pub const COLS: u8 = 18;

pub fn grid(closed: &[(u8, u8)]) -> MatrixGrid {
    let coords: Vec<MatrixCoord> = closed
        .iter()
        .map(|&(r, c)| MatrixCoord::new(r, c))
        .collect();
    MatrixGrid::with_closed(ROWS, COLS, &coords)
}

/// Booted controller on a fresh simulated board at t=0.
pub fn booted() -> (Controller, SimBoard) {
    let config = Config::default();
    let mut board = SimBoard::from_config(&config);
    let controller = Controller::boot(config, Keymap::default(), &mut board);
    (controller, board)
}

/// Closes the switch on the board and reports the press.
pub fn press(
    controller: &mut Controller,
    board: &mut SimBoard,
    row: u8,
    col: u8,
) -> sculptforge::controller::EventOutcome {
    let coord = MatrixCoord::new(row, col);
    board.close(coord);
    controller.on_matrix_event(coord, true, board)
}

pub fn release(
    controller: &mut Controller,
    board: &mut SimBoard,
    row: u8,
    col: u8,
) -> sculptforge::controller::EventOutcome {
    let coord = MatrixCoord::new(row, col);
    board.open(coord);
    controller.on_matrix_event(coord, false, board)
}
