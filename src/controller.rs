//! The decision engine the host firmware drives.
//!
//! `Controller` is the single owner of all mutable engine state (layer
//! selection, mode flag, sample timestamp, held keys). Firmware calls its
//! handlers from the scan loop and passes the board in on every call, so
//! there is exactly one writer.

use crate::config::Config;
use crate::dispatch::{Dispatcher, KeyAction};
use crate::geometry::MatrixCoord;
use crate::ghost;
use crate::hal::Board;
use crate::indicator::{self, LedState};
use crate::keymap::{Keymap, MAX_COLS, MAX_ROWS};
use crate::layers::{BaseLayer, Layer, LayerState, LayerStateMachine, OsKind};
use crate::sensor::ModeSensor;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Dispatched; carries the number of keycode events emitted.
    Emitted(usize),
    /// Press dropped by the ghost filter.
    Ghosted,
    /// Coordinate outside the configured matrix.
    OutOfRange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ControllerStats {
    pub presses: u64,
    pub releases: u64,
    pub ghosts_rejected: u64,
    pub keycodes_emitted: u64,
    pub chords_fired: u64,
    pub overlay_transitions: u64,
    pub sensor_reads: u64,
}

pub struct Controller {
    config: Config,
    keymap: Keymap,
    sensor: ModeSensor,
    layers: LayerStateMachine,
    dispatcher: Dispatcher,
    /// Action resolved at press time, replayed on release.
    held: [[Option<KeyAction>; MAX_COLS]; MAX_ROWS],
    detected_os: Option<OsKind>,
    /// Scanned area: the configured matrix clipped to the keymap tables.
    rows: u8,
    cols: u8,
    presses: u64,
    releases: u64,
    ghosts_rejected: u64,
}

impl Controller {
    /// Initial state: PC base, overlay off, first sensor read one interval
    /// after `boot_ms`.
    ///
    /// A matrix larger than the keymap tables is clipped to them; events
    /// outside the clipped area are reported as `OutOfRange`.
    pub fn new(config: Config, keymap: Keymap, boot_ms: u32) -> Self {
        let sensor = ModeSensor::new(config.sensor, boot_ms);
        let rows = config.matrix.rows.min(MAX_ROWS as u8);
        let cols = config.matrix.cols.min(MAX_COLS as u8);
        if rows != config.matrix.rows || cols != config.matrix.cols {
            warn!(
                "Matrix {}x{} exceeds keymap tables, scanning {}x{}",
                config.matrix.rows, config.matrix.cols, rows, cols
            );
        }
        Self {
            config,
            keymap,
            sensor,
            layers: LayerStateMachine::new(),
            dispatcher: Dispatcher::new(),
            held: [[None; MAX_COLS]; MAX_ROWS],
            detected_os: None,
            rows,
            cols,
            presses: 0,
            releases: 0,
            ghosts_rejected: 0,
        }
    }

    /// Power-up: stamps the boot time from the board and puts the layer
    /// stack on the PC base.
    pub fn boot<B: Board + ?Sized>(config: Config, keymap: Keymap, board: &mut B) -> Self {
        let controller = Self::new(config, keymap, board.now_ms());
        board.move_to(controller.layers.state().base.layer());
        controller
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layer_state(&self) -> LayerState {
        self.layers.state()
    }

    pub fn detected_os(&self) -> Option<OsKind> {
        self.detected_os
    }

    pub fn mode_flag(&self) -> bool {
        self.sensor.flag()
    }

    pub fn current_effective_layer(&self) -> Layer {
        self.layers.effective_layer()
    }

    pub fn stats(&self) -> ControllerStats {
        ControllerStats {
            presses: self.presses,
            releases: self.releases,
            ghosts_rejected: self.ghosts_rejected,
            keycodes_emitted: self.dispatcher.emitted(),
            chords_fired: self.dispatcher.chords_fired(),
            overlay_transitions: self.layers.overlay_transitions(),
            sensor_reads: self.sensor.reads(),
        }
    }

    fn in_range(&self, coord: MatrixCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// One debounced switch transition. `board` must already reflect it.
    pub fn on_matrix_event<B: Board + ?Sized>(
        &mut self,
        coord: MatrixCoord,
        pressed: bool,
        board: &mut B,
    ) -> EventOutcome {
        if !self.in_range(coord) {
            debug!("Ignoring event outside matrix at {}", coord);
            return EventOutcome::OutOfRange;
        }
        let (row, col) = (coord.row as usize, coord.col as usize);

        if pressed {
            self.presses += 1;
            let action = self.keymap.resolve(self.layers.state(), coord);
            if !ghost::should_accept(&*board, coord, &action) {
                self.ghosts_rejected += 1;
                self.held[row][col] = None;
                return EventOutcome::Ghosted;
            }
            self.held[row][col] = Some(action);
            EventOutcome::Emitted(self.dispatcher.dispatch(action, true, board))
        } else {
            self.releases += 1;
            let action = self.held[row][col]
                .take()
                .unwrap_or_else(|| self.keymap.resolve(self.layers.state(), coord));
            EventOutcome::Emitted(self.dispatcher.dispatch(action, false, board))
        }
    }

    /// Runs once per scan. Returns true when the overlay was toggled.
    pub fn on_scan_tick<B: Board + ?Sized>(&mut self, board: &mut B) -> bool {
        let now = board.now_ms();
        let sample = self.sensor.sample(board, now);
        if !sample.is_fresh() {
            return false;
        }
        self.layers.on_mode_sensor_changed(sample.flag(), board)
    }

    /// Host OS handshake finished. Picks the base layer and re-reads the
    /// mode switch immediately instead of trusting the previous value.
    pub fn on_os_detected<B: Board + ?Sized>(&mut self, os: OsKind, board: &mut B) -> BaseLayer {
        self.detected_os = Some(os);
        let now = board.now_ms();
        let flag = self.sensor.read_now(board, now);
        self.layers.on_os_detected(os, flag, board)
    }

    pub fn on_led_update<B: Board + ?Sized>(&mut self, led: LedState, board: &mut B) -> bool {
        indicator::update_caps_indicator(led, board)
    }
}
