//! In-memory board for host-side runs of the engine.

use crate::config::Config;
use crate::geometry::{MatrixCoord, MatrixGrid};
use crate::hal::{AnalogInput, Clock, KeySink, LayerStack, MatrixSource, OutputPin};
use crate::keycodes::Keycode;
use crate::layers::{Layer, LAYER_COUNT};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyEvent {
    pub at_ms: u32,
    pub code: Keycode,
    pub pressed: bool,
}

#[derive(Debug, Clone)]
pub struct SimBoard {
    matrix: MatrixGrid,
    analog: u16,
    now: u32,
    adc_reads: u64,
    events: Vec<KeyEvent>,
    layers: [bool; LAYER_COUNT],
    caps_led: bool,
}

impl SimBoard {
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            matrix: MatrixGrid::new(rows, cols),
            analog: 0,
            now: 0,
            adc_reads: 0,
            events: Vec::new(),
            layers: [false; LAYER_COUNT],
            caps_led: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.matrix.rows, config.matrix.cols)
    }

    /// Closes a switch. Returns false for coordinates outside the matrix.
    pub fn close(&mut self, coord: MatrixCoord) -> bool {
        self.matrix.set(coord, true)
    }

    pub fn open(&mut self, coord: MatrixCoord) -> bool {
        self.matrix.set(coord, false)
    }

    pub fn set_analog(&mut self, value: u16) {
        self.analog = value;
    }

    pub fn set_time(&mut self, now: u32) {
        self.now = now;
    }

    pub fn adc_reads(&self) -> u64 {
        self.adc_reads
    }

    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<KeyEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_layer_on(&self, layer: Layer) -> bool {
        self.layers[layer.index() as usize]
    }

    /// Topmost active layer, as the firmware lookup would see it.
    pub fn highest_layer(&self) -> Option<Layer> {
        (0..LAYER_COUNT as u8)
            .rev()
            .filter_map(Layer::from_index)
            .find(|&l| self.is_layer_on(l))
    }

    pub fn caps_led(&self) -> bool {
        self.caps_led
    }
}

impl MatrixSource for SimBoard {
    fn rows(&self) -> u8 {
        self.matrix.rows()
    }

    fn cols(&self) -> u8 {
        self.matrix.cols()
    }

    fn is_closed(&self, coord: MatrixCoord) -> bool {
        self.matrix.is_closed(coord)
    }
}

impl AnalogInput for SimBoard {
    fn analog_read(&mut self, _channel: u8) -> u16 {
        self.adc_reads += 1;
        self.analog
    }
}

impl Clock for SimBoard {
    fn now_ms(&self) -> u32 {
        self.now
    }
}

impl KeySink for SimBoard {
    fn emit_keycode(&mut self, code: Keycode, pressed: bool) {
        self.events.push(KeyEvent {
            at_ms: self.now,
            code,
            pressed,
        });
    }
}

impl LayerStack for SimBoard {
    fn set_layer(&mut self, layer: Layer, enabled: bool) {
        self.layers[layer.index() as usize] = enabled;
    }

    fn move_to(&mut self, layer: Layer) {
        self.layers = [false; LAYER_COUNT];
        self.layers[layer.index() as usize] = true;
    }
}

impl OutputPin for SimBoard {
    fn write(&mut self, high: bool) {
        self.caps_led = high;
    }
}
