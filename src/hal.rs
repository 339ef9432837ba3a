//! Narrow interfaces to the firmware around the decision engine.
//!
//! Matrix scanning, ADC access, the timer, HID reporting, the layer stack
//! and GPIO are owned by the host firmware. The controller only talks to
//! them through these traits, so the same logic runs against real hardware
//! or against `sim::SimBoard`.

use crate::geometry::MatrixCoord;
use crate::keycodes::Keycode;
use crate::layers::Layer;

/// Debounced "is this switch closed" view of the scan matrix.
pub trait MatrixSource {
    fn rows(&self) -> u8;
    fn cols(&self) -> u8;

    /// Must return false for coordinates outside `rows() x cols()`.
    fn is_closed(&self, coord: MatrixCoord) -> bool;
}

pub trait AnalogInput {
    fn analog_read(&mut self, channel: u8) -> u16;
}

/// Monotonic millisecond timer. Wraps like a 32-bit hardware counter.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// The only path from the engine to the host computer.
pub trait KeySink {
    fn emit_keycode(&mut self, code: Keycode, pressed: bool);
}

/// Layer stack consulted by the keymap lookup.
pub trait LayerStack {
    fn set_layer(&mut self, layer: Layer, enabled: bool);

    /// Activates `layer` alone, switching every other layer off.
    fn move_to(&mut self, layer: Layer);
}

pub trait OutputPin {
    fn write(&mut self, high: bool);
}

/// Everything the controller needs from the surrounding firmware.
pub trait Board: MatrixSource + AnalogInput + Clock + KeySink + LayerStack + OutputPin {}

impl<T> Board for T where T: MatrixSource + AnalogInput + Clock + KeySink + LayerStack + OutputPin {}
