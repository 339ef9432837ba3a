use crate::hal::OutputPin;
use serde::{Deserialize, Serialize};

/// Host lock-key state as reported in the HID LED output report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedState {
    pub num_lock: bool,
    pub caps_lock: bool,
    pub scroll_lock: bool,
}

impl LedState {
    /// Decodes the boot-protocol LED byte.
    pub fn from_report(byte: u8) -> Self {
        Self {
            num_lock: byte & 0x01 != 0,
            caps_lock: byte & 0x02 != 0,
            scroll_lock: byte & 0x04 != 0,
        }
    }
}

/// Mirrors Caps Lock onto the red indicator LED. Always returns true so the
/// firmware keeps processing its own LED handlers.
pub fn update_caps_indicator<P: OutputPin + ?Sized>(led: LedState, pin: &mut P) -> bool {
    pin.write(led.caps_lock);
    true
}
