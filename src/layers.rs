use crate::hal::LayerStack;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::info;

/// The four keymap tables. Each overlay sits directly above its base.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Layer {
    PcBase = 0,
    MediaFnPc = 1,
    MacBase = 2,
    MediaFnMac = 3,
}

pub const LAYER_COUNT: usize = 4;

impl Layer {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Layer::PcBase),
            1 => Some(Layer::MediaFnPc),
            2 => Some(Layer::MacBase),
            3 => Some(Layer::MediaFnMac),
            _ => None,
        }
    }

    pub fn is_overlay(self) -> bool {
        self.index() % 2 == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum BaseLayer {
    Pc,
    Mac,
}

impl BaseLayer {
    pub fn layer(self) -> Layer {
        match self {
            BaseLayer::Pc => Layer::PcBase,
            BaseLayer::Mac => Layer::MacBase,
        }
    }

    /// The overlay paired with this base (base index + 1).
    pub fn overlay(self) -> Layer {
        match self {
            BaseLayer::Pc => Layer::MediaFnPc,
            BaseLayer::Mac => Layer::MediaFnMac,
        }
    }

    /// Apple hosts get the Mac table; everything else, including hosts the
    /// handshake could not identify, gets the PC table.
    pub fn for_os(os: OsKind) -> Self {
        match os {
            OsKind::MacOs | OsKind::Ios => BaseLayer::Mac,
            OsKind::Windows | OsKind::Linux | OsKind::Unsure | OsKind::Unrecognized => {
                BaseLayer::Pc
            }
        }
    }
}

/// Host OS as reported by the USB fingerprinting handshake.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum OsKind {
    Unsure,
    Linux,
    Windows,
    MacOs,
    Ios,
    Unrecognized,
}

impl OsKind {
    /// Maps the handshake's raw variant number. Unknown values are kept as
    /// `Unrecognized` rather than rejected.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => OsKind::Unsure,
            1 => OsKind::Linux,
            2 => OsKind::Windows,
            3 => OsKind::MacOs,
            4 => OsKind::Ios,
            _ => OsKind::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerState {
    pub base: BaseLayer,
    pub overlay_engaged: bool,
}

impl Default for LayerState {
    fn default() -> Self {
        Self {
            base: BaseLayer::Pc,
            overlay_engaged: false,
        }
    }
}

impl LayerState {
    /// The overlay is never stored on its own; it always follows the base.
    pub fn effective_layer(&self) -> Layer {
        if self.overlay_engaged {
            self.base.overlay()
        } else {
            self.base.layer()
        }
    }
}

/// Owns the base/overlay selection and mirrors it into the firmware layer
/// stack. The engaged flag doubles as the last observed mode-switch value.
#[derive(Debug, Clone, Default)]
pub struct LayerStateMachine {
    state: LayerState,
    overlay_transitions: u64,
}

impl LayerStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LayerState {
        self.state
    }

    pub fn effective_layer(&self) -> Layer {
        self.state.effective_layer()
    }

    /// Count of engage/disengage operations applied to the layer stack.
    pub fn overlay_transitions(&self) -> u64 {
        self.overlay_transitions
    }

    /// Selects the base table for the detected host and re-syncs the
    /// overlay from `mode_flag`, which must come from a fresh sensor read.
    /// Safe to call again; the outcome only depends on the arguments.
    pub fn on_os_detected<S: LayerStack + ?Sized>(
        &mut self,
        os: OsKind,
        mode_flag: bool,
        stack: &mut S,
    ) -> BaseLayer {
        let base = BaseLayer::for_os(os);
        info!("Detected OS: {} -> {} base layer", os, base);

        stack.move_to(base.layer());
        self.state = LayerState {
            base,
            overlay_engaged: false,
        };

        if mode_flag {
            info!("Turning on layer {}", base.overlay());
            stack.set_layer(base.overlay(), true);
            self.state.overlay_engaged = true;
            self.overlay_transitions += 1;
        }
        base
    }

    /// Engages or disengages the current base's overlay. Returns false and
    /// leaves the stack alone when the flag has not changed.
    pub fn on_mode_sensor_changed<S: LayerStack + ?Sized>(
        &mut self,
        flag: bool,
        stack: &mut S,
    ) -> bool {
        if flag == self.state.overlay_engaged {
            return false;
        }

        let overlay = self.state.base.overlay();
        info!("Media switch changed to {}", flag);
        if flag {
            info!("Turning on layer {}", overlay);
        } else {
            info!("Turning off layer {}", overlay);
        }
        stack.set_layer(overlay, flag);

        self.state.overlay_engaged = flag;
        self.overlay_transitions += 1;
        true
    }
}
