use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Physical keycodes the Sculpt matrix can emit. Values follow the HID
/// keyboard usage page; media keys use the basic-keycode media range.
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
#[strum(ascii_case_insensitive)]
#[repr(u16)]
pub enum Keycode {
    #[strum(serialize = "KC_A")]
    A = 0x04,
    #[strum(serialize = "KC_B")]
    B = 0x05,
    #[strum(serialize = "KC_C")]
    C = 0x06,
    #[strum(serialize = "KC_D")]
    D = 0x07,
    #[strum(serialize = "KC_E")]
    E = 0x08,
    #[strum(serialize = "KC_F")]
    F = 0x09,
    #[strum(serialize = "KC_G")]
    G = 0x0A,
    #[strum(serialize = "KC_H")]
    H = 0x0B,
    #[strum(serialize = "KC_I")]
    I = 0x0C,
    #[strum(serialize = "KC_J")]
    J = 0x0D,
    #[strum(serialize = "KC_K")]
    K = 0x0E,
    #[strum(serialize = "KC_L")]
    L = 0x0F,
    #[strum(serialize = "KC_M")]
    M = 0x10,
    #[strum(serialize = "KC_N")]
    N = 0x11,
    #[strum(serialize = "KC_O")]
    O = 0x12,
    #[strum(serialize = "KC_P")]
    P = 0x13,
    #[strum(serialize = "KC_Q")]
    Q = 0x14,
    #[strum(serialize = "KC_R")]
    R = 0x15,
    #[strum(serialize = "KC_S")]
    S = 0x16,
    #[strum(serialize = "KC_T")]
    T = 0x17,
    #[strum(serialize = "KC_U")]
    U = 0x18,
    #[strum(serialize = "KC_V")]
    V = 0x19,
    #[strum(serialize = "KC_W")]
    W = 0x1A,
    #[strum(serialize = "KC_X")]
    X = 0x1B,
    #[strum(serialize = "KC_Y")]
    Y = 0x1C,
    #[strum(serialize = "KC_Z")]
    Z = 0x1D,

    #[strum(serialize = "KC_1")]
    N1 = 0x1E,
    #[strum(serialize = "KC_2")]
    N2 = 0x1F,
    #[strum(serialize = "KC_3")]
    N3 = 0x20,
    #[strum(serialize = "KC_4")]
    N4 = 0x21,
    #[strum(serialize = "KC_5")]
    N5 = 0x22,
    #[strum(serialize = "KC_6")]
    N6 = 0x23,
    #[strum(serialize = "KC_7")]
    N7 = 0x24,
    #[strum(serialize = "KC_8")]
    N8 = 0x25,
    #[strum(serialize = "KC_9")]
    N9 = 0x26,
    #[strum(serialize = "KC_0")]
    N0 = 0x27,

    #[strum(serialize = "KC_ENT")]
    Enter = 0x28,
    #[strum(serialize = "KC_ESC")]
    Escape = 0x29,
    #[strum(serialize = "KC_BSPC")]
    Backspace = 0x2A,
    #[strum(serialize = "KC_TAB")]
    Tab = 0x2B,
    #[strum(serialize = "KC_SPC")]
    Space = 0x2C,
    #[strum(serialize = "KC_MINS")]
    Minus = 0x2D,
    #[strum(serialize = "KC_EQL")]
    Equal = 0x2E,
    #[strum(serialize = "KC_LBRC")]
    LeftBracket = 0x2F,
    #[strum(serialize = "KC_RBRC")]
    RightBracket = 0x30,
    #[strum(serialize = "KC_BSLS")]
    Backslash = 0x31,
    #[strum(serialize = "KC_SCLN")]
    Semicolon = 0x33,
    #[strum(serialize = "KC_QUOT")]
    Quote = 0x34,
    #[strum(serialize = "KC_GRV")]
    Grave = 0x35,
    #[strum(serialize = "KC_COMM")]
    Comma = 0x36,
    #[strum(serialize = "KC_DOT")]
    Dot = 0x37,
    #[strum(serialize = "KC_SLSH")]
    Slash = 0x38,
    #[strum(serialize = "KC_CAPS")]
    CapsLock = 0x39,

    #[strum(serialize = "KC_F1")]
    F1 = 0x3A,
    #[strum(serialize = "KC_F2")]
    F2 = 0x3B,
    #[strum(serialize = "KC_F3")]
    F3 = 0x3C,
    #[strum(serialize = "KC_F4")]
    F4 = 0x3D,
    #[strum(serialize = "KC_F5")]
    F5 = 0x3E,
    #[strum(serialize = "KC_F6")]
    F6 = 0x3F,
    #[strum(serialize = "KC_F7")]
    F7 = 0x40,
    #[strum(serialize = "KC_F8")]
    F8 = 0x41,
    #[strum(serialize = "KC_F9")]
    F9 = 0x42,
    #[strum(serialize = "KC_F10")]
    F10 = 0x43,
    #[strum(serialize = "KC_F11")]
    F11 = 0x44,
    #[strum(serialize = "KC_F12")]
    F12 = 0x45,

    #[strum(serialize = "KC_PSCR")]
    PrintScreen = 0x46,
    #[strum(serialize = "KC_SCRL")]
    ScrollLock = 0x47,
    #[strum(serialize = "KC_PAUS")]
    Pause = 0x48,
    #[strum(serialize = "KC_INS")]
    Insert = 0x49,
    #[strum(serialize = "KC_HOME")]
    Home = 0x4A,
    #[strum(serialize = "KC_PGUP")]
    PageUp = 0x4B,
    #[strum(serialize = "KC_DEL")]
    Delete = 0x4C,
    #[strum(serialize = "KC_END")]
    End = 0x4D,
    #[strum(serialize = "KC_PGDN")]
    PageDown = 0x4E,
    #[strum(serialize = "KC_RGHT")]
    Right = 0x4F,
    #[strum(serialize = "KC_LEFT")]
    Left = 0x50,
    #[strum(serialize = "KC_DOWN")]
    Down = 0x51,
    #[strum(serialize = "KC_UP")]
    Up = 0x52,

    // ISO key left of Z
    #[strum(serialize = "KC_NUBS")]
    NonUsBackslash = 0x64,
    #[strum(serialize = "KC_APP")]
    Application = 0x65,

    #[strum(serialize = "KC_KB_MUTE")]
    Mute = 0x7F,
    #[strum(serialize = "KC_KB_VOLUME_UP")]
    VolumeUp = 0x80,
    #[strum(serialize = "KC_KB_VOLUME_DOWN")]
    VolumeDown = 0x81,
    #[strum(serialize = "KC_CALC")]
    Calculator = 0xB2,

    #[strum(serialize = "KC_LCTL")]
    LeftCtrl = 0xE0,
    #[strum(serialize = "KC_LSFT")]
    LeftShift = 0xE1,
    #[strum(serialize = "KC_LALT")]
    LeftAlt = 0xE2,
    #[strum(serialize = "KC_LGUI")]
    LeftGui = 0xE3,
    #[strum(serialize = "KC_RCTL")]
    RightCtrl = 0xE4,
    #[strum(serialize = "KC_RSFT")]
    RightShift = 0xE5,
    #[strum(serialize = "KC_RALT")]
    RightAlt = 0xE6,
    #[strum(serialize = "KC_RGUI")]
    RightGui = 0xE7,
}

impl Keycode {
    /// Short label for grid reports ("KC_BSPC" -> "BSPC").
    pub fn label(self) -> &'static str {
        let name: &'static str = self.into();
        name.strip_prefix("KC_").unwrap_or(name)
    }
}
