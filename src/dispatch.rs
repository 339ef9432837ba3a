use crate::hal::KeySink;
use crate::keycodes::Keycode;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

/// Synthetic actions that the host only understands as several keys held
/// together.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum ChordAction {
    /// Previous virtual desktop.
    #[strum(serialize = "KC_L_WIN")]
    DesktopLeft,
    /// Next virtual desktop.
    #[strum(serialize = "KC_R_WIN")]
    DesktopRight,
    #[strum(serialize = "MED_F5")]
    MediaF5,
    #[strum(serialize = "MED_F6")]
    MediaF6,
    #[strum(serialize = "MED_F7")]
    MediaF7,
}

const DESKTOP_LEFT: [Keycode; 3] = [Keycode::LeftCtrl, Keycode::LeftGui, Keycode::Left];
const DESKTOP_RIGHT: [Keycode; 3] = [Keycode::RightCtrl, Keycode::RightGui, Keycode::Right];
const MEDIA_F5: [Keycode; 2] = [Keycode::LeftShift, Keycode::LeftGui];
const MEDIA_F6: [Keycode; 2] = [Keycode::LeftAlt, Keycode::LeftGui];
const MEDIA_F7: [Keycode; 2] = [Keycode::LeftCtrl, Keycode::LeftGui];

impl ChordAction {
    /// Constituent keys in press order.
    pub fn keys(self) -> &'static [Keycode] {
        match self {
            ChordAction::DesktopLeft => &DESKTOP_LEFT,
            ChordAction::DesktopRight => &DESKTOP_RIGHT,
            ChordAction::MediaF5 => &MEDIA_F5,
            ChordAction::MediaF6 => &MEDIA_F6,
            ChordAction::MediaF7 => &MEDIA_F7,
        }
    }
}

/// What a keymap slot does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Dead position.
    No,
    /// Defer to the base layer.
    Transparent,
    Key(Keycode),
    Chord(ChordAction),
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAction::No => write!(f, "KC_NO"),
            KeyAction::Transparent => write!(f, "KC_TRNS"),
            KeyAction::Key(k) => write!(f, "{}", k),
            KeyAction::Chord(c) => write!(f, "{}", c),
        }
    }
}

impl From<Keycode> for KeyAction {
    fn from(k: Keycode) -> Self {
        KeyAction::Key(k)
    }
}

impl From<ChordAction> for KeyAction {
    fn from(c: ChordAction) -> Self {
        KeyAction::Chord(c)
    }
}

/// Turns accepted actions into keycode emissions. Ghost filtering happens
/// upstream; nothing here re-checks the matrix.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    emitted: u64,
    chords_fired: u64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn chords_fired(&self) -> u64 {
        self.chords_fired
    }

    /// Returns the number of keycode events sent to `sink`.
    ///
    /// Plain keys pass the edge straight through. A chord fires on the press
    /// edge as one complete pulse (every key down in order, then every key
    /// up in the same order), so its release edge emits nothing.
    pub fn dispatch<K: KeySink + ?Sized>(
        &mut self,
        action: KeyAction,
        pressed: bool,
        sink: &mut K,
    ) -> usize {
        let count = match action {
            KeyAction::No | KeyAction::Transparent => 0,
            KeyAction::Key(code) => {
                sink.emit_keycode(code, pressed);
                1
            }
            KeyAction::Chord(chord) if pressed => {
                let keys = chord.keys();
                debug!("Chord {} -> {:?}", chord, keys);
                for &code in keys {
                    sink.emit_keycode(code, true);
                }
                for &code in keys {
                    sink.emit_keycode(code, false);
                }
                self.chords_fired += 1;
                keys.len() * 2
            }
            KeyAction::Chord(_) => 0,
        };
        self.emitted += count as u64;
        count
    }
}
