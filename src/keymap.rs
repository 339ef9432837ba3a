//! Keymap tables for the Sculpt 8x18 matrix.
//!
//! PC -> Mac modifier changes:
//!   LGUI -> LALT, LALT -> LGUI, APP -> RALT, RALT -> RGUI
//!
//! Both media overlays are identical: F3/F4 become virtual desktop
//! left/right, F5-F7 become media chords, F10-F12 become mute and volume.

use crate::dispatch::{ChordAction, KeyAction};
use crate::geometry::MatrixCoord;
use crate::layers::{Layer, LayerState, LAYER_COUNT};

pub const MAX_ROWS: usize = 8;
pub const MAX_COLS: usize = 18;

pub type LayerTable = [[KeyAction; MAX_COLS]; MAX_ROWS];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    layers: [LayerTable; LAYER_COUNT],
}

impl Default for Keymap {
    fn default() -> Self {
        Self::sculpt()
    }
}

impl Keymap {
    pub fn new(layers: [LayerTable; LAYER_COUNT]) -> Self {
        Self { layers }
    }

    pub fn sculpt() -> Self {
        Self::new([
            tables::PC_BASE,
            tables::MEDIA_FN,
            tables::MAC_BASE,
            tables::MEDIA_FN,
        ])
    }

    pub fn table(&self, layer: Layer) -> &LayerTable {
        &self.layers[layer.index() as usize]
    }

    /// Raw slot contents. Out-of-range coordinates read as `No`.
    pub fn action_at(&self, layer: Layer, coord: MatrixCoord) -> KeyAction {
        self.table(layer)
            .get(coord.row as usize)
            .and_then(|row| row.get(coord.col as usize))
            .copied()
            .unwrap_or(KeyAction::No)
    }

    /// Action for `coord` under `state`: the effective layer first, falling
    /// through to the base when the overlay slot is transparent.
    pub fn resolve(&self, state: LayerState, coord: MatrixCoord) -> KeyAction {
        let action = self.action_at(state.effective_layer(), coord);
        if action != KeyAction::Transparent {
            return action;
        }
        match self.action_at(state.base.layer(), coord) {
            KeyAction::Transparent => KeyAction::No,
            base => base,
        }
    }
}

mod tables {
    use super::{ChordAction, KeyAction, LayerTable};
    use crate::keycodes::Keycode::{self, *};

    const fn k(code: Keycode) -> KeyAction {
        KeyAction::Key(code)
    }

    const XXX: KeyAction = KeyAction::No;
    const ___: KeyAction = KeyAction::Transparent;

    const L_WIN: KeyAction = KeyAction::Chord(ChordAction::DesktopLeft);
    const R_WIN: KeyAction = KeyAction::Chord(ChordAction::DesktopRight);
    const MED_F5: KeyAction = KeyAction::Chord(ChordAction::MediaF5);
    const MED_F6: KeyAction = KeyAction::Chord(ChordAction::MediaF6);
    const MED_F7: KeyAction = KeyAction::Chord(ChordAction::MediaF7);

    #[rustfmt::skip]
    pub(super) const PC_BASE: LayerTable = [
        // Row 0
        [XXX, k(Pause), XXX, k(Delete), k(N0), k(N9), XXX, k(N8), k(Backspace), k(N7), k(Tab), k(Q), k(N2), k(N1), XXX, XXX, XXX, XXX],
        // Row 1
        [XXX, k(PageUp), XXX, k(F12), k(LeftBracket), k(Minus), XXX, k(RightBracket), k(Insert), k(Y), k(F5), k(F3), k(W), k(N4), XXX, k(F6), XXX, XXX],
        // Row 2
        [XXX, k(Home), XXX, k(Calculator), k(P), k(O), XXX, k(I), XXX, k(U), k(R), k(E), k(CapsLock), k(N3), XXX, k(T), XXX, XXX],
        // Row 3
        [XXX, k(ScrollLock), XXX, k(Enter), k(Semicolon), k(L), XXX, k(K), k(Backslash), k(J), k(F), k(D), k(NonUsBackslash), k(A), XXX, k(LeftGui), XXX, XXX],
        // Row 4
        [XXX, XXX, XXX, k(Application), k(Slash), k(Quote), k(RightAlt), XXX, k(Left), k(H), k(G), k(F4), k(S), k(Escape), XXX, XXX, k(LeftAlt), XXX],
        // Row 5
        [XXX, k(End), k(RightShift), k(PageDown), XXX, k(Dot), XXX, k(Comma), XXX, k(M), k(V), k(C), k(X), k(Z), k(LeftShift), XXX, XXX, XXX],
        // Row 6
        [k(RightCtrl), k(Right), XXX, k(Up), k(Down), XXX, XXX, XXX, k(Space), k(N), k(B), k(Space), XXX, XXX, XXX, XXX, XXX, k(LeftCtrl)],
        // Row 7
        [XXX, k(PrintScreen), XXX, k(F11), k(Equal), k(F9), XXX, k(F8), k(F10), k(F7), k(N5), k(F2), k(F1), k(Grave), XXX, k(N6), XXX, XXX],
    ];

    #[rustfmt::skip]
    pub(super) const MAC_BASE: LayerTable = [
        // Row 0
        [XXX, k(Pause), XXX, k(Delete), k(N0), k(N9), XXX, k(N8), k(Backspace), k(N7), k(Tab), k(Q), k(N2), k(N1), XXX, XXX, XXX, XXX],
        // Row 1
        [XXX, k(PageUp), XXX, k(F12), k(LeftBracket), k(Minus), XXX, k(RightBracket), k(Insert), k(Y), k(F5), k(F3), k(W), k(N4), XXX, k(F6), XXX, XXX],
        // Row 2
        [XXX, k(Home), XXX, k(Calculator), k(P), k(O), XXX, k(I), XXX, k(U), k(R), k(E), k(CapsLock), k(N3), XXX, k(T), XXX, XXX],
        // Row 3: col 15 is LALT here, the PC table's LGUI moves to (4, 16)
        [XXX, k(ScrollLock), XXX, k(Enter), k(Semicolon), k(L), XXX, k(K), k(Backslash), k(J), k(F), k(D), k(NonUsBackslash), k(A), XXX, k(LeftAlt), XXX, XXX],
        // Row 4
        [XXX, XXX, XXX, k(RightAlt), k(Slash), k(Quote), k(RightGui), XXX, k(Left), k(H), k(G), k(F4), k(S), k(Escape), XXX, XXX, k(LeftGui), XXX],
        // Row 5
        [XXX, k(End), k(RightShift), k(PageDown), XXX, k(Dot), XXX, k(Comma), XXX, k(M), k(V), k(C), k(X), k(Z), k(LeftShift), XXX, XXX, XXX],
        // Row 6
        [k(RightCtrl), k(Right), XXX, k(Up), k(Down), XXX, XXX, XXX, k(Space), k(N), k(B), k(Space), XXX, XXX, XXX, XXX, XXX, k(LeftCtrl)],
        // Row 7
        [XXX, k(PrintScreen), XXX, k(F11), k(Equal), k(F9), XXX, k(F8), k(F10), k(F7), k(N5), k(F2), k(F1), k(Grave), XXX, k(N6), XXX, XXX],
    ];

    #[rustfmt::skip]
    pub(super) const MEDIA_FN: LayerTable = [
        // Row 0
        [___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___],
        // Row 1
        [___, ___, ___, k(VolumeUp), ___, ___, ___, ___, ___, ___, MED_F5, L_WIN, ___, ___, ___, MED_F6, ___, ___],
        // Row 2
        [___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___],
        // Row 3
        [___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___],
        // Row 4
        [___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, R_WIN, ___, ___, ___, ___, ___, ___],
        // Row 5
        [___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___],
        // Row 6
        [___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___, ___],
        // Row 7
        [___, ___, ___, k(VolumeDown), ___, ___, ___, ___, k(Mute), MED_F7, ___, ___, ___, ___, ___, ___, ___, ___],
    ];
}
