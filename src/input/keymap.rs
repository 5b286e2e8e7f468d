use std::collections::HashMap;

use crate::utils::helpers::{midi_note_name, midi_note_to_freq};

/// Bytes that end the session: `q`, and Ctrl-C since raw mode disables signals
pub const QUIT_KEYS: [u8; 2] = [b'q', 0x03];

/// Silences the voice without changing its pitch
pub const STOP_KEY: u8 = b' ';

/// White keys on the bottom row, black keys above, one octave from C4.
/// `f` is left unmapped where the keyboard has no black key between E and F.
const CHROMATIC_LAYOUT: [(u8, u8); 12] = [
    (b'z', 60),
    (b's', 61),
    (b'x', 62),
    (b'd', 63),
    (b'c', 64),
    (b'v', 65),
    (b'g', 66),
    (b'b', 67),
    (b'h', 68),
    (b'n', 69),
    (b'j', 70),
    (b'm', 71),
];

#[derive(Debug, Clone, PartialEq)]
pub struct KeyNote {
    pub midi_note: u8,
    pub name: String,
    pub frequency_hz: f32,
}

/// What a single input byte asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction<'a> {
    Note(&'a KeyNote),
    Stop,
    Quit,
}

/// Immutable byte -> note table, built once before polling starts
#[derive(Debug, Clone)]
pub struct KeyMap {
    notes: HashMap<u8, KeyNote>,
}

impl KeyMap {
    /// Build a map from `(byte, midi note)` pairs
    pub fn from_layout(layout: &[(u8, u8)]) -> Self {
        let notes = layout
            .iter()
            .map(|&(key, midi_note)| {
                let note = KeyNote {
                    midi_note,
                    name: midi_note_name(midi_note),
                    frequency_hz: midi_note_to_freq(midi_note),
                };
                (key, note)
            })
            .collect();
        Self { notes }
    }

    /// The fixed one-octave keypad
    pub fn chromatic() -> Self {
        Self::from_layout(&CHROMATIC_LAYOUT)
    }

    pub fn lookup(&self, key: u8) -> Option<&KeyNote> {
        self.notes.get(&key)
    }

    /// Resolve control bytes first, then notes
    pub fn classify(&self, key: u8) -> Option<KeyAction<'_>> {
        if QUIT_KEYS.contains(&key) {
            Some(KeyAction::Quit)
        } else if key == STOP_KEY {
            Some(KeyAction::Stop)
        } else {
            self.lookup(key).map(KeyAction::Note)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_keys_cover_one_octave() {
        let keymap = KeyMap::chromatic();
        assert_eq!(keymap.notes.len(), 12);

        let names: Vec<&str> = b"zxcvbnm"
            .iter()
            .map(|k| keymap.lookup(*k).unwrap().name.as_str())
            .collect();
        assert_eq!(names, ["C4", "D4", "E4", "F4", "G4", "A4", "B4"]);

        let sharps: Vec<&str> = b"sdghj"
            .iter()
            .map(|k| keymap.lookup(*k).unwrap().name.as_str())
            .collect();
        assert_eq!(sharps, ["C#4", "D#4", "F#4", "G#4", "A#4"]);
    }

    #[test]
    fn a4_key_plays_440() {
        let keymap = KeyMap::chromatic();
        let note = keymap.lookup(b'n').unwrap();
        assert_eq!(note.midi_note, 69);
        assert_eq!(note.frequency_hz, 440.0);
    }

    #[test]
    fn unmapped_bytes_miss() {
        let keymap = KeyMap::chromatic();
        for key in [b'f', b'Z', b'q', b' ', b'1', 0x1b, 0xff] {
            assert!(keymap.lookup(key).is_none(), "{:#04x} should not map", key);
        }
    }

    #[test]
    fn lookup_is_pure() {
        let keymap = KeyMap::chromatic();
        let first = keymap.lookup(b'c').cloned();
        keymap.lookup(b'z');
        keymap.lookup(b'f');
        assert_eq!(keymap.lookup(b'c').cloned(), first);
    }

    #[test]
    fn control_keys_take_precedence() {
        let keymap = KeyMap::from_layout(&[(b'q', 60), (b' ', 62)]);
        assert_eq!(keymap.classify(b'q'), Some(KeyAction::Quit));
        assert_eq!(keymap.classify(0x03), Some(KeyAction::Quit));
        assert_eq!(keymap.classify(b' '), Some(KeyAction::Stop));
        assert_eq!(keymap.classify(b'x'), None);
    }
}
