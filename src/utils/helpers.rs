/// Note names within one octave, starting at C.
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Convert a MIDI note number to its frequency in Hz
pub fn midi_note_to_freq(note: u8) -> f32 {
    // A4 (note 69) is 440 Hz
    440.0 * 2.0f32.powf((note as f32 - 69.0) / 12.0)
}

/// Convert a frequency in Hz to the closest MIDI note number
pub fn freq_to_midi_note(freq: f32) -> u8 {
    // A4 (note 69) is 440 Hz
    let note = 69.0 + 12.0 * (freq / 440.0).log2();
    note.round().clamp(0.0, 127.0) as u8
}

/// Scientific pitch name for a MIDI note, e.g. 60 -> "C4"
pub fn midi_note_name(note: u8) -> String {
    let octave = (note / 12) as i32 - 1;
    format!("{}{}", NOTE_NAMES[(note % 12) as usize], octave)
}

/// Format a frequency value with appropriate unit suffix (Hz, kHz)
pub fn format_frequency(freq: f32) -> String {
    if freq >= 1000.0 {
        format!("{:.2} kHz", freq / 1000.0)
    } else {
        format!("{:.1} Hz", freq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_is_exactly_440() {
        assert_eq!(midi_note_to_freq(69), 440.0);
    }

    #[test]
    fn equal_temperament_reference_pitches() {
        assert!((midi_note_to_freq(60) - 261.6256).abs() < 1e-3);
        assert!((midi_note_to_freq(81) - 880.0).abs() < 1e-3);
    }

    #[test]
    fn frequencies_round_trip_to_the_nearest_note() {
        assert_eq!(freq_to_midi_note(440.0), 69);
        assert_eq!(freq_to_midi_note(261.63), 60);
        assert_eq!(freq_to_midi_note(450.0), 69);
        for note in 21..=108 {
            assert_eq!(freq_to_midi_note(midi_note_to_freq(note)), note);
        }
    }

    #[test]
    fn out_of_range_frequencies_clamp() {
        assert_eq!(freq_to_midi_note(1.0), 0);
        assert_eq!(freq_to_midi_note(40_000.0), 127);
    }

    #[test]
    fn note_names_follow_scientific_pitch() {
        assert_eq!(midi_note_name(60), "C4");
        assert_eq!(midi_note_name(61), "C#4");
        assert_eq!(midi_note_name(69), "A4");
        assert_eq!(midi_note_name(71), "B4");
        assert_eq!(midi_note_name(0), "C-1");
    }

    #[test]
    fn frequency_formatting_switches_units() {
        assert_eq!(format_frequency(440.0), "440.0 Hz");
        assert_eq!(format_frequency(1760.0), "1.76 kHz");
    }
}
