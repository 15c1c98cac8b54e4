//! # Event Types
//!
//! Types produced by the token scanner for one MML track.
//!
//! ## Type Hierarchy
//! ```text
//! Event
//!   ├── Note  { label, pitch }      i25:C, sqr:D4+, tri:C+3
//!   ├── Hit   { label, sample }     X:bass01, miscellaneous:C4-A4-triangle
//!   ├── Rest  { length }            R:4
//!   └── Chord { members }           CHORD:C,E,G   CHORD:i05:C,i05:E,i05:G5
//!
//! Pitch
//!   ├── name: NoteName (A-G)
//!   ├── accidental: Accidental (+ sharp, - flat)
//!   └── octave: Option<u8>
//! ```
//!
//! ## Duration Calculation
//! An event never carries its own length. It lasts either for the explicit
//! `<n>s` token that follows it, or for the prevailing `LENGTH` converted
//! through [`NoteLength::as_beats`] at the prevailing tempo.

use serde::Serialize;

/// Note names A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NoteName {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            _ => None,
        }
    }
}

/// Accidentals: `+` raises, `-` lowers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    #[default]
    Natural,
    Sharp, // +
    Flat,  // -
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Accidental::Sharp),
            '-' => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// A pitch such as `C`, `D4+`, `C+3`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pitch {
    pub name: NoteName,
    pub accidental: Accidental,
    /// Octave digit, `None` means the prevailing `OCTAVE`
    pub octave: Option<u8>,
}

/// One pitch inside a `CHORD:` token, optionally tagged with an instrument label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordMember {
    pub label: Option<String>,
    pub pitch: Pitch,
}

/// A single musical event, one duration contribution each
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Event {
    /// Pitched instrument note (`i25:C`)
    Note { label: String, pitch: Pitch },
    /// Unpitched sample trigger (`X:bass01`)
    Hit { label: String, sample: String },
    /// Rest (`R:4`), `length` is the written denominator
    Rest { length: u32 },
    /// Several pitches sounding as one event
    Chord { members: Vec<ChordMember> },
}

impl Event {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Event::Note { .. } => "note",
            Event::Hit { .. } => "hit",
            Event::Rest { .. } => "rest",
            Event::Chord { .. } => "chord",
        }
    }
}

/// Note values supported by `LENGTH`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteLength {
    Whole,        // 1
    Half,         // 2
    Quarter,      // 4
    Eighth,       // 8
    Sixteenth,    // 16
    ThirtySecond, // 32
}

impl NoteLength {
    /// Map a `LENGTH`/rest denominator to a note value.
    /// Returns `None` for anything outside 1, 2, 4, 8, 16, 32.
    pub fn from_denominator(denominator: u64) -> Option<Self> {
        match denominator {
            1 => Some(NoteLength::Whole),
            2 => Some(NoteLength::Half),
            4 => Some(NoteLength::Quarter),
            8 => Some(NoteLength::Eighth),
            16 => Some(NoteLength::Sixteenth),
            32 => Some(NoteLength::ThirtySecond),
            _ => None,
        }
    }

    /// Length in beats, a quarter note being one beat
    pub fn as_beats(&self) -> f64 {
        match self {
            NoteLength::Whole => 4.0,
            NoteLength::Half => 2.0,
            NoteLength::Quarter => 1.0,
            NoteLength::Eighth => 0.5,
            NoteLength::Sixteenth => 0.25,
            NoteLength::ThirtySecond => 0.125,
        }
    }

    /// Length in seconds at `tempo_bpm` quarter notes per minute
    pub fn as_seconds(&self, tempo_bpm: u64) -> f64 {
        self.as_beats() * (60.0 / tempo_bpm as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_length_table() {
        let table = [(1, 4.0), (2, 2.0), (4, 1.0), (8, 0.5), (16, 0.25), (32, 0.125)];
        for (denominator, beats) in table {
            let length = NoteLength::from_denominator(denominator).unwrap();
            assert_eq!(length.as_beats(), beats);
        }
    }

    #[test]
    fn test_unsupported_denominators() {
        for denominator in [0, 3, 6, 12, 64, 128, u64::MAX] {
            assert_eq!(NoteLength::from_denominator(denominator), None);
        }
    }

    #[test]
    fn test_seconds_at_tempo() {
        assert_eq!(NoteLength::Quarter.as_seconds(120), 0.5);
        assert_eq!(NoteLength::Eighth.as_seconds(120), 0.25);
        assert_eq!(NoteLength::Whole.as_seconds(60), 4.0);
    }

    #[test]
    fn test_note_name_from_char() {
        assert_eq!(NoteName::from_char('G'), Some(NoteName::G));
        assert_eq!(NoteName::from_char('H'), None);
        assert_eq!(NoteName::from_char('c'), None);
    }
}
