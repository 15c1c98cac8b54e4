//! Event-line tokenizer
//!
//! An event line is split on whitespace; columns are 1-based character
//! offsets. Each piece is then classified on its own:
//! - `CHORD:<member>,...` where a member is `[label:]pitch`
//! - `R:<digits>`
//! - `<unpitched label>:<sample>` for labels listed in the config
//! - `<label>:<pitch>`, pitch being `A`-`G` with an optional `+`/`-` and digit
//! - `<digits>[.<digits>]s`, an explicit duration for the event before it
//!
//! Anything else becomes [`Token::Unknown`].

use crate::ast::{Accidental, ChordMember, Event, NoteName, Pitch};
use crate::config::Config;

/// Token types for one event line
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A base event: note, hit, rest or chord
    Event(Event),
    /// `<number>s`, only meaningful right after an event
    ExplicitDuration(f64),
    /// Anything else
    Unknown,
}

/// A token with its source text and position
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedToken<'a> {
    pub token: Token,
    pub text: &'a str,
    pub line: usize,
    pub column: usize,
}

/// Splits one event line on whitespace and classifies each token
pub struct Lexer<'a> {
    input: &'a str,
    line: usize,
    config: &'a Config,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, line: usize, config: &'a Config) -> Self {
        Self { input, line, config }
    }

    pub fn tokenize(&self) -> Vec<LocatedToken<'a>> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;
        let mut column = 1;
        let mut start_column = 1;

        for (pos, c) in self.input.char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    tokens.push(self.locate(&self.input[s..pos], start_column));
                }
            } else if start.is_none() {
                start = Some(pos);
                start_column = column;
            }
            column += 1;
        }
        if let Some(s) = start {
            tokens.push(self.locate(&self.input[s..], start_column));
        }

        tokens
    }

    fn locate(&self, text: &'a str, column: usize) -> LocatedToken<'a> {
        let token = if let Some(event) = parse_event(text, self.config) {
            Token::Event(event)
        } else if let Some(seconds) = parse_explicit_duration(text) {
            Token::ExplicitDuration(seconds)
        } else {
            Token::Unknown
        };
        LocatedToken {
            token,
            text,
            line: self.line,
            column,
        }
    }
}

/// Parse a base event token: `label:pitch`, `label:sample`, `R:n` or `CHORD:...`
pub fn parse_event(text: &str, config: &Config) -> Option<Event> {
    let (label, payload) = text.split_once(':')?;

    if label == "CHORD" {
        return parse_chord(payload).map(|members| Event::Chord { members });
    }

    if config.is_unpitched(label) {
        if is_sample_name(payload) {
            return Some(Event::Hit {
                label: label.to_string(),
                sample: payload.to_string(),
            });
        }
        return None;
    }

    if !is_label(label) {
        return None;
    }

    if label == "R" && is_digits(payload) {
        // Only recorded on the event, so an absurd value is clamped rather than rejected
        let length = payload.parse().unwrap_or(u32::MAX);
        return Some(Event::Rest { length });
    }

    parse_pitch(payload).map(|pitch| Event::Note {
        label: label.to_string(),
        pitch,
    })
}

/// Parse `A`-`G` followed by at most one accidental and at most one octave
/// digit, in either order (`C`, `C+`, `C4`, `D4+`, `C+3`).
pub fn parse_pitch(text: &str) -> Option<Pitch> {
    let mut chars = text.chars();
    let name = NoteName::from_char(chars.next()?)?;
    let mut pitch = Pitch {
        name,
        ..Pitch::default()
    };
    let mut seen_accidental = false;

    for c in chars {
        if let Some(accidental) = Accidental::from_char(c) {
            if seen_accidental {
                return None;
            }
            seen_accidental = true;
            pitch.accidental = accidental;
        } else if let Some(digit) = c.to_digit(10) {
            if pitch.octave.is_some() {
                return None;
            }
            pitch.octave = Some(digit as u8);
        } else {
            return None;
        }
    }

    Some(pitch)
}

/// Parse the comma-separated members after `CHORD:`
fn parse_chord(payload: &str) -> Option<Vec<ChordMember>> {
    payload
        .split(',')
        .map(|member| -> Option<ChordMember> {
            match member.split_once(':') {
                Some((label, pitch)) if is_label(label) => Some(ChordMember {
                    label: Some(label.to_string()),
                    pitch: parse_pitch(pitch)?,
                }),
                Some(_) => None,
                None => Some(ChordMember {
                    label: None,
                    pitch: parse_pitch(member)?,
                }),
            }
        })
        .collect()
}

/// Parse `<digits>[.<digits>]s`, e.g. `1s`, `0.25s`, `2.s`
pub fn parse_explicit_duration(text: &str) -> Option<f64> {
    let number = text.strip_suffix('s')?;
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };
    if !is_digits(whole) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok().filter(|seconds: &f64| seconds.is_finite())
}

fn is_label(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_sample_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
