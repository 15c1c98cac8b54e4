//! Duration calculation engine
//!
//! Walks the track line by line, keeping tempo and default length as it goes,
//! and sums the duration of every event.

use log::{debug, trace};

use super::types::{DurationReport, TimedEvent};
use crate::ast::{Event, NoteLength};
use crate::comments::strip_comments;
use crate::config::{Config, RestTiming};
use crate::diagnostic::Diagnostic;
use crate::directive::{classify_line, DirectiveKind, DirectiveValue, Line};
use crate::lexer::{Lexer, LocatedToken, Token};

/// Interpreter state for a single scan.
///
/// Created fresh per track and consumed by [`Interpreter::finish`], so
/// nothing carries over between calls.
struct Interpreter<'c> {
    config: &'c Config,
    tempo_bpm: u64,
    default_length: u64,
    octave: Option<u64>,
    volume: Option<u64>,
    elapsed: f64,
    events: Vec<TimedEvent>,
    diagnostics: Vec<Diagnostic>,
}

impl<'c> Interpreter<'c> {
    fn new(config: &'c Config) -> Self {
        Self {
            config,
            tempo_bpm: u64::from(config.initial_tempo),
            default_length: u64::from(config.initial_length),
            octave: None,
            volume: None,
            elapsed: 0.0,
            events: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn scan_line(&mut self, line_number: usize, raw: &str) {
        match classify_line(raw) {
            Line::Blank => {}
            Line::Directive(kind, value) => {
                self.apply_directive(line_number, raw.trim(), kind, value)
            }
            Line::Events(text) => {
                let tokens = Lexer::new(raw, line_number, self.config).tokenize();
                self.scan_tokens(&tokens, text);
            }
        }
    }

    fn apply_directive(
        &mut self,
        line_number: usize,
        text: &str,
        kind: DirectiveKind,
        value: DirectiveValue,
    ) {
        let value = match value {
            DirectiveValue::Value(v) => v,
            // Past u64 a tempo is as fast and a length as unsupported as u64::MAX
            DirectiveValue::Overflow(_)
                if matches!(kind, DirectiveKind::Tempo | DirectiveKind::Length) =>
            {
                u64::MAX
            }
            DirectiveValue::Overflow(_) => {
                self.diagnostics
                    .push(Diagnostic::invalid_directive_value(line_number, text));
                return;
            }
        };

        match kind {
            DirectiveKind::Tempo => {
                // A zero tempo would make every later event infinitely long
                if value == 0 {
                    self.diagnostics
                        .push(Diagnostic::invalid_tempo(line_number, text));
                    return;
                }
                self.tempo_bpm = value;
            }
            // Unsupported values are stored; each event under them is reported
            DirectiveKind::Length => self.default_length = value,
            DirectiveKind::Volume => self.volume = Some(value),
            DirectiveKind::Octave => self.octave = Some(value),
        }
        debug!("L{}: set {}: {}", line_number, kind.keyword(), value);
    }

    fn scan_tokens(&mut self, tokens: &[LocatedToken<'_>], source_line: &str) {
        let mut idx = 0;
        while idx < tokens.len() {
            let current = &tokens[idx];

            let Token::Event(event) = &current.token else {
                self.diagnostics.push(Diagnostic::unrecognized_token(
                    current.line,
                    current.column,
                    current.text,
                    source_line,
                ));
                idx += 1;
                continue;
            };

            if let Some(LocatedToken {
                token: Token::ExplicitDuration(seconds),
                ..
            }) = tokens.get(idx + 1)
            {
                self.push_event(current, event, *seconds, true);
                idx += 2;
                continue;
            }

            match self.default_duration(event) {
                Some(seconds) => self.push_event(current, event, seconds, false),
                None => self.diagnostics.push(Diagnostic::unsupported_length(
                    current.line,
                    current.column,
                    current.text,
                    self.default_length,
                )),
            }
            idx += 1;
        }
    }

    /// Duration of an event without an explicit override, `None` when the
    /// prevailing `LENGTH` has no beat value.
    fn default_duration(&self, event: &Event) -> Option<f64> {
        if let (RestTiming::OwnLength, Event::Rest { length }) = (self.config.rest_timing, event) {
            if let Some(own) = NoteLength::from_denominator(u64::from(*length)) {
                return Some(own.as_seconds(self.tempo_bpm));
            }
        }
        NoteLength::from_denominator(self.default_length)
            .map(|length| length.as_seconds(self.tempo_bpm))
    }

    fn push_event(&mut self, token: &LocatedToken<'_>, event: &Event, seconds: f64, explicit: bool) {
        trace!(
            "L{}: {} '{}' adds {:.3}s (total {:.3}s)",
            token.line,
            event.kind_name(),
            token.text,
            seconds,
            self.elapsed + seconds
        );
        self.events.push(TimedEvent {
            line: token.line,
            column: token.column,
            token: token.text.to_string(),
            event: event.clone(),
            start_seconds: self.elapsed,
            duration_seconds: seconds,
            explicit,
        });
        self.elapsed += seconds;
    }

    fn finish(self) -> DurationReport {
        DurationReport {
            total_seconds: self.elapsed,
            events: self.events,
            diagnostics: self.diagnostics,
            final_tempo: self.tempo_bpm,
            final_length: self.default_length,
            octave: self.octave,
            volume: self.volume,
        }
    }
}

/// Compute the playback duration of one MML track
///
/// # Parameters
/// - `source`: full text of the track
/// - `config`: initial tempo/length and dialect settings
///
/// # Returns
/// A [`DurationReport`] with the total in seconds, every timed event, and
/// the diagnostics for anything that was skipped. The call never fails.
///
/// # Example
/// ```rust
/// use mmldur::{calculate_duration, Config};
///
/// let source = "TEMPO:60\nX:bass01 1.5s i25:C ; kick then a note\n";
/// let report = calculate_duration(source, &Config::default());
///
/// assert_eq!(report.total_seconds, 2.5);
/// assert!(report.events[0].explicit);
/// ```
pub fn calculate_duration(source: &str, config: &Config) -> DurationReport {
    let mut interpreter = Interpreter::new(config);

    for (i, line) in strip_comments(source).lines().enumerate() {
        interpreter.scan_line(i + 1, line);
    }

    interpreter.finish()
}
