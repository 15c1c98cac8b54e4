//! Duration report type definitions

use crate::ast::Event;
use crate::diagnostic::Diagnostic;
use serde::Serialize;

/// One event that contributed time to the track
///
/// # Fields
/// - `line`, `column`: where the event token starts (1-based)
/// - `token`: the event token as written, without its explicit-duration suffix
/// - `start_seconds`: running total before this event
/// - `duration_seconds`: contribution of this event
/// - `explicit`: true when an `<n>s` token set the duration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedEvent {
    pub line: usize,
    pub column: usize,
    pub token: String,
    pub event: Event,
    pub start_seconds: f64,
    pub duration_seconds: f64,
    pub explicit: bool,
}

/// Result of scanning one track
///
/// `total_seconds` is always a number, possibly an undercount when some
/// tokens were skipped; `diagnostics` says which ones.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationReport {
    pub total_seconds: f64,
    pub events: Vec<TimedEvent>,
    pub diagnostics: Vec<Diagnostic>,
    /// Tempo in effect at the end of the track
    pub final_tempo: u64,
    /// `LENGTH` in effect at the end of the track
    pub final_length: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub octave: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

impl DurationReport {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Total formatted as `m:ss.mmm`
    pub fn clock(&self) -> String {
        format_clock(self.total_seconds)
    }
}

/// Format seconds as `m:ss.mmm`, rounding to the nearest millisecond.
///
/// ```
/// use mmldur::format_clock;
///
/// assert_eq!(format_clock(125.5), "2:05.500");
/// assert_eq!(format_clock(0.0), "0:00.000");
/// ```
pub fn format_clock(seconds: f64) -> String {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    format!(
        "{}:{:02}.{:03}",
        millis / 60_000,
        (millis % 60_000) / 1000,
        millis % 1000
    )
}
