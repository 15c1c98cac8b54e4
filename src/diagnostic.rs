//! Diagnostics reported while scanning a track.
//!
//! The scan never stops on bad input. Every problem becomes a
//! [`Diagnostic`] returned next to the total, and the offending token or
//! directive contributes no time.

use serde::Serialize;
use std::fmt;

/// Severity level for diagnostics
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Token matches no event grammar and is not an explicit-duration suffix
    UnrecognizedToken,
    /// Event skipped because the prevailing `LENGTH` has no beat value
    UnsupportedLength,
    /// `TEMPO:0`, tempo left unchanged
    InvalidTempo,
    /// `VOLUME` or `OCTAVE` value too large, directive ignored
    InvalidDirectiveValue,
}

/// A problem found at a specific place in the track
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// 1-based source line
    pub line: usize,
    /// 1-based column of the token (or directive) on that line
    pub column: usize,
    /// The offending token or directive text
    pub token: String,
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    pub fn unrecognized_token(line: usize, column: usize, token: &str, source_line: &str) -> Self {
        Self {
            line,
            column,
            token: token.to_string(),
            kind: DiagnosticKind::UnrecognizedToken,
            severity: Severity::Error,
            message: format!(
                "Unrecognized MML token or syntax error: '{}' (from line: '{}')",
                token, source_line
            ),
        }
    }

    pub fn unsupported_length(line: usize, column: usize, token: &str, length: u64) -> Self {
        Self {
            line,
            column,
            token: token.to_string(),
            kind: DiagnosticKind::UnsupportedLength,
            severity: Severity::Warning,
            message: format!(
                "Unknown LENGTH value {}. Skipping command: '{}'",
                length, token
            ),
        }
    }

    pub fn invalid_tempo(line: usize, directive: &str) -> Self {
        Self {
            line,
            column: 1,
            token: directive.to_string(),
            kind: DiagnosticKind::InvalidTempo,
            severity: Severity::Warning,
            message: format!(
                "Invalid tempo '{}'. Keeping the current tempo",
                directive
            ),
        }
    }

    pub fn invalid_directive_value(line: usize, directive: &str) -> Self {
        Self {
            line,
            column: 1,
            token: directive.to_string(),
            kind: DiagnosticKind::InvalidDirectiveValue,
            severity: Severity::Warning,
            message: format!("Directive value out of range in '{}'. Ignored", directive),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}: {}: {}", self.line, self.severity, self.message)
    }
}
