//! # Public API
//!
//! Entry points for computing track durations.
//!
//! - [`track_duration()`] - Full report with the default configuration
//! - [`track_duration_with_config()`] - Full report with a custom [`Config`]
//! - [`total_seconds()`] - Just the number
//! - [`track_duration_from_file()`] - Read a track from disk first
//!
//! ## Typical Usage
//!
//! ```rust
//! use mmldur::track_duration;
//!
//! let source = "\
//! TEMPO:120
//! LENGTH:8
//! ; one bar of eighths
//! X:bass01 R:8 X:hhat01 R:8 X:snare01 R:8 X:hhat01 R:8
//! ";
//!
//! let report = track_duration(source);
//! assert_eq!(report.total_seconds, 2.0);
//! for diagnostic in &report.diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! ```

use std::path::Path;

use crate::{calculate_duration, Config, DurationReport, MmlError};

/// Compute the duration report of a track with the default configuration.
///
/// The track starts at 120 BPM with quarter-note events.
pub fn track_duration(source: &str) -> DurationReport {
    calculate_duration(source, &Config::default())
}

/// Compute the duration report of a track with a custom configuration.
pub fn track_duration_with_config(source: &str, config: &Config) -> DurationReport {
    calculate_duration(source, config)
}

/// Total duration of a track in seconds, discarding diagnostics.
///
/// # Example
/// ```rust
/// use mmldur::total_seconds;
///
/// assert_eq!(total_seconds("TEMPO:60\nR:4 R:4"), 2.0);
/// ```
pub fn total_seconds(source: &str) -> f64 {
    track_duration(source).total_seconds
}

/// Read a track file and compute its duration report.
///
/// # Errors
/// Returns [`MmlError::Io`] if the file cannot be read. Problems inside the
/// track are diagnostics, never errors.
pub fn track_duration_from_file(
    path: impl AsRef<Path>,
    config: &Config,
) -> Result<DurationReport, MmlError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| MmlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(calculate_duration(&source, config))
}
