//! # Error Types
//!
//! Errors for the fallible outer surfaces of the crate: reading track files
//! and loading configuration.
//!
//! The duration scan itself never fails. Malformed tokens and unsupported
//! directive values are reported as [`Diagnostic`](crate::Diagnostic)s next to
//! the total instead.
//!
//! ## Usage
//! ```rust
//! use mmldur::{Config, MmlError};
//!
//! match Config::from_yaml("initial-tempo: 0") {
//!     Ok(_) => unreachable!(),
//!     Err(MmlError::ConfigError(message)) => eprintln!("bad config: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MmlError {
    /// A track or configuration file could not be read.
    ///
    /// # Example
    /// ```
    /// # use mmldur::MmlError;
    /// let err = MmlError::Io {
    ///     path: "song/rhythm.mml".into(),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    /// };
    /// assert_eq!(err.to_string(), "Cannot read 'song/rhythm.mml': not found");
    /// ```
    #[error("Cannot read '{}': {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    ///
    /// Occurs when the YAML cannot be parsed or a value is out of range.
    ///
    /// # Example
    /// ```
    /// # use mmldur::MmlError;
    /// let err = MmlError::ConfigError("initial-tempo must be positive".to_string());
    /// assert_eq!(err.to_string(), "Invalid config: initial-tempo must be positive");
    /// ```
    #[error("Invalid config: {0}")]
    ConfigError(String),
}
