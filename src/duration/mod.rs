//! # Duration Module
//!
//! Compute how long an MML track plays, in seconds.
//!
//! ## Pipeline
//! 1. Strip `;` comments (`comments`)
//! 2. Classify each line as blank, directive or event line (`directive`)
//! 3. Tokenize event lines and time each event (`lexer`, `engine`)
//!
//! ## Timing Rules
//! - An event followed by `<n>s` lasts exactly `n` seconds
//! - Otherwise it lasts `beats(LENGTH) * 60 / TEMPO` seconds
//! - A chord is one event, however many pitches it lists
//! - `OCTAVE` and `VOLUME` never change timing
//!
//! ## Example
//! ```rust
//! use mmldur::{calculate_duration, Config};
//!
//! let source = "TEMPO:120\nLENGTH:4\nR:4 R:4 R:4 R:4\n";
//! let report = calculate_duration(source, &Config::default());
//!
//! assert_eq!(report.total_seconds, 2.0);
//! assert_eq!(report.events.len(), 4);
//! assert!(report.diagnostics.is_empty());
//! ```
//!
//! ## Best Effort
//! Nothing in a track can make the calculation fail. Unknown tokens and
//! events under an unsupported `LENGTH` are skipped and reported in
//! [`DurationReport::diagnostics`].

mod engine;
mod types;


pub use engine::calculate_duration;
pub use types::{format_clock, DurationReport, TimedEvent};
