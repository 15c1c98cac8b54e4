pub mod api;
pub mod ast;
pub mod comments;
pub mod config;
pub mod diagnostic;
pub mod directive;
pub mod duration;
pub mod error;
pub mod lexer;

pub use api::{total_seconds, track_duration, track_duration_from_file, track_duration_with_config};
pub use ast::*;
pub use comments::strip_comments;
pub use config::{Config, RestTiming};
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use duration::{calculate_duration, format_clock, DurationReport, TimedEvent};
pub use error::*;
