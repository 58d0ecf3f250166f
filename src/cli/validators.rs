//! CLI argument validators.
//!
//! Value parsers for clap, plus the bridge that reports late usage errors
//! through clap's error path.

use clap::CommandFactory;
use clap::error::ErrorKind;

use crate::error::Error;
use crate::utils::timecode::{EndMarker, parse_time};

use super::Cli;

/// Parse a `--from` time value.
pub fn parse_time_value(s: &str) -> Result<f64, String> {
    parse_time(s).map_err(|e| e.to_string())
}

/// Parse a `--to` value: a time or `END`.
pub fn parse_end_marker(s: &str) -> Result<EndMarker, String> {
    s.parse::<EndMarker>().map_err(|e| e.to_string())
}

/// Convert a usage [`Error`] into a clap error for `vidcut`.
///
/// Calling `.exit()` on the result prints usage and exits with clap's
/// usage exit code.
#[must_use]
pub fn usage_error(error: &Error) -> clap::Error {
    let kind = match error {
        Error::MissingInput | Error::MissingCutBounds => ErrorKind::MissingRequiredArgument,
        Error::InvalidTimeFormat { .. } => ErrorKind::ValueValidation,
        _ => ErrorKind::ArgumentConflict,
    };
    Cli::command().error(kind, error.to_string())
}
