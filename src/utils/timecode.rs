//! Time value parsing for cut markers.

use std::fmt;
use std::str::FromStr;

use crate::constants::{END_MARKER, MAX_TIME_FIELDS, TIME_BASE};
use crate::error::{Error, Result};

/// Parse `ss`, `mm:ss` or `hh:mm:ss` into seconds.
///
/// Fields are accumulated left to right in base 60 and may be fractional
/// (`1:02.5` is 62.5). Values are not range-checked, so negative or very
/// large inputs pass through.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeFormat`] if any field is empty or not a
/// number, or if more than three fields are given.
pub fn parse_time(s: &str) -> Result<f64> {
    let invalid = || Error::InvalidTimeFormat {
        value: s.to_string(),
    };

    let fields: Vec<&str> = s.split(':').collect();
    if fields.len() > MAX_TIME_FIELDS {
        return Err(invalid());
    }

    fields.iter().try_fold(0.0, |acc, field| {
        let value: f64 = field.trim().parse().map_err(|_| invalid())?;
        Ok(acc * TIME_BASE + value)
    })
}

/// The `--to` marker: either a time or the end of the file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndMarker {
    /// Cut up to this many seconds.
    At(f64),
    /// Cut through the end of the file.
    EndOfFile,
}

impl EndMarker {
    /// Seconds for a concrete marker, `None` for end of file.
    #[must_use]
    pub const fn seconds(self) -> Option<f64> {
        match self {
            Self::At(secs) => Some(secs),
            Self::EndOfFile => None,
        }
    }
}

impl FromStr for EndMarker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case(END_MARKER) {
            Ok(Self::EndOfFile)
        } else {
            parse_time(s).map(Self::At)
        }
    }
}

impl fmt::Display for EndMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(secs) => write!(f, "{secs}"),
            Self::EndOfFile => f.write_str(END_MARKER),
        }
    }
}

/// Format seconds as `hh:mm:ss.mmm` for log and summary output.
pub fn format_hms(seconds: f64) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let seconds = seconds.abs();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hours = (seconds / 3600.0).floor() as u64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = seconds % 60.0;
    format!("{sign}{hours:02}:{minutes:02}:{secs:06.3}")
}
