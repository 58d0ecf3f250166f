//! Segment planning.
//!
//! Turns the optional `--from`/`--to` markers into the ordered list of
//! spans to keep. The markers always describe the window to remove.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// A retained time range. `end == None` runs to the end of the file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span {
    /// Start in seconds.
    pub start: f64,
    /// End in seconds, or `None` for end of file.
    pub end: Option<f64>,
}

impl Span {
    /// Length in seconds, if the span is bounded.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.end.map(|end| end - self.start)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{}, {})", self.start, end),
            None => write!(f, "[{}, EOF)", self.start),
        }
    }
}

/// Which part of the file survives the cut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum CutPolicy {
    /// Remove `[until, EOF)`.
    KeepHead {
        /// Cut point in seconds.
        until: f64,
    },
    /// Remove `[0, from)`.
    KeepTail {
        /// Cut point in seconds.
        from: f64,
    },
    /// Remove `[head_end, tail_start)`.
    KeepHeadAndTail {
        /// End of the retained head in seconds.
        head_end: f64,
        /// Start of the retained tail in seconds.
        tail_start: f64,
    },
}

impl CutPolicy {
    /// The removed range.
    #[must_use]
    pub const fn removed(&self) -> Span {
        match *self {
            Self::KeepHead { until } => Span {
                start: until,
                end: None,
            },
            Self::KeepTail { from } => Span {
                start: 0.0,
                end: Some(from),
            },
            Self::KeepHeadAndTail {
                head_end,
                tail_start,
            } => Span {
                start: head_end,
                end: Some(tail_start),
            },
        }
    }

    /// The retained ranges in playback order.
    #[must_use]
    pub fn kept(&self) -> Vec<Span> {
        match *self {
            Self::KeepHead { until } => vec![Span {
                start: 0.0,
                end: Some(until),
            }],
            Self::KeepTail { from } => vec![Span {
                start: from,
                end: None,
            }],
            Self::KeepHeadAndTail {
                head_end,
                tail_start,
            } => vec![
                Span {
                    start: 0.0,
                    end: Some(head_end),
                },
                Span {
                    start: tail_start,
                    end: None,
                },
            ],
        }
    }
}

/// A planned cut: the policy plus the spans it keeps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutPlan {
    /// Selected policy.
    #[serde(flatten)]
    pub policy: CutPolicy,
    /// Removed range.
    pub removed: Span,
    /// Retained spans in playback order.
    pub kept: Vec<Span>,
}

impl CutPlan {
    /// Plan a cut from the removal window markers.
    ///
    /// `end` must already have the end-of-file marker mapped to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCutBounds`] if neither marker is set and
    /// [`Error::InvalidTimeRange`] if both are set and `end <= start`.
    pub fn new(start: Option<f64>, end: Option<f64>) -> Result<Self> {
        let policy = match (start, end) {
            (None, None) => return Err(Error::MissingCutBounds),
            (Some(start), None) => CutPolicy::KeepHead { until: start },
            (None, Some(end)) => CutPolicy::KeepTail { from: end },
            (Some(start), Some(end)) => {
                if end.partial_cmp(&start) != Some(Ordering::Greater) {
                    return Err(Error::InvalidTimeRange { start, end });
                }
                CutPolicy::KeepHeadAndTail {
                    head_end: start,
                    tail_start: end,
                }
            }
        };

        Ok(Self {
            policy,
            removed: policy.removed(),
            kept: policy.kept(),
        })
    }
}
