//! JSON envelope types for CLI output.
//!
//! With `--output-mode json`, results and errors are written to stdout as
//! a single envelope so vidcut can be driven from scripts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cutter::CutPlan;

/// Envelope format version.
pub const SPEC_VERSION: &str = "1.0";

/// JSON envelope wrapping all CLI output events.
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<T> {
    /// Envelope format version.
    pub spec_version: String,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event type.
    pub event: EventType,
    /// Event-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope with the current timestamp.
    pub fn new(event: EventType, payload: T) -> Self {
        Self {
            spec_version: SPEC_VERSION.to_string(),
            timestamp: Utc::now(),
            event,
            payload,
        }
    }
}

/// Event types for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Final result.
    Result,
    /// Error occurred.
    Error,
}

/// Result type discriminator for result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Segment removal.
    Cut,
}

/// Error payload for error events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Error code (`snake_case` identifier).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Suggested action to resolve the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Payload for a finished (or dry-run) cut.
#[derive(Debug, Clone, Serialize)]
pub struct CutPayload {
    /// Result discriminator.
    pub result_type: ResultType,
    /// Source file.
    pub input: PathBuf,
    /// Written (or planned) output file.
    pub output: PathBuf,
    /// Mechanism used.
    pub mode: String,
    /// Whether the tool invocations were skipped.
    pub dry_run: bool,
    /// Removed and kept spans.
    pub plan: CutPlan,
    /// Command lines in execution order.
    pub commands: Vec<Vec<String>>,
}
