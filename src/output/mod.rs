//! Structured command output.

pub mod json_envelope;

pub use json_envelope::{CutPayload, ErrorPayload, EventType, JsonEnvelope, ResultType};

use crate::error::Error;

/// Emit a JSON result envelope to stdout.
///
/// This is used by command handlers to output structured results when
/// running in JSON output mode.
pub fn emit_json_result<T: serde::Serialize>(payload: &T) {
    emit(EventType::Result, payload);
}

/// Emit a JSON error envelope for `error` to stdout.
pub fn emit_json_error(error: &Error) {
    let suggestion = match error {
        Error::ToolSpawn { .. } => {
            Some("install ffmpeg or point --ffmpeg / VIDCUT_FFMPEG at it".to_string())
        }
        Error::MissingCutBounds => Some("pass --from, --to, or both".to_string()),
        _ => None,
    };
    let payload = ErrorPayload {
        code: error.code().to_string(),
        message: error.to_string(),
        suggestion,
    };
    emit(EventType::Error, &payload);
}

fn emit<T: serde::Serialize>(event: EventType, payload: &T) {
    let envelope = JsonEnvelope::new(event, payload);
    match serde_json::to_string(&envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            // stderr, so the JSON stream on stdout stays clean
            eprintln!("error: failed to serialize JSON result: {e}");
        }
    }
}
