//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.tool.ffmpeg.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "tool.ffmpeg must not be empty".to_string(),
        });
    }

    for (key, value) in [
        ("encode.video_codec", &config.encode.video_codec),
        ("encode.audio_codec", &config.encode.audio_codec),
    ] {
        if value.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: format!("{key} must not be empty"),
            });
        }
        if value.chars().any(char::is_whitespace) {
            return Err(Error::ConfigValidation {
                message: format!("{key} must be a single codec name, got '{value}'"),
            });
        }
    }

    Ok(())
}
