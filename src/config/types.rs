//! Configuration type definitions.

use crate::constants::encode::{DEFAULT_AUDIO_CODEC, DEFAULT_VIDEO_CODEC};
use crate::constants::tool::DEFAULT_FFMPEG;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool settings.
    #[serde(default)]
    pub tool: ToolConfig,

    /// Default cut settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Re-encode settings for filter mode.
    #[serde(default)]
    pub encode: EncodeConfig,
}

/// External tool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// ffmpeg executable (name resolved through `PATH`, or a full path).
    pub ffmpeg: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from(DEFAULT_FFMPEG),
        }
    }
}

/// Default cut settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Cutting mechanism.
    pub mode: CutMode,
}

/// Codec pair used when re-encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// Video codec passed to `-c:v`.
    pub video_codec: String,

    /// Audio codec passed to `-c:a`.
    pub audio_codec: String,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
        }
    }
}

/// How the kept spans are produced.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CutMode {
    /// Decode, trim and re-encode in one filter-graph pass.
    #[default]
    Filter,
    /// Stream-copy each span and concatenate without re-encoding.
    Copy,
}

impl std::fmt::Display for CutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Filter => write!(f, "filter"),
            Self::Copy => write!(f, "copy"),
        }
    }
}

impl std::str::FromStr for CutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filter" | "reencode" => Ok(Self::Filter),
            "copy" | "lossless" => Ok(Self::Copy),
            other => Err(format!("unknown cut mode: {other}")),
        }
    }
}

/// Output mode for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Human-readable lines on stdout.
    #[default]
    Human,
    /// A single JSON result envelope on stdout.
    Json,
}

impl OutputMode {
    /// Whether stdout carries machine-readable output only.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_mode_from_str() {
        assert_eq!("filter".parse::<CutMode>().ok(), Some(CutMode::Filter));
        assert_eq!("COPY".parse::<CutMode>().ok(), Some(CutMode::Copy));
        assert_eq!("lossless".parse::<CutMode>().ok(), Some(CutMode::Copy));
        assert!("unknown".parse::<CutMode>().is_err());
    }

    #[test]
    fn test_cut_mode_display() {
        assert_eq!(CutMode::Filter.to_string(), "filter");
        assert_eq!(CutMode::Copy.to_string(), "copy");
    }

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.tool.ffmpeg, PathBuf::from("ffmpeg"));
        assert_eq!(config.defaults.mode, CutMode::Filter);
        assert_eq!(config.encode.video_codec, "libx264");
        assert_eq!(config.encode.audio_codec, "aac");
    }

    #[test]
    fn test_output_mode_is_structured() {
        assert!(OutputMode::Json.is_structured());
        assert!(!OutputMode::Human.is_structured());
    }
}
