//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "vidcut";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Suffix replacing the input extension to form the output path.
pub const OUTPUT_SUFFIX: &str = ".new.mp4";

/// `--to` value meaning "through end of file" (matched case-insensitively).
pub const END_MARKER: &str = "END";

/// Maximum number of colon-separated fields in a time value (`hh:mm:ss`).
pub const MAX_TIME_FIELDS: usize = 3;

/// Seconds per minute / minutes per hour used for base-60 accumulation.
pub const TIME_BASE: f64 = 60.0;

/// External tool defaults.
pub mod tool {
    /// Default ffmpeg executable, resolved through `PATH`.
    pub const DEFAULT_FFMPEG: &str = "ffmpeg";
}

/// Re-encode defaults for filter mode.
pub mod encode {
    /// Default video codec.
    pub const DEFAULT_VIDEO_CODEC: &str = "libx264";
    /// Default audio codec.
    pub const DEFAULT_AUDIO_CODEC: &str = "aac";
}

/// Filter graph labels.
pub mod filter {
    /// Final video output label.
    pub const OUT_VIDEO: &str = "outv";
    /// Final audio output label.
    pub const OUT_AUDIO: &str = "outa";
    /// Timestamp reset applied to every trimmed video span.
    pub const VIDEO_PTS_RESET: &str = "setpts=PTS-STARTPTS";
    /// Timestamp reset applied to every trimmed audio span.
    pub const AUDIO_PTS_RESET: &str = "asetpts=PTS-STARTPTS";
}

/// Stream-copy mode constants.
pub mod copy {
    /// Prefix of the temporary working directory.
    pub const TEMP_DIR_PREFIX: &str = "vidcut-";
    /// File stem of each extracted part (`part_0`, `part_1`, ...).
    pub const PART_STEM: &str = "part";
    /// Concat-demuxer manifest file name.
    pub const MANIFEST_NAME: &str = "concat.txt";
    /// Extension used for parts when the input has none.
    pub const FALLBACK_EXTENSION: &str = "mp4";
}
