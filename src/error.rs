//! Error types for vidcut.

use std::path::PathBuf;

/// Result type alias for vidcut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for vidcut.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // Usage errors
    /// No input file was given.
    #[error("an input file is required")]
    MissingInput,

    /// A time value could not be parsed.
    #[error("invalid time format: {value}")]
    InvalidTimeFormat {
        /// The rejected input.
        value: String,
    },

    /// Neither `--from` nor a usable `--to` was given.
    #[error("You must specify at least --from or --to.")]
    MissingCutBounds,

    /// `--to` is not after `--from`.
    #[error("`--to` time must be greater than `--from` time (got {start} and {end})")]
    InvalidTimeRange {
        /// Start of the removal window in seconds.
        start: f64,
        /// End of the removal window in seconds.
        end: f64,
    },

    // Runtime errors
    /// Input file does not exist.
    #[error("input file does not exist: {path}")]
    InputNotFound {
        /// Path to the missing input.
        path: PathBuf,
    },

    /// External tool could not be started.
    #[error("failed to run '{program}'")]
    ToolSpawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// External tool exited unsuccessfully.
    #[error("'{program}' failed with exit code {}", exit_code_label(.code))]
    ToolFailed {
        /// Program that failed.
        program: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
    },

    /// Temporary working directory could not be created.
    #[error("failed to create temporary directory")]
    TempDir {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the concat manifest.
    #[error("failed to write concat manifest '{path}'")]
    ManifestWrite {
        /// Path to the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn exit_code_label(code: &Option<i32>) -> String {
    code.map_or_else(
        || "unknown (terminated by signal)".to_string(),
        |c| c.to_string(),
    )
}

impl Error {
    /// Whether this error stems from invalid command-line usage.
    ///
    /// Usage errors are reported through clap's error path so they share
    /// formatting and exit code with argument parsing failures.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingInput
                | Self::InvalidTimeFormat { .. }
                | Self::MissingCutBounds
                | Self::InvalidTimeRange { .. }
        )
    }

    /// Stable `snake_case` identifier for structured output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::ConfigDirNotFound => "config_dir_not_found",
            Self::ConfigRead { .. } => "config_read",
            Self::ConfigParse { .. } => "config_parse",
            Self::ConfigWrite { .. } => "config_write",
            Self::ConfigSerialize { .. } => "config_serialize",
            Self::ConfigValidation { .. } => "config_validation",
            Self::MissingInput => "missing_input",
            Self::InvalidTimeFormat { .. } => "invalid_time_format",
            Self::MissingCutBounds => "missing_cut_bounds",
            Self::InvalidTimeRange { .. } => "invalid_time_range",
            Self::InputNotFound { .. } => "input_not_found",
            Self::ToolSpawn { .. } => "tool_spawn",
            Self::ToolFailed { .. } => "tool_failed",
            Self::TempDir { .. } => "temp_dir",
            Self::ManifestWrite { .. } => "manifest_write",
        }
    }
}
