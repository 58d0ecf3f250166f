//! CLI argument definitions.

use crate::config::{CutMode, OutputMode};
use crate::utils::timecode::EndMarker;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::validators::{parse_end_marker, parse_time_value};

/// Remove a time range from a video file using ffmpeg.
///
/// `--from` and `--to` mark the segment to remove: with only `--from` the
/// rest of the file is dropped, with only `--to` everything before it is
/// dropped. The result is written next to the input as `<name>.new.mp4`.
#[derive(Debug, Parser)]
#[command(name = "vidcut")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the input video file.
    pub input: Option<PathBuf>,

    /// Options for the cut.
    #[command(flatten)]
    pub cut: CutArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for cutting a file.
#[derive(Debug, Args)]
pub struct CutArgs {
    /// Start time of the segment to remove (format: hh:mm:ss, mm:ss or ss).
    #[arg(long = "from", value_name = "TIME", value_parser = parse_time_value, allow_negative_numbers = true)]
    pub from: Option<f64>,

    /// End time of the segment to remove (format: hh:mm:ss, mm:ss, ss or END).
    #[arg(long = "to", value_name = "TIME|END", value_parser = parse_end_marker, allow_negative_numbers = true)]
    pub to: Option<EndMarker>,

    /// Cutting mechanism: re-encode through a filter graph, or stream copy.
    #[arg(short, long, value_enum, env = "VIDCUT_MODE")]
    pub mode: Option<CutMode>,

    /// ffmpeg executable to invoke.
    #[arg(long, value_name = "PATH", env = "VIDCUT_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Video codec for filter mode (overrides config).
    #[arg(long, value_name = "CODEC")]
    pub video_codec: Option<String>,

    /// Audio codec for filter mode (overrides config).
    #[arg(long, value_name = "CODEC")]
    pub audio_codec: Option<String>,

    /// Print the ffmpeg commands without running them.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Result output: human-readable text or a JSON envelope.
    #[arg(long, value_enum, default_value = "human")]
    pub output_mode: OutputMode,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
