//! Cut command execution.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::Error;
use crate::cli::CutArgs;
use crate::config::{Config, CutMode, EncodeConfig, OutputMode};
use crate::output::{CutPayload, ResultType, emit_json_result};
use crate::utils::timecode::{EndMarker, format_hms};

use super::copy::CopyJob;
use super::filter::filter_invocation;
use super::paths::output_path_for;
use super::plan::CutPlan;
use super::runner::{DryRunner, Invocation, SystemRunner, ToolRunner};

/// Fully resolved settings for one cut.
#[derive(Debug, Clone)]
pub struct CutOptions {
    /// Start of the removal window in seconds.
    pub start: Option<f64>,
    /// End of the removal window.
    pub end: Option<EndMarker>,
    /// Mechanism.
    pub mode: CutMode,
    /// ffmpeg executable.
    pub ffmpeg: PathBuf,
    /// Codec pair for filter mode.
    pub encode: EncodeConfig,
    /// Print invocations without running them.
    pub dry_run: bool,
}

impl CutOptions {
    /// Merge command-line arguments over the loaded configuration.
    ///
    /// Flags and their environment variables win over config values.
    #[must_use]
    pub fn resolve(args: &CutArgs, config: &Config) -> Self {
        Self {
            start: args.from,
            end: args.to,
            mode: args.mode.unwrap_or(config.defaults.mode),
            ffmpeg: args
                .ffmpeg
                .clone()
                .unwrap_or_else(|| config.tool.ffmpeg.clone()),
            encode: EncodeConfig {
                video_codec: args
                    .video_codec
                    .clone()
                    .unwrap_or_else(|| config.encode.video_codec.clone()),
                audio_codec: args
                    .audio_codec
                    .clone()
                    .unwrap_or_else(|| config.encode.audio_codec.clone()),
            },
            dry_run: args.dry_run,
        }
    }
}

/// What a cut did.
#[derive(Debug, Clone)]
pub struct CutOutcome {
    /// Planned spans.
    pub plan: CutPlan,
    /// Output file.
    pub output: PathBuf,
    /// Invocations in execution order.
    pub invocations: Vec<Invocation>,
}

/// Execute the cut command.
///
/// # Errors
///
/// Returns a usage error for missing or inverted markers, and a runtime
/// error if the input is missing or the external tool fails.
pub fn execute(input: &Path, options: &CutOptions, output_mode: OutputMode) -> Result<(), Error> {
    let echo = !output_mode.is_structured();
    let mut runner: Box<dyn ToolRunner> = if options.dry_run {
        Box::new(DryRunner::new(echo))
    } else {
        Box::new(SystemRunner::new(echo))
    };

    let outcome = execute_with(input, options, runner.as_mut())?;

    if output_mode.is_structured() {
        let payload = CutPayload {
            result_type: ResultType::Cut,
            input: input.to_path_buf(),
            output: outcome.output,
            mode: options.mode.to_string(),
            dry_run: options.dry_run,
            plan: outcome.plan,
            commands: outcome
                .invocations
                .iter()
                .map(|inv| {
                    std::iter::once(inv.program_name())
                        .chain(inv.args_lossy())
                        .collect()
                })
                .collect(),
        };
        emit_json_result(&payload);
    } else if options.dry_run {
        println!("Output would be written to {}", outcome.output.display());
    } else {
        println!("Output written to {}", outcome.output.display());
    }

    Ok(())
}

/// Plan the cut and drive `runner` through its invocations.
///
/// # Errors
///
/// See [`execute`].
pub fn execute_with(
    input: &Path,
    options: &CutOptions,
    runner: &mut dyn ToolRunner,
) -> Result<CutOutcome, Error> {
    let end = options.end.and_then(EndMarker::seconds);
    let plan = CutPlan::new(options.start, end)?;

    if !input.exists() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let output = output_path_for(input);

    info!(
        "Removing {} from {} ({} mode)",
        describe_removed(&plan),
        input.display(),
        options.mode
    );
    for span in &plan.kept {
        debug!("Keeping {span}");
    }

    let invocations = match options.mode {
        CutMode::Filter => {
            let invocation =
                filter_invocation(&options.ffmpeg, input, &output, &plan.kept, &options.encode);
            runner.run(&invocation)?;
            vec![invocation]
        }
        CutMode::Copy => {
            let job = CopyJob::prepare(&options.ffmpeg, input, &output, &plan.kept)?;
            let invocations = job.invocations().into_iter().cloned().collect();
            job.run(runner)?;
            invocations
        }
    };

    Ok(CutOutcome {
        plan,
        output,
        invocations,
    })
}

fn describe_removed(plan: &CutPlan) -> String {
    let removed = plan.removed;
    match removed.end {
        Some(end) => format!("{} to {}", format_hms(removed.start), format_hms(end)),
        None => format!("{} to end of file", format_hms(removed.start)),
    }
}
