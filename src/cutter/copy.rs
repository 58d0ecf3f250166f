//! Stream-copy mode: lossless extraction of each kept span, then concat.
//!
//! Parts are written to a scoped temporary directory which is removed when
//! the job is dropped, whether or not the tool invocations succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::constants::copy::{FALLBACK_EXTENSION, MANIFEST_NAME, PART_STEM, TEMP_DIR_PREFIX};
use crate::error::{Error, Result};

use super::plan::Span;
use super::runner::{Invocation, ToolRunner};

/// Stream-copy one span of `input` into `output`.
#[must_use]
pub fn extract_invocation(ffmpeg: &Path, input: &Path, span: &Span, output: &Path) -> Invocation {
    let mut inv = Invocation::new(ffmpeg)
        .args(["-y", "-ss", &span.start.to_string(), "-i"])
        .arg(input);
    if let Some(duration) = span.duration() {
        inv = inv.args(["-t", &duration.to_string()]);
    }
    inv.args(["-c", "copy", "-avoid_negative_ts", "make_zero"])
        .arg(output)
}

/// Join the manifest's parts into `output` without re-encoding.
#[must_use]
pub fn concat_invocation(ffmpeg: &Path, manifest: &Path, output: &Path) -> Invocation {
    Invocation::new(ffmpeg)
        .args(["-y", "-f", "concat", "-safe", "0", "-i"])
        .arg(manifest)
        .args(["-c", "copy"])
        .arg(output)
}

/// Concat-demuxer manifest listing `parts` in order.
///
/// Paths are single-quoted; embedded quotes are written as `'\''`.
#[must_use]
pub fn manifest_contents(parts: &[PathBuf]) -> String {
    parts
        .iter()
        .map(|p| {
            let path = p.to_string_lossy().replace('\\', "/").replace('\'', r"'\''");
            format!("file '{path}'\n")
        })
        .collect()
}

/// A prepared stream-copy job.
///
/// Holds the temporary directory for intermediate parts; it is deleted
/// when the job is dropped.
#[derive(Debug)]
pub struct CopyJob {
    workdir: Option<TempDir>,
    extractions: Vec<Invocation>,
    manifest: Option<(PathBuf, String)>,
    concat: Option<Invocation>,
}

impl CopyJob {
    /// Lay out the invocations for keeping `kept` from `input`.
    ///
    /// A single kept span is extracted straight to `output`. Several spans
    /// are extracted into a temporary directory and joined by a concat pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn prepare(ffmpeg: &Path, input: &Path, output: &Path, kept: &[Span]) -> Result<Self> {
        if let [span] = kept {
            return Ok(Self {
                workdir: None,
                extractions: vec![extract_invocation(ffmpeg, input, span, output)],
                manifest: None,
                concat: None,
            });
        }

        let workdir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()
            .map_err(|e| Error::TempDir { source: e })?;
        debug!("Using work directory {}", workdir.path().display());

        let extension = input
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or(FALLBACK_EXTENSION);

        let parts: Vec<PathBuf> = (0..kept.len())
            .map(|i| workdir.path().join(format!("{PART_STEM}_{i}.{extension}")))
            .collect();

        let extractions = kept
            .iter()
            .zip(&parts)
            .map(|(span, part)| extract_invocation(ffmpeg, input, span, part))
            .collect();

        let manifest_path = workdir.path().join(MANIFEST_NAME);
        let concat = concat_invocation(ffmpeg, &manifest_path, output);

        Ok(Self {
            manifest: Some((manifest_path, manifest_contents(&parts))),
            workdir: Some(workdir),
            extractions,
            concat: Some(concat),
        })
    }

    /// All invocations in execution order.
    #[must_use]
    pub fn invocations(&self) -> Vec<&Invocation> {
        self.extractions.iter().chain(self.concat.as_ref()).collect()
    }

    /// Temporary directory, if the job needs one.
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_ref().map(TempDir::path)
    }

    /// Run every extraction, write the manifest and run the concat pass.
    ///
    /// The temporary directory is removed when this returns.
    ///
    /// # Errors
    ///
    /// Returns the first tool failure, or a manifest write error.
    pub fn run(self, runner: &mut dyn ToolRunner) -> Result<()> {
        for extraction in &self.extractions {
            runner.run(extraction)?;
        }

        if let Some((path, contents)) = &self.manifest {
            fs::write(path, contents).map_err(|e| Error::ManifestWrite {
                path: path.clone(),
                source: e,
            })?;
        }

        if let Some(concat) = &self.concat {
            runner.run(concat)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cutter::plan::CutPlan;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<Invocation>,
        manifest: Option<String>,
        fail_at: Option<usize>,
    }

    impl ToolRunner for Recorder {
        fn run(&mut self, invocation: &Invocation) -> Result<()> {
            // capture the manifest while the work directory still exists
            if let Some(pos) = invocation.args.iter().position(|a| a == "concat") {
                let manifest = &invocation.args[pos + 4];
                self.manifest = Some(fs::read_to_string(manifest).unwrap());
            }
            self.seen.push(invocation.clone());
            if self.fail_at == Some(self.seen.len() - 1) {
                return Err(Error::ToolFailed {
                    program: invocation.program_name(),
                    code: Some(1),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_extract_bounded_span_sets_duration() {
        let span = Span {
            start: 0.0,
            end: Some(2.5),
        };
        let inv = extract_invocation(
            Path::new("ffmpeg"),
            Path::new("in.mp4"),
            &span,
            Path::new("part_0.mp4"),
        );
        assert_eq!(
            inv.to_string(),
            "ffmpeg -y -ss 0 -i in.mp4 -t 2.5 -c copy -avoid_negative_ts make_zero part_0.mp4"
        );
    }

    #[test]
    fn test_extract_open_span_runs_to_end() {
        let span = Span {
            start: 5.0,
            end: None,
        };
        let inv = extract_invocation(
            Path::new("ffmpeg"),
            Path::new("in.mp4"),
            &span,
            Path::new("part_1.mp4"),
        );
        assert!(!inv.args_lossy().contains(&"-t".to_string()));
        assert!(inv.to_string().contains("-ss 5 -i in.mp4 -c copy"));
    }

    #[test]
    fn test_manifest_quotes_paths() {
        let parts = vec![PathBuf::from("/tmp/a/part_0.mp4"), PathBuf::from("/tmp/it's/part_1.mp4")];
        assert_eq!(
            manifest_contents(&parts),
            "file '/tmp/a/part_0.mp4'\nfile '/tmp/it'\\''s/part_1.mp4'\n"
        );
    }

    #[test]
    fn test_single_span_writes_output_directly() {
        let plan = CutPlan::new(Some(10.0), None).unwrap();
        let job = CopyJob::prepare(
            Path::new("ffmpeg"),
            Path::new("clip.mp4"),
            Path::new("clip.new.mp4"),
            &plan.kept,
        )
        .unwrap();

        assert!(job.workdir().is_none());
        let invocations = job.invocations();
        assert_eq!(invocations.len(), 1);
        assert!(invocations[0].to_string().ends_with("clip.new.mp4"));
    }

    #[test]
    fn test_two_spans_extract_then_concat() {
        let plan = CutPlan::new(Some(2.0), Some(5.0)).unwrap();
        let job = CopyJob::prepare(
            Path::new("ffmpeg"),
            Path::new("clip.mkv"),
            Path::new("clip.new.mp4"),
            &plan.kept,
        )
        .unwrap();
        let workdir = job.workdir().unwrap().to_path_buf();
        assert!(workdir.exists());

        let mut recorder = Recorder::default();
        job.run(&mut recorder).unwrap();

        assert_eq!(recorder.seen.len(), 3);
        assert!(recorder.seen[0].to_string().contains("-ss 0 -i clip.mkv -t 2 "));
        assert!(recorder.seen[1].to_string().contains("-ss 5 -i clip.mkv -c copy"));
        assert!(recorder.seen[2].to_string().contains("-f concat -safe 0"));
        assert!(recorder.seen[2].to_string().ends_with("clip.new.mp4"));

        let manifest = recorder.manifest.unwrap();
        let lines: Vec<&str> = manifest.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("part_0.mkv'"));
        assert!(lines[1].ends_with("part_1.mkv'"));

        assert!(!workdir.exists());
    }

    #[test]
    fn test_failure_stops_and_cleans_up() {
        let plan = CutPlan::new(Some(2.0), Some(5.0)).unwrap();
        let job = CopyJob::prepare(
            Path::new("ffmpeg"),
            Path::new("clip.mp4"),
            Path::new("clip.new.mp4"),
            &plan.kept,
        )
        .unwrap();
        let workdir = job.workdir().unwrap().to_path_buf();

        let mut recorder = Recorder {
            fail_at: Some(0),
            ..Recorder::default()
        };
        let err = job.run(&mut recorder).unwrap_err();

        assert!(matches!(err, Error::ToolFailed { .. }));
        assert_eq!(recorder.seen.len(), 1);
        assert!(!workdir.exists());
    }
}
