//! Filter-graph mode: one re-encoding pass with `trim` + `concat`.

use std::path::Path;

use crate::config::EncodeConfig;
use crate::constants::filter::{AUDIO_PTS_RESET, OUT_AUDIO, OUT_VIDEO, VIDEO_PTS_RESET};

use super::plan::Span;
use super::runner::Invocation;

/// `start=S[:end=E]` arguments for `trim`/`atrim`.
fn trim_bounds(span: &Span) -> String {
    match span.end {
        Some(end) => format!("start={}:end={end}", span.start),
        None => format!("start={}", span.start),
    }
}

/// Build the `-filter_complex` expression keeping `kept` in order.
///
/// Each span is trimmed from stream 0's video and audio with timestamps
/// reset, then all pairs are joined by a single `concat`.
///
/// ```
/// use vidcut::cutter::{CutPlan, build_filter_graph};
///
/// let plan = CutPlan::new(Some(2.0), Some(5.0)).unwrap();
/// assert_eq!(
///     build_filter_graph(&plan.kept),
///     "[0:v]trim=start=0:end=2,setpts=PTS-STARTPTS[v0];\
///      [0:a]atrim=start=0:end=2,asetpts=PTS-STARTPTS[a0];\
///      [0:v]trim=start=5,setpts=PTS-STARTPTS[v1];\
///      [0:a]atrim=start=5,asetpts=PTS-STARTPTS[a1];\
///      [v0][a0][v1][a1]concat=n=2:v=1:a=1[outv][outa]"
/// );
/// ```
#[must_use]
pub fn build_filter_graph(kept: &[Span]) -> String {
    let mut graph = String::new();
    let mut concat_inputs = String::new();

    for (i, span) in kept.iter().enumerate() {
        let bounds = trim_bounds(span);
        graph.push_str(&format!("[0:v]trim={bounds},{VIDEO_PTS_RESET}[v{i}];"));
        graph.push_str(&format!("[0:a]atrim={bounds},{AUDIO_PTS_RESET}[a{i}];"));
        concat_inputs.push_str(&format!("[v{i}][a{i}]"));
    }

    graph.push_str(&format!(
        "{concat_inputs}concat=n={}:v=1:a=1[{OUT_VIDEO}][{OUT_AUDIO}]",
        kept.len()
    ));
    graph
}

/// The single re-encoding invocation for filter mode.
#[must_use]
pub fn filter_invocation(
    ffmpeg: &Path,
    input: &Path,
    output: &Path,
    kept: &[Span],
    encode: &EncodeConfig,
) -> Invocation {
    Invocation::new(ffmpeg)
        .args(["-y", "-i"])
        .arg(input)
        .arg("-filter_complex")
        .arg(build_filter_graph(kept))
        .args(["-map", &format!("[{OUT_VIDEO}]")])
        .args(["-map", &format!("[{OUT_AUDIO}]")])
        .args(["-c:v", &encode.video_codec])
        .args(["-c:a", &encode.audio_codec])
        .arg(output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cutter::plan::CutPlan;

    #[test]
    fn test_graph_keep_head() {
        let plan = CutPlan::new(Some(30.0), None).unwrap();
        assert_eq!(
            build_filter_graph(&plan.kept),
            "[0:v]trim=start=0:end=30,setpts=PTS-STARTPTS[v0];\
             [0:a]atrim=start=0:end=30,asetpts=PTS-STARTPTS[a0];\
             [v0][a0]concat=n=1:v=1:a=1[outv][outa]"
        );
    }

    #[test]
    fn test_graph_keep_tail() {
        let plan = CutPlan::new(None, Some(1.5)).unwrap();
        assert_eq!(
            build_filter_graph(&plan.kept),
            "[0:v]trim=start=1.5,setpts=PTS-STARTPTS[v0];\
             [0:a]atrim=start=1.5,asetpts=PTS-STARTPTS[a0];\
             [v0][a0]concat=n=1:v=1:a=1[outv][outa]"
        );
    }

    #[test]
    fn test_graph_keep_head_and_tail_in_order() {
        let plan = CutPlan::new(Some(2.0), Some(5.0)).unwrap();
        let graph = build_filter_graph(&plan.kept);

        let head = graph.find("trim=start=0:end=2,").unwrap();
        let tail = graph.find("trim=start=5,").unwrap();
        assert!(head < tail);
        assert!(graph.ends_with("[v0][a0][v1][a1]concat=n=2:v=1:a=1[outv][outa]"));
    }

    #[test]
    fn test_filter_invocation_layout() {
        let plan = CutPlan::new(Some(2.0), Some(5.0)).unwrap();
        let inv = filter_invocation(
            Path::new("ffmpeg"),
            Path::new("clip.mp4"),
            Path::new("clip.new.mp4"),
            &plan.kept,
            &EncodeConfig::default(),
        );
        let args = inv.args_lossy();

        assert_eq!(inv.program_name(), "ffmpeg");
        assert_eq!(&args[..3], ["-y", "-i", "clip.mp4"]);
        assert_eq!(args[3], "-filter_complex");
        assert_eq!(
            &args[5..],
            [
                "-map",
                "[outv]",
                "-map",
                "[outa]",
                "-c:v",
                "libx264",
                "-c:a",
                "aac",
                "clip.new.mp4"
            ]
        );
    }

    #[test]
    fn test_filter_invocation_uses_configured_codecs() {
        let plan = CutPlan::new(Some(2.0), None).unwrap();
        let encode = EncodeConfig {
            video_codec: "libx265".to_string(),
            audio_codec: "libopus".to_string(),
        };
        let inv = filter_invocation(
            Path::new("/opt/ffmpeg/bin/ffmpeg"),
            Path::new("a.mkv"),
            Path::new("a.new.mp4"),
            &plan.kept,
            &encode,
        );
        let line = inv.to_string();
        assert!(line.starts_with("/opt/ffmpeg/bin/ffmpeg -y"));
        assert!(line.contains("-c:v libx265 -c:a libopus"));
    }
}
