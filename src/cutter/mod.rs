//! Segment removal.
//!
//! Plans the spans to keep around a removal window and turns them into
//! ffmpeg invocations, either one filter-graph re-encode or a set of
//! stream-copy extractions joined by the concat demuxer.

pub mod command;
mod copy;
mod filter;
mod paths;
mod plan;
mod runner;

pub use copy::{CopyJob, concat_invocation, extract_invocation, manifest_contents};
pub use filter::{build_filter_graph, filter_invocation};
pub use paths::output_path_for;
pub use plan::{CutPlan, CutPolicy, Span};
pub use runner::{DryRunner, Invocation, SystemRunner, ToolRunner};
