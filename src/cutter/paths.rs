//! Output path derivation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::OUTPUT_SUFFIX;

/// Output path for `input`: its extension replaced by `.new.mp4`, in the
/// same directory.
///
/// `clip.mp4` becomes `clip.new.mp4`; a file without an extension keeps its
/// whole name as the stem.
#[must_use]
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name: OsString = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(OUTPUT_SUFFIX);

    input
        .parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}
