//! Output directory preparation

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{BuildError, BuildResult};

/// Remove `out_dir` with everything in it, then recreate it empty.
///
/// A missing directory is not an error. Intermediate path segments are
/// created as needed.
pub fn prepare_output(out_dir: &Path) -> BuildResult<()> {
    let prepare_err = |source| BuildError::PrepareOutput {
        path: out_dir.to_path_buf(),
        source,
    };

    match fs::remove_dir_all(out_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(prepare_err(e)),
    }

    fs::create_dir_all(out_dir).map_err(prepare_err)
}
