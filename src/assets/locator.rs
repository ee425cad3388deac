//! Static file discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, BuildResult};

use super::pattern::StaticFilePattern;

/// Find every file under `root` whose name matches `pattern`.
///
/// Walks the tree with an explicit stack, descending into subdirectories to
/// any depth. Returned paths are `root`-joined and sorted. Directories are
/// never returned, even when their name matches. Symlinked directories are
/// not followed.
pub fn locate(root: &Path, pattern: &StaticFilePattern) -> BuildResult<Vec<PathBuf>> {
    walk(root, pattern, None)
}

/// Like [`locate`], but never descends into `excluded`.
///
/// Used to keep an output tree that lives inside a source root out of the
/// scan. The comparison is on canonical paths, so `site/dist` and
/// `./site/dist/` name the same directory.
pub fn locate_excluding(
    root: &Path,
    pattern: &StaticFilePattern,
    excluded: &Path,
) -> BuildResult<Vec<PathBuf>> {
    // Not created yet, so nothing under the root can be it
    match excluded.canonicalize() {
        Ok(canonical) => walk(root, pattern, Some(&canonical)),
        Err(_) => walk(root, pattern, None),
    }
}

fn walk(
    root: &Path,
    pattern: &StaticFilePattern,
    excluded: Option<&Path>,
) -> BuildResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(BuildError::SourceRootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let read_err = |source| BuildError::ReadDir {
            path: dir.clone(),
            source,
        };
        let entries = fs::read_dir(&dir).map_err(read_err)?;

        for entry in entries {
            let entry = entry.map_err(read_err)?;
            let file_type = entry.file_type().map_err(read_err)?;
            let path = entry.path();

            if file_type.is_dir() {
                if !is_excluded(&path, excluded) {
                    pending.push(path);
                }
            } else if file_type.is_symlink() {
                // Linked files are copied; linked directories are skipped
                if path.is_file() && pattern.matches_path(&path) {
                    found.push(path);
                }
            } else if pattern.matches_path(&path) {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

fn is_excluded(dir: &Path, excluded: Option<&Path>) -> bool {
    let Some(excluded) = excluded else {
        return false;
    };
    dir.canonicalize().is_ok_and(|c| c == excluded)
}
