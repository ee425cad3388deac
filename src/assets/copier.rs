//! Copy static files into the output tree

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, BuildResult};

use super::locator::locate_excluding;
use super::pattern::StaticFilePattern;

/// One file copied during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Path relative to both its source root and the output directory
    pub relative: PathBuf,
}

/// Result of a full copy pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub files: Vec<CopiedFile>,
}

impl CopyReport {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Copies every matching file of every source root into `out_dir`.
///
/// Roots are mapped onto the output root: `www/sub/a.css` lands at
/// `<out_dir>/sub/a.css`. Missing destination directories are created on
/// demand. When two roots share a relative path the later root wins.
#[derive(Debug, Clone)]
pub struct StaticFileCopier {
    roots: Vec<PathBuf>,
    out_dir: PathBuf,
    pattern: StaticFilePattern,
}

impl StaticFileCopier {
    pub fn new(roots: Vec<PathBuf>, out_dir: PathBuf, pattern: StaticFilePattern) -> Self {
        Self {
            roots,
            out_dir,
            pattern,
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn pattern(&self) -> &StaticFilePattern {
        &self.pattern
    }

    /// Run a full pass over all roots.
    ///
    /// The output directory is never scanned, even when it sits inside a root.
    /// The first failure aborts the pass; files copied before it stay in place.
    pub fn copy_all(&self) -> BuildResult<CopyReport> {
        let mut report = CopyReport::default();

        for root in &self.roots {
            for source in locate_excluding(root, &self.pattern, &self.out_dir)? {
                let relative = source
                    .strip_prefix(root)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| PathBuf::from(source.file_name().unwrap_or_default()));
                let destination = self.out_dir.join(&relative);

                copy_file(&source, &destination)?;

                report.files.push(CopiedFile {
                    source,
                    destination,
                    relative,
                });
            }
        }

        Ok(report)
    }
}

fn copy_file(from: &Path, to: &Path) -> BuildResult<()> {
    let copy_err = |source| BuildError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(copy_err)?;
    }
    fs::copy(from, to).map_err(copy_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn copier(roots: &[&Path], out: &Path) -> StaticFileCopier {
        StaticFileCopier::new(
            roots.iter().map(|r| r.to_path_buf()).collect(),
            out.to_path_buf(),
            StaticFilePattern::default(),
        )
    }

    #[test]
    fn copy_preserves_relative_paths() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let out = dir.path().join("dist");
        fs::create_dir_all(a.join("sub")).unwrap();
        fs::create_dir_all(&out).unwrap();
        fs::write(a.join("x.html"), "<p>x</p>").unwrap();
        fs::write(a.join("sub/y.css"), "p{color:red}").unwrap();

        let report = copier(&[&a], &out).copy_all().unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(fs::read(out.join("x.html")).unwrap(), b"<p>x</p>");
        assert_eq!(fs::read(out.join("sub/y.css")).unwrap(), b"p{color:red}");
    }

    #[test]
    fn copy_ignores_non_matching_files() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let out = dir.path().join("dist");
        fs::create_dir_all(&a).unwrap();
        fs::write(a.join("app.ts"), "let x = 1").unwrap();

        let report = copier(&[&a], &out).copy_all().unwrap();

        assert!(report.is_empty());
        assert!(!out.join("app.ts").exists());
    }

    #[test]
    fn copy_merges_roots_later_root_wins() {
        let dir = tempdir().unwrap();
        let www = dir.path().join("www");
        let src = dir.path().join("src");
        let out = dir.path().join("dist");
        fs::create_dir_all(&www).unwrap();
        fs::create_dir_all(&src).unwrap();
        fs::write(www.join("index.html"), "www").unwrap();
        fs::write(www.join("data.json"), "{\"from\":\"www\"}").unwrap();
        fs::write(src.join("data.json"), "{\"from\":\"src\"}").unwrap();

        let report = copier(&[&www, &src], &out).copy_all().unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(
            fs::read_to_string(out.join("data.json")).unwrap(),
            "{\"from\":\"src\"}"
        );
        assert_eq!(fs::read_to_string(out.join("index.html")).unwrap(), "www");
    }

    #[test]
    fn copy_overwrites_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let out = dir.path().join("dist");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&out).unwrap();
        fs::write(a.join("x.html"), "new").unwrap();
        fs::write(out.join("x.html"), "stale content that is longer").unwrap();

        let copier = copier(&[&a], &out);
        let first = copier.copy_all().unwrap();
        let bytes_first = fs::read(out.join("x.html")).unwrap();
        let second = copier.copy_all().unwrap();

        assert_eq!(first, second);
        assert_eq!(bytes_first, b"new");
        assert_eq!(fs::read(out.join("x.html")).unwrap(), bytes_first);
    }

    #[test]
    fn copy_missing_root_aborts_pass() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dist");

        let err = copier(&[&dir.path().join("nope")], &out)
            .copy_all()
            .unwrap_err();

        assert!(matches!(err, BuildError::SourceRootNotFound { .. }));
    }

    #[test]
    fn copy_skips_output_dir_nested_in_root() {
        let dir = tempdir().unwrap();
        let site = dir.path().join("site");
        let out = site.join("dist");
        fs::create_dir_all(site.join("css")).unwrap();
        fs::write(site.join("x.html"), "<p>x</p>").unwrap();
        fs::write(site.join("css/a.css"), "a{}").unwrap();

        let copier = copier(&[&site], &out);
        for _ in 0..3 {
            let report = copier.copy_all().unwrap();
            assert_eq!(report.len(), 2);
        }

        assert!(out.join("x.html").is_file());
        assert!(out.join("css/a.css").is_file());
        assert!(!out.join("dist").exists());
    }

    #[test]
    fn copy_report_records_source_and_destination() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let out = dir.path().join("dist");
        fs::create_dir_all(a.join("nested")).unwrap();
        fs::write(a.join("nested/m.json"), "[]").unwrap();

        let report = copier(&[&a], &out).copy_all().unwrap();

        assert_eq!(
            report.files,
            vec![CopiedFile {
                source: a.join("nested/m.json"),
                destination: out.join("nested/m.json"),
                relative: PathBuf::from("nested/m.json"),
            }]
        );
    }
}
