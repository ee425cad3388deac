//! Static file name predicate

use std::ffi::OsStr;
use std::path::Path;

/// Matches file names by their final extension.
///
/// A name matches when the text after its last `.` equals one of the
/// configured extensions. Comparison is case-sensitive, so `INDEX.HTML` does
/// not match `html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFilePattern {
    extensions: Vec<String>,
}

impl Default for StaticFilePattern {
    fn default() -> Self {
        Self::new(["html", "css", "json"])
    }
}

impl StaticFilePattern {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extensions = extensions
            .into_iter()
            .map(Into::into)
            .map(|ext: String| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Check a bare file name
    pub fn matches_name(&self, name: &str) -> bool {
        match name.rsplit_once('.') {
            Some((_, ext)) => self.extensions.iter().any(|e| e == ext),
            None => false,
        }
    }

    /// Check the file name component of a path
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(OsStr::to_str)
            .map(|name| self.matches_name(name))
            .unwrap_or(false)
    }
}
