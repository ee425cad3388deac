//! Error types for sitepack
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sitepack operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Main error type for build operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// A configured source root does not exist
    #[error("source root not found: {path}")]
    SourceRootNotFound { path: PathBuf },

    /// A directory under a source root could not be listed
    #[error("cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A static file could not be copied into the output tree
    #[error("cannot copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be cleared or recreated
    #[error("cannot prepare output directory {path}: {source}")]
    PrepareOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bundler reported a failed build
    #[error("bundling failed: {message}")]
    Bundle { message: String },

    /// The bundler executable could not be started
    #[error("cannot run bundler '{program}': {source}")]
    BundlerUnavailable {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bundle session operation was called in the wrong state
    #[error("cannot {operation} while bundle session is {state}")]
    InvalidSessionState {
        operation: &'static str,
        state: &'static str,
    },

    /// Serving was requested before live rebuilding was running
    #[error("serve requires an active watch; call start_watch first")]
    ServeBeforeWatch,

    /// The dev server could not be started
    #[error("dev server failed: {message}")]
    Serve { message: String },

    /// The filesystem watcher could not be set up
    #[error("file watcher error: {message}")]
    Watch { message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<notify::Error> for BuildError {
    fn from(err: notify::Error) -> Self {
        BuildError::Watch {
            message: err.to_string(),
        }
    }
}
