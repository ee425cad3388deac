//! Bundler integration
//!
//! The bundling engine is an external collaborator. This module keeps it
//! behind the narrow [`Bundler`] trait:
//! - `EsbuildBundler` - drives the `esbuild` executable as child processes
//! - `BundleOrchestrator` - owns the session and enforces its lifecycle
//!
//! Tests swap in a recording fake instead of esbuild.

mod esbuild;
mod orchestrator;
#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::BuildResult;

pub use esbuild::{parse_serve_banner, EsbuildBundler};
pub use orchestrator::{BundleOrchestrator, SessionState};

/// Fixed bundler settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    pub entry_points: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub format: String,
    pub target: Vec<String>,
    pub sourcemap: bool,
    /// Host to bind the dev server to (bundler default when unset)
    pub host: Option<String>,
    /// Port to bind the dev server to (bundler default when unset)
    pub port: Option<u16>,
}

/// Where the dev server is listening
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServeInfo {
    pub hosts: Vec<String>,
    pub port: u16,
}

/// A bundling engine exposing build, watch and serve.
pub trait Bundler {
    /// Run a single full bundle pass and wait for it
    fn build(&mut self) -> BuildResult<()>;

    /// Start continuous rebuilding; returns once the watch is running
    fn watch(&mut self) -> BuildResult<()>;

    /// Serve `dir` over HTTP; returns once the server is bound
    fn serve(&mut self, dir: &Path) -> BuildResult<ServeInfo>;

    /// Release every resource held by the engine
    fn dispose(&mut self);
}
