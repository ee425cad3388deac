//! Recording bundler for tests

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{BuildError, BuildResult};

use super::{Bundler, ServeInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BundlerCall {
    Build,
    Watch,
    Serve(PathBuf),
    Dispose,
}

/// Records calls in a shared log; clones observe the same log.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeBundler {
    calls: Arc<Mutex<Vec<BundlerCall>>>,
    build_error: Option<String>,
    watch_error: Option<String>,
    /// Written into the out dir on a successful build, like a real bundle
    artifact: Option<PathBuf>,
}

impl FakeBundler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_build(mut self, message: &str) -> Self {
        self.build_error = Some(message.to_string());
        self
    }

    pub(crate) fn failing_watch(mut self, message: &str) -> Self {
        self.watch_error = Some(message.to_string());
        self
    }

    pub(crate) fn writing_artifact(mut self, path: PathBuf) -> Self {
        self.artifact = Some(path);
        self
    }

    pub(crate) fn calls(&self) -> Vec<BundlerCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: BundlerCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Bundler for FakeBundler {
    fn build(&mut self) -> BuildResult<()> {
        self.record(BundlerCall::Build);
        if let Some(message) = &self.build_error {
            return Err(BuildError::Bundle {
                message: message.clone(),
            });
        }
        if let Some(artifact) = &self.artifact {
            std::fs::write(artifact, "console.log(1);\n")?;
        }
        Ok(())
    }

    fn watch(&mut self) -> BuildResult<()> {
        self.record(BundlerCall::Watch);
        match &self.watch_error {
            Some(message) => Err(BuildError::Bundle {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn serve(&mut self, dir: &Path) -> BuildResult<ServeInfo> {
        self.record(BundlerCall::Serve(dir.to_path_buf()));
        Ok(ServeInfo {
            hosts: vec!["127.0.0.1".to_string()],
            port: 8000,
        })
    }

    fn dispose(&mut self) {
        self.record(BundlerCall::Dispose);
    }
}
