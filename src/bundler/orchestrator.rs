//! Bundle session lifecycle

use std::path::Path;

use crate::error::{BuildError, BuildResult};

use super::{Bundler, ServeInfo};

/// State of the bundle session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Watching,
    Serving,
    Disposed,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Watching => "watching",
            SessionState::Serving => "serving",
            SessionState::Disposed => "disposed",
        }
    }
}

/// Owns the bundler session for one invocation.
///
/// ```text
/// Idle --build_once--> Disposed
/// Idle --start_watch--> Watching --start_serve--> Serving
/// any  --dispose-->     Disposed
/// ```
///
/// Dropping the orchestrator disposes the session.
pub struct BundleOrchestrator<B: Bundler> {
    bundler: B,
    state: SessionState,
}

impl<B: Bundler> BundleOrchestrator<B> {
    pub fn new(bundler: B) -> Self {
        Self {
            bundler,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Bundle once, then release the session whether or not the build succeeded.
    pub fn build_once(&mut self) -> BuildResult<()> {
        self.expect_state(SessionState::Idle, "build")?;
        let result = self.bundler.build();
        self.dispose();
        result
    }

    /// Start incremental rebuilding driven by the bundler's own file watching.
    pub fn start_watch(&mut self) -> BuildResult<()> {
        self.expect_state(SessionState::Idle, "start watch")?;
        self.bundler.watch()?;
        self.state = SessionState::Watching;
        Ok(())
    }

    /// Serve `dir` once live rebuilding is running.
    pub fn start_serve(&mut self, dir: &Path) -> BuildResult<ServeInfo> {
        match self.state {
            SessionState::Watching => {}
            SessionState::Idle => return Err(BuildError::ServeBeforeWatch),
            other => {
                return Err(BuildError::InvalidSessionState {
                    operation: "start serve",
                    state: other.as_str(),
                })
            }
        }
        let info = self.bundler.serve(dir)?;
        self.state = SessionState::Serving;
        Ok(info)
    }

    /// Release the session. Calling it again is a no-op.
    pub fn dispose(&mut self) {
        if self.state != SessionState::Disposed {
            self.bundler.dispose();
            self.state = SessionState::Disposed;
        }
    }

    fn expect_state(&self, expected: SessionState, operation: &'static str) -> BuildResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(BuildError::InvalidSessionState {
                operation,
                state: self.state.as_str(),
            })
        }
    }
}

impl<B: Bundler> Drop for BundleOrchestrator<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}
