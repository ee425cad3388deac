//! Watch coordinator: turns change messages into copy passes

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::assets::StaticFileCopier;
use crate::driver::copy_pass;
use crate::error::BuildResult;
use crate::events::BuildEvent;

use super::message::{spawn_watcher, WatchMessage, POLL_INTERVAL_MS};

/// Re-copies static files when a matching file changes.
///
/// Every matching message triggers one full pass over all roots; bursts are
/// not coalesced. Copy errors are reported and the loop keeps going.
pub struct WatchCoordinator {
    copier: StaticFileCopier,
    ignored_dir: Option<PathBuf>,
}

impl WatchCoordinator {
    pub fn new(copier: StaticFileCopier) -> Self {
        Self {
            copier,
            ignored_dir: None,
        }
    }

    /// Ignore changes under `dir` (the output tree, when it sits inside a root)
    pub fn with_ignored_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ignored_dir = Some(dir.into());
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        self.copier.roots()
    }

    /// Handle one message. Returns whether a copy pass ran.
    pub fn handle(&self, message: WatchMessage, on_event: &impl Fn(BuildEvent)) -> bool {
        match message {
            WatchMessage::Changed(path) => {
                if !self.is_watched_static_file(&path) {
                    return false;
                }
                on_event(BuildEvent::FileChanged {
                    path: path.display().to_string(),
                });
                if let Err(e) = copy_pass(&self.copier, on_event) {
                    on_event(BuildEvent::Error {
                        message: e.to_string(),
                    });
                }
                true
            }
            WatchMessage::Failed(message) => {
                on_event(BuildEvent::Error { message });
                false
            }
        }
    }

    /// Consume messages until `running` is cleared or every sender is gone.
    pub fn run(
        &self,
        rx: Receiver<WatchMessage>,
        running: &AtomicBool,
        on_event: &impl Fn(BuildEvent),
    ) {
        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(Duration::from_millis(POLL_INTERVAL_MS)) {
                Ok(message) => {
                    self.handle(message, on_event);
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        on_event(BuildEvent::Shutdown);
    }

    /// Watch every root with notify and run the loop (blocking).
    pub fn start(&self, running: &AtomicBool, on_event: &impl Fn(BuildEvent)) -> BuildResult<()> {
        let (tx, rx) = channel();
        let watched: Vec<PathBuf> = self
            .copier
            .roots()
            .iter()
            .map(|root| root.canonicalize().unwrap_or_else(|_| root.clone()))
            .collect();
        let _watcher = spawn_watcher(&watched, tx)?;

        on_event(BuildEvent::WatchStarted {
            roots: self
                .copier
                .roots()
                .iter()
                .map(|r| r.display().to_string())
                .collect(),
        });

        // Watched roots are canonical, so compare against the canonical output dir
        let coordinator = WatchCoordinator {
            copier: self.copier.clone(),
            ignored_dir: self
                .ignored_dir
                .as_ref()
                .map(|dir| dir.canonicalize().unwrap_or_else(|_| dir.clone())),
        };
        coordinator.run(rx, running, on_event);
        Ok(())
    }

    fn is_watched_static_file(&self, path: &Path) -> bool {
        if let Some(ignored) = &self.ignored_dir {
            if path.starts_with(ignored) {
                return false;
            }
        }
        self.copier.pattern().matches_path(path)
    }
}
