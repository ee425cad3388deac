//! Watch messages and the notify bridge

use std::path::PathBuf;
use std::sync::mpsc::Sender;

use notify::event::{MetadataKind, ModifyKind};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::BuildResult;

/// How often the coordinator wakes up to check its running flag
pub const POLL_INTERVAL_MS: u64 = 50;

/// Message delivered from the filesystem watcher to the coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchMessage {
    /// Something happened to this path
    Changed(PathBuf),
    /// The watcher backend reported an error
    Failed(String),
}

/// Whether a notify event can change file contents.
///
/// Reads (open, close-without-write, atime updates) are dropped, otherwise
/// every copy pass would read the sources and trigger the next pass.
pub fn is_relevant(kind: &EventKind) -> bool {
    !matches!(
        kind,
        EventKind::Access(_) | EventKind::Modify(ModifyKind::Metadata(MetadataKind::AccessTime))
    )
}

/// Watch every root recursively, forwarding relevant events into `tx`.
///
/// The returned watcher stops delivering events when dropped.
pub fn spawn_watcher(roots: &[PathBuf], tx: Sender<WatchMessage>) -> BuildResult<RecommendedWatcher> {
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if is_relevant(&event.kind) {
                    for path in event.paths {
                        let _ = tx.send(WatchMessage::Changed(path));
                    }
                }
            }
            Err(e) => {
                let _ = tx.send(WatchMessage::Failed(e.to_string()));
            }
        },
        Config::default(),
    )?;

    for root in roots {
        watcher.watch(root, RecursiveMode::Recursive)?;
    }

    Ok(watcher)
}
