//! Static file watching for dev mode
//!
//! Implements the re-copy side of `sitepack --serve`:
//! - One recursive `notify` watcher over every source root
//! - The watcher callback only forwards `WatchMessage`s into a channel
//! - A single `WatchCoordinator` loop consumes them, so copy passes never overlap
//!
//! Bundler inputs are left alone; esbuild's own watch mode rebuilds those.

mod coordinator;
mod message;

pub use coordinator::WatchCoordinator;
pub use message::{is_relevant, spawn_watcher, WatchMessage, POLL_INTERVAL_MS};
