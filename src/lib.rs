//! sitepack - static site build pipeline
//!
//! Assembles a deployable output directory from several source trees: static
//! files (markup, styles, data) are copied verbatim with their relative paths
//! preserved, and scripts are bundled by esbuild. With `--serve` the bundler
//! watches and serves the output while static files are re-copied on change.

pub mod assets;
pub mod bundler;
pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod output;
pub mod watch;

// Re-exports for convenience
pub use assets::{locate, CopyReport, StaticFileCopier, StaticFilePattern};
pub use bundler::{BundleOptions, BundleOrchestrator, Bundler, EsbuildBundler, ServeInfo};
pub use config::{Config, ConfigWarning};
pub use driver::{copy_pass, run, BuildContext, BuildMode, Outcome};
pub use error::{BuildError, BuildResult};
pub use events::BuildEvent;
pub use output::prepare_output;
pub use watch::{WatchCoordinator, WatchMessage};
