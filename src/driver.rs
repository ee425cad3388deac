//! Build driver
//!
//! Sequences one invocation:
//! 1. Clear and recreate the output directory
//! 2. Copy static files once
//! 3. ONE_SHOT: bundle once and dispose the session
//!    DEV: start bundler watch + serve, then watch static files until stopped

use std::sync::atomic::AtomicBool;

use crate::assets::{CopyReport, StaticFileCopier};
use crate::bundler::{BundleOrchestrator, Bundler};
use crate::config::Config;
use crate::error::BuildResult;
use crate::events::BuildEvent;
use crate::output::prepare_output;
use crate::watch::WatchCoordinator;

/// Build mode, fixed for the whole invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Build once, dispose, exit
    OneShot,
    /// Watch sources and serve the output until interrupted
    Dev,
}

impl BuildMode {
    pub fn from_serve_flag(serve: bool) -> Self {
        if serve {
            BuildMode::Dev
        } else {
            BuildMode::OneShot
        }
    }
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// ONE_SHOT build finished
    Built,
    /// DEV session was stopped
    Stopped,
}

/// Everything one invocation needs, passed explicitly instead of held globally.
pub struct BuildContext<B: Bundler> {
    config: Config,
    mode: BuildMode,
    bundle: BundleOrchestrator<B>,
}

impl<B: Bundler> BuildContext<B> {
    pub fn new(config: Config, mode: BuildMode, bundler: B) -> Self {
        Self {
            config,
            mode,
            bundle: BundleOrchestrator::new(bundler),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn bundle(&self) -> &BundleOrchestrator<B> {
        &self.bundle
    }

    /// Copier over the configured roots and output directory
    pub fn copier(&self) -> StaticFileCopier {
        StaticFileCopier::new(
            self.config.static_files.roots.clone(),
            self.config.out_dir.clone(),
            self.config.static_pattern(),
        )
    }
}

/// Run a full copy pass, reporting each file.
pub fn copy_pass(
    copier: &StaticFileCopier,
    on_event: &impl Fn(BuildEvent),
) -> BuildResult<CopyReport> {
    on_event(BuildEvent::CopyStarted);
    let report = copier.copy_all()?;
    for file in &report.files {
        on_event(BuildEvent::FileCopied {
            from: file.source.display().to_string(),
            to: file.destination.display().to_string(),
        });
    }
    on_event(BuildEvent::CopyComplete {
        copied: report.len(),
    });
    Ok(report)
}

/// Run one invocation.
///
/// In DEV mode this blocks until `running` is cleared.
pub fn run<B: Bundler>(
    ctx: &mut BuildContext<B>,
    running: &AtomicBool,
    on_event: &impl Fn(BuildEvent),
) -> BuildResult<Outcome> {
    let out_dir = ctx.config.out_dir.clone();

    prepare_output(&out_dir)?;
    on_event(BuildEvent::OutputCleared {
        out_dir: out_dir.display().to_string(),
    });

    let copier = ctx.copier();
    copy_pass(&copier, on_event)?;

    match ctx.mode {
        BuildMode::OneShot => {
            on_event(BuildEvent::BundleStarted {
                mode: "build".to_string(),
            });
            ctx.bundle.build_once()?;
            on_event(BuildEvent::BundleComplete);
            on_event(BuildEvent::BuildComplete);
            Ok(Outcome::Built)
        }
        BuildMode::Dev => {
            on_event(BuildEvent::BundleStarted {
                mode: "watch".to_string(),
            });
            ctx.bundle.start_watch()?;
            let info = ctx.bundle.start_serve(&out_dir)?;
            on_event(BuildEvent::Serving {
                url: format!("http://localhost:{}", info.port),
                hosts: info.hosts,
                port: info.port,
            });

            let coordinator = WatchCoordinator::new(copier).with_ignored_dir(&out_dir);
            let watched = coordinator.start(running, on_event);
            ctx.bundle.dispose();
            watched.map(|()| Outcome::Stopped)
        }
    }
}
