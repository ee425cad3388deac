use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use sitepack::{run, BuildContext, BuildEvent, BuildMode, EsbuildBundler};

use crate::cli::Cli;
use crate::ui::context::UiContext;

pub fn cmd_build(cli: &Cli) -> Result<()> {
    let project_root = std::env::current_dir().context("cannot determine working directory")?;

    let (config, warnings) =
        sitepack::config::load_or_default(&project_root, cli.config.as_deref())?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    if !ui.json {
        crate::ui::output::print_config_warnings(&warnings, ui.unicode);
    }

    let mode = BuildMode::from_serve_flag(cli.serve);
    let bundler = EsbuildBundler::new(
        config.esbuild_program(&project_root),
        config.bundle_options(),
    );

    // Ctrl+C ends dev mode; one-shot builds keep the default signal behavior
    let running = Arc::new(AtomicBool::new(true));
    if mode == BuildMode::Dev {
        let running_clone = running.clone();
        ctrlc::set_handler(move || {
            running_clone.store(false, Ordering::SeqCst);
        })
        .context("cannot install Ctrl+C handler")?;
    }

    if !ui.json {
        print!(
            "{}",
            crate::ui::views::build::render_header(
                mode,
                &config.out_dir.display().to_string(),
                ui.color,
                ui.unicode
            )
        );
    }

    let mut ctx = BuildContext::new(config, mode, bundler);

    run(&mut ctx, &running, &|event: BuildEvent| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = (mode == BuildMode::Dev).then(clock_timestamp);
        let Some(rendered) = crate::ui::views::build::render_event(
            timestamp.as_deref(),
            &event,
            ui.verbose,
            ui.color,
            ui.unicode,
        ) else {
            return;
        };

        match event {
            BuildEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}

fn clock_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 86_400;
            let h = secs / 3600;
            let m = (secs % 3600) / 60;
            let s = secs % 60;
            format!("{:02}:{:02}:{:02}", h, m, s)
        })
        .unwrap_or_else(|_| "00:00:00".to_string())
}
