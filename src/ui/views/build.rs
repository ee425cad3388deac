use crossterm::style::Stylize;

use crate::ui::primitives::icon::Icon;
use crate::ui::theme;
use sitepack::{BuildEvent, BuildMode};

pub fn render_header(
    mode: BuildMode,
    out_dir: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, title) = match mode {
        BuildMode::OneShot => (Icon::Bundle, "sitepack build"),
        BuildMode::Dev => (Icon::Watch, "sitepack dev"),
    };

    let title = if supports_color {
        format!("{}", title.with(theme::colors::INFO).bold())
    } else {
        title.to_string()
    };

    let mut out = format!(
        "{} {}\n",
        icon.colored(supports_color, supports_unicode),
        title
    );
    out.push_str(&format!("Output: {}\n", out_dir));
    if mode == BuildMode::Dev {
        out.push_str("Hint: Press Ctrl+C to stop\n");
    }
    out
}

/// Render one event as a text line.
///
/// Returns `None` for events hidden at the current verbosity.
pub fn render_event(
    timestamp: Option<&str>,
    event: &BuildEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let prefix = timestamp.map(|t| format!("[{}] ", t)).unwrap_or_default();
    let icon = |i: Icon| i.colored(supports_color, supports_unicode);

    let line = match event {
        BuildEvent::OutputCleared { out_dir } => {
            format!("{} Clearing {}", icon(Icon::Clean), out_dir)
        }
        BuildEvent::CopyStarted => format!("{} Copying static files...", icon(Icon::Progress)),
        BuildEvent::FileCopied { from, to } => {
            if verbose == 0 {
                return None;
            }
            format!("  {} {} -> {}", icon(Icon::Arrow), from, to)
        }
        BuildEvent::CopyComplete { copied } => {
            let noun = if *copied == 1 { "file" } else { "files" };
            format!("{} Copied {} static {}", icon(Icon::Success), copied, noun)
        }
        BuildEvent::BundleStarted { .. } => {
            format!("{} Running esbuild...", icon(Icon::Bundle))
        }
        BuildEvent::BundleComplete => format!("{} Bundle complete", icon(Icon::Success)),
        BuildEvent::Serving { url, .. } => {
            format!("{} Now serving on {}", icon(Icon::Serve), url)
        }
        BuildEvent::WatchStarted { roots } => {
            format!("{} Watching: {}", icon(Icon::Watch), roots.join(", "))
        }
        BuildEvent::FileChanged { path } => format!(
            "{} Copying static files due to change in: {}",
            icon(Icon::Arrow),
            path
        ),
        BuildEvent::BuildComplete => format!("{} Built successfully.", icon(Icon::Success)),
        BuildEvent::Error { message } => format!("{} Error: {}", icon(Icon::Error), message),
        BuildEvent::Shutdown => {
            return Some(format!("\n{}{} Stopped.\n", prefix, icon(Icon::Watch)));
        }
    };

    Some(format!("{}{}\n", prefix, line))
}
