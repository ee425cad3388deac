use crossterm::style::Stylize;

use crate::cli::ColorWhen;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme;
use sitepack::BuildError;

pub fn format_error(err: &anyhow::Error, color: Option<ColorWhen>) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    let supports_color = match color {
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
    };
    format_error_with(err, supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }

    if let Some(fix) = err.downcast_ref::<BuildError>().and_then(fix_hint) {
        let label = if supports_color {
            format!("{}", "Fix:".with(theme::colors::INFO))
        } else {
            "Fix:".to_string()
        };
        out.push_str(&format!("  {} {}\n", label, fix));
    }

    out
}

fn fix_hint(err: &BuildError) -> Option<&'static str> {
    match err {
        BuildError::SourceRootNotFound { .. } => {
            Some("Create the directory or remove it from [static].roots in sitepack.toml.")
        }
        BuildError::BundlerUnavailable { .. } => Some(
            "Install esbuild (npm install --save-dev esbuild) or set SITEPACK_ESBUILD.",
        ),
        BuildError::Config { .. } => Some("Fix the config file and try again."),
        _ => None,
    }
}
