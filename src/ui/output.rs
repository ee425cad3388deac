use crate::ui::primitives::icon::Icon;
use sitepack::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) {
    for w in warnings {
        eprint!("{}", format_config_warning(w, supports_unicode));
    }
}

fn format_config_warning(w: &ConfigWarning, supports_unicode: bool) -> String {
    let icon = Icon::Warning.render(supports_unicode);
    let mut out = match w.line {
        Some(line) => format!(
            "{} Unknown config key '{}' in {}:{}\n",
            icon,
            w.key,
            w.file.display(),
            line
        ),
        None => format!(
            "{} Unknown config key '{}' in {}\n",
            icon,
            w.key,
            w.file.display()
        ),
    };

    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}
