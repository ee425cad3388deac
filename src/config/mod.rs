//! Configuration module for sitepack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SITEPACK_*)
//! 3. Project config (`sitepack.toml`, or the file given with `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_env_overrides_from,
    ConfigWarning, CONFIG_FILE_NAME,
};
pub use types::{BundleConfig, Config, ServeConfig, StaticConfig};
