//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::StaticFilePattern;
use crate::bundler::BundleOptions;

/// Static file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticConfig {
    /// Directories scanned for static files, in copy order
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    /// File extensions (without the dot) that count as static files
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            extensions: default_extensions(),
        }
    }
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("www"), PathBuf::from("src")]
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "css".to_string(), "json".to_string()]
}

/// Bundler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    #[serde(default = "default_entry_points")]
    pub entry_points: Vec<PathBuf>,

    /// Module format passed to esbuild (`esm`, `iife`, `cjs`)
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default = "default_target")]
    pub target: Vec<String>,

    #[serde(default = "default_true")]
    pub sourcemap: bool,

    /// Path to the esbuild executable
    #[serde(default)]
    pub esbuild: Option<PathBuf>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            entry_points: default_entry_points(),
            format: default_format(),
            target: default_target(),
            sourcemap: true,
            esbuild: None,
        }
    }
}

fn default_entry_points() -> Vec<PathBuf> {
    vec![PathBuf::from("www/main.tsx")]
}

fn default_format() -> String {
    "esm".to_string()
}

fn default_target() -> Vec<String> {
    vec!["es2020".to_string()]
}

fn default_true() -> bool {
    true
}

/// Dev server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServeConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output directory, cleared at the start of every build
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    #[serde(default, rename = "static")]
    pub static_files: StaticConfig,

    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            static_files: StaticConfig::default(),
            bundle: BundleConfig::default(),
            serve: ServeConfig::default(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist-www")
}

impl Config {
    /// Static file name predicate built from `static.extensions`
    pub fn static_pattern(&self) -> StaticFilePattern {
        StaticFilePattern::new(self.static_files.extensions.iter().cloned())
    }

    /// Resolve the esbuild executable.
    ///
    /// An explicit `bundle.esbuild` wins; otherwise a project-local
    /// `node_modules/.bin/esbuild` is preferred over `esbuild` on `PATH`.
    pub fn esbuild_program(&self, project_root: &Path) -> PathBuf {
        if let Some(explicit) = &self.bundle.esbuild {
            return explicit.clone();
        }
        let local = project_root
            .join("node_modules")
            .join(".bin")
            .join("esbuild");
        if local.is_file() {
            local
        } else {
            PathBuf::from("esbuild")
        }
    }

    /// Bundler options derived from the `[bundle]` section
    pub fn bundle_options(&self) -> BundleOptions {
        BundleOptions {
            entry_points: self.bundle.entry_points.clone(),
            out_dir: self.out_dir.clone(),
            format: self.bundle.format.clone(),
            target: self.bundle.target.clone(),
            sourcemap: self.bundle.sourcemap,
            host: self.serve.host.clone(),
            port: self.serve.port,
        }
    }
}
