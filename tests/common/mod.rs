//! Test environment for running the sitepack binary against a scratch project.
//!
//! `TestEnv` owns a temp project with `www/` and `src/` roots and a fake
//! `esbuild` script that mimics the real CLI closely enough for the pipeline.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};

use tempfile::TempDir;

/// Stand-in for the esbuild CLI.
///
/// One-shot builds write `main.js` into `--outdir` (or fail when
/// `FAKE_ESBUILD_FAIL` is set). Watch and serve modes block; serve prints
/// the same banner esbuild does.
pub const FAKE_ESBUILD: &str = r#"#!/bin/sh
outdir=""
for arg in "$@"; do
  case "$arg" in
    --outdir=*) outdir="${arg#--outdir=}" ;;
    --watch=forever) exec sleep 30 ;;
    --serve*)
      printf '\n > Local:   http://127.0.0.1:8123/\n\n' >&2
      exec sleep 30
      ;;
  esac
done

if [ -n "$FAKE_ESBUILD_FAIL" ]; then
  echo "X [ERROR] Could not resolve \"react\"" >&2
  exit 1
fi

mkdir -p "$outdir"
echo 'console.log("bundled")' > "$outdir/main.js"
"#;

/// Result of running the sitepack CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        parse_events(&self.stdout)
    }
}

pub fn parse_events(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad event {l}: {e}")))
        .collect()
}

pub fn event_names(events: &[serde_json::Value]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| e["event"].as_str().map(str::to_string))
        .collect()
}

/// Isolated project directory with a fake bundler
pub struct TestEnv {
    pub project_root: TempDir,
    esbuild: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project with the fake esbuild installed outside the source roots
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create temp dir");
        let esbuild = project_root.path().join("tools/esbuild");
        fs::create_dir_all(esbuild.parent().unwrap()).unwrap();
        fs::write(&esbuild, FAKE_ESBUILD).unwrap();
        make_executable(&esbuild);

        Self {
            project_root,
            esbuild,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_sitepack")),
        }
    }

    /// Project with the default `www/` and `src/` roots populated
    pub fn with_site() -> Self {
        let env = Self::new();
        env.write("www/index.html", "<script type=module src=main.js></script>");
        env.write("www/main.tsx", "console.log('hi')");
        env.write("www/css/site.css", "body { margin: 0 }");
        env.write("src/strings.json", "{\"greeting\":\"hi\"}");
        env.write("src/app.ts", "export {}");
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(full, content).expect("Failed to write file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    fn command(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("SITEPACK_ESBUILD", &self.esbuild)
            .env_remove("SITEPACK_OUT_DIR")
            .env_remove("SITEPACK_SERVE_PORT")
            .env_remove("FAKE_ESBUILD_FAIL")
            .env("NO_COLOR", "1");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run sitepack to completion
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let output = self
            .command(args, env_vars)
            .output()
            .expect("Failed to execute sitepack");
        TestResult::from_output(output)
    }

    /// Start sitepack without waiting for it
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args, &[])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start sitepack")
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}

/// Ask a running sitepack to stop the way Ctrl+C would
#[cfg(unix)]
pub fn interrupt(child: &Child) {
    let status = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .expect("Failed to run kill");
    assert!(status.success());
}
