//! esbuild executable driver

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::error::{BuildError, BuildResult};

use super::{BundleOptions, Bundler, ServeInfo};

const DEFAULT_SERVE_PORT: u16 = 8000;

/// Runs the `esbuild` CLI.
///
/// One-shot builds wait for the process. Watch and serve each keep a child
/// process alive until [`Bundler::dispose`] (or drop) kills it.
#[derive(Debug)]
pub struct EsbuildBundler {
    program: PathBuf,
    options: BundleOptions,
    working_dir: Option<PathBuf>,
    watch_child: Option<Child>,
    serve_child: Option<Child>,
}

impl EsbuildBundler {
    pub fn new(program: impl Into<PathBuf>, options: BundleOptions) -> Self {
        Self {
            program: program.into(),
            options,
            working_dir: None,
            watch_child: None,
            serve_child: None,
        }
    }

    /// Run esbuild from `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Arguments shared by one-shot and watch builds
    pub fn build_args(&self) -> Vec<String> {
        let mut args: Vec<String> = self
            .options
            .entry_points
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        args.push("--bundle".to_string());
        args.push(format!("--outdir={}", self.options.out_dir.display()));
        args.push(format!("--format={}", self.options.format));
        if !self.options.target.is_empty() {
            args.push(format!("--target={}", self.options.target.join(",")));
        }
        if self.options.sourcemap {
            args.push("--sourcemap".to_string());
        }
        args
    }

    /// Arguments for serving `dir`.
    ///
    /// A host without a port binds esbuild's default port 8000.
    pub fn serve_args(&self, dir: &Path) -> Vec<String> {
        let serve = match (&self.options.host, self.options.port) {
            (Some(host), Some(port)) => format!("--serve={host}:{port}"),
            (Some(host), None) => format!("--serve={host}:{DEFAULT_SERVE_PORT}"),
            (None, Some(port)) => format!("--serve={port}"),
            (None, None) => "--serve".to_string(),
        };
        vec![format!("--servedir={}", dir.display()), serve]
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn unavailable(&self, source: std::io::Error) -> BuildError {
        BuildError::BundlerUnavailable {
            program: self.program.clone(),
            source,
        }
    }
}

impl Bundler for EsbuildBundler {
    fn build(&mut self) -> BuildResult<()> {
        let output = self
            .command()
            .args(self.build_args())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.unavailable(e))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            format!("esbuild exited with {}", output.status)
        } else {
            stderr
        };
        Err(BuildError::Bundle { message })
    }

    fn watch(&mut self) -> BuildResult<()> {
        // esbuild reports rebuild errors on its own stderr and keeps watching
        let child = self
            .command()
            .args(self.build_args())
            .arg("--watch=forever")
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| self.unavailable(e))?;
        self.watch_child = Some(child);
        Ok(())
    }

    fn serve(&mut self, dir: &Path) -> BuildResult<ServeInfo> {
        let mut child = self
            .command()
            .args(self.serve_args(dir))
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.unavailable(e))?;

        let stderr = child.stderr.take().ok_or_else(|| BuildError::Serve {
            message: "esbuild stderr was not captured".to_string(),
        })?;
        let mut lines = BufReader::new(stderr).lines();

        let mut banner = Vec::new();
        let mut seen_url = false;
        for line in lines.by_ref() {
            let line = line?;
            let has_url = line.contains("http://");
            if !has_url && seen_url {
                break;
            }
            seen_url |= has_url;
            banner.push(line);
        }

        let Some(info) = parse_serve_banner(&banner) else {
            let _ = child.kill();
            let _ = child.wait();
            let output = banner.join("\n").trim().to_string();
            return Err(BuildError::Serve {
                message: if output.is_empty() {
                    "esbuild exited before the server started".to_string()
                } else {
                    output
                },
            });
        };

        // Keep draining so request logs never block the server on a full pipe
        std::thread::spawn(move || {
            for line in lines.map_while(Result::ok) {
                eprintln!("{line}");
            }
        });

        self.serve_child = Some(child);
        Ok(info)
    }

    fn dispose(&mut self) {
        for mut child in [self.watch_child.take(), self.serve_child.take()]
            .into_iter()
            .flatten()
        {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for EsbuildBundler {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Extract listening URLs from esbuild's serve banner.
///
/// ```text
///  > Local:   http://127.0.0.1:8000/
///  > Network: http://192.168.1.20:8000/
/// ```
pub fn parse_serve_banner<S: AsRef<str>>(lines: &[S]) -> Option<ServeInfo> {
    let mut hosts = Vec::new();
    let mut port = None;

    for line in lines {
        let line = line.as_ref();
        let Some(start) = line.find("http://") else {
            continue;
        };
        let url = line[start + "http://".len()..]
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let Some((host, port_str)) = url.rsplit_once(':') else {
            continue;
        };
        let Ok(parsed) = port_str.parse::<u16>() else {
            continue;
        };
        port.get_or_insert(parsed);
        let host = host.trim_start_matches('[').trim_end_matches(']').to_string();
        if !hosts.contains(&host) {
            hosts.push(host);
        }
    }

    port.map(|port| ServeInfo { hosts, port })
}
