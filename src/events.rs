//! Build event types for text and NDJSON output

use serde::Serialize;

/// Events emitted while building or watching.
///
/// Serialized with an `event` tag, e.g. `{"event":"copy_complete","copied":3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BuildEvent {
    /// Output directory removed and recreated
    OutputCleared { out_dir: String },
    /// A static copy pass is starting
    CopyStarted,
    /// One static file copied
    FileCopied { from: String, to: String },
    /// A static copy pass finished
    CopyComplete { copied: usize },
    /// Bundler invoked; `mode` is `build` or `watch`
    BundleStarted { mode: String },
    /// One-shot bundle finished
    BundleComplete,
    /// Dev server is listening
    Serving {
        url: String,
        hosts: Vec<String>,
        port: u16,
    },
    /// Static file watching is active
    WatchStarted { roots: Vec<String> },
    /// A watched static file changed
    FileChanged { path: String },
    /// One-shot build finished successfully
    BuildComplete,
    /// Non-fatal error (watch mode) or the fatal error that ended the build
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl BuildEvent {
    /// Convert to JSON string with "command": "build" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("build"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
