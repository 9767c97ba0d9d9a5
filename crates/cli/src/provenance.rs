use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where a JSON artifact came from: code revision, versions, callsite, inputs.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub cli_version: &'static str,
    pub planimetry_version: &'static str,
    pub callsite: Option<Callsite>,
    pub params: Value,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            cli_version: env!("CARGO_PKG_VERSION"),
            planimetry_version: planimetry::VERSION,
            callsite: None,
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `value` as pretty JSON to `artifact` and a `<stem>.provenance.json`
/// next to it. Returns the sidecar path.
#[track_caller]
pub fn write_json_with_sidecar<T: Serialize>(
    artifact: &Path,
    value: &T,
    params: Value,
) -> Result<PathBuf> {
    let caller = Location::caller();
    if let Some(parent) = artifact.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(artifact, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", artifact.display()))?;

    let mut doc = Provenance::new(params);
    doc.callsite = Some(Callsite {
        file: caller.file(),
        line: caller.line(),
    });
    doc.outputs.push(artifact.to_string_lossy().into_owned());
    let sidecar = provenance_path(artifact);
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
