use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a `check` run records next to its report: the run parameters and
/// tolerances as JSON, plus the optional `--tag` label.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, tag: None }
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display())),
        _ => Ok(()),
    }
}

/// Record how `report` was produced in `<stem>.provenance.json` beside it.
///
/// The sidecar carries the commit, the `pointwise` version (so batched
/// results can be traced to a kernel revision), the call site, the payload
/// and the report path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(report: P, payload: Payload) -> Result<PathBuf> {
    let report = report.as_ref();
    let sidecar = provenance_path(report);
    ensure_parent(&sidecar)?;
    let at = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": pointwise::VERSION,
        "callsite": { "file": at.file(), "line": at.line() },
        "tag": payload.tag,
        "params": payload.params,
        "outputs": [report.to_string_lossy()],
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// `out/check.json` -> `out/check.provenance.json`.
fn provenance_path(report: &Path) -> PathBuf {
    report.with_extension("provenance.json")
}

/// Commit of the build: `GIT_COMMIT` at compile time, then at runtime, then `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::RunParams;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_replaces_report_extension() {
        assert_eq!(
            provenance_path(Path::new("runs/check.json")),
            Path::new("runs/check.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("runs/check")),
            Path::new("runs/check.provenance.json")
        );
    }

    #[test]
    fn git_rev_is_never_empty() {
        assert!(!current_git_rev().is_empty());
    }

    #[test]
    fn sidecar_records_run_params_and_tolerances() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("runs").join("check.json");
        let run = RunParams {
            count: 257,
            seed: 9,
            radius: 2.5,
        };
        let mut payload = Payload::new(json!({
            "cmd": "check",
            "run": run,
            "eps_abs": 1e-12,
            "eps_rel": 0.0,
        }));
        payload.tag = Some("nightly".into());

        let sidecar = write_sidecar(&report, payload).unwrap();
        assert_eq!(sidecar, dir.path().join("runs").join("check.provenance.json"));

        let doc: Value = serde_json::from_slice(&fs::read(&sidecar).unwrap()).unwrap();
        assert_eq!(doc["params"]["run"]["count"], 257);
        assert_eq!(doc["params"]["run"]["seed"], 9);
        assert_eq!(doc["params"]["run"]["radius"], 2.5);
        assert_eq!(doc["params"]["eps_rel"], 0.0);
        assert_eq!(doc["tag"], "nightly");
        assert_eq!(doc["version"], pointwise::VERSION);
        assert_eq!(doc["outputs"][0], report.to_string_lossy().as_ref());
        assert!(doc["callsite"]["line"].as_u64().is_some());
    }
}
