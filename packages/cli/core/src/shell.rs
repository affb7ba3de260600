/* packages/cli/core/src/shell.rs */

// Shell command helpers shared by the build collaborators.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result, bail};

use crate::ui::{self, DIM, RESET};

/// Run a shell command, bail on failure (shows both stdout and stderr on error).
pub(crate) fn run_command(
  base_dir: &Path,
  command: &str,
  label: &str,
  env: &[(&str, &str)],
) -> Result<()> {
  ui::detail(&format!("{DIM}{command}{RESET}"));
  let output = sh(base_dir, command, env).with_context(|| format!("failed to run {label}"))?;
  if !output.status.success() {
    bail!("{}", failure_message(label, &output));
  }
  Ok(())
}

/// Run a shell command and return its stdout; bail on failure.
pub(crate) fn capture_command(base_dir: &Path, command: &str, label: &str) -> Result<String> {
  ui::detail(&format!("{DIM}{command}{RESET}"));
  let output = sh(base_dir, command, &[]).with_context(|| format!("failed to run {label}"))?;
  if !output.status.success() {
    bail!("{}", failure_message(label, &output));
  }
  String::from_utf8(output.stdout).with_context(|| format!("invalid UTF-8 from {label}"))
}

/// Evaluate a JS snippet with bun (preferred, handles .ts natively) or node, returning stdout.
pub(crate) fn eval_js(base_dir: &Path, script: &str, label: &str) -> Result<String> {
  let runtime = if which_exists("bun") { "bun" } else { "node" };
  ui::detail(&format!("{DIM}{runtime} -e \"...\"{RESET}"));
  let output = Command::new(runtime)
    .args(["-e", script])
    .current_dir(base_dir)
    .output()
    .with_context(|| format!("failed to run {runtime} for {label}"))?;
  if !output.status.success() {
    bail!("{}", failure_message(label, &output));
  }
  String::from_utf8(output.stdout).with_context(|| format!("invalid UTF-8 from {label}"))
}

fn sh(base_dir: &Path, command: &str, env: &[(&str, &str)]) -> std::io::Result<Output> {
  let mut cmd = Command::new("sh");
  cmd.args(["-c", command]);
  cmd.current_dir(base_dir);
  for (k, v) in env {
    cmd.env(k, v);
  }
  cmd.output()
}

fn failure_message(label: &str, output: &Output) -> String {
  let stdout = String::from_utf8_lossy(&output.stdout);
  let stderr = String::from_utf8_lossy(&output.stderr);
  let mut msg = format!("{label} exited with status {}", output.status);
  if !stderr.is_empty() {
    msg.push('\n');
    msg.push_str(&stderr);
  }
  if !stdout.is_empty() {
    msg.push('\n');
    msg.push_str(&stdout);
  }
  msg
}

/// Resolve a path inside node_modules by walking up parent directories.
/// Mirrors Node.js module resolution: checks `<dir>/node_modules/<suffix>` at each level.
pub(crate) fn resolve_node_module(start: &Path, suffix: &str) -> Option<PathBuf> {
  let mut dir = start.to_path_buf();
  loop {
    let candidate = dir.join("node_modules").join(suffix);
    if candidate.exists() {
      return Some(candidate);
    }
    if !dir.pop() {
      return None;
    }
  }
}

/// Check if a command exists on PATH.
pub(crate) fn which_exists(cmd: &str) -> bool {
  Command::new("which")
    .arg(cmd)
    .stdout(std::process::Stdio::null())
    .stderr(std::process::Stdio::null())
    .status()
    .map(|s| s.success())
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn run_command_reports_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_command(dir.path(), "echo boom >&2; exit 3", "bundler", &[]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("bundler exited with status"));
    assert!(msg.contains("boom"));
  }

  #[test]
  fn capture_command_returns_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = capture_command(dir.path(), "echo '{\"ok\":true}'", "loader").unwrap();
    assert_eq!(out.trim(), r#"{"ok":true}"#);
  }

  #[test]
  fn run_command_passes_env() {
    let dir = tempfile::tempdir().unwrap();
    run_command(dir.path(), "test \"$KS_FLAG\" = 1", "env check", &[("KS_FLAG", "1")]).unwrap();
  }

  #[test]
  fn resolve_node_module_walks_upward() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("node_modules/@keystone-next/keystone/static");
    std::fs::create_dir_all(&target).unwrap();
    let nested = dir.path().join("apps/site");
    std::fs::create_dir_all(&nested).unwrap();
    let found = resolve_node_module(&nested, "@keystone-next/keystone/static").unwrap();
    assert_eq!(found, target);
  }

  #[test]
  fn resolve_node_module_missing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(resolve_node_module(dir.path(), "@keystone-next/does-not-exist").is_none());
  }
}
