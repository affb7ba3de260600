/* packages/cli/core/src/project/loader.rs */

use std::path::Path;

use anyhow::Result;

use super::{ProjectConfig, init_config};
use crate::build::ConfigLoader;
use crate::error::BuildError;
use crate::shell::{capture_command, eval_js};

/// Evaluates the Keystone config module with bun/node (or a configured command)
/// and reads its default export back as JSON.
#[derive(Debug, Clone, Default)]
pub struct JsConfigLoader {
  pub command: Option<String>,
}

impl JsConfigLoader {
  pub fn new(command: Option<String>) -> Self {
    Self { command }
  }
}

impl ConfigLoader for JsConfigLoader {
  fn load(&self, config_path: &Path) -> Result<ProjectConfig> {
    if !config_path.is_file() {
      return Err(BuildError::Config(format!("{} not found", config_path.display())).into());
    }
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let stdout = match &self.command {
      Some(cmd) => capture_command(base_dir, cmd, "config loader"),
      None => eval_js(base_dir, &import_script(config_path)?, "config evaluation"),
    }
    .map_err(|e| {
      e.context(BuildError::Config(format!("failed to evaluate {}", config_path.display())))
    })?;
    let config = parse_config_output(&stdout)?;
    init_config(config)
  }
}

fn import_script(config_path: &Path) -> Result<String> {
  let specifier = serde_json::to_string(&config_path.to_string_lossy())?;
  Ok(format!(
    "import({specifier}).then(m => {{ \
       const c = m.default ?? m.config; \
       console.log(JSON.stringify(c)); \
     }})"
  ))
}

/// The config JSON is the last non-empty stdout line; anything the module logs comes before it.
pub(crate) fn parse_config_output(stdout: &str) -> Result<ProjectConfig> {
  let line = stdout
    .lines()
    .rev()
    .find(|l| !l.trim().is_empty())
    .ok_or_else(|| BuildError::Config("config module printed nothing".to_string()))?;
  serde_json::from_str(line).map_err(|e| BuildError::Config(e.to_string()).into())
}
