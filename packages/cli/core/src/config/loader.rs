/* packages/cli/core/src/config/loader.rs */

use std::path::Path;

use anyhow::{Context, Result};

use super::Settings;

pub const SETTINGS_FILE: &str = "keystone.toml";

/// Load `keystone.toml` from `cwd`; a missing file means all defaults.
/// Environment overrides are applied on top of the file.
pub fn load_settings(cwd: &Path) -> Result<Settings> {
  let path = cwd.join(SETTINGS_FILE);
  let mut settings = if path.is_file() {
    let content = std::fs::read_to_string(&path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str::<Settings>(&content)
      .with_context(|| format!("failed to parse {}", path.display()))?
  } else {
    Settings::default()
  };
  apply_env(&mut settings, |key| std::env::var(key).ok());
  Ok(settings)
}

pub(super) fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
  if let Some(v) = var("KEYSTONE_TELEMETRY_DISABLED")
    && matches!(v.as_str(), "1" | "true")
  {
    settings.telemetry.disabled = true;
  }
  if let Some(endpoint) = var("KEYSTONE_TELEMETRY_ENDPOINT") {
    settings.telemetry.endpoint = endpoint;
  }
}
