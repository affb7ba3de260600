/* packages/cli/core/src/config/mod.rs */

// Tool settings read from an optional `keystone.toml` beside the project.
// The project's own Keystone config (`keystone.ts`) is handled by `crate::project`.

mod loader;


use serde::Deserialize;

pub use loader::load_settings;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
  #[serde(default)]
  pub build: BuildSection,
  #[serde(default)]
  pub telemetry: TelemetrySection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  /// Keystone config module, relative to the project directory
  #[serde(default = "default_config_path")]
  pub config_path: String,
  /// Directory holding the scaffold `next.config.js` / `tsconfig.json`
  pub static_dir: Option<String>,
  /// Command printing the resolved config as JSON (replaces the bun/node import)
  pub config_command: Option<String>,
  /// Database client generator, run after node_modules artifacts are written
  pub client_command: Option<String>,
  pub admin_generate_command: Option<String>,
  #[serde(default = "default_admin_build_command")]
  pub admin_build_command: String,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self {
      config_path: default_config_path(),
      static_dir: None,
      config_command: None,
      client_command: None,
      admin_generate_command: None,
      admin_build_command: default_admin_build_command(),
    }
  }
}

fn default_config_path() -> String {
  "keystone.ts".to_string()
}

fn default_admin_build_command() -> String {
  "npx next build".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySection {
  #[serde(default)]
  pub disabled: bool,
  #[serde(default = "default_telemetry_endpoint")]
  pub endpoint: String,
}

impl Default for TelemetrySection {
  fn default() -> Self {
    Self { disabled: false, endpoint: default_telemetry_endpoint() }
  }
}

fn default_telemetry_endpoint() -> String {
  "https://telemetry.keystonejs.com/v1/event".to_string()
}
