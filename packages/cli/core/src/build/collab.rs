/* packages/cli/core/src/build/collab.rs */

// Seams between the pipeline and the tools it drives. Defaults live next to
// their concern (project, system, artifacts, admin_ui, telemetry); tests swap in fakes.

use std::path::Path;

use anyhow::Result;

use crate::project::ProjectConfig;
use crate::system::System;
use crate::telemetry::BuildEvent;

pub trait ConfigLoader {
  /// Load and validate the config module at `config_path`.
  fn load(&self, config_path: &Path) -> Result<ProjectConfig>;
}

pub trait Telemetry {
  /// Fire-and-forget. The pipeline reports an `Err` and carries on.
  fn send(&self, event: &BuildEvent) -> Result<()>;
}

pub trait SystemBuilder {
  fn create_system(&self, config: &ProjectConfig) -> Result<System>;
}

pub trait ArtifactStore {
  /// Fail with `BuildError::ArtifactDrift` when a committed artifact differs from `system`.
  fn validate_committed(&self, system: &System, config: &ProjectConfig, cwd: &Path) -> Result<()>;
  fn write_committed(&self, system: &System, config: &ProjectConfig, cwd: &Path) -> Result<()>;
  fn generate_node_modules(&self, system: &System, config: &ProjectConfig, cwd: &Path)
  -> Result<()>;
}

pub trait AdminUi {
  fn generate(&self, config: &ProjectConfig, system: &System, admin_path: &Path) -> Result<()>;
  fn build(&self, admin_path: &Path) -> Result<()>;
}

/// Everything one build invocation talks to.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
  pub loader: &'a dyn ConfigLoader,
  pub telemetry: &'a dyn Telemetry,
  pub system: &'a dyn SystemBuilder,
  pub artifacts: &'a dyn ArtifactStore,
  pub admin_ui: &'a dyn AdminUi,
}
