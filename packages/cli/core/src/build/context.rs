/* packages/cli/core/src/build/context.rs */

use std::path::{Path, PathBuf};

use crate::config::BuildSection;
use crate::project::ProjectConfig;
use crate::shell::resolve_node_module;

pub(crate) const STATIC_PACKAGE_DIR: &str = "@keystone-next/keystone/static";

/// Whether the Admin UI is generated. Read once from `ui.isDisabled`; both the
/// generation phase and the re-export file set key off this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminUiMode {
  Enabled,
  Disabled,
}

impl AdminUiMode {
  pub fn from_config(config: &ProjectConfig) -> Self {
    if config.is_ui_disabled() { Self::Disabled } else { Self::Enabled }
  }

  pub fn is_disabled(self) -> bool {
    self == Self::Disabled
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
  pub cwd: PathBuf,
  pub config_path: PathBuf,
  /// Generated Next.js project (`.keystone/admin`)
  pub admin_path: PathBuf,
  /// Source of the scaffold files copied when the Admin UI is disabled.
  /// `None` when no installed scaffold could be found.
  pub static_dir: Option<PathBuf>,
}

impl BuildPaths {
  pub fn new(cwd: &Path, build: &BuildSection) -> Self {
    let static_dir = match &build.static_dir {
      // Used verbatim: a relative value is a config defect the materializer reports.
      Some(dir) => Some(PathBuf::from(dir)),
      None => resolve_node_module(cwd, STATIC_PACKAGE_DIR).or_else(bundled_static_dir),
    };
    Self {
      cwd: cwd.to_path_buf(),
      config_path: get_config_path(cwd, &build.config_path),
      admin_path: get_admin_path(cwd),
      static_dir,
    }
  }
}

/// Scaffold shipped next to the installed binary: `<bin>/static` or
/// `<prefix>/share/keystone/static`.
fn bundled_static_dir() -> Option<PathBuf> {
  let exe = std::env::current_exe().ok()?;
  let bin_dir = exe.parent()?;
  let mut candidates = vec![bin_dir.join("static")];
  if let Some(prefix) = bin_dir.parent() {
    candidates.push(prefix.join("share").join("keystone").join("static"));
  }
  candidates.into_iter().find(|dir| dir.is_dir())
}

pub fn get_config_path(cwd: &Path, config_path: &str) -> PathBuf {
  cwd.join(config_path)
}

pub fn get_admin_path(cwd: &Path) -> PathBuf {
  cwd.join(".keystone").join("admin")
}

/// One build invocation. Read-only once the config is resolved.
#[derive(Debug, Clone)]
pub struct BuildContext {
  pub paths: BuildPaths,
  pub config: ProjectConfig,
  pub ui_mode: AdminUiMode,
}

impl BuildContext {
  pub fn new(paths: BuildPaths, config: ProjectConfig) -> Self {
    let ui_mode = AdminUiMode::from_config(&config);
    Self { paths, config, ui_mode }
  }
}
