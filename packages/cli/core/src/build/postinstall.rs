/* packages/cli/core/src/build/postinstall.rs */

// `keystone postinstall`: check (or with --fix, rewrite) the committed schema
// snapshots and regenerate node_modules/.keystone.

use anyhow::Result;

use super::Collaborators;
use super::context::BuildPaths;
use crate::ui;

pub fn run_postinstall(paths: &BuildPaths, collab: Collaborators<'_>, fix: bool) -> Result<()> {
  ui::banner("postinstall");

  let config = collab.loader.load(&paths.config_path)?;
  let system = collab.system.create_system(&config)?;

  if fix {
    ui::arrow("writing committed artifacts");
    collab.artifacts.write_committed(&system, &config, &paths.cwd)?;
  } else {
    ui::arrow("validating committed artifacts");
    collab.artifacts.validate_committed(&system, &config, &paths.cwd)?;
  }

  ui::arrow("generating node_modules artifacts");
  collab.artifacts.generate_node_modules(&system, &config, &paths.cwd)?;

  ui::ok("postinstall complete");
  Ok(())
}
