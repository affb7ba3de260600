/* packages/cli/core/src/build/run/mod.rs */

// Build orchestrator: config -> system -> artifact check -> node_modules ->
// Admin UI codegen (skipped when disabled) -> config re-export -> Admin UI build.


use std::time::Instant;

use anyhow::Result;

use super::Collaborators;
use super::context::{BuildContext, BuildPaths};
use super::reexport::reexport_keystone_config;
use crate::telemetry::BuildEvent;
use crate::ui::{self, DIM, RESET};

const TOTAL: u32 = 7;

pub async fn run_build(paths: BuildPaths, collab: Collaborators<'_>) -> Result<()> {
  let started = Instant::now();

  ui::banner("build");

  // [1/7] Resolve config
  ui::step(1, TOTAL, "Loading config");
  let config = collab.loader.load(&paths.config_path)?;
  let ctx = BuildContext::new(paths, config);
  ui::detail_ok(&format!(
    "{} lists \u{00b7} {}",
    ctx.config.lists.len(),
    ctx.config.db.provider.as_str()
  ));
  ui::blank();

  if let Err(e) = collab.telemetry.send(&BuildEvent::new("keystone-build", &ctx.config)) {
    ui::detail(&format!("{DIM}telemetry not sent: {e}{RESET}"));
  }

  // [2/7] Construct system
  ui::step(2, TOTAL, "Creating schema");
  let system = collab.system.create_system(&ctx.config)?;
  ui::blank();

  // [3/7] Committed artifacts must match before anything is written
  ui::step(3, TOTAL, "Validating committed artifacts");
  collab.artifacts.validate_committed(&system, &ctx.config, &ctx.paths.cwd)?;
  ui::blank();

  // [4/7] node_modules artifacts
  ui::step(4, TOTAL, "Building Keystone");
  collab.artifacts.generate_node_modules(&system, &ctx.config, &ctx.paths.cwd)?;
  ui::blank();

  // [5/7] Admin UI code generation
  if ctx.ui_mode.is_disabled() {
    ui::skip(5, TOTAL, "Skipping Admin UI code generation");
  } else {
    ui::step(5, TOTAL, "Generating Admin UI code");
    collab.admin_ui.generate(&ctx.config, &system, &ctx.paths.admin_path)?;
  }
  ui::blank();

  // [6/7] Re-export config; runs in both modes
  ui::step(6, TOTAL, "Generating Keystone config code");
  reexport_keystone_config(&ctx.paths, ctx.ui_mode).await?;
  ui::blank();

  // [7/7] Admin UI build; a disabled UI still compiles the scaffold
  ui::step(7, TOTAL, "Building Admin UI");
  collab.admin_ui.build(&ctx.paths.admin_path)?;
  ui::blank();

  let elapsed = started.elapsed().as_secs_f64();
  ui::ok(&format!("build complete in {elapsed:.1}s"));
  Ok(())
}
