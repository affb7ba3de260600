/* packages/cli/core/src/main.rs */

mod admin_ui;
mod artifacts;
mod build;
mod config;
mod error;
mod project;
mod shell;
mod system;
mod telemetry;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use admin_ui::NextAdminUi;
use artifacts::FsArtifacts;
use build::context::BuildPaths;
use build::{Collaborators, Telemetry};
use config::{Settings, load_settings};
use project::JsConfigLoader;
use system::DefaultSystemBuilder;
use telemetry::telemetry_from_settings;

#[derive(Parser)]
#[command(name = "keystone", about = "Keystone CLI")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Build the Keystone project and its Admin UI for production
  Build {
    /// Project directory (defaults to the current directory)
    #[arg(long)]
    cwd: Option<PathBuf>,
  },
  /// Validate committed schema files and generate node_modules artifacts
  Postinstall {
    /// Project directory (defaults to the current directory)
    #[arg(long)]
    cwd: Option<PathBuf>,
    /// Rewrite schema.graphql / schema.prisma instead of failing on drift
    #[arg(long)]
    fix: bool,
  },
}

/// Production collaborators, configured from keystone.toml
struct Defaults {
  loader: JsConfigLoader,
  telemetry: Box<dyn Telemetry>,
  artifacts: FsArtifacts,
  admin_ui: NextAdminUi,
}

impl Defaults {
  fn from_settings(settings: &Settings) -> Self {
    let build = &settings.build;
    Self {
      loader: JsConfigLoader::new(build.config_command.clone()),
      telemetry: telemetry_from_settings(&settings.telemetry),
      artifacts: FsArtifacts::new(build.client_command.clone()),
      admin_ui: NextAdminUi::new(
        build.admin_generate_command.clone(),
        build.admin_build_command.clone(),
      ),
    }
  }

  fn collab(&self) -> Collaborators<'_> {
    Collaborators {
      loader: &self.loader,
      telemetry: self.telemetry.as_ref(),
      system: &DefaultSystemBuilder,
      artifacts: &self.artifacts,
      admin_ui: &self.admin_ui,
    }
  }
}

/// Resolve the project directory (explicit or cwd) and its optional keystone.toml
fn resolve_project(explicit: Option<PathBuf>) -> Result<(BuildPaths, Settings)> {
  let cwd = match explicit {
    Some(p) => p,
    None => std::env::current_dir().context("failed to get cwd")?,
  };
  let cwd =
    cwd.canonicalize().with_context(|| format!("failed to canonicalize {}", cwd.display()))?;
  let settings = load_settings(&cwd)?;
  Ok((BuildPaths::new(&cwd, &settings.build), settings))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Build { cwd } => {
      let (paths, settings) = resolve_project(cwd)?;
      let defaults = Defaults::from_settings(&settings);
      build::run::run_build(paths, defaults.collab()).await?;
    }
    Command::Postinstall { cwd, fix } => {
      let (paths, settings) = resolve_project(cwd)?;
      let defaults = Defaults::from_settings(&settings);
      build::postinstall::run_postinstall(&paths, defaults.collab(), fix)?;
    }
  }

  Ok(())
}
