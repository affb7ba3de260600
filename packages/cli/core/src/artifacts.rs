/* packages/cli/core/src/artifacts.rs */

// Committed schema snapshots (`schema.graphql`, `schema.prisma`) and the
// generated `node_modules/.keystone` package.

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::build::ArtifactStore;
use crate::error::BuildError;
use crate::project::{FieldKind, ProjectConfig};
use crate::shell::run_command;
use crate::system::System;
use crate::ui;

pub const GRAPHQL_SCHEMA_FILE: &str = "schema.graphql";
pub const PRISMA_SCHEMA_FILE: &str = "schema.prisma";

#[derive(Debug, Clone, Default)]
pub struct FsArtifacts {
  /// Database client generator run after the package is written
  pub client_command: Option<String>,
}

impl FsArtifacts {
  pub fn new(client_command: Option<String>) -> Self {
    Self { client_command }
  }
}

fn committed(system: &System) -> [(&'static str, &str); 2] {
  [(GRAPHQL_SCHEMA_FILE, &system.graphql_schema), (PRISMA_SCHEMA_FILE, &system.prisma_schema)]
}

impl ArtifactStore for FsArtifacts {
  fn validate_committed(&self, system: &System, _config: &ProjectConfig, cwd: &Path) -> Result<()> {
    for (name, expected) in committed(system) {
      let path = cwd.join(name);
      let current = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
          return Err(BuildError::ArtifactDrift { file: name.to_string() }.into());
        }
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
      };
      if current != expected {
        return Err(BuildError::ArtifactDrift { file: name.to_string() }.into());
      }
      ui::detail_ok(&format!("{name} is up to date"));
    }
    Ok(())
  }

  fn write_committed(&self, system: &System, _config: &ProjectConfig, cwd: &Path) -> Result<()> {
    for (name, content) in committed(system) {
      let path = cwd.join(name);
      std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
      ui::detail_ok(name);
    }
    Ok(())
  }

  fn generate_node_modules(
    &self,
    system: &System,
    config: &ProjectConfig,
    cwd: &Path,
  ) -> Result<()> {
    let out_dir = cwd.join("node_modules").join(".keystone");
    std::fs::create_dir_all(&out_dir)
      .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let files = [
      (GRAPHQL_SCHEMA_FILE, system.graphql_schema.clone()),
      (PRISMA_SCHEMA_FILE, system.prisma_schema.clone()),
      ("types.ts", print_list_types(config)),
    ];
    for (name, content) in &files {
      let path = out_dir.join(name);
      std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    }
    ui::detail_ok("node_modules/.keystone");

    if let Some(cmd) = &self.client_command {
      run_command(cwd, cmd, "client generator", &[])
        .context(BuildError::Generation { step: "database client generation" })?;
    }
    Ok(())
  }
}

fn print_list_types(config: &ProjectConfig) -> String {
  let mut out = String::from("// Generated by Keystone. Do not edit.\n");
  for (key, list) in &config.lists {
    let _ = write!(out, "\nexport type {key} = {{\n  id: string;\n");
    for (name, field) in &list.fields {
      let ty = match field.kind {
        FieldKind::Text | FieldKind::Select | FieldKind::Password | FieldKind::Timestamp => {
          "string".to_string()
        }
        FieldKind::Integer | FieldKind::Float => "number".to_string(),
        FieldKind::Checkbox => "boolean".to_string(),
        FieldKind::Relationship if field.many => {
          format!("{}[]", field.target.as_deref().unwrap_or("unknown"))
        }
        FieldKind::Relationship => field.target.as_deref().unwrap_or("unknown").to_string(),
      };
      let nullable = if field.is_required || field.many { "" } else { " | null" };
      let _ = writeln!(out, "  {name}: {ty}{nullable};");
    }
    out.push_str("};\n");
  }
  out
}
