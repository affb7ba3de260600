/* packages/cli/core/src/admin_ui.rs */

// Admin UI: write the Next.js pages for each list, then build with `next build`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::build::AdminUi;
use crate::build::admin_file::{FileToWrite, write_admin_file};
use crate::error::BuildError;
use crate::project::ProjectConfig;
use crate::shell::run_command;
use crate::system::{AdminMeta, System};
use crate::ui;

pub const ADMIN_META_FILE: &str = "admin-meta.json";

#[derive(Debug, Clone)]
pub struct NextAdminUi {
  pub generate_command: Option<String>,
  pub build_command: String,
}

impl NextAdminUi {
  pub fn new(generate_command: Option<String>, build_command: String) -> Self {
    Self { generate_command, build_command }
  }
}

impl AdminUi for NextAdminUi {
  fn generate(&self, _config: &ProjectConfig, system: &System, admin_path: &Path) -> Result<()> {
    let files = admin_ui_files(&system.admin_meta)?;
    clear_generated_pages(admin_path)?;
    for file in &files {
      write_admin_file(file, admin_path)?;
    }
    ui::detail_ok(&format!("{} Admin UI files", files.len()));

    if let Some(cmd) = &self.generate_command {
      let meta_path = admin_path.join(ADMIN_META_FILE);
      let meta_env = meta_path.to_string_lossy();
      let env = [("KEYSTONE_ADMIN_META", meta_env.as_ref())];
      run_command(admin_path, cmd, "Admin UI generator", &env)
        .context(BuildError::Generation { step: "Admin UI code generation" })?;
    }
    Ok(())
  }

  fn build(&self, admin_path: &Path) -> Result<()> {
    run_command(admin_path, &self.build_command, "Admin UI build", &[])
      .context(BuildError::Generation { step: "Admin UI build" })
  }
}

/// Drop previously generated pages so removed lists don't linger. `pages/api`
/// belongs to the re-export phase and is left alone.
fn clear_generated_pages(admin_path: &Path) -> Result<()> {
  let pages = admin_path.join("pages");
  let entries = match std::fs::read_dir(&pages) {
    Ok(entries) => entries,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
    Err(e) => return Err(e).with_context(|| format!("failed to read {}", pages.display())),
  };
  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read {}", pages.display()))?;
    if entry.file_name() == "api" {
      continue;
    }
    let path = entry.path();
    let removed =
      if path.is_dir() { std::fs::remove_dir_all(&path) } else { std::fs::remove_file(&path) };
    removed.with_context(|| format!("failed to remove {}", path.display()))?;
  }
  Ok(())
}

/// Pages and metadata for a generated Admin UI.
pub fn admin_ui_files(meta: &AdminMeta) -> Result<Vec<FileToWrite>> {
  let meta_json = serde_json::to_string_pretty(meta).context("failed to serialize admin meta")?;
  let mut files = vec![
    FileToWrite::Write { src: meta_json, output_path: PathBuf::from(ADMIN_META_FILE) },
    FileToWrite::Write {
      src: "import adminMeta from '../admin-meta.json';
            export default function HomePage() {
              return Object.keys(adminMeta.lists);
            }"
        .to_string(),
      output_path: PathBuf::from("pages/index.js"),
    },
  ];
  for list in meta.lists.values() {
    let key = serde_json::Value::String(list.key.clone());
    files.push(FileToWrite::Write {
      src: format!(
        "import adminMeta from '../../admin-meta.json';
            export const listKey = {key};
            export default function ListPage() {{
              return adminMeta.lists[listKey];
            }}"
      ),
      output_path: PathBuf::from("pages").join(&list.path).join("index.js"),
    });
  }
  Ok(files)
}
