/* packages/cli/core/src/build/reexport.rs */

// Re-export the Keystone config into the Admin UI project so `next build`
// compiles it into `.next/`. Runs even when the Admin UI is disabled, in which
// case the minimal Next.js scaffold is copied in as well.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tokio::task::JoinSet;

use super::admin_file::{FileToWrite, write_admin_file};
use super::context::{AdminUiMode, BuildPaths, STATIC_PACKAGE_DIR};
use super::import_path::{relative_path, serialize_path_for_import};
use crate::error::BuildError;
use crate::ui;

pub const API_BUILD_ROUTE: &str = "pages/api/__keystone_api_build.js";

/// Source of the API route that pulls the config into the production compile graph.
/// The route itself is never meant to be requested.
pub fn api_build_route_src(config_path: &Path, admin_path: &Path) -> String {
  let api_dir = admin_path.join("pages").join("api");
  let import_path = serialize_path_for_import(&relative_path(&api_dir, config_path));
  format!(
    "export {{ default as config }} from {import_path};\n\
     export default function (req, res) {{\n  return res.status(500);\n}}\n"
  )
}

/// Files the re-export phase materializes for `mode`.
pub fn reexport_files(paths: &BuildPaths, mode: AdminUiMode) -> Result<Vec<FileToWrite>> {
  let mut files = vec![FileToWrite::Write {
    src: api_build_route_src(&paths.config_path, &paths.admin_path),
    output_path: PathBuf::from(API_BUILD_ROUTE),
  }];
  if mode.is_disabled() {
    let Some(static_dir) = &paths.static_dir else {
      return Err(BuildError::Config(format!(
        "no Next.js scaffold found; install {STATIC_PACKAGE_DIR} or set build.static_dir in keystone.toml"
      ))
      .into());
    };
    // Basic files a valid Next.js project needs when nothing else was generated
    for name in ["next.config.js", "tsconfig.json"] {
      files.push(FileToWrite::Copy {
        input_path: static_dir.join(name),
        output_path: PathBuf::from(name),
      });
    }
  }
  Ok(files)
}

/// Returns the number of files written.
pub async fn reexport_keystone_config(paths: &BuildPaths, mode: AdminUiMode) -> Result<usize> {
  let files = reexport_files(paths, mode)?;
  if mode.is_disabled() {
    remove_admin_dir(&paths.admin_path).await?;
  }
  let count = files.len();

  let mut join_set = JoinSet::new();
  for file in files {
    let admin_path = paths.admin_path.clone();
    join_set.spawn_blocking(move || {
      write_admin_file(&file, &admin_path)?;
      Ok::<_, anyhow::Error>(file.output_path().to_path_buf())
    });
  }

  // Let every write settle; siblings that finished are left in place.
  let mut first_error = None;
  while let Some(joined) = join_set.join_next().await {
    match joined {
      Ok(Ok(output_path)) => ui::detail_ok(&output_path.display().to_string()),
      Ok(Err(e)) => {
        first_error.get_or_insert(e);
      }
      Err(e) => {
        first_error.get_or_insert(anyhow!("admin file task panicked: {e}"));
      }
    }
  }
  match first_error {
    Some(e) => Err(e),
    None => Ok(count),
  }
}

async fn remove_admin_dir(admin_path: &Path) -> Result<()> {
  match tokio::fs::remove_dir_all(admin_path).await {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
    Err(e) => Err(e).with_context(|| format!("failed to remove {}", admin_path.display())),
  }
}
