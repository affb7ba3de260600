/* packages/cli/core/src/build/admin_file.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::format::format_source;
use crate::error::BuildError;

/// One file to place under the Admin UI project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileToWrite {
  /// Copy an asset from disk; `input_path` must be absolute.
  Copy { input_path: PathBuf, output_path: PathBuf },
  /// Write `src` after running it through `format_source`.
  Write { src: String, output_path: PathBuf },
}

impl FileToWrite {
  pub fn output_path(&self) -> &Path {
    match self {
      Self::Copy { output_path, .. } | Self::Write { output_path, .. } => output_path,
    }
  }
}

/// Materialize `file` under `admin_path`, creating parent directories and
/// overwriting whatever is there. Errors are not retried.
pub fn write_admin_file(file: &FileToWrite, admin_path: &Path) -> Result<()> {
  let output_filename = admin_path.join(file.output_path());
  match file {
    FileToWrite::Copy { input_path, .. } => {
      if !input_path.is_absolute() {
        return Err(BuildError::PathContract { path: input_path.clone() }.into());
      }
      ensure_parent(&output_filename)?;
      std::fs::copy(input_path, &output_filename).with_context(|| {
        format!("failed to copy {} to {}", input_path.display(), output_filename.display())
      })?;
    }
    FileToWrite::Write { src, .. } => {
      ensure_parent(&output_filename)?;
      std::fs::write(&output_filename, format_source(src))
        .with_context(|| format!("failed to write {}", output_filename.display()))?;
    }
  }
  Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn write_formats_and_creates_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let admin = dir.path().join("admin");
    let file = FileToWrite::Write {
      src: "export const a = 1;   \n\n\n".to_string(),
      output_path: PathBuf::from("pages/api/a.js"),
    };
    write_admin_file(&file, &admin).unwrap();
    let written = std::fs::read_to_string(admin.join("pages/api/a.js")).unwrap();
    assert_eq!(written, "export const a = 1;\n");
  }

  #[test]
  fn copy_overwrites_existing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("next.config.js");
    std::fs::write(&input, "module.exports = {};\n").unwrap();
    let admin = dir.path().join("admin");
    std::fs::create_dir_all(&admin).unwrap();
    std::fs::write(admin.join("next.config.js"), "stale").unwrap();

    let file =
      FileToWrite::Copy { input_path: input, output_path: PathBuf::from("next.config.js") };
    write_admin_file(&file, &admin).unwrap();
    assert_eq!(
      std::fs::read_to_string(admin.join("next.config.js")).unwrap(),
      "module.exports = {};\n"
    );
  }

  #[test]
  fn relative_copy_input_fails_before_touching_disk() {
    let dir = tempfile::tempdir().unwrap();
    let admin = dir.path().join("admin");
    let file = FileToWrite::Copy {
      input_path: PathBuf::from("static/next.config.js"),
      output_path: PathBuf::from("nested/next.config.js"),
    };
    let err = write_admin_file(&file, &admin).unwrap_err();
    match err.downcast_ref::<BuildError>() {
      Some(BuildError::PathContract { path }) => {
        assert_eq!(path, Path::new("static/next.config.js"));
      }
      other => panic!("expected path contract error, got {other:?}"),
    }
    assert!(err.to_string().contains("\"static/next.config.js\""));
    assert!(!admin.exists());
  }

  #[test]
  fn materializing_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let admin = dir.path().join("admin");
    let input = dir.path().join("tsconfig.json");
    std::fs::write(&input, "{ \"compilerOptions\": {} }\n").unwrap();
    let files = [
      FileToWrite::Write {
        src: "export default 1;\n    export const b = 2;".to_string(),
        output_path: PathBuf::from("pages/index.js"),
      },
      FileToWrite::Copy { input_path: input, output_path: PathBuf::from("tsconfig.json") },
    ];
    for file in &files {
      write_admin_file(file, &admin).unwrap();
    }
    let first: Vec<Vec<u8>> =
      files.iter().map(|f| std::fs::read(admin.join(f.output_path())).unwrap()).collect();
    for file in &files {
      write_admin_file(file, &admin).unwrap();
    }
    let second: Vec<Vec<u8>> =
      files.iter().map(|f| std::fs::read(admin.join(f.output_path())).unwrap()).collect();
    assert_eq!(first, second);
  }

  #[test]
  fn missing_copy_source_propagates_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = FileToWrite::Copy {
      input_path: dir.path().join("nope.js"),
      output_path: PathBuf::from("nope.js"),
    };
    let err = write_admin_file(&file, &dir.path().join("admin")).unwrap_err();
    assert!(err.downcast_ref::<std::io::Error>().is_some());
  }
}
