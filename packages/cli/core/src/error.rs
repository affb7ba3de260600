/* packages/cli/core/src/error.rs */

use std::path::PathBuf;

use thiserror::Error;

/// Fatal build failures that callers may want to tell apart.
/// Everything else (filesystem, process spawn) travels as a plain `anyhow` chain.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error("invalid Keystone config: {0}")]
  Config(String),

  #[error("{file} is out of date -- run `keystone postinstall --fix` to update it")]
  ArtifactDrift { file: String },

  #[error("{step} failed")]
  Generation { step: &'static str },

  #[error(
    "An inputPath of \"{}\" was provided to copy but inputPaths must be absolute",
    path.display()
  )]
  PathContract { path: PathBuf },
}
