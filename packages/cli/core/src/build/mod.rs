/* packages/cli/core/src/build/mod.rs */

pub mod admin_file;
mod collab;
pub mod context;
pub mod format;
pub mod import_path;
pub mod postinstall;
pub mod reexport;
pub mod run;

pub use collab::{AdminUi, ArtifactStore, Collaborators, ConfigLoader, SystemBuilder, Telemetry};
