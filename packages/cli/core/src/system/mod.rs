/* packages/cli/core/src/system/mod.rs */

// Schema + Admin UI metadata derived from the project config. Pure; no I/O.

mod meta;
mod print;

use anyhow::Result;

use crate::build::SystemBuilder;
use crate::project::ProjectConfig;

pub use meta::AdminMeta;
pub use print::{print_graphql_schema, print_prisma_schema};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System {
  pub graphql_schema: String,
  pub prisma_schema: String,
  pub admin_meta: AdminMeta,
}

pub fn create_system(config: &ProjectConfig) -> System {
  System {
    graphql_schema: print_graphql_schema(config),
    prisma_schema: print_prisma_schema(config),
    admin_meta: AdminMeta::from_config(config),
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSystemBuilder;

impl SystemBuilder for DefaultSystemBuilder {
  fn create_system(&self, config: &ProjectConfig) -> Result<System> {
    Ok(create_system(config))
  }
}
