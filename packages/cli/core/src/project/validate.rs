/* packages/cli/core/src/project/validate.rs */

use anyhow::Result;

use super::{FieldKind, ProjectConfig};
use crate::error::BuildError;

/// Check the loaded config before anything derives from it.
pub fn init_config(config: ProjectConfig) -> Result<ProjectConfig> {
  if config.lists.is_empty() {
    return Err(BuildError::Config("at least one list must be defined".to_string()).into());
  }
  for (key, list) in &config.lists {
    if !is_pascal_case(key) {
      return Err(
        BuildError::Config(format!("list key \"{key}\" must be a PascalCase identifier")).into(),
      );
    }
    if list.fields.is_empty() {
      return Err(BuildError::Config(format!("list \"{key}\" has no fields")).into());
    }
    for (name, field) in &list.fields {
      if name == "id" {
        return Err(
          BuildError::Config(format!("{key}.id is reserved and cannot be configured")).into(),
        );
      }
      if field.kind != FieldKind::Relationship {
        continue;
      }
      match field.target.as_deref() {
        Some(target) if config.lists.contains_key(target) => {}
        Some(target) => {
          return Err(
            BuildError::Config(format!(
              "{key}.{name} refers to list \"{target}\" which does not exist"
            ))
            .into(),
          );
        }
        None => {
          return Err(
            BuildError::Config(format!("relationship field {key}.{name} is missing ref")).into(),
          );
        }
      }
    }
  }
  Ok(config)
}

fn is_pascal_case(key: &str) -> bool {
  let mut chars = key.chars();
  chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}
