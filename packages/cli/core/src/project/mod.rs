/* packages/cli/core/src/project/mod.rs */

// Resolved Keystone project config: what `keystone.ts` default-exports,
// reduced to the parts the build needs.

mod loader;
mod validate;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use loader::JsConfigLoader;
pub use validate::init_config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
  pub db: DbConfig,
  pub lists: BTreeMap<String, ListConfig>,
  #[serde(default)]
  pub ui: Option<UiConfig>,
}

impl ProjectConfig {
  pub fn is_ui_disabled(&self) -> bool {
    self.ui.as_ref().is_some_and(|ui| ui.is_disabled)
  }

  pub fn field_count(&self) -> usize {
    self.lists.values().map(|l| l.fields.len()).sum()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbProvider {
  Postgresql,
  Sqlite,
  Mysql,
}

impl DbProvider {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Postgresql => "postgresql",
      Self::Sqlite => "sqlite",
      Self::Mysql => "mysql",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
  pub provider: DbProvider,
  #[serde(default)]
  pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
  pub fields: BTreeMap<String, FieldConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
  pub kind: FieldKind,
  #[serde(default)]
  pub is_required: bool,
  /// Target list for `relationship` fields
  #[serde(default, rename = "ref")]
  pub target: Option<String>,
  #[serde(default)]
  pub many: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
  Text,
  Integer,
  Float,
  Checkbox,
  Timestamp,
  Password,
  Select,
  Relationship,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
  #[serde(default)]
  pub is_disabled: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_loader_output() {
    let config: ProjectConfig = serde_json::from_str(
      r#"{
        "db": { "provider": "sqlite", "url": "file:./app.db" },
        "lists": {
          "Post": {
            "fields": {
              "title": { "kind": "text", "isRequired": true },
              "author": { "kind": "relationship", "ref": "User" }
            }
          },
          "User": { "fields": { "name": { "kind": "text" } } }
        },
        "ui": { "isDisabled": true }
      }"#,
    )
    .unwrap();
    assert_eq!(config.db.provider, DbProvider::Sqlite);
    assert_eq!(config.lists.len(), 2);
    assert_eq!(config.field_count(), 3);
    let author = &config.lists["Post"].fields["author"];
    assert_eq!(author.kind, FieldKind::Relationship);
    assert_eq!(author.target.as_deref(), Some("User"));
    assert!(config.is_ui_disabled());
  }

  #[test]
  fn ui_defaults_to_enabled() {
    let config: ProjectConfig = serde_json::from_str(
      r#"{ "db": { "provider": "postgresql" }, "lists": {} }"#,
    )
    .unwrap();
    assert!(!config.is_ui_disabled());
    let config: ProjectConfig = serde_json::from_str(
      r#"{ "db": { "provider": "postgresql" }, "lists": {}, "ui": {} }"#,
    )
    .unwrap();
    assert!(!config.is_ui_disabled());
  }

  #[test]
  fn unknown_provider_rejected() {
    let result =
      serde_json::from_str::<ProjectConfig>(r#"{ "db": { "provider": "mongodb" }, "lists": {} }"#);
    assert!(result.is_err());
  }
}
