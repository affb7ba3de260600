/* packages/cli/core/src/system/meta.rs */

use std::collections::BTreeMap;

use serde::Serialize;

use super::print::{lower_first, plural};
use crate::project::{FieldKind, ProjectConfig};

/// Admin UI metadata, serialized as-is into the generated interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMeta {
  pub enable_signout: bool,
  pub enable_session_item: bool,
  pub lists: BTreeMap<String, ListMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
  pub key: String,
  pub label: String,
  pub plural: String,
  pub path: String,
  pub fields: Vec<FieldMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMeta {
  pub path: String,
  pub label: String,
  pub kind: FieldKind,
}

impl AdminMeta {
  pub fn from_config(config: &ProjectConfig) -> Self {
    let lists = config
      .lists
      .iter()
      .map(|(key, list)| {
        let label = plural(&title_case(key));
        let meta = ListMeta {
          key: key.clone(),
          path: kebab_case(&plural(key)),
          plural: label.clone(),
          label,
          fields: list
            .fields
            .iter()
            .map(|(name, field)| FieldMeta {
              path: name.clone(),
              label: title_case(name),
              kind: field.kind,
            })
            .collect(),
        };
        (key.clone(), meta)
      })
      .collect();
    Self { enable_signout: false, enable_session_item: false, lists }
  }
}

/// `blogPost` / `BlogPost` -> `Blog Post`
fn title_case(s: &str) -> String {
  let mut out = String::new();
  for (i, c) in s.chars().enumerate() {
    if i == 0 {
      out.push(c.to_ascii_uppercase());
    } else if c.is_ascii_uppercase() {
      out.push(' ');
      out.push(c);
    } else {
      out.push(c);
    }
  }
  out
}

/// `BlogPosts` -> `blog-posts`
fn kebab_case(s: &str) -> String {
  let words = title_case(s);
  lower_first(&words).split(' ').map(str::to_ascii_lowercase).collect::<Vec<_>>().join("-")
}
