/* packages/cli/core/src/system/print.rs */

use std::fmt::Write;

use crate::project::{FieldConfig, FieldKind, ProjectConfig};

const GENERATED_HEADER: &str =
  "# This file is automatically generated by Keystone, do not modify it manually.\n";

pub fn print_graphql_schema(config: &ProjectConfig) -> String {
  let mut out = String::from(GENERATED_HEADER);
  for (key, list) in &config.lists {
    let _ = write!(out, "\ntype {key} {{\n  id: ID!\n");
    for (name, field) in &list.fields {
      let _ = writeln!(out, "  {name}: {}", graphql_type(field));
    }
    out.push_str("}\n");
  }
  out.push_str("\ntype Query {\n");
  for key in config.lists.keys() {
    let singular = lower_first(key);
    let _ = writeln!(out, "  {singular}(id: ID!): {key}");
    let _ = writeln!(out, "  {}: [{key}!]", plural(&singular));
  }
  out.push_str("}\n");
  out
}

fn graphql_type(field: &FieldConfig) -> String {
  let scalar = match field.kind {
    FieldKind::Text | FieldKind::Select | FieldKind::Password => "String",
    FieldKind::Integer => "Int",
    FieldKind::Float => "Float",
    FieldKind::Checkbox => "Boolean",
    FieldKind::Timestamp => "DateTime",
    FieldKind::Relationship => field.target.as_deref().unwrap_or("ID"),
  };
  if field.kind == FieldKind::Relationship && field.many {
    format!("[{scalar}!]")
  } else if field.is_required {
    format!("{scalar}!")
  } else {
    scalar.to_string()
  }
}

pub fn print_prisma_schema(config: &ProjectConfig) -> String {
  let mut out = GENERATED_HEADER.replace('#', "//");
  let provider = config.db.provider.as_str();
  let url = match &config.db.url {
    Some(url) => serde_json::Value::String(url.clone()).to_string(),
    None => "env(\"DATABASE_URL\")".to_string(),
  };
  let _ = write!(
    out,
    "\ndatasource {provider} {{\n  url      = {url}\n  provider = \"{provider}\"\n}}\n"
  );
  out.push_str(
    "\ngenerator client {\n  provider = \"prisma-client-js\"\n  output   = \"node_modules/.prisma/client\"\n}\n",
  );
  for (key, list) in &config.lists {
    let _ = write!(out, "\nmodel {key} {{\n  id String @id @default(cuid())\n");
    for (name, field) in &list.fields {
      let _ = writeln!(out, "  {name} {}", prisma_type(field));
    }
    out.push_str("}\n");
  }
  out
}

fn prisma_type(field: &FieldConfig) -> String {
  let scalar = match field.kind {
    FieldKind::Text | FieldKind::Select | FieldKind::Password => "String",
    FieldKind::Integer => "Int",
    FieldKind::Float => "Float",
    FieldKind::Checkbox => "Boolean",
    FieldKind::Timestamp => "DateTime",
    FieldKind::Relationship => field.target.as_deref().unwrap_or("String"),
  };
  if field.kind == FieldKind::Relationship && field.many {
    format!("{scalar}[]")
  } else if field.is_required {
    scalar.to_string()
  } else {
    format!("{scalar}?")
  }
}

pub(super) fn lower_first(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(c) => c.to_ascii_lowercase().to_string() + chars.as_str(),
    None => String::new(),
  }
}

pub(super) fn plural(s: &str) -> String {
  if s.ends_with('s') { format!("{s}es") } else { format!("{s}s") }
}
