/* packages/cli/core/src/build/import_path.rs */

use std::path::{Component, Path, PathBuf};

/// Relative path from directory `from` to `to`. Both are expected to be absolute.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
  let from: Vec<Component> = from.components().collect();
  let to: Vec<Component> = to.components().collect();
  let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

  let mut rel = PathBuf::new();
  for _ in common..from.len() {
    rel.push("..");
  }
  for part in &to[common..] {
    rel.push(part.as_os_str());
  }
  rel
}

/// Render a relative path as a JS module specifier string literal (quotes included).
/// Separators become `/` and a `.ts`/`.tsx` extension is dropped, since Next
/// refuses imports that name TypeScript extensions.
pub fn serialize_path_for_import(path: &Path) -> String {
  let joined = path
    .components()
    .map(|c| c.as_os_str().to_string_lossy().into_owned())
    .collect::<Vec<_>>()
    .join("/");
  let stripped = joined
    .strip_suffix(".tsx")
    .or_else(|| joined.strip_suffix(".ts"))
    .unwrap_or(&joined);
  let specifier =
    if stripped.starts_with('.') { stripped.to_string() } else { format!("./{stripped}") };
  serde_json::Value::String(specifier).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn relative_from_api_routes_to_config() {
    let rel = relative_path(
      Path::new("/work/app/.keystone/admin/pages/api"),
      Path::new("/work/app/keystone.ts"),
    );
    assert_eq!(rel, PathBuf::from("../../../../keystone.ts"));
  }

  #[test]
  fn relative_into_subdirectory() {
    let rel = relative_path(Path::new("/work/app"), Path::new("/work/app/src/keystone.ts"));
    assert_eq!(rel, PathBuf::from("src/keystone.ts"));
  }

  #[test]
  fn serialize_strips_ts_extension() {
    assert_eq!(
      serialize_path_for_import(Path::new("../../../../keystone.ts")),
      r#""../../../../keystone""#
    );
    assert_eq!(serialize_path_for_import(Path::new("../config.tsx")), r#""../config""#);
    assert_eq!(serialize_path_for_import(Path::new("../keystone.js")), r#""../keystone.js""#);
  }

  #[test]
  fn serialize_adds_dot_prefix() {
    assert_eq!(serialize_path_for_import(Path::new("src/keystone.ts")), r#""./src/keystone""#);
  }

  #[test]
  fn serialize_escapes_quotes() {
    assert_eq!(
      serialize_path_for_import(Path::new("../we\"ird/keystone.ts")),
      r#""../we\"ird/keystone""#
    );
  }
}
