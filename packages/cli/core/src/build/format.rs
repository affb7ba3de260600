/* packages/cli/core/src/build/format.rs */

// Whitespace normalization for generated JS. Every `write` file goes through here.

/// Dedent template-style source (the first line never carries the indent),
/// trim trailing whitespace, collapse blank runs, end with a single newline.
pub fn format_source(src: &str) -> String {
  let lines: Vec<&str> = src.lines().collect();
  let indent = lines
    .iter()
    .skip(1)
    .filter(|l| !l.trim().is_empty())
    .map(|l| l.len() - l.trim_start().len())
    .min()
    .unwrap_or(0);

  let mut out = String::with_capacity(src.len());
  let mut blank_run = false;
  for (i, line) in lines.iter().enumerate() {
    let line = if i == 0 { line.trim_start() } else { strip_indent(line, indent) };
    let line = line.trim_end();
    if line.is_empty() {
      blank_run = !out.is_empty();
      continue;
    }
    if blank_run {
      out.push('\n');
      blank_run = false;
    }
    out.push_str(line);
    out.push('\n');
  }
  out
}

fn strip_indent(line: &str, indent: usize) -> &str {
  let mut cut = 0;
  for (i, c) in line.char_indices() {
    if i >= indent || !c.is_whitespace() {
      break;
    }
    cut = i + c.len_utf8();
  }
  &line[cut..]
}
