/* src/menu/render/rust/src/helpers.rs */

use seam_menu::Attributes;

pub(crate) fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

// Attribute names come from caller-supplied option keys; anything that could
// break out of the tag is dropped.
fn is_safe_attr_name(name: &str) -> bool {
  !name.is_empty()
    && name.chars().all(|c| !c.is_whitespace() && !matches!(c, '"' | '\'' | '>' | '/' | '=' | '<'))
}

/// ` name="value"` pairs in key order, values escaped.
pub(crate) fn render_attrs(attrs: &Attributes) -> String {
  let mut out = String::new();
  for (name, value) in attrs {
    if !is_safe_attr_name(name) {
      continue;
    }
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
  }
  out
}
