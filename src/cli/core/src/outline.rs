/* src/cli/core/src/outline.rs */

// Indented text view of a menu for the `tree` command.

use seam_menu::{Menu, MenuItem};

use crate::ui::{BOLD, DIM, GREEN, RESET};

pub fn outline(menu: &Menu, color: bool) -> String {
  let mut out = String::new();
  let mut path = Vec::new();
  for root in menu.roots() {
    write_item(menu, root, color, &mut path, &mut out);
  }
  out
}

fn write_item<'a>(
  menu: &'a Menu,
  item: &'a MenuItem,
  color: bool,
  path: &mut Vec<&'a str>,
  out: &mut String,
) {
  if path.contains(&item.name()) {
    return;
  }
  let indent = "  ".repeat(path.len());
  let active = item.is_active() || item.link().is_active();
  let marker = match (active, color) {
    (true, true) => format!("{GREEN}*{RESET}"),
    (true, false) => "*".to_string(),
    (false, _) => "-".to_string(),
  };
  let url = item.url().unwrap_or("(no link)");
  if color {
    out.push_str(&format!("{indent}{marker} {BOLD}{}{RESET} {DIM}{url}{RESET}\n", item.title()));
  } else {
    out.push_str(&format!("{indent}{marker} {} {url}\n", item.title()));
  }

  path.push(item.name());
  for child in menu.children(item.name()) {
    write_item(menu, child, color, path, out);
  }
  path.pop();
}
