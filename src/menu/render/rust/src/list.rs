/* src/menu/render/rust/src/list.rs */

//! Nested list markup for a menu. Items render in insertion order, children
//! nested inside their parent's entry.

use seam_menu::{Menu, MenuItem};

use crate::helpers::{escape_html, render_attrs};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
  #[default]
  Ul,
  Ol,
  Div,
}

impl ListTag {
  fn container(self) -> &'static str {
    match self {
      Self::Ul => "ul",
      Self::Ol => "ol",
      Self::Div => "div",
    }
  }

  fn entry(self) -> &'static str {
    match self {
      Self::Ul | Self::Ol => "li",
      Self::Div => "div",
    }
  }
}

/// Render every root item and its subtree.
pub fn render_menu(menu: &Menu, tag: ListTag) -> String {
  let mut ancestors = Vec::new();
  render_list(menu, &menu.roots(), tag, &mut ancestors)
}

/// Render the subtree below `name` (a sub-menu). `None` if it has no children.
pub fn render_children(menu: &Menu, name: &str, tag: ListTag) -> Option<String> {
  let children: Vec<&MenuItem> = menu.children(name).collect();
  if children.is_empty() {
    return None;
  }
  let mut ancestors = vec![name];
  Some(render_list(menu, &children, tag, &mut ancestors))
}

fn render_list<'a>(
  menu: &'a Menu,
  items: &[&'a MenuItem],
  tag: ListTag,
  ancestors: &mut Vec<&'a str>,
) -> String {
  let container = tag.container();
  let mut out = format!("<{container}>");
  for &item in items {
    // A name already on the path would recurse forever.
    if ancestors.contains(&item.name()) {
      continue;
    }
    render_entry(menu, item, tag, ancestors, &mut out);
  }
  out.push_str(&format!("</{container}>"));
  out
}

fn render_entry<'a>(
  menu: &'a Menu,
  item: &'a MenuItem,
  tag: ListTag,
  ancestors: &mut Vec<&'a str>,
  out: &mut String,
) {
  let entry = tag.entry();
  out.push_str(&format!("<{entry}{}>", render_attrs(item.attributes())));

  let title = escape_html(item.title());
  match item.url() {
    Some(url) => {
      let link_attrs = render_attrs(item.link().attributes());
      out.push_str(&format!("<a href=\"{}\"{link_attrs}>{title}</a>", escape_html(url)));
    }
    None => out.push_str(&format!("<span>{title}</span>")),
  }

  let children: Vec<&MenuItem> = menu.children(item.name()).collect();
  if !children.is_empty() {
    ancestors.push(item.name());
    out.push_str(&render_list(menu, &children, tag, ancestors));
    ancestors.pop();
  }

  out.push_str(&format!("</{entry}>"));
}
