/* src/menu/core/rust/src/attributes.rs */

use std::collections::BTreeMap;

/// HTML attributes rendered on an item or link, keyed by attribute name.
pub type Attributes = BTreeMap<String, String>;

/// Option keys consumed by item construction; never rendered as attributes.
pub const RESERVED_KEYS: &[&str] = &["route", "action", "url", "prefix", "parent"];

pub fn is_reserved(key: &str) -> bool {
  RESERVED_KEYS.contains(&key)
}

/// Union of the class tokens in `existing` and `class`, first occurrence order kept.
pub fn merge_class(existing: Option<&str>, class: &str) -> String {
  let mut tokens: Vec<&str> = Vec::new();
  for token in existing.unwrap_or("").split_whitespace().chain(class.split_whitespace()) {
    if !tokens.contains(&token) {
      tokens.push(token);
    }
  }
  tokens.join(" ")
}

/// Class-union `class` into the `class` entry of `attrs`.
pub(crate) fn add_class(attrs: &mut Attributes, class: &str) {
  let merged = merge_class(attrs.get("class").map(String::as_str), class);
  if merged.is_empty() {
    return;
  }
  attrs.insert("class".to_string(), merged);
}
