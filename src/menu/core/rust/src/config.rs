/* src/menu/core/rust/src/config.rs */

use serde::Deserialize;

/// Which element receives the active class when an item is activated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveElement {
  #[default]
  Item,
  Link,
}

impl ActiveElement {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Item => "item",
      Self::Link => "link",
    }
  }
}

/// Menu-wide behavior. Every item keeps its own copy, taken when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuConfig {
  #[serde(default = "default_active_class")]
  pub active_class: String,
  /// Activate items whose URL matches the current request as they are added.
  #[serde(default = "default_true")]
  pub auto_activate: bool,
  #[serde(default)]
  pub active_element: ActiveElement,
  /// Activating an item also activates its ancestors.
  #[serde(default = "default_true")]
  pub activate_parents: bool,
  /// Metadata written to an item is copied into all of its descendants.
  #[serde(default = "default_true")]
  pub cascade_data: bool,
  /// Treat any request path below an item's path as a match.
  #[serde(default)]
  pub restful: bool,
}

impl Default for MenuConfig {
  fn default() -> Self {
    Self {
      active_class: default_active_class(),
      auto_activate: true,
      active_element: ActiveElement::Item,
      activate_parents: true,
      cascade_data: true,
      restful: false,
    }
  }
}

fn default_active_class() -> String {
  "active".to_string()
}

fn default_true() -> bool {
  true
}
