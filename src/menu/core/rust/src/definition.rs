/* src/menu/core/rust/src/definition.rs */

//! Declarative menus: a TOML file with `[menu]` config, `[routes]` and an
//! ordered `[[items]]` list. Parents must be declared before their children.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::config::MenuConfig;
use crate::errors::{MenuError, Result};
use crate::link::LinkSpec;
use crate::menu::Menu;
use crate::options::ItemOptions;
use crate::request::RequestContext;
use crate::resolver::RouteTable;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuDefinition {
  #[serde(default)]
  pub menu: MenuConfig,
  #[serde(default)]
  pub routes: RouteTable,
  #[serde(default)]
  pub items: Vec<ItemDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemDefinition {
  pub name: String,
  pub title: String,
  /// Positional parameters for a `route` or `action` link.
  #[serde(default)]
  pub params: Vec<String>,
  #[serde(default)]
  pub active_pattern: Option<String>,
  #[serde(default)]
  pub data: BTreeMap<String, Value>,
  /// `url`/`route`/`action`, `parent`, `prefix`, and render attributes.
  #[serde(flatten)]
  pub options: BTreeMap<String, String>,
}

impl ItemDefinition {
  fn to_options(&self) -> Result<ItemOptions> {
    let mut options = ItemOptions::from_map(self.options.clone())?;
    options.link = match options.link {
      Some(LinkSpec::Route { name, .. }) => {
        Some(LinkSpec::Route { name, params: self.params.clone() })
      }
      Some(LinkSpec::Action { name, .. }) => {
        Some(LinkSpec::Action { name, params: self.params.clone() })
      }
      other => other,
    };
    options.active_pattern = self.active_pattern.clone();
    Ok(options)
  }
}

impl MenuDefinition {
  pub fn from_toml_str(content: &str) -> Result<Self> {
    Ok(toml::from_str(content)?)
  }

  /// Build the menu for one request. Data is merged once every item exists,
  /// in declaration order, so a parent's data cascades first and a child's
  /// own entries win.
  pub fn build(&self, request: RequestContext) -> Result<Menu> {
    let mut menu = Menu::with_resolver(self.menu.clone(), request, self.routes.clone());
    for def in &self.items {
      menu.add_item(def.name.as_str(), def.title.as_str(), def.to_options()?)?;
    }
    for def in self.items.iter().filter(|def| !def.data.is_empty()) {
      menu.merge_data(&def.name, def.data.clone())?;
    }
    Ok(menu)
  }
}

pub fn load_menu_definition(path: &Path) -> Result<MenuDefinition> {
  let content = std::fs::read_to_string(path)
    .map_err(|source| MenuError::Io { path: path.to_path_buf(), source })?;
  MenuDefinition::from_toml_str(&content)
}
