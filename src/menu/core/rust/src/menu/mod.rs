/* src/menu/core/rust/src/menu/mod.rs */

// Flat, insertion-ordered item store. Parent/child links are names, and every
// tree query is recomputed from the flat list, so nothing can go stale.

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::MenuConfig;
use crate::errors::{MenuError, Result};
use crate::item::{normalize_key, MenuItem};
use crate::options::ItemOptions;
use crate::request::RequestContext;
use crate::resolver::{RouteTable, UrlResolver};

pub struct Menu {
  config: MenuConfig,
  request: RequestContext,
  resolver: Box<dyn UrlResolver>,
  items: Vec<MenuItem>,
}

impl fmt::Debug for Menu {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Menu")
      .field("config", &self.config)
      .field("request", &self.request)
      .field("items", &self.items)
      .finish_non_exhaustive()
  }
}

impl Menu {
  /// Menu with root-relative URLs and no named routes.
  pub fn new(config: MenuConfig, request: RequestContext) -> Self {
    Self::with_resolver(config, request, RouteTable::default())
  }

  pub fn with_resolver(
    config: MenuConfig,
    request: RequestContext,
    resolver: impl UrlResolver + 'static,
  ) -> Self {
    Self { config, request, resolver: Box::new(resolver), items: Vec::new() }
  }

  pub fn config(&self) -> &MenuConfig {
    &self.config
  }

  pub fn request(&self) -> &RequestContext {
    &self.request
  }

  pub fn items(&self) -> &[MenuItem] {
    &self.items
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  // Duplicate names resolve to the most recently added item.
  fn position(&self, name: &str) -> Option<usize> {
    self.items.iter().rposition(|item| item.name() == name)
  }

  fn index_of(&self, name: &str) -> Result<usize> {
    self.position(name).ok_or_else(|| MenuError::ItemNotFound(name.to_string()))
  }

  pub fn get(&self, name: &str) -> Option<&MenuItem> {
    self.position(name).map(|idx| &self.items[idx])
  }

  pub fn get_mut(&mut self, name: &str) -> Option<&mut MenuItem> {
    self.position(name).map(|idx| &mut self.items[idx])
  }

  /// Create an item and, when `auto_activate` is on and the current request
  /// matches it, activate it (and its ancestors, per config).
  ///
  /// The parent, if any, must already exist. An item whose parent chain would
  /// loop back to itself is rejected and not stored.
  pub fn add_item(
    &mut self,
    name: impl Into<String>,
    title: impl Into<String>,
    options: impl Into<ItemOptions>,
  ) -> Result<&mut MenuItem> {
    let name = name.into();
    let options = options.into();

    if let Some(parent) = &options.parent {
      if self.position(parent).is_none() {
        return Err(MenuError::UnknownParent { name, parent: parent.clone() });
      }
    }
    if self.position(&name).is_some() {
      warn!(item = %name, "duplicate menu item name, lookups resolve to the newest");
    }

    let item = MenuItem::new(name, title.into(), options, &self.config, self.resolver.as_ref())?;
    self.items.push(item);
    let idx = self.items.len() - 1;

    if let Err(err) = self.walk_up(idx, |_| true) {
      self.items.pop();
      return Err(err);
    }

    if self.config.auto_activate && self.items[idx].current_url_matches(&self.request) {
      self.activate_index(idx)?;
    }
    Ok(&mut self.items[idx])
  }

  /// `add_item` with the parent forced to `parent`.
  pub fn add_sub_item(
    &mut self,
    parent: &str,
    name: impl Into<String>,
    title: impl Into<String>,
    options: impl Into<ItemOptions>,
  ) -> Result<&mut MenuItem> {
    let mut options = options.into();
    options.parent = Some(parent.to_string());
    self.add_item(name, title, options)
  }

  /// Direct children of `name`, in insertion order. Recomputed on every call.
  pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MenuItem> {
    self.items.iter().filter(move |item| item.parent() == Some(name))
  }

  pub fn has_children(&self, name: &str) -> bool {
    self.children(name).next().is_some()
  }

  /// Items whose parent is `parent` (`None` selects roots). With `recursive`,
  /// each match is followed by its own descendants (pre-order).
  pub fn where_parent(&self, parent: Option<&str>, recursive: bool) -> Vec<&MenuItem> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    self.collect(parent, recursive, &mut seen, &mut out);
    out.into_iter().map(|idx| &self.items[idx]).collect()
  }

  pub fn roots(&self) -> Vec<&MenuItem> {
    self.where_parent(None, false)
  }

  /// Every item below `name`, pre-order.
  pub fn descendants(&self, name: &str) -> Vec<&MenuItem> {
    self.descendant_indices(name).into_iter().map(|idx| &self.items[idx]).collect()
  }

  pub fn filter<P>(&self, mut predicate: P) -> Vec<&MenuItem>
  where
    P: FnMut(&MenuItem) -> bool,
  {
    self.items.iter().filter(|&item| predicate(item)).collect()
  }

  /// Items carrying active state, either on the item or on its link.
  pub fn active_items(&self) -> Vec<&MenuItem> {
    self.filter(|item| item.is_active() || item.link().is_active())
  }

  fn collect(
    &self,
    parent: Option<&str>,
    recursive: bool,
    seen: &mut HashSet<usize>,
    out: &mut Vec<usize>,
  ) {
    for (idx, item) in self.items.iter().enumerate() {
      if item.parent() != parent || !seen.insert(idx) {
        continue;
      }
      out.push(idx);
      if recursive {
        self.collect(Some(item.name()), true, seen, out);
      }
    }
  }

  fn descendant_indices(&self, name: &str) -> Vec<usize> {
    // Items named `name` never count as their own descendants.
    let mut seen: HashSet<usize> = self
      .items
      .iter()
      .enumerate()
      .filter(|(_, item)| item.name() == name)
      .map(|(idx, _)| idx)
      .collect();
    let mut out = Vec::new();
    self.collect(Some(name), true, &mut seen, &mut out);
    out
  }

  /// Chain `[idx, parent, grandparent, ...]`, continuing while `follow` holds
  /// for the current node. Errors if a node repeats.
  fn walk_up<F>(&self, idx: usize, follow: F) -> Result<Vec<usize>>
  where
    F: Fn(&MenuItem) -> bool,
  {
    let mut chain = vec![idx];
    let mut seen = HashSet::from([idx]);
    let mut current = idx;
    while follow(&self.items[current]) {
      let Some(parent) = self.items[current].parent() else {
        break;
      };
      let Some(parent_idx) = self.position(parent) else {
        break;
      };
      if !seen.insert(parent_idx) {
        return Err(MenuError::ParentCycle(self.items[idx].name().to_string()));
      }
      chain.push(parent_idx);
      current = parent_idx;
    }
    Ok(chain)
  }

  /// Activate `name`; with `activate_parents`, every ancestor as well.
  /// A parent cycle is reported before anything is changed.
  pub fn activate(&mut self, name: &str) -> Result<()> {
    let idx = self.index_of(name)?;
    self.activate_index(idx)
  }

  fn activate_index(&mut self, idx: usize) -> Result<()> {
    let chain = self.walk_up(idx, |item| item.config().activate_parents)?;
    debug!(item = %self.items[idx].name(), depth = chain.len(), "activating menu item");
    for i in chain {
      self.items[i].mark_active();
    }
    Ok(())
  }

  /// Activate `name` if the current request matches it. Returns whether it matched.
  pub fn check_activation(&mut self, name: &str) -> Result<bool> {
    let idx = self.index_of(name)?;
    let matched = self.items[idx].current_url_matches(&self.request);
    if matched {
      self.activate_index(idx)?;
    }
    Ok(matched)
  }

  /// Set the item's URL pattern, then re-run automatic activation for it.
  pub fn activate_on_url(&mut self, name: &str, pattern: &str) -> Result<bool> {
    let idx = self.index_of(name)?;
    self.items[idx].activate_on_url(pattern)?;
    if !self.items[idx].config().auto_activate {
      return Ok(false);
    }
    self.check_activation(name)
  }

  /// Merge entries into the item's metadata (keys lower-cased). With
  /// `cascade_data`, every descendant receives the same entries.
  pub fn merge_data<I, K, V>(&mut self, name: &str, entries: I) -> Result<()>
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
  {
    let idx = self.index_of(name)?;
    let entries: Vec<(String, Value)> =
      entries.into_iter().map(|(k, v)| (normalize_key(k.as_ref()), v.into())).collect();

    let mut targets = vec![idx];
    if self.items[idx].config().cascade_data {
      targets.extend(self.descendant_indices(name));
    }
    debug!(item = %name, keys = entries.len(), targets = targets.len(), "merging item data");

    for target in targets {
      for (key, value) in &entries {
        self.items[target].insert_data(key, value.clone());
      }
    }
    Ok(())
  }

  pub fn set_data(&mut self, name: &str, key: &str, value: impl Into<Value>) -> Result<()> {
    self.merge_data(name, [(key, value.into())])
  }
}
