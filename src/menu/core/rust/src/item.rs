/* src/menu/core/rust/src/item.rs */

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::attributes::{add_class, is_reserved, Attributes};
use crate::config::{ActiveElement, MenuConfig};
use crate::errors::Result;
use crate::link::Link;
use crate::options::ItemOptions;
use crate::pattern::{is_below, UrlPattern};
use crate::request::{extract_path, RequestContext};
use crate::resolver::UrlResolver;

/// Free-form per-item data. Keys are stored lower-cased.
pub type Metadata = BTreeMap<String, Value>;

/// Names readable through [`MenuItem::get`] before metadata is consulted.
const DECLARED_FIELDS: &[&str] = &["name", "title", "url", "parent", "active"];

pub(crate) fn normalize_key(key: &str) -> String {
  key.to_lowercase()
}

/// One node of a menu. Tree operations (children, activation, cascading data)
/// live on [`crate::Menu`], which owns every item.
#[derive(Debug, Clone)]
pub struct MenuItem {
  name: String,
  title: String,
  parent: Option<String>,
  active: bool,
  attributes: Attributes,
  metadata: Metadata,
  link: Link,
  active_pattern: Option<UrlPattern>,
  config: MenuConfig,
}

impl MenuItem {
  pub(crate) fn new(
    name: String,
    title: String,
    options: ItemOptions,
    config: &MenuConfig,
    resolver: &dyn UrlResolver,
  ) -> Result<Self> {
    let ItemOptions { link, parent, prefix, active_pattern, attributes } = options;
    let active_pattern = active_pattern.as_deref().map(UrlPattern::new).transpose()?;
    let link = Link::new(link.as_ref(), prefix.as_deref(), resolver, &config.active_class);
    Ok(Self {
      name,
      title,
      parent,
      active: false,
      attributes,
      metadata: Metadata::new(),
      link,
      active_pattern,
      config: config.clone(),
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
    self.title = title.into();
    self
  }

  pub fn prepend(&mut self, text: &str) -> &mut Self {
    self.title.insert_str(0, text);
    self
  }

  pub fn append(&mut self, text: &str) -> &mut Self {
    self.title.push_str(text);
    self
  }

  pub fn url(&self) -> Option<&str> {
    self.link.url()
  }

  pub fn link(&self) -> &Link {
    &self.link
  }

  pub fn link_mut(&mut self) -> &mut Link {
    &mut self.link
  }

  pub fn parent(&self) -> Option<&str> {
    self.parent.as_deref()
  }

  pub fn has_parent(&self) -> bool {
    self.parent.is_some()
  }

  pub fn is_active(&self) -> bool {
    self.active
  }

  /// Config snapshot taken when the item was added.
  pub fn config(&self) -> &MenuConfig {
    &self.config
  }

  pub fn attributes(&self) -> &Attributes {
    &self.attributes
  }

  pub fn attr(&self, name: &str) -> Option<&str> {
    self.attributes.get(name).map(String::as_str)
  }

  pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
    let name = name.into();
    if is_reserved(&name) {
      warn!(item = %self.name, attr = %name, "ignoring reserved key as item attribute");
      return self;
    }
    self.attributes.insert(name, value.into());
    self
  }

  pub fn active_pattern(&self) -> Option<&UrlPattern> {
    self.active_pattern.as_ref()
  }

  /// Store a glob pattern for URL activation. Does not re-check activation;
  /// use [`crate::Menu::activate_on_url`] for that.
  pub fn activate_on_url(&mut self, pattern: &str) -> Result<&mut Self> {
    self.active_pattern = Some(UrlPattern::new(pattern)?);
    Ok(self)
  }

  pub fn data(&self) -> &Metadata {
    &self.metadata
  }

  pub fn data_value(&self, key: &str) -> Option<&Value> {
    self.metadata.get(&normalize_key(key))
  }

  pub fn has_data(&self, key: &str) -> bool {
    self.metadata.contains_key(&normalize_key(key))
  }

  /// True for declared fields, attribute keys and metadata keys.
  pub fn has_property(&self, name: &str) -> bool {
    DECLARED_FIELDS.contains(&name) || self.attributes.contains_key(name) || self.has_data(name)
  }

  /// Read a declared field by name, falling back to metadata.
  pub fn get(&self, name: &str) -> Option<Value> {
    let field = match name {
      "name" => Value::String(self.name.clone()),
      "title" => Value::String(self.title.clone()),
      "url" => self.url().map_or(Value::Null, |u| Value::String(u.to_string())),
      "parent" => self.parent.clone().map_or(Value::Null, Value::String),
      "active" => Value::Bool(self.active),
      _ => return self.data_value(name).cloned(),
    };
    Some(field)
  }

  /// Whether the request should activate this item. A pattern, when set, is the
  /// only criterion; otherwise the URL must equal the request URL (or, with
  /// `restful`, the request path must sit at or below the item's path).
  pub fn current_url_matches(&self, request: &RequestContext) -> bool {
    if let Some(pattern) = &self.active_pattern {
      return pattern.matches(&request.path);
    }
    let Some(url) = self.url() else {
      return false;
    };
    if url == request.url {
      return true;
    }
    self.config.restful && is_below(&extract_path(url), &request.path)
  }

  /// Activate this node only; ancestor propagation is the menu's job.
  /// A link without a url is never rendered, so the item takes the state instead.
  pub(crate) fn mark_active(&mut self) {
    match self.config.active_element {
      ActiveElement::Link if self.link.url().is_some() => self.link.activate(),
      _ => {
        self.active = true;
        add_class(&mut self.attributes, &self.config.active_class);
      }
    }
  }

  pub(crate) fn insert_data(&mut self, key: &str, value: Value) {
    self.metadata.insert(normalize_key(key), value);
  }
}
