/* src/menu/core/rust/src/options.rs */

use tracing::warn;

use crate::attributes::{is_reserved, Attributes};
use crate::errors::{MenuError, Result};
use crate::link::LinkSpec;

/// Construction options for a menu item.
/// A bare string converts into `{ url }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemOptions {
  pub link: Option<LinkSpec>,
  pub parent: Option<String>,
  pub prefix: Option<String>,
  pub active_pattern: Option<String>,
  pub attributes: Attributes,
}

fn owned<I, S>(params: I) -> Vec<String>
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  params.into_iter().map(Into::into).collect()
}

impl ItemOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn url(mut self, url: impl Into<String>) -> Self {
    self.link = Some(LinkSpec::Url(url.into()));
    self
  }

  pub fn route<I, S>(mut self, name: impl Into<String>, params: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.link = Some(LinkSpec::Route { name: name.into(), params: owned(params) });
    self
  }

  pub fn action<I, S>(mut self, name: impl Into<String>, params: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.link = Some(LinkSpec::Action { name: name.into(), params: owned(params) });
    self
  }

  pub fn parent(mut self, parent: impl Into<String>) -> Self {
    self.parent = Some(parent.into());
    self
  }

  pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
    self.prefix = Some(prefix.into());
    self
  }

  /// Glob pattern checked against the request path, see [`crate::UrlPattern`].
  pub fn active_on(mut self, pattern: impl Into<String>) -> Self {
    self.active_pattern = Some(pattern.into());
    self
  }

  /// Reserved keys are dropped with a warning; use the dedicated setters.
  pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    let name = name.into();
    if is_reserved(&name) {
      warn!(attr = %name, "ignoring reserved key as item attribute");
      return self;
    }
    self.attributes.insert(name, value.into());
    self
  }

  /// Split a flat option map: link source, `parent`, `prefix`, the rest are attributes.
  /// Route and action entries carry no params in this form.
  pub fn from_map<I, K, V>(entries: I) -> Result<Self>
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    let mut options = Self::new();
    for (key, value) in entries {
      let key = key.into();
      let value = value.into();
      if !is_reserved(&key) {
        options.attributes.insert(key, value);
        continue;
      }
      let spec = match key.as_str() {
        "url" => LinkSpec::Url(value),
        "route" => LinkSpec::route(value),
        "action" => LinkSpec::action(value),
        "parent" => {
          options.parent = Some(value);
          continue;
        }
        // prefix
        _ => {
          options.prefix = Some(value);
          continue;
        }
      };
      if let Some(existing) = &options.link {
        return Err(MenuError::ConflictingLinkSource { first: existing.key(), second: spec.key() });
      }
      options.link = Some(spec);
    }
    Ok(options)
  }
}

impl From<&str> for ItemOptions {
  fn from(url: &str) -> Self {
    Self::new().url(url)
  }
}

impl From<String> for ItemOptions {
  fn from(url: String) -> Self {
    Self::new().url(url)
  }
}

impl From<LinkSpec> for ItemOptions {
  fn from(spec: LinkSpec) -> Self {
    Self { link: Some(spec), ..Self::default() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn string_shorthand_is_url() {
    let options: ItemOptions = "/about".into();
    assert_eq!(options.link, Some(LinkSpec::Url("/about".into())));
    assert!(options.attributes.is_empty());
  }

  #[test]
  fn builder_route_params() {
    let options = ItemOptions::new().route("article", ["5"]).parent("news");
    assert_eq!(
      options.link,
      Some(LinkSpec::Route { name: "article".into(), params: vec!["5".into()] })
    );
    assert_eq!(options.parent.as_deref(), Some("news"));
  }

  #[test]
  fn builder_drops_reserved_attrs() {
    let options = ItemOptions::new().attr("class", "nav").attr("parent", "x").attr("prefix", "y");
    assert_eq!(options.attributes.len(), 1);
    assert_eq!(options.attributes.get("class").map(String::as_str), Some("nav"));
    assert!(options.parent.is_none());
    assert!(options.prefix.is_none());
  }

  #[test]
  fn from_map_splits_keys() {
    let options = ItemOptions::from_map([
      ("url", "/users"),
      ("parent", "admin"),
      ("prefix", "admin"),
      ("class", "nav-item"),
      ("data-toggle", "dropdown"),
    ])
    .unwrap();
    assert_eq!(options.link, Some(LinkSpec::Url("/users".into())));
    assert_eq!(options.parent.as_deref(), Some("admin"));
    assert_eq!(options.prefix.as_deref(), Some("admin"));
    assert_eq!(options.attributes.len(), 2);
    assert!(options.attributes.keys().all(|k| !is_reserved(k)));
  }

  #[test]
  fn from_map_route_and_action() {
    let route = ItemOptions::from_map([("route", "home")]).unwrap();
    assert_eq!(route.link, Some(LinkSpec::route("home")));
    let action = ItemOptions::from_map([("action", "Home@index")]).unwrap();
    assert_eq!(action.link, Some(LinkSpec::action("Home@index")));
  }

  #[test]
  fn from_map_rejects_two_link_sources() {
    let err = ItemOptions::from_map([("url", "/a"), ("route", "b")]).unwrap_err();
    assert!(matches!(err, MenuError::ConflictingLinkSource { first: "url", second: "route" }));
  }

  #[test]
  fn from_map_empty() {
    let options = ItemOptions::from_map(Vec::<(String, String)>::new()).unwrap();
    assert_eq!(options, ItemOptions::default());
  }
}
