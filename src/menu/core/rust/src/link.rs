/* src/menu/core/rust/src/link.rs */

use tracing::{debug, warn};

use crate::attributes::{add_class, is_reserved, Attributes};
use crate::resolver::{is_absolute, UrlResolver};

/// Where a link points. At most one source per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkSpec {
  Url(String),
  Route { name: String, params: Vec<String> },
  Action { name: String, params: Vec<String> },
}

impl LinkSpec {
  pub fn route(name: impl Into<String>) -> Self {
    Self::Route { name: name.into(), params: Vec::new() }
  }

  pub fn action(name: impl Into<String>) -> Self {
    Self::Action { name: name.into(), params: Vec::new() }
  }

  /// The option key this spec was built from.
  pub fn key(&self) -> &'static str {
    match self {
      Self::Url(_) => "url",
      Self::Route { .. } => "route",
      Self::Action { .. } => "action",
    }
  }
}

#[derive(Debug, Clone)]
pub struct Link {
  href: Option<String>,
  active: bool,
  active_class: String,
  attributes: Attributes,
}

fn apply_prefix(prefix: Option<&str>, url: &str) -> String {
  let prefix = prefix.map(|p| p.trim_matches('/')).unwrap_or("");
  if prefix.is_empty() || is_absolute(url) {
    return url.to_string();
  }
  let rest = url.trim_start_matches('/');
  if rest.is_empty() { prefix.to_string() } else { format!("{prefix}/{rest}") }
}

impl Link {
  /// Resolve the href once. `prefix` only applies to plain URLs.
  pub(crate) fn new(
    spec: Option<&LinkSpec>,
    prefix: Option<&str>,
    resolver: &dyn UrlResolver,
    active_class: &str,
  ) -> Self {
    let href = match spec {
      None => None,
      Some(LinkSpec::Url(url)) => Some(resolver.to(&apply_prefix(prefix, url))),
      Some(LinkSpec::Route { name, params }) => {
        let resolved = resolver.route(name, params);
        if resolved.is_none() {
          warn!(route = %name, "route could not be resolved, link has no url");
        }
        resolved
      }
      Some(LinkSpec::Action { name, params }) => {
        let resolved = resolver.action(name, params);
        if resolved.is_none() {
          warn!(action = %name, "action could not be resolved, link has no url");
        }
        resolved
      }
    };
    Self {
      href,
      active: false,
      active_class: active_class.to_string(),
      attributes: Attributes::new(),
    }
  }

  pub fn url(&self) -> Option<&str> {
    self.href.as_deref()
  }

  pub fn is_active(&self) -> bool {
    self.active
  }

  pub fn activate(&mut self) {
    debug!(href = ?self.href, "activating link");
    self.active = true;
    add_class(&mut self.attributes, &self.active_class);
  }

  pub fn attributes(&self) -> &Attributes {
    &self.attributes
  }

  pub fn attr(&self, name: &str) -> Option<&str> {
    self.attributes.get(name).map(String::as_str)
  }

  /// Reserved option keys are dropped with a warning.
  pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
    let name = name.into();
    if is_reserved(&name) {
      warn!(attr = %name, "ignoring reserved key as link attribute");
      return self;
    }
    self.attributes.insert(name, value.into());
    self
  }
}
