/* src/menu/core/rust/src/resolver.rs */

//! URL generation boundary. The hosting framework knows its routes and
//! controller actions; the menu only asks it for strings.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

pub trait UrlResolver {
  /// Turn a plain path or URL into the href the menu should render.
  fn to(&self, path: &str) -> String;
  /// Resolve a named route with positional parameters. `None` when unknown.
  fn route(&self, name: &str, params: &[String]) -> Option<String>;
  /// Resolve a controller action with positional parameters. `None` when unknown.
  fn action(&self, action: &str, params: &[String]) -> Option<String>;
}

/// Table-driven resolver. Templates use axum route syntax, e.g. "/user/{id}".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteTable {
  /// Prepended to relative paths. Empty means root-relative hrefs.
  #[serde(default)]
  pub base_url: String,
  #[serde(default)]
  pub routes: HashMap<String, String>,
  #[serde(default)]
  pub actions: HashMap<String, String>,
}

fn placeholder_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\{[^/{}]+\}").expect("valid placeholder regex"))
}

fn scheme_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid scheme regex"))
}

/// Absolute URLs, protocol-relative URLs and fragments are never rebased.
pub(crate) fn is_absolute(url: &str) -> bool {
  url.starts_with("//") || url.starts_with('#') || scheme_re().is_match(url)
}

/// Fill `{param}` placeholders left to right. Fails if params run out.
fn fill_template(template: &str, params: &[String]) -> Option<String> {
  let mut out = String::with_capacity(template.len());
  let mut last = 0;
  let mut params = params.iter();
  for m in placeholder_re().find_iter(template) {
    out.push_str(&template[last..m.start()]);
    out.push_str(params.next()?);
    last = m.end();
  }
  out.push_str(&template[last..]);
  Some(out)
}

impl RouteTable {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self { base_url: base_url.into(), ..Self::default() }
  }

  pub fn with_route(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
    self.routes.insert(name.into(), template.into());
    self
  }

  pub fn with_action(mut self, action: impl Into<String>, template: impl Into<String>) -> Self {
    self.actions.insert(action.into(), template.into());
    self
  }
}

impl UrlResolver for RouteTable {
  fn to(&self, path: &str) -> String {
    if is_absolute(path) {
      return path.to_string();
    }
    let base = self.base_url.trim_end_matches('/');
    format!("{base}/{}", path.trim_start_matches('/'))
  }

  fn route(&self, name: &str, params: &[String]) -> Option<String> {
    let template = self.routes.get(name)?;
    fill_template(template, params).map(|path| self.to(&path))
  }

  fn action(&self, action: &str, params: &[String]) -> Option<String> {
    let template = self.actions.get(action)?;
    fill_template(template, params).map(|path| self.to(&path))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn params(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn to_root_relative_without_base() {
    let table = RouteTable::default();
    assert_eq!(table.to("articles"), "/articles");
    assert_eq!(table.to("/home"), "/home");
    assert_eq!(table.to(""), "/");
  }

  #[test]
  fn to_joins_base_url() {
    let table = RouteTable::new("https://example.com/");
    assert_eq!(table.to("/articles"), "https://example.com/articles");
    assert_eq!(table.to("articles"), "https://example.com/articles");
  }

  #[test]
  fn to_keeps_absolute_urls() {
    let table = RouteTable::new("https://example.com");
    assert_eq!(table.to("https://other.org/x"), "https://other.org/x");
    assert_eq!(table.to("//cdn.example.com/a"), "//cdn.example.com/a");
    assert_eq!(table.to("mailto:team@example.com"), "mailto:team@example.com");
    assert_eq!(table.to("#section"), "#section");
  }

  #[test]
  fn route_fills_params_in_order() {
    let table = RouteTable::default().with_route("comment", "/articles/{id}/comments/{cid}");
    assert_eq!(
      table.route("comment", &params(&["5", "9"])),
      Some("/articles/5/comments/9".to_string())
    );
  }

  #[test]
  fn route_without_placeholders() {
    let table = RouteTable::new("http://localhost").with_route("home", "/");
    assert_eq!(table.route("home", &[]), Some("http://localhost/".to_string()));
  }

  #[test]
  fn route_missing_params_unresolved() {
    let table = RouteTable::default().with_route("article", "/articles/{id}");
    assert_eq!(table.route("article", &[]), None);
  }

  #[test]
  fn unknown_route_unresolved() {
    assert_eq!(RouteTable::default().route("nope", &[]), None);
  }

  #[test]
  fn action_resolves() {
    let table = RouteTable::default().with_action("ArticleController@show", "/articles/{id}");
    assert_eq!(
      table.action("ArticleController@show", &params(&["7"])),
      Some("/articles/7".to_string())
    );
    assert_eq!(table.action("Missing@index", &[]), None);
  }

  #[test]
  fn parse_from_toml() {
    let table: RouteTable = toml::from_str(
      r#"
base_url = "https://example.com"
routes = { article = "/articles/{id}" }
"#,
    )
    .unwrap();
    assert_eq!(
      table.route("article", &params(&["1"])),
      Some("https://example.com/articles/1".to_string())
    );
    assert!(table.actions.is_empty());
  }
}
