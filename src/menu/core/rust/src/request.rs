/* src/menu/core/rust/src/request.rs */

use url::Url;

/// The two read-only facts about the current request that activation needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
  /// Path without scheme, host or query, e.g. "articles/5" or "/articles/5".
  pub path: String,
  /// Full URL as the hosting framework reports it.
  pub url: String,
}

impl RequestContext {
  pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
    Self { path: path.into(), url: url.into() }
  }

  /// Derive the path from a full URL: drop scheme + authority, query and fragment.
  pub fn from_url(url: impl Into<String>) -> Self {
    let url = url.into();
    let path = extract_path(&url);
    Self { path, url }
  }
}

/// Absolute URLs go through the parser; relative ones only lose query and fragment.
pub(crate) fn extract_path(url: &str) -> String {
  if let Ok(parsed) = Url::parse(url) {
    return parsed.path().to_string();
  }
  let end = url.find(['?', '#']).unwrap_or(url.len());
  url[..end].to_string()
}
