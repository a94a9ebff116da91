/* src/menu/core/rust/src/pattern.rs */

//! Glob-style URL patterns for activation.
//! A trailing `/*` matches the prefix itself or anything below it, so a bare
//! `/*` (or `*`) matches every path. Every other character is literal.

use regex::Regex;

use crate::errors::{MenuError, Result};

#[derive(Debug, Clone)]
pub struct UrlPattern {
  source: String,
  regex: Regex,
}

impl UrlPattern {
  pub fn new(pattern: &str) -> Result<Self> {
    // Suffix first: trimming leading slashes would turn "/*" into a literal "*".
    let wildcard = pattern.strip_suffix("/*").or((pattern == "*").then_some(""));
    let expr = match wildcard.map(|prefix| prefix.trim_start_matches('/')) {
      Some("") => "^.*$".to_string(),
      Some(prefix) => format!("^{}(/.*)?$", regex::escape(prefix)),
      None => format!("^{}$", regex::escape(pattern.trim_start_matches('/'))),
    };
    let regex = Regex::new(&expr)
      .map_err(|source| MenuError::InvalidPattern { pattern: pattern.to_string(), source })?;
    Ok(Self { source: pattern.to_string(), regex })
  }

  pub fn as_str(&self) -> &str {
    &self.source
  }

  /// Leading slashes on `path` are ignored, matching how the pattern is compiled.
  pub fn matches(&self, path: &str) -> bool {
    self.regex.is_match(path.trim_start_matches('/'))
  }
}

impl PartialEq for UrlPattern {
  fn eq(&self, other: &Self) -> bool {
    self.source == other.source
  }
}

/// `restful` matching: `path` equals `base` or sits below it.
pub(crate) fn is_below(base: &str, path: &str) -> bool {
  let base = base.trim_matches('/');
  let path = path.trim_matches('/');
  if base.is_empty() {
    return path.is_empty();
  }
  path == base || path.strip_prefix(base).is_some_and(|rest| rest.starts_with('/'))
}
