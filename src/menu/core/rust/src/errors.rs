/* src/menu/core/rust/src/errors.rs */

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
  #[error("menu item not found: {0}")]
  ItemNotFound(String),

  #[error("item \"{name}\" references unknown parent \"{parent}\"")]
  UnknownParent { name: String, parent: String },

  #[error("conflicting link sources: \"{first}\" and \"{second}\" are mutually exclusive")]
  ConflictingLinkSource { first: &'static str, second: &'static str },

  #[error("invalid active url pattern \"{pattern}\": {source}")]
  InvalidPattern {
    pattern: String,
    #[source]
    source: regex::Error,
  },

  #[error("parent chain of \"{0}\" forms a cycle")]
  ParentCycle(String),

  #[error("failed to read {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse menu definition: {0}")]
  Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
