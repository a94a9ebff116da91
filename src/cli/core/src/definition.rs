/* src/cli/core/src/definition.rs */

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use seam_menu::{load_menu_definition, MenuDefinition};

pub const MENU_FILE: &str = "menu.toml";

/// Walk upward from `start` to find `menu.toml`, like Cargo.toml discovery
pub fn find_menu_file(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(MENU_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{MENU_FILE} not found (searched upward from {})", start.display());
    }
  }
}

/// Resolve the definition path (explicit or auto-detected) and parse it
pub fn resolve_definition(explicit: Option<PathBuf>) -> Result<(PathBuf, MenuDefinition)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_menu_file(&cwd)?
    }
  };
  let definition =
    load_menu_definition(&path).with_context(|| format!("failed to load {}", path.display()))?;
  Ok((path, definition))
}
