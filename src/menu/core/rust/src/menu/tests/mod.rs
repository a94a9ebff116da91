/* src/menu/core/rust/src/menu/tests/mod.rs */

mod activation;

use super::*;
use crate::config::ActiveElement;
use serde_json::json;

fn request(url: &str) -> RequestContext {
  RequestContext::from_url(url)
}

/// Menu that never auto-activates, for tests that only look at structure.
fn quiet_menu() -> Menu {
  let config = MenuConfig { auto_activate: false, ..MenuConfig::default() };
  Menu::new(config, request("/"))
}

fn names<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Vec<&'a str> {
  items.into_iter().map(MenuItem::name).collect()
}
