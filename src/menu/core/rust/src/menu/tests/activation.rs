/* src/menu/core/rust/src/menu/tests/activation.rs */

use super::*;

#[test]
fn exact_url_activates_on_insert() {
  let mut menu = Menu::new(MenuConfig::default(), request("/home"));
  let home = menu.add_item("home", "Home", "/home").unwrap();
  assert!(home.is_active());
  assert_eq!(home.attr("class"), Some("active"));
}

#[test]
fn other_url_stays_inactive() {
  let mut menu = Menu::new(MenuConfig::default(), request("/about"));
  let home = menu.add_item("home", "Home", "/home").unwrap();
  assert!(!home.is_active());
  assert_eq!(home.attr("class"), None);
}

#[test]
fn auto_activate_off_skips_matching() {
  let config = MenuConfig { auto_activate: false, ..MenuConfig::default() };
  let mut menu = Menu::new(config, request("/home"));
  assert!(!menu.add_item("home", "Home", "/home").unwrap().is_active());
}

#[test]
fn no_link_never_auto_activates() {
  let mut menu = Menu::new(MenuConfig::default(), request("/"));
  assert!(!menu.add_item("label", "Label", ItemOptions::new()).unwrap().is_active());
}

#[test]
fn pattern_option_activates_on_insert() {
  let mut menu = Menu::new(MenuConfig::default(), RequestContext::new("articles/5", "/articles/5"));
  let options = ItemOptions::new().url("articles").active_on("articles/*");
  assert!(menu.add_item("articles", "Articles", options).unwrap().is_active());
}

#[test]
fn activate_on_url_rechecks() {
  let mut menu = Menu::new(MenuConfig::default(), RequestContext::new("articles/5", "/articles/5"));
  menu.add_item("articles", "Articles", "articles").unwrap();
  assert!(!menu.get("articles").unwrap().is_active());
  assert!(menu.activate_on_url("articles", "articles/*").unwrap());
  assert!(menu.get("articles").unwrap().is_active());
}

#[test]
fn activate_on_url_non_matching_path() {
  let mut menu = Menu::new(MenuConfig::default(), RequestContext::new("other", "/other"));
  menu.add_item("articles", "Articles", "articles").unwrap();
  assert!(!menu.activate_on_url("articles", "articles/*").unwrap());
  assert!(!menu.get("articles").unwrap().is_active());
}

#[test]
fn activate_on_url_respects_auto_activate() {
  let config = MenuConfig { auto_activate: false, ..MenuConfig::default() };
  let mut menu = Menu::new(config, RequestContext::new("articles/5", "/articles/5"));
  menu.add_item("articles", "Articles", "articles").unwrap();
  assert!(!menu.activate_on_url("articles", "articles/*").unwrap());
  assert!(menu.check_activation("articles").unwrap());
  assert!(menu.get("articles").unwrap().is_active());
}

#[test]
fn activate_is_idempotent() {
  let mut menu = quiet_menu();
  menu.add_item("home", "Home", ItemOptions::new().url("/").attr("class", "nav-item")).unwrap();
  menu.activate("home").unwrap();
  let once = menu.get("home").unwrap().attributes().clone();
  menu.activate("home").unwrap();
  let home = menu.get("home").unwrap();
  assert!(home.is_active());
  assert_eq!(home.attributes(), &once);
  assert_eq!(home.attr("class"), Some("nav-item active"));
}

#[test]
fn activation_propagates_to_ancestors() {
  let mut menu = quiet_menu();
  menu.add_item("root", "Root", "/").unwrap();
  menu.add_sub_item("root", "mid", "Mid", "/mid").unwrap();
  menu.add_sub_item("mid", "leaf", "Leaf", "/mid/leaf").unwrap();
  menu.add_item("other", "Other", "/other").unwrap();

  menu.activate("leaf").unwrap();
  assert_eq!(names(menu.active_items()), ["root", "mid", "leaf"]);
}

#[test]
fn activation_stays_local_without_activate_parents() {
  let config =
    MenuConfig { auto_activate: false, activate_parents: false, ..MenuConfig::default() };
  let mut menu = Menu::new(config, request("/"));
  menu.add_item("root", "Root", "/").unwrap();
  menu.add_sub_item("root", "leaf", "Leaf", "/leaf").unwrap();

  menu.activate("leaf").unwrap();
  assert!(menu.get("leaf").unwrap().is_active());
  assert!(!menu.get("root").unwrap().is_active());
  assert_eq!(menu.get("root").unwrap().attr("class"), None);
}

#[test]
fn auto_activation_bubbles_up() {
  let mut menu = Menu::new(MenuConfig::default(), request("https://example.com/blog/posts"));
  menu.add_item("blog", "Blog", "https://example.com/blog").unwrap();
  menu.add_sub_item("blog", "posts", "Posts", "https://example.com/blog/posts").unwrap();
  assert!(menu.get("posts").unwrap().is_active());
  assert!(menu.get("blog").unwrap().is_active());
}

#[test]
fn link_element_receives_active_state() {
  let config = MenuConfig {
    active_element: ActiveElement::Link,
    active_class: "current".into(),
    ..MenuConfig::default()
  };
  let mut menu = Menu::new(config, request("/docs"));
  menu.add_item("docs", "Docs", "/docs").unwrap();
  let docs = menu.get("docs").unwrap();
  assert!(!docs.is_active());
  assert_eq!(docs.attr("class"), None);
  assert!(docs.link().is_active());
  assert_eq!(docs.link().attr("class"), Some("current"));
  assert_eq!(names(menu.active_items()), ["docs"]);
}

#[test]
fn restful_activation() {
  let config = MenuConfig { restful: true, ..MenuConfig::default() };
  let mut menu = Menu::new(config, request("/articles/5/edit"));
  menu.add_item("articles", "Articles", "/articles").unwrap();
  menu.add_item("about", "About", "/about").unwrap();
  assert_eq!(names(menu.active_items()), ["articles"]);
}

#[test]
fn activate_unknown_item() {
  let mut menu = quiet_menu();
  let err = menu.activate("ghost").unwrap_err();
  assert!(matches!(err, MenuError::ItemNotFound(ref name) if name == "ghost"));
}
