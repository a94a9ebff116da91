/* src/menu/core/rust/src/lib.rs */

//! Request-scoped navigation menus for server-rendered views.
//!
//! A [`Menu`] owns a flat list of [`MenuItem`]s; parent/child structure is
//! derived from each item's parent name. Items are activated when the current
//! request matches their URL or glob pattern, optionally bubbling up to their
//! ancestors.

pub mod attributes;
pub mod config;
pub mod definition;
pub mod errors;
pub mod item;
pub mod link;
pub mod menu;
pub mod options;
pub mod pattern;
pub mod request;
pub mod resolver;

// Public API re-exports
pub use attributes::{merge_class, Attributes, RESERVED_KEYS};
pub use config::{ActiveElement, MenuConfig};
pub use definition::{load_menu_definition, ItemDefinition, MenuDefinition};
pub use errors::{MenuError, Result};
pub use item::{MenuItem, Metadata};
pub use link::{Link, LinkSpec};
pub use menu::Menu;
pub use options::ItemOptions;
pub use pattern::UrlPattern;
pub use request::RequestContext;
pub use resolver::{RouteTable, UrlResolver};
