/* src/menu/render/rust/src/lib.rs */

mod helpers;
mod list;

pub use list::{render_children, render_menu, ListTag};
