/* src/cli/core/src/ui.rs */

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";

pub fn arrow(msg: &str) {
  eprintln!("  {GREEN}\u{2192}{RESET} {msg}");
}
