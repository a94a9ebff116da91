/* src/cli/core/src/main.rs */

mod definition;
mod logging;
mod outline;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use seam_menu::RequestContext;
use seam_menu_render::{render_menu, ListTag};

use definition::resolve_definition;

#[derive(Parser)]
#[command(name = "seam-menu", about = "Render and inspect seam-menu definitions")]
struct Cli {
  /// Log activation and cascade decisions to stderr
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print the menu as HTML for a request
  Render {
    /// Path to menu.toml (auto-detected if omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Current request URL, e.g. https://example.com/articles/5
    #[arg(short, long, default_value = "/")]
    url: String,
    /// Request path when it differs from the one derived from --url
    #[arg(short, long)]
    path: Option<String>,
    /// List element to render
    #[arg(short, long, value_enum, default_value_t = TagArg::Ul)]
    tag: TagArg,
  },
  /// Print an indented outline with active items marked `*`
  Tree {
    /// Path to menu.toml (auto-detected if omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Current request URL
    #[arg(short, long, default_value = "/")]
    url: String,
    /// Request path when it differs from the one derived from --url
    #[arg(short, long)]
    path: Option<String>,
    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum TagArg {
  Ul,
  Ol,
  Div,
}

impl From<TagArg> for ListTag {
  fn from(tag: TagArg) -> Self {
    match tag {
      TagArg::Ul => Self::Ul,
      TagArg::Ol => Self::Ol,
      TagArg::Div => Self::Div,
    }
  }
}

fn request_context(url: String, path: Option<String>) -> RequestContext {
  match path {
    Some(path) => RequestContext::new(path, url),
    None => RequestContext::from_url(url),
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init_logging(cli.verbose)?;

  match cli.command {
    Command::Render { file, url, path, tag } => {
      let (source, def) = resolve_definition(file)?;
      if cli.verbose {
        ui::arrow(&format!("rendering {}", source.display()));
      }
      let menu = def.build(request_context(url, path))?;
      tracing::debug!(items = menu.len(), active = menu.active_items().len(), "menu built");
      println!("{}", render_menu(&menu, tag.into()));
    }
    Command::Tree { file, url, path, no_color } => {
      let (_, def) = resolve_definition(file)?;
      let menu = def.build(request_context(url, path))?;
      print!("{}", outline::outline(&menu, !no_color));
    }
  }

  Ok(())
}
