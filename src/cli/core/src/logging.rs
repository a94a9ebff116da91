/* src/cli/core/src/logging.rs */

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr so rendered HTML on stdout stays clean.
/// Level comes from RUST_LOG, default `warn`.
pub fn init_logging(verbose: bool) -> Result<()> {
  let default = if verbose { "debug" } else { "warn" };
  let filter = match std::env::var("RUST_LOG") {
    Ok(directives) => EnvFilter::try_new(directives)?,
    Err(_) => EnvFilter::new(default),
  };
  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .try_init()?;
  Ok(())
}
