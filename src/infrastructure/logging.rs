//! Log output setup

use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Level used when neither `RUST_LOG` nor `--verbose` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter directive for the requested verbosity
pub fn log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins over `log_level` when set. Stdout is left alone because
/// rendered pages may be written there.
pub fn init_logging(log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .with_filter(env_filter),
        )
        .try_init()?;

    Ok(())
}
