//! Console logging. Progress lines go to stdout through a `tracing` fmt subscriber;
//! verbosity comes from `CMIP_CVS_LOG` (an `EnvFilter` directive, default `info`).

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "CMIP_CVS_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stdout().is_terminal())
        .without_time()
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
