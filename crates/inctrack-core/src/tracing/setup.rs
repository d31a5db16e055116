//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "INCTRACK_LOG";

/// Initialize the inctrack tracing/logging system.
///
/// `INCTRACK_LOG` wins when set and valid, e.g.
/// `INCTRACK_LOG=inctrack_analysis::traversal=trace`. Otherwise the level
/// comes from `verbosity` (the count of `-v` flags).
///
/// Logs are written to stderr so that report output on stdout stays
/// machine-readable. Calling this more than once is a no-op.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "inctrack=warn,inctrack_core=warn,inctrack_analysis=warn",
        1 => "inctrack=info,inctrack_core=info,inctrack_analysis=info",
        2 => "inctrack=debug,inctrack_core=debug,inctrack_analysis=debug",
        _ => "inctrack=trace,inctrack_core=trace,inctrack_analysis=trace",
    }
}
