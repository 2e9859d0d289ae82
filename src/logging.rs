//! Shared tracing setup for the three CLI binaries (§4.11).
//!
//! Each binary initializes a process-wide subscriber before doing any
//! work, writing to stderr so stdout stays reserved for pipeline
//! payloads (the word stream, the search results). Verbosity follows
//! the standard `RUST_LOG` convention, defaulting to `info`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
