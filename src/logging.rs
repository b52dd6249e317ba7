//! Structured logging for the securefile CLI.
//!
//! The library operations never log; only the command layer does.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the filter directive: `-v` repetitions win over the config level.
pub fn level_for(verbose: u8, config_level: &str) -> String {
    match verbose {
        0 => config_level.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` overrides `default_level`. Output goes to stderr so it never
/// mixes with command output.
pub fn init(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
