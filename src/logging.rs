//! Diagnostic logging to stderr via `tracing`.
//!
//! Prompts own stdout, so log lines always go to stderr. The level comes from
//! the `-v` count unless `LICENSEGEN_LOG` holds an `EnvFilter` directive
//! (e.g. `licensegen=debug`).

use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flag.
pub const LOG_ENV: &str = "LICENSEGEN_LOG";

/// Map the `-v` count to a level. Quiet runs only report warnings; run
/// failures are logged at debug so the `Error:` line stays the only output.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Colour only when the log stream is an interactive terminal.
fn ansi_for<S: IsTerminal>(stream: &S) -> bool {
    stream.is_terminal()
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose).to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi_for(&std::io::stderr()))
        .with_target(false)
        .without_time()
        .try_init();
}
