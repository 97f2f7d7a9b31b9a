use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TODOLIST_LOG=debug`
pub const LOG_ENV: &str = "TODOLIST_LOG";

/// Install the global subscriber. Events go to stderr in headless runs and
/// are discarded while the terminal UI owns the screen.
pub fn init_logging(interactive: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    if interactive {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    }
}
