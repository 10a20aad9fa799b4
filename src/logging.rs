//! Logger setup for the headless runner.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug over info.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    // A second init (tests, embedding) is harmless.
    let _ = Builder::from_env(env).format_timestamp_millis().try_init();
}
