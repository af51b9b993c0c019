//! Logger bootstrap
//!
//! `RUST_LOG` takes precedence; otherwise the configured level is the default
//! filter.

use crate::config::DebugConfig;

/// Initialize the global logger
///
/// Calling this more than once keeps the first logger.
pub fn init(config: &DebugConfig) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
