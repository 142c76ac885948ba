//! Structured logging for Geode via the `tracing` ecosystem.
//!
//! Console output carries uptime timestamps and module paths. Debug builds can
//! also write a JSON log file. The configured level is a default only:
//! `RUST_LOG` always wins.

use std::path::Path;

use geode_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "geode.log";

/// Filter from the config's `debug.log_level`.
///
/// A missing config, a blank level, or a directive that does not parse all
/// fall back to [`default_env_filter`].
pub fn configured_filter(config: Option<&Config>) -> EnvFilter {
    let level = config
        .map(|config| config.debug.log_level.trim())
        .filter(|level| !level.is_empty());
    match level.map(EnvFilter::try_new) {
        Some(Ok(filter)) => filter,
        _ => default_env_filter(),
    }
}

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - Directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether to also write [`LOG_FILE_NAME`] into `log_dir`
/// * `config` - Optional configuration supplying the default log level
///
/// Panics if a global subscriber is already installed; call once at startup.
///
/// ```no_run
/// use geode_config::Config;
/// use geode_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(config));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
