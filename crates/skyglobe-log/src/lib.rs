//! Logging setup for the skyglobe runner.
//!
//! Console output is always on and stamped with time since start. Debug
//! builds with a log directory additionally write JSON lines to
//! [`LOG_FILE_NAME`] for replaying a flight after the fact. `RUST_LOG` wins
//! over the configured level. Records emitted through the `log` facade (the
//! config crate) are bridged into the same subscriber.

use std::path::{Path, PathBuf};

use skyglobe_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "skyglobe.log";

const DEFAULT_DIRECTIVES: &str = "info,bevy_ecs=warn";

/// Install the global subscriber.
///
/// Returns the path of the JSON log file when one was opened. Panics if a
/// global subscriber is already installed.
pub fn init_logging(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&Config>,
) -> Option<PathBuf> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));
    let filter_text = env_filter.to_string();

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let wants_file = debug_build && config.is_none_or(|c| c.debug.log_to_file);
    if wants_file
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_file_path(log_dir))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        let path = log_file_path(log_dir);
        tracing::debug!(filter = %filter_text, file = %path.display(), "logging initialized");
        return Some(path);
    }

    subscriber.init();
    tracing::debug!(filter = %filter_text, "logging initialized");
    None
}

/// Filter directives from the config's `debug.log_level`, falling back to
/// [`default_env_filter`]'s directives when unset.
pub fn filter_directives(config: Option<&Config>) -> String {
    match config.map(|c| c.debug.log_level.trim()) {
        Some(level) if !level.is_empty() => level.to_string(),
        _ => DEFAULT_DIRECTIVES.to_string(),
    }
}

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_DIRECTIVES)
}

pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}
