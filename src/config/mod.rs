//! Settings file discovery, parsing, and environment overrides.

/// Path resolution for config directories.
mod paths;
/// Settings parsing and loading.
mod settings;

pub use paths::{config_dir, logs_dir};
pub use settings::{Settings, apply_env_overrides, load_settings, parse_settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
