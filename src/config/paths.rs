use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the config base.
const APP_DIR: &str = "blogsift";

/// Determine the settings file path, searching `$HOME/.config` before `$XDG_CONFIG_HOME`.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(Path::new(h).join(".config").join(APP_DIR).join("settings.conf"));
    }
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join(APP_DIR).join("settings.conf"));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory `$HOME/.config/blogsift` (ensured to exist).
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `$HOME/.config/blogsift/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
