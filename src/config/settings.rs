use std::fmt;
use std::path::Path;
use std::time::Duration;

use zeroize::Zeroizing;

use crate::logic::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::state::Role;

/// Runtime settings loaded from `settings.conf`.
#[derive(Clone)]
pub struct Settings {
    /// Backend project URL.
    pub backend_url: String,
    /// Backend API key; never logged.
    pub api_key: Zeroizing<String>,
    /// Table holding posts.
    pub posts_table: String,
    /// Posts per list page, at least 1.
    pub items_per_page: usize,
    /// Quiet period before a typed query is matched.
    pub search_debounce_ms: u64,
    /// Per-request timeout for backend calls.
    pub request_timeout_secs: u64,
    /// Role used for visibility decisions.
    pub role: Role,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            api_key: Zeroizing::new(String::new()),
            posts_table: "posts".to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            search_debounce_ms: 300,
            request_timeout_secs: 10,
            role: Role::Visitor,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("backend_url", &self.backend_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("posts_table", &self.posts_table)
            .field("items_per_page", &self.items_per_page)
            .field("search_debounce_ms", &self.search_debounce_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("role", &self.role)
            .finish()
    }
}

impl Settings {
    /// Debounce window as a `Duration`.
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Drop a trailing ` # comment` from a value; `#` inside a token is kept.
fn strip_inline_comment(s: &str) -> &str {
    let cut = s
        .char_indices()
        .find(|&(i, c)| c == '#' && (i == 0 || s[..i].ends_with(char::is_whitespace)))
        .map_or(s.len(), |(i, _)| i);
    s[..cut].trim()
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content, `key = value` per line.
/// - `settings`: Settings to update in place.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Blank lines and `#` comments are skipped; keys are normalized to lower snake case.
/// - Unknown keys and unparsable values are ignored so defaults survive.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        match key.as_str() {
            "backend_url" | "supabase_url" => settings.backend_url = val.to_string(),
            "api_key" | "anon_key" => settings.api_key = Zeroizing::new(val.to_string()),
            "posts_table" => {
                if !val.is_empty() {
                    settings.posts_table = val.to_string();
                }
            }
            "items_per_page" | "per_page" => {
                if let Ok(v) = val.parse::<usize>()
                    && v >= 1
                {
                    settings.items_per_page = v;
                }
            }
            "search_debounce_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.search_debounce_ms = v;
                }
            }
            "request_timeout_secs" => {
                if let Ok(v) = val.parse::<u64>()
                    && v >= 1
                {
                    settings.request_timeout_secs = v;
                }
            }
            "role" => {
                if let Some(role) = Role::from_config_key(val) {
                    settings.role = role;
                }
            }
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
}

/// What: Apply environment-style overrides on top of file settings.
///
/// Inputs:
/// - `settings`: Settings to update.
/// - `backend_url`: Value of `BLOGSIFT_BACKEND_URL`, if set.
/// - `api_key`: Value of `BLOGSIFT_API_KEY`, if set.
///
/// Output:
/// - None; blank overrides are ignored.
pub fn apply_env_overrides(
    settings: &mut Settings,
    backend_url: Option<String>,
    api_key: Option<String>,
) {
    if let Some(url) = backend_url.filter(|v| !v.trim().is_empty()) {
        settings.backend_url = url.trim().to_string();
    }
    if let Some(key) = api_key.filter(|v| !v.trim().is_empty()) {
        settings.api_key = Zeroizing::new(key.trim().to_string());
    }
}

/// What: Load settings from disk and the environment.
///
/// Inputs:
/// - `explicit_path`: Settings file chosen on the command line; otherwise the default location is searched.
///
/// Output:
/// - Populated `Settings`; defaults when no file exists or it cannot be read.
///
/// Details:
/// - Read failures are logged at `warn` and otherwise ignored.
/// - `BLOGSIFT_BACKEND_URL` and `BLOGSIFT_API_KEY` override file values.
pub fn load_settings(explicit_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();
    let path = explicit_path
        .map(Path::to_path_buf)
        .or_else(super::paths::resolve_settings_config_path);
    if let Some(path) = path {
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                parse_settings(&content, &mut settings);
                tracing::info!(path = %path.display(), "settings loaded");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            }
        }
    }
    apply_env_overrides(
        &mut settings,
        std::env::var("BLOGSIFT_BACKEND_URL").ok(),
        std::env::var("BLOGSIFT_API_KEY").ok(),
    );
    settings
}
