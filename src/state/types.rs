//! Core value types used by blogsift state.

use std::fmt;

use chrono::{DateTime, Utc};

/// Blog post record as returned by the backend.
///
/// List queries only select the summary columns, so `content` is `None` for
/// posts that came from a listing. A detail fetch fills it in.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Post {
    /// Backend identifier (UUID string).
    pub id: String,
    /// Post title.
    pub title: String,
    /// Short teaser shown in lists; optional.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Full HTML body, only present on detail fetches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Public URL of the cover image.
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
    /// Whether the post is visible to non-admin readers.
    pub published: bool,
    /// Author account id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
}

/// Account role of whoever is browsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    /// Anonymous reader.
    #[default]
    Visitor,
    /// Signed-in reader who may comment.
    User,
    /// Site owner; sees drafts and manages posts.
    Admin,
}

impl Role {
    /// What: Parse a role from a config value or CLI flag.
    ///
    /// Inputs:
    /// - `key`: Role name, case-insensitive (`visitor`, `user`, `admin`).
    ///
    /// Output:
    /// - `Some(Role)` for a known name; `None` otherwise.
    #[must_use]
    pub fn from_config_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "visitor" | "guest" | "anonymous" => Some(Self::Visitor),
            "user" | "reader" => Some(Self::User),
            "admin" | "owner" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Stable lowercase name used in config files and logs.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Visitor => "visitor",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// Identity of the reader, used for per-post access decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Viewer {
    /// Signed-in account id, `None` for anonymous readers.
    pub user_id: Option<String>,
    /// Role of the account.
    pub role: Role,
}

/// Which posts a listing or search may include.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Published posts only.
    #[default]
    PublishedOnly,
    /// Published posts and drafts.
    All,
}

/// Filter passed to the backend when listing posts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Restrict the listing to published posts.
    pub published_only: bool,
}

/// One entry in a pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMarker {
    /// A clickable page number (1-based).
    Page(usize),
    /// A collapsed gap between page numbers.
    Ellipsis,
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Derived pagination data for one page of a list.
///
/// Recomputed whenever any input changes; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Page the window was computed for (1-based, not clamped).
    pub current_page: usize,
    /// `ceil(total_items / items_per_page)`; zero for an empty list.
    pub total_pages: usize,
    /// First index of the page slice (inclusive).
    pub start_index: usize,
    /// End of the page slice (exclusive).
    pub end_index: usize,
    /// Whether a following page exists.
    pub has_next_page: bool,
    /// Whether a preceding page exists.
    pub has_prev_page: bool,
    /// Page numbers and gaps to render, in order.
    pub page_numbers: Vec<PageMarker>,
}
