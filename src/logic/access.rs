//! Who may see which posts.

use crate::state::{ListFilter, Post, Role, Viewer, Visibility};

impl Visibility {
    /// What: Pick the listing visibility for a role.
    ///
    /// Inputs:
    /// - `role`: Role of the current reader.
    ///
    /// Output:
    /// - `All` for admins, `PublishedOnly` for everyone else.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::All,
            Role::Visitor | Role::User => Self::PublishedOnly,
        }
    }

    /// Whether a post passes this visibility.
    #[must_use]
    pub const fn admits(self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::PublishedOnly => post.published,
        }
    }

    /// Backend filter matching this visibility.
    #[must_use]
    pub const fn list_filter(self) -> ListFilter {
        ListFilter {
            published_only: matches!(self, Self::PublishedOnly),
        }
    }
}

/// What: Decide whether a reader may open a single post.
///
/// Inputs:
/// - `post`: Post being opened.
/// - `viewer`: Current reader.
///
/// Output:
/// - `true` for published posts; drafts only for their author or an admin.
#[must_use]
pub fn can_view(post: &Post, viewer: &Viewer) -> bool {
    if post.published || viewer.role == Role::Admin {
        return true;
    }
    match (&viewer.user_id, &post.author_id) {
        (Some(user), Some(author)) => user == author,
        _ => false,
    }
}
