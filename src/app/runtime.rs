//! Command execution: settings, backend selection, and the list, search, and post views.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use super::render::{render_page_bar, render_post_line};
use super::search::SearchSession;
use crate::args::Args;
use crate::config::{Settings, load_settings};
use crate::logic::{Paginator, can_view};
use crate::sources::{PostSource, RestSource, Result};
use crate::state::{Post, Role, Viewer, Visibility};
use crate::util::{content_preview, format_reading_time, reading_time_minutes, time_ago};

/// Characters of body text shown when opening a post.
const PREVIEW_CHARS: usize = 200;

/// What: Run the command described by `args` against the configured backend.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Prints the requested view to stdout; `Err` when the backend is unreachable or misconfigured.
///
/// # Errors
/// - Returns `Err` when the HTTP client cannot be built or `backend_url` is missing
/// - Returns `Err` when the backend request fails
pub async fn run(args: Args) -> Result<()> {
    let mut settings = load_settings(args.config.as_deref());
    apply_arg_overrides(&args, &mut settings);
    tracing::debug!(?settings, "effective settings");
    let source: Arc<dyn PostSource> = Arc::new(RestSource::new(
        &settings.backend_url,
        settings.api_key.clone(),
        &settings.posts_table,
        settings.request_timeout(),
    )?);
    let out = execute(&args, &settings, source).await?;
    print!("{out}");
    Ok(())
}

/// Fold role and page-size flags into the loaded settings.
fn apply_arg_overrides(args: &Args, settings: &mut Settings) {
    if let Some(raw) = &args.role {
        match Role::from_config_key(raw) {
            Some(role) => settings.role = role,
            None => tracing::warn!(role = %raw, "unknown role; keeping configured role"),
        }
    }
    if let Some(n) = args.per_page.filter(|n| *n >= 1) {
        settings.items_per_page = n;
    }
}

/// What: Produce the output text for one invocation.
///
/// Inputs:
/// - `args`: Parsed arguments selecting the view.
/// - `settings`: Effective settings.
/// - `source`: Backend to read posts from.
///
/// Output:
/// - Text to print.
///
/// # Errors
/// - Returns `Err` when the backend fails or a requested post cannot be shown
pub async fn execute(args: &Args, settings: &Settings, source: Arc<dyn PostSource>) -> Result<String> {
    if let Some(id) = &args.post {
        let viewer = Viewer {
            user_id: args.user_id.clone(),
            role: settings.role,
        };
        return show_post(source.as_ref(), id, &viewer).await;
    }
    if let Some(query) = &args.search {
        return search_posts(source, settings, query).await;
    }
    list_page(source.as_ref(), settings, args.page).await
}

/// What: Render one page of the post list.
///
/// Inputs:
/// - `source`: Backend to list posts from.
/// - `settings`: Effective settings (role and page size).
/// - `page`: Requested page; out-of-range requests fall back to page 1.
///
/// Output:
/// - Post lines, the page bar, and a page summary; a notice when there are no posts.
async fn list_page(source: &dyn PostSource, settings: &Settings, page: usize) -> Result<String> {
    let visibility = Visibility::for_role(settings.role);
    let posts: Vec<Post> = source
        .list_posts(visibility.list_filter())
        .await?
        .into_iter()
        .filter(|p| visibility.admits(p))
        .collect();
    if posts.is_empty() {
        return Ok("No posts yet.\n".to_string());
    }

    let mut pager = Paginator::new(posts.len(), settings.items_per_page);
    if !pager.go_to_page(page) {
        tracing::warn!(page, total_pages = pager.total_pages(), "page out of range; showing page 1");
    }
    let now = Utc::now();
    let mut lines: Vec<String> = pager
        .slice(&posts)
        .iter()
        .map(|post| render_post_line(post, now))
        .collect();
    let window = pager.window();
    let bar = render_page_bar(&window);
    if !bar.is_empty() {
        lines.push(String::new());
        lines.push(bar);
    }
    lines.push(format!(
        "Page {} of {} ({} posts)",
        window.current_page,
        window.total_pages,
        posts.len()
    ));
    Ok(finish_lines(&lines))
}

/// What: Run one debounced search and render the settled matches.
///
/// Inputs:
/// - `source`: Backend the candidates are loaded from.
/// - `settings`: Effective settings (role and debounce window).
/// - `query`: Search text.
///
/// Output:
/// - Matching post lines with excerpt previews, or a no-match notice.
///
/// Details:
/// - A failed candidate load is returned as `Err` instead of an empty result.
async fn search_posts(source: Arc<dyn PostSource>, settings: &Settings, query: &str) -> Result<String> {
    let (err_tx, mut err_rx) = mpsc::unbounded_channel();
    let mut session = SearchSession::with_debounce(
        source,
        Visibility::for_role(settings.role),
        Some(err_tx),
        settings.search_debounce(),
    );
    session.wait_loaded().await;
    if let Ok(msg) = err_rx.try_recv() {
        return Err(msg.into());
    }
    session.set_query(query);
    session.settle().await;

    if !session.has_query() {
        return Ok("Type a keyword to search posts.\n".to_string());
    }
    if !session.has_results() {
        return Ok(format!("No posts match \"{}\".\n", query.trim()));
    }
    let now = Utc::now();
    let mut lines = Vec::new();
    for post in session.results() {
        lines.push(render_post_line(&post, now));
        if let Some(excerpt) = post.excerpt.as_deref().filter(|e| !e.trim().is_empty()) {
            lines.push(format!("    {}", content_preview(excerpt, 120)));
        }
    }
    Ok(finish_lines(&lines))
}

/// What: Render a single post after checking the viewer may see it.
///
/// Inputs:
/// - `source`: Backend to fetch from.
/// - `id`: Post id.
/// - `viewer`: Who is asking.
///
/// Output:
/// - Title, a metadata line, and a body preview; `Err` when missing or not visible.
async fn show_post(source: &dyn PostSource, id: &str, viewer: &Viewer) -> Result<String> {
    let post = source
        .fetch_post(id)
        .await?
        .ok_or_else(|| format!("post {id} not found"))?;
    if !can_view(&post, viewer) {
        tracing::warn!(post = %id, "refusing to show unpublished post");
        return Err(format!("post {id} is not published").into());
    }
    let content = post.content.as_deref().unwrap_or_default();
    let draft = if post.published { "" } else { "draft · " };
    let lines = [
        post.title.clone(),
        format!(
            "{draft}{} · {}",
            time_ago(post.created_at, Utc::now()),
            format_reading_time(reading_time_minutes(content))
        ),
        String::new(),
        content_preview(content, PREVIEW_CHARS),
    ];
    Ok(finish_lines(&lines))
}

/// Join output lines, ending with a newline.
fn finish_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
