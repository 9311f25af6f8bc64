//! PostgREST-style HTTP backend for posts.

use std::time::Duration;

use futures::future::BoxFuture;
use zeroize::Zeroizing;

use super::{PostSource, Result};
use crate::state::{ListFilter, Post};
use crate::util::percent_encode;

/// Columns fetched for list and search views.
const LIST_COLUMNS: &str = "id,title,excerpt,featured_image,created_at,published";
/// Columns fetched for a single post.
const DETAIL_COLUMNS: &str = "id,title,content,excerpt,featured_image,created_at,published,author_id";

/// HTTP post source talking to a hosted PostgREST endpoint.
pub struct RestSource {
    /// Shared HTTP client with the configured timeout.
    client: reqwest::Client,
    /// Project base URL without trailing slash.
    base_url: String,
    /// Anonymous API key sent with every request.
    api_key: Zeroizing<String>,
    /// Table holding posts.
    table: String,
}

impl std::fmt::Debug for RestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestSource")
            .field("base_url", &self.base_url)
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl RestSource {
    /// What: Build a client for a backend project.
    ///
    /// Inputs:
    /// - `base_url`: Project URL, e.g. `https://xyz.supabase.co`.
    /// - `api_key`: API key for the `apikey` and bearer headers.
    /// - `table`: Posts table name.
    /// - `timeout`: Per-request timeout.
    ///
    /// Output:
    /// - Configured source, or an error when the URL is empty or the HTTP client cannot be built.
    ///
    /// # Errors
    /// - Returns `Err` when `base_url` is blank
    /// - Returns `Err` when the TLS backend fails to initialize
    pub fn new(
        base_url: &str,
        api_key: Zeroizing<String>,
        table: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err("backend_url is not configured".into());
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))?;
        Ok(Self {
            client,
            base_url,
            api_key,
            table: table.to_string(),
        })
    }

    /// URL listing posts newest first.
    #[must_use]
    pub fn list_url(&self, filter: ListFilter) -> String {
        let mut url = format!(
            "{}/rest/v1/{}?select={LIST_COLUMNS}&order=created_at.desc",
            self.base_url, self.table
        );
        if filter.published_only {
            url.push_str("&published=eq.true");
        }
        url
    }

    /// URL selecting one post by id.
    #[must_use]
    pub fn detail_url(&self, id: &str) -> String {
        format!(
            "{}/rest/v1/{}?select={DETAIL_COLUMNS}&id=eq.{}&limit=1",
            self.base_url,
            self.table,
            percent_encode(id)
        )
    }

    /// What: GET `url` and decode the rows as posts.
    ///
    /// Output:
    /// - Decoded posts; `Err` on network failure, a non-success status, or a malformed body.
    async fn get_posts(&self, url: String) -> Result<Vec<Post>> {
        tracing::debug!(url = %url, "backend request");
        let resp = self
            .client
            .get(&url)
            .header("apikey", self.api_key.as_str())
            .bearer_auth(self.api_key.as_str())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("backend returned {status}: {}", body.trim()).into());
        }
        let posts = resp
            .json::<Vec<Post>>()
            .await
            .map_err(|e| format!("Failed to decode posts: {e}"))?;
        Ok(posts)
    }
}

impl PostSource for RestSource {
    fn list_posts(&self, filter: ListFilter) -> BoxFuture<'_, Result<Vec<Post>>> {
        Box::pin(self.get_posts(self.list_url(filter)))
    }

    fn fetch_post<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<Post>>> {
        Box::pin(async move {
            let posts = self.get_posts(self.detail_url(id)).await?;
            Ok(posts.into_iter().next())
        })
    }
}
