//! Open Library metadata resolution
//!
//! Turns a bare ISBN into a populated [`Book`] through a two-stage lookup:
//! the record itself, then one lookup per author reference. Author lookups
//! are best-effort: a failed one drops that author from the result instead
//! of failing the whole resolution.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde::Deserialize;

#[cfg(test)]
use mockall::automock;

use crate::{
    config::OpenLibraryConfig,
    error::{AppError, AppResult},
    models::book::{Book, UNKNOWN_AUTHOR, UNKNOWN_TITLE},
};

/// Resolves an identifier into a full bibliographic record.
/// Implementations never mutate the catalog.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    async fn resolve(&self, isbn: &str) -> AppResult<Book>;
}

/// Primary lookup payload: `GET /isbn/{isbn}.json`
#[derive(Debug, Deserialize)]
struct IsbnRecord {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<AuthorRef>,
}

#[derive(Debug, Deserialize)]
struct AuthorRef {
    key: Option<String>,
}

/// Secondary lookup payload: `GET {key}.json`
#[derive(Debug, Deserialize)]
struct AuthorRecord {
    name: Option<String>,
}

pub struct OpenLibraryResolver {
    client: reqwest::Client,
    base_url: String,
    author_concurrency: usize,
}

impl OpenLibraryResolver {
    pub fn new(config: &OpenLibraryConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("libris-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            author_concurrency: config.max_concurrent_author_lookups.max(1),
        })
    }

    /// Resolve one author reference to a display name. Failures are logged
    /// and absorbed; the record is still useful without every author name.
    async fn fetch_author_name(&self, key: String) -> Option<String> {
        let url = format!("{}{}.json", self.base_url, key);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Author lookup {} failed: {}", key, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Author lookup {} returned status {}", key, response.status());
            return None;
        }

        match response.json::<AuthorRecord>().await {
            Ok(record) => Some(record.name.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())),
            Err(e) => {
                tracing::warn!("Author lookup {} returned an unreadable body: {}", key, e);
                None
            }
        }
    }
}

fn request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::UpstreamTimeout
    } else {
        AppError::UpstreamUnavailable(err.to_string())
    }
}

#[async_trait]
impl MetadataResolver for OpenLibraryResolver {
    async fn resolve(&self, isbn: &str) -> AppResult<Book> {
        let url = format!("{}/isbn/{}.json", self.base_url, isbn);
        tracing::debug!("Primary lookup {}", url);

        let response = self.client.get(&url).send().await.map_err(request_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::RecordNotFound(isbn.to_string()));
        }
        if !status.is_success() {
            return Err(AppError::Upstream(status.as_u16()));
        }

        let record: IsbnRecord = response.json().await.map_err(request_error)?;

        let title = record.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        let author_keys: Vec<String> = record
            .authors
            .into_iter()
            .filter_map(|author| author.key)
            .collect();

        // Bounded fan-out; `buffered` yields results in reference order
        // regardless of completion order.
        let names: Vec<String> = stream::iter(author_keys)
            .map(|key| self.fetch_author_name(key))
            .buffered(self.author_concurrency)
            .filter_map(|name| async move { name })
            .collect()
            .await;

        let author = if names.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            names.join(", ")
        };

        Ok(Book::new(title, author, isbn))
    }
}
