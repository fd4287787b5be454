//! File-backed catalog store
//!
//! Owns the in-memory catalog, enforces ISBN uniqueness and keeps the JSON
//! snapshot on disk in sync with memory. Every mutation runs under a single
//! write guard together with the persist that follows it, and the snapshot
//! is replaced atomically (write to a temporary file, then rename) so an
//! interrupted write never corrupts the only copy of the data.

use std::collections::HashSet;
use std::path::PathBuf;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

pub struct CatalogStore {
    path: PathBuf,
    books: RwLock<Vec<Book>>,
}

impl CatalogStore {
    /// Load the catalog from the snapshot file.
    ///
    /// Missing, unreadable or malformed snapshots degrade to an empty
    /// catalog; the store stays usable either way.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let books = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<Book>>(&bytes) {
                Ok(books) => match validate_snapshot(&books) {
                    Ok(()) => books,
                    Err(reason) => {
                        tracing::warn!(
                            "Snapshot {} rejected ({}), starting with an empty catalog",
                            path.display(),
                            reason
                        );
                        Vec::new()
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        "Snapshot {} is not valid JSON ({}), starting with an empty catalog",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "Snapshot {} not found, starting with an empty catalog",
                    path.display()
                );
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Failed to read snapshot {}: {}", path.display(), e);
                Vec::new()
            }
        };

        Self {
            path,
            books: RwLock::new(books),
        }
    }

    /// Append a book and rewrite the snapshot.
    ///
    /// The uniqueness check, the append and the persist form one guarded
    /// step. On `DuplicateIdentifier` nothing changes; on `Persistence` the
    /// in-memory append has already happened and the caller learns that the
    /// snapshot is now stale.
    pub async fn add(&self, book: Book) -> AppResult<()> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.isbn == book.isbn) {
            return Err(AppError::DuplicateIdentifier(book.isbn));
        }
        books.push(book);
        self.persist(books.as_slice()).await
    }

    /// Remove the book with the given identifier. Returns whether an entry
    /// was removed; the snapshot is only rewritten when one was.
    pub async fn remove(&self, isbn: &str) -> AppResult<bool> {
        let mut books = self.books.write().await;
        let Some(pos) = books.iter().position(|b| b.isbn == isbn) else {
            return Ok(false);
        };
        books.remove(pos);
        self.persist(books.as_slice()).await?;
        Ok(true)
    }

    pub async fn find(&self, isbn: &str) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned()
    }

    /// Snapshot copy of the catalog, in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }

    /// Write the full catalog to the snapshot file, replacing it atomically.
    /// Callers hold the write guard, so persisted states can never interleave.
    async fn persist(&self, books: &[Book]) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(books)
            .map_err(|e| AppError::Persistence(format!("failed to encode snapshot: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::Persistence(format!(
                        "failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, &json).await.map_err(|e| {
            AppError::Persistence(format!("failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::Persistence(format!("failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

/// A snapshot is only acceptable when every entry has a non-empty,
/// pairwise-distinct identifier.
fn validate_snapshot(books: &[Book]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for book in books {
        if book.isbn.is_empty() {
            return Err("entry with empty ISBN".to_string());
        }
        if !seen.insert(book.isbn.as_str()) {
            return Err(format!("duplicate ISBN {}", book.isbn));
        }
    }
    Ok(())
}
