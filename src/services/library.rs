//! Library façade
//!
//! Combines the catalog store and the metadata resolver into the operations
//! the API exposes. External lookups run before the store's write guard is
//! taken, so a slow upstream never blocks unrelated catalog operations; the
//! guarded insert re-checks uniqueness and is the authoritative decision.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{normalize_isbn, Book},
    services::openlibrary::MetadataResolver,
    store::CatalogStore,
};

#[derive(Clone)]
pub struct LibraryService {
    store: Arc<CatalogStore>,
    resolver: Arc<dyn MetadataResolver>,
}

impl LibraryService {
    pub fn new(store: Arc<CatalogStore>, resolver: Arc<dyn MetadataResolver>) -> Self {
        Self { store, resolver }
    }

    /// Resolve an ISBN through the bibliographic service and insert the
    /// resulting book.
    ///
    /// The duplicate pre-check is optimistic: it saves the upstream round
    /// trips in the common case, but [`CatalogStore::add`] re-checks under
    /// the write guard and decides. A caller racing past the pre-check for
    /// the same identifier still gets `DuplicateIdentifier`.
    pub async fn add_by_isbn(&self, raw_isbn: &str) -> AppResult<Book> {
        let isbn = normalize_isbn(raw_isbn);
        if isbn.is_empty() {
            return Err(AppError::InvalidIdentifier(raw_isbn.to_string()));
        }

        if self.store.find(&isbn).await.is_some() {
            return Err(AppError::DuplicateIdentifier(isbn));
        }

        let book = self.resolver.resolve(&isbn).await?;
        self.store.add(book.clone()).await?;

        tracing::info!("Added book from Open Library: {}", book);
        Ok(book)
    }

    /// Insert a book the caller already has full metadata for.
    pub async fn add_manual(&self, title: &str, author: &str, raw_isbn: &str) -> AppResult<Book> {
        let title = title.trim();
        let author = author.trim();
        if title.is_empty() || author.is_empty() {
            return Err(AppError::Validation(
                "Title and author must not be empty".to_string(),
            ));
        }

        let isbn = normalize_isbn(raw_isbn);
        if isbn.is_empty() {
            return Err(AppError::InvalidIdentifier(raw_isbn.to_string()));
        }

        let book = Book::new(title, author, isbn);
        self.store.add(book.clone()).await?;

        tracing::info!("Added book manually: {}", book);
        Ok(book)
    }

    /// Remove a book, returning the removed entry, or None when the
    /// identifier is not in the catalog.
    pub async fn remove_by_isbn(&self, raw_isbn: &str) -> AppResult<Option<Book>> {
        let isbn = normalize_isbn(raw_isbn);
        if isbn.is_empty() {
            return Err(AppError::InvalidIdentifier(raw_isbn.to_string()));
        }

        let Some(book) = self.store.find(&isbn).await else {
            return Ok(None);
        };

        if self.store.remove(&isbn).await? {
            tracing::info!("Removed book: {}", book);
            Ok(Some(book))
        } else {
            Ok(None)
        }
    }

    pub async fn find_by_isbn(&self, raw_isbn: &str) -> AppResult<Option<Book>> {
        let isbn = normalize_isbn(raw_isbn);
        if isbn.is_empty() {
            return Err(AppError::InvalidIdentifier(raw_isbn.to_string()));
        }
        Ok(self.store.find(&isbn).await)
    }

    pub async fn list_all(&self) -> Vec<Book> {
        self.store.list().await
    }

    pub async fn count(&self) -> usize {
        self.store.len().await
    }
}
