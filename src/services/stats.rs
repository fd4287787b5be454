//! Statistics service

use std::collections::HashMap;
use std::sync::Arc;

use crate::{api::stats::StatsResponse, store::CatalogStore};

#[derive(Clone)]
pub struct StatsService {
    store: Arc<CatalogStore>,
}

impl StatsService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Aggregate the catalog into totals and a per-author breakdown
    pub async fn library_stats(&self) -> StatsResponse {
        let books = self.store.list().await;

        let mut books_by_author: HashMap<String, u64> = HashMap::new();
        for book in &books {
            *books_by_author.entry(book.author.clone()).or_insert(0) += 1;
        }

        StatsResponse {
            total_books: books.len() as u64,
            total_authors: books_by_author.len() as u64,
            books_by_author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Book;

    #[tokio::test]
    async fn counts_books_per_author() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(CatalogStore::load(dir.path().join("library.json")).await);
        store
            .add(Book::new("Dune", "Frank Herbert", "9780441013593"))
            .await
            .unwrap();
        store
            .add(Book::new("Dune Messiah", "Frank Herbert", "9780441172696"))
            .await
            .unwrap();
        store
            .add(Book::new("1984", "George Orwell", "9780451524935"))
            .await
            .unwrap();

        let stats = StatsService::new(store).library_stats().await;

        assert_eq!(stats.total_books, 3);
        assert_eq!(stats.total_authors, 2);
        assert_eq!(stats.books_by_author.get("Frank Herbert"), Some(&2));
        assert_eq!(stats.books_by_author.get("George Orwell"), Some(&1));
    }
}
