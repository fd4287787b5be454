//! Business logic services

pub mod library;
pub mod openlibrary;
pub mod stats;

use std::sync::Arc;

use crate::{services::openlibrary::MetadataResolver, store::CatalogStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub library: library::LibraryService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over one shared catalog store
    pub fn new(store: Arc<CatalogStore>, resolver: Arc<dyn MetadataResolver>) -> Self {
        Self {
            library: library::LibraryService::new(store.clone(), resolver),
            stats: stats::StatsService::new(store),
        }
    }
}
