//! Libris Book Catalog Server
//!
//! A small catalog manager: book records keyed by ISBN, persisted to a JSON
//! snapshot file and enriched from the Open Library bibliographic service.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
