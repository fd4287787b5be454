//! Statistics endpoints

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

/// Catalog statistics
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Total number of books
    pub total_books: u64,
    /// Number of distinct author strings
    pub total_authors: u64,
    /// Book count per author
    pub books_by_author: HashMap<String, u64>,
}

/// Catalog statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Catalog statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.services.stats.library_stats().await)
}
