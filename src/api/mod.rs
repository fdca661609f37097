//! API handlers for Biblio REST endpoints

pub mod auth;
pub mod authors;
pub mod books;
pub mod categories;
pub mod health;
pub mod openapi;
pub mod publishers;

use serde::Serialize;

/// Paginated response wrapper
#[derive(Serialize)]
pub struct PaginatedResponse<T> {
    /// Page of items
    pub items: Vec<T>,
    /// Total number of rows matching the filters
    pub total: i64,
    /// Zero-based page index
    pub page: i64,
    /// Page size
    pub size: i64,
}
