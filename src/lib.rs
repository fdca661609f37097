//! Biblio Library Catalog System
//!
//! A Rust implementation of the Biblio catalog and auth servers,
//! providing a REST JSON API for managing authors, books, publishers,
//! categories and user accounts.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
