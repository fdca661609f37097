//! Business logic services

pub mod auth;
pub mod authors;
pub mod books;
pub mod categories;
pub mod publishers;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub publishers: publishers::PublishersService,
    pub categories: categories::CategoriesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            publishers: publishers::PublishersService::new(repository.clone()),
            categories: categories::CategoriesService::new(repository),
        }
    }
}
