//! Author management service

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorPageQuery, AuthorWithBooks, NewAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create an author; the unique name is checked before the write.
    pub async fn create(&self, author: NewAuthor) -> AppResult<Author> {
        if self.repository.authors.find_by_name(&author.name).await?.is_some() {
            return Err(AppError::Conflict(
                "An author with this name already exists.".to_string(),
            ));
        }

        self.repository.authors.create(&author).await
    }

    /// Replace every scalar field of an existing author
    pub async fn update(&self, id: i64, author: NewAuthor) -> AppResult<Author> {
        if self.repository.authors.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Author not found with ID: {}", id)));
        }

        self.repository.authors.update(id, &author).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = self.repository.authors.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Author not found with ID: {}", id)));
        }
        Ok(())
    }

    /// Author with its book summaries, loaded and projected in request scope
    pub async fn get_with_books(&self, id: i64) -> AppResult<AuthorWithBooks> {
        let author = self
            .repository
            .authors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author not found with ID: {}", id)))?;

        let books = self.repository.authors.books_for(author.id).await?;
        Ok(AuthorWithBooks::project(author, books))
    }

    /// Every author with book summaries; empty table is a not-found condition
    pub async fn list_with_books(&self) -> AppResult<Vec<AuthorWithBooks>> {
        let authors = self.repository.authors.find_all().await?;
        if authors.is_empty() {
            return Err(AppError::NotFound("No authors found".to_string()));
        }

        let mut projected = Vec::with_capacity(authors.len());
        for author in authors {
            let books = self.repository.authors.books_for(author.id).await?;
            projected.push(AuthorWithBooks::project(author, books));
        }
        Ok(projected)
    }

    /// Filtered page of authors; an empty page is a not-found condition
    pub async fn page_with_filters(
        &self,
        query: &AuthorPageQuery,
    ) -> AppResult<(Vec<AuthorWithBooks>, i64)> {
        let name = query.name.as_deref().unwrap_or("");
        let nationality = query.nationality.as_deref().unwrap_or("");
        let page = query.page.unwrap_or(0);
        let size = query.size.unwrap_or(10);

        let (authors, total) = self
            .repository
            .authors
            .find_page(name, nationality, page, size)
            .await?;

        if authors.is_empty() {
            return Err(AppError::NotFound("No authors found".to_string()));
        }

        let mut projected = Vec::with_capacity(authors.len());
        for author in authors {
            let books = self.repository.authors.books_for(author.id).await?;
            projected.push(AuthorWithBooks::project(author, books));
        }
        Ok((projected, total))
    }
}
