//! Book management service.
//!
//! Book writes resolve the supplied author/publisher/category name lists
//! against the catalog before anything is persisted. Resolution fails only
//! when a whole list matches nothing; unknown names alongside known ones
//! are dropped silently.

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDetails, BookPageQuery, NewBook},
    repository::Repository,
};

/// Resolved relation ids for a book write
struct ResolvedRelations {
    author_ids: Vec<i64>,
    publisher_ids: Vec<i64>,
    category_ids: Vec<i64>,
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a book; the unique ISBN is checked before the write, and
    /// all three relation lists must resolve to at least one match each.
    pub async fn create(&self, book: NewBook) -> AppResult<Book> {
        if self.repository.books.find_by_isbn(&book.isbn).await?.is_some() {
            return Err(AppError::Conflict(
                "A book with this ISBN already exists.".to_string(),
            ));
        }

        let relations = self.resolve_relations(&book).await?;

        self.repository
            .books
            .create(
                &book,
                &relations.author_ids,
                &relations.publisher_ids,
                &relations.category_ids,
            )
            .await
    }

    /// Replace every scalar field and all three relation sets of an
    /// existing book. Relation edges absent from the new sets are removed.
    pub async fn update(&self, id: i64, book: NewBook) -> AppResult<Book> {
        if self.repository.books.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Book not found with ID: {}", id)));
        }

        let relations = self.resolve_relations(&book).await?;

        self.repository
            .books
            .update(
                id,
                &book,
                &relations.author_ids,
                &relations.publisher_ids,
                &relations.category_ids,
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = self.repository.books.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Book not found with ID: {}", id)));
        }
        Ok(())
    }

    /// Book with author/publisher/category summaries, loaded and projected
    /// in request scope
    pub async fn get_details(&self, id: i64) -> AppResult<BookDetails> {
        let book = self
            .repository
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book not found with ID: {}", id)))?;

        self.project(book).await
    }

    /// Every book with relation summaries; empty table is a not-found condition
    pub async fn list_details(&self) -> AppResult<Vec<BookDetails>> {
        let books = self.repository.books.find_all().await?;
        if books.is_empty() {
            return Err(AppError::NotFound("No books found".to_string()));
        }

        let mut projected = Vec::with_capacity(books.len());
        for book in books {
            projected.push(self.project(book).await?);
        }
        Ok(projected)
    }

    /// Filtered page of books; an empty page is a not-found condition
    pub async fn page_with_filters(
        &self,
        query: &BookPageQuery,
    ) -> AppResult<(Vec<BookDetails>, i64)> {
        let language = query.language.as_deref().unwrap_or("");
        let format = query.format.as_deref().unwrap_or("");
        let page = query.page.unwrap_or(0);
        let size = query.size.unwrap_or(10);

        let (books, total) = self
            .repository
            .books
            .find_page(language, format, page, size)
            .await?;

        if books.is_empty() {
            return Err(AppError::NotFound("No books found".to_string()));
        }

        let mut projected = Vec::with_capacity(books.len());
        for book in books {
            projected.push(self.project(book).await?);
        }
        Ok((projected, total))
    }

    async fn project(&self, book: Book) -> AppResult<BookDetails> {
        let authors = self.repository.books.authors_for(book.id).await?;
        let publishers = self.repository.books.publishers_for(book.id).await?;
        let categories = self.repository.books.categories_for(book.id).await?;
        Ok(BookDetails::project(book, authors, publishers, categories))
    }

    /// Resolve the three name lists; fails with not-found when any resolved
    /// set comes back empty. Aborts before any write.
    async fn resolve_relations(&self, book: &NewBook) -> AppResult<ResolvedRelations> {
        let authors = self.repository.authors.find_by_name_in(&book.author_names).await?;
        let publishers = self
            .repository
            .publishers
            .find_by_name_in(&book.publisher_names)
            .await?;
        let categories = self
            .repository
            .categories
            .find_by_name_in(&book.category_names)
            .await?;

        if authors.is_empty() || categories.is_empty() || publishers.is_empty() {
            return Err(AppError::NotFound(
                "One or more of the provided names (author, category or publisher) do not exist."
                    .to_string(),
            ));
        }

        Ok(ResolvedRelations {
            author_ids: authors.iter().map(|a| a.id).collect(),
            publisher_ids: publishers.iter().map(|p| p.id).collect(),
            category_ids: categories.iter().map(|c| c.id).collect(),
        })
    }
}
