//! Authors repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        author::{Author, NewAuthor},
        book::BookSummary,
    },
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, name, nationality, birth_date, biography, email FROM author WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, name, nationality, birth_date, biography, email FROM author ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Look up an author by its unique name (natural-key conflict check)
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, name, nationality, birth_date, biography, email FROM author WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    /// Resolve a list of names; unknown names are silently dropped
    pub async fn find_by_name_in(&self, names: &[String]) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, name, nationality, birth_date, biography, email FROM author WHERE name = ANY($1)",
        )
        .bind(names)
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Filtered page: case-sensitive substring OR-match on name and nationality.
    /// Empty filters match every row. Returns the page plus the total match count.
    pub async fn find_page(
        &self,
        name: &str,
        nationality: &str,
        page: i64,
        size: i64,
    ) -> AppResult<(Vec<Author>, i64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM author \
             WHERE name LIKE '%' || $1 || '%' OR nationality LIKE '%' || $2 || '%'",
        )
        .bind(name)
        .bind(nationality)
        .fetch_one(&self.pool)
        .await?;

        let (limit, offset) = super::page_bounds(page, size);
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, name, nationality, birth_date, biography, email FROM author \
             WHERE name LIKE '%' || $1 || '%' OR nationality LIKE '%' || $2 || '%' \
             ORDER BY id LIMIT $3 OFFSET $4",
        )
        .bind(name)
        .bind(nationality)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((authors, total))
    }

    pub async fn create(&self, author: &NewAuthor) -> AppResult<Author> {
        let created = sqlx::query_as::<_, Author>(
            "INSERT INTO author (name, nationality, birth_date, biography, email) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, nationality, birth_date, biography, email",
        )
        .bind(&author.name)
        .bind(&author.nationality)
        .bind(author.birth_date)
        .bind(&author.biography)
        .bind(&author.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Full replace of every scalar field
    pub async fn update(&self, id: i64, author: &NewAuthor) -> AppResult<Author> {
        let updated = sqlx::query_as::<_, Author>(
            "UPDATE author SET name = $1, nationality = $2, birth_date = $3, biography = $4, email = $5 \
             WHERE id = $6 \
             RETURNING id, name, nationality, birth_date, biography, email",
        )
        .bind(&author.name)
        .bind(&author.nationality)
        .bind(author.birth_date)
        .bind(&author.biography)
        .bind(&author.email)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete an author; join rows cascade through book_author.
    /// Returns the number of deleted rows.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM author WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Book summaries linked to an author, in join-row order
    pub async fn books_for(&self, author_id: i64) -> AppResult<Vec<BookSummary>> {
        let books = sqlx::query_as::<_, BookSummary>(
            "SELECT b.title, b.page_count, b.language, b.publication_date \
             FROM book_author ba \
             JOIN book b ON b.id = ba.book_id \
             WHERE ba.author_id = $1",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }
}
