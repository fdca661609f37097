//! Books repository for database operations.
//!
//! Book mutations touch up to four tables (book plus the three join
//! tables), so create/update/delete run inside a single transaction.

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        author::AuthorSummary,
        book::{Book, NewBook},
        category::CategorySummary,
        publisher::PublisherSummary,
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, isbn, page_count, language, price, publication_date, format \
             FROM book WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, isbn, page_count, language, price, publication_date, format \
             FROM book ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Look up a book by its unique ISBN (natural-key conflict check)
    pub async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, isbn, page_count, language, price, publication_date, format \
             FROM book WHERE isbn = $1",
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Filtered page: case-sensitive substring OR-match on language and format.
    pub async fn find_page(
        &self,
        language: &str,
        format: &str,
        page: i64,
        size: i64,
    ) -> AppResult<(Vec<Book>, i64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM book \
             WHERE language LIKE '%' || $1 || '%' OR format LIKE '%' || $2 || '%'",
        )
        .bind(language)
        .bind(format)
        .fetch_one(&self.pool)
        .await?;

        let (limit, offset) = super::page_bounds(page, size);
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, isbn, page_count, language, price, publication_date, format \
             FROM book \
             WHERE language LIKE '%' || $1 || '%' OR format LIKE '%' || $2 || '%' \
             ORDER BY id LIMIT $3 OFFSET $4",
        )
        .bind(language)
        .bind(format)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((books, total))
    }

    /// Insert a book and its three relation sets in one transaction
    pub async fn create(
        &self,
        book: &NewBook,
        author_ids: &[i64],
        publisher_ids: &[i64],
        category_ids: &[i64],
    ) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Book>(
            "INSERT INTO book (title, isbn, page_count, language, price, publication_date, format) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, title, isbn, page_count, language, price, publication_date, format",
        )
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.page_count)
        .bind(&book.language)
        .bind(book.price)
        .bind(book.publication_date)
        .bind(&book.format)
        .fetch_one(&mut *tx)
        .await?;

        Self::insert_relations(&mut tx, created.id, author_ids, publisher_ids, category_ids)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// Full replace of every scalar field and all three relation sets:
    /// existing join rows are deleted and the new sets inserted.
    pub async fn update(
        &self,
        id: i64,
        book: &NewBook,
        author_ids: &[i64],
        publisher_ids: &[i64],
        category_ids: &[i64],
    ) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, Book>(
            "UPDATE book SET title = $1, isbn = $2, page_count = $3, language = $4, \
             price = $5, publication_date = $6, format = $7 \
             WHERE id = $8 \
             RETURNING id, title, isbn, page_count, language, price, publication_date, format",
        )
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.page_count)
        .bind(&book.language)
        .bind(book.price)
        .bind(book.publication_date)
        .bind(&book.format)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        for table in ["book_author", "book_publisher", "book_category"] {
            sqlx::query(&format!("DELETE FROM {} WHERE book_id = $1", table))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        Self::insert_relations(&mut tx, id, author_ids, publisher_ids, category_ids).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn insert_relations(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        book_id: i64,
        author_ids: &[i64],
        publisher_ids: &[i64],
        category_ids: &[i64],
    ) -> AppResult<()> {
        Self::insert_edges(&mut *tx, "book_author", "author_id", book_id, author_ids).await?;
        Self::insert_edges(&mut *tx, "book_publisher", "publisher_id", book_id, publisher_ids)
            .await?;
        Self::insert_edges(&mut *tx, "book_category", "category_id", book_id, category_ids)
            .await?;
        Ok(())
    }

    async fn insert_edges(
        conn: &mut PgConnection,
        table: &str,
        column: &str,
        book_id: i64,
        ids: &[i64],
    ) -> AppResult<()> {
        for id in ids {
            sqlx::query(&format!(
                "INSERT INTO {} (book_id, {}) VALUES ($1, $2)",
                table, column
            ))
            .bind(book_id)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// Delete a book; join rows cascade through the three join tables.
    /// Returns the number of deleted rows.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM book WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Author summaries linked to a book, in join-row order
    pub async fn authors_for(&self, book_id: i64) -> AppResult<Vec<AuthorSummary>> {
        let authors = sqlx::query_as::<_, AuthorSummary>(
            "SELECT a.name, a.nationality, a.birth_date, a.biography, a.email \
             FROM book_author ba \
             JOIN author a ON a.id = ba.author_id \
             WHERE ba.book_id = $1",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Publisher summaries linked to a book, in join-row order
    pub async fn publishers_for(&self, book_id: i64) -> AppResult<Vec<PublisherSummary>> {
        let publishers = sqlx::query_as::<_, PublisherSummary>(
            "SELECT p.name, p.type, p.website \
             FROM book_publisher bp \
             JOIN publisher p ON p.id = bp.publisher_id \
             WHERE bp.book_id = $1",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(publishers)
    }

    /// Category summaries linked to a book, in join-row order
    pub async fn categories_for(&self, book_id: i64) -> AppResult<Vec<CategorySummary>> {
        let categories = sqlx::query_as::<_, CategorySummary>(
            "SELECT c.name, c.description \
             FROM book_category bc \
             JOIN category c ON c.id = bc.category_id \
             WHERE bc.book_id = $1",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }
}
