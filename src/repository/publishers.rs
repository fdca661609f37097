//! Publishers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        book::BookSummary,
        publisher::{NewPublisher, Publisher},
    },
};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Publisher>> {
        let publisher = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, contact_number, email, type, country, website \
             FROM publisher WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(publisher)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Publisher>> {
        let publishers = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, contact_number, email, type, country, website \
             FROM publisher ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(publishers)
    }

    /// Look up a publisher by its unique name (natural-key conflict check)
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Publisher>> {
        let publisher = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, contact_number, email, type, country, website \
             FROM publisher WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(publisher)
    }

    /// Resolve a list of names; unknown names are silently dropped
    pub async fn find_by_name_in(&self, names: &[String]) -> AppResult<Vec<Publisher>> {
        let publishers = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, contact_number, email, type, country, website \
             FROM publisher WHERE name = ANY($1)",
        )
        .bind(names)
        .fetch_all(&self.pool)
        .await?;

        Ok(publishers)
    }

    /// Filtered page: case-sensitive substring OR-match on country and type.
    pub async fn find_page(
        &self,
        country: &str,
        publisher_type: &str,
        page: i64,
        size: i64,
    ) -> AppResult<(Vec<Publisher>, i64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM publisher \
             WHERE country LIKE '%' || $1 || '%' OR type LIKE '%' || $2 || '%'",
        )
        .bind(country)
        .bind(publisher_type)
        .fetch_one(&self.pool)
        .await?;

        let (limit, offset) = super::page_bounds(page, size);
        let publishers = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, contact_number, email, type, country, website \
             FROM publisher \
             WHERE country LIKE '%' || $1 || '%' OR type LIKE '%' || $2 || '%' \
             ORDER BY id LIMIT $3 OFFSET $4",
        )
        .bind(country)
        .bind(publisher_type)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((publishers, total))
    }

    pub async fn create(&self, publisher: &NewPublisher) -> AppResult<Publisher> {
        let created = sqlx::query_as::<_, Publisher>(
            "INSERT INTO publisher (name, contact_number, email, type, country, website) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, name, contact_number, email, type, country, website",
        )
        .bind(&publisher.name)
        .bind(&publisher.contact_number)
        .bind(&publisher.email)
        .bind(&publisher.publisher_type)
        .bind(&publisher.country)
        .bind(&publisher.website)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Full replace of every scalar field
    pub async fn update(&self, id: i64, publisher: &NewPublisher) -> AppResult<Publisher> {
        let updated = sqlx::query_as::<_, Publisher>(
            "UPDATE publisher SET name = $1, contact_number = $2, email = $3, type = $4, \
             country = $5, website = $6 \
             WHERE id = $7 \
             RETURNING id, name, contact_number, email, type, country, website",
        )
        .bind(&publisher.name)
        .bind(&publisher.contact_number)
        .bind(&publisher.email)
        .bind(&publisher.publisher_type)
        .bind(&publisher.country)
        .bind(&publisher.website)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a publisher; join rows cascade through book_publisher.
    /// Returns the number of deleted rows.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM publisher WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Book summaries linked to a publisher, in join-row order
    pub async fn books_for(&self, publisher_id: i64) -> AppResult<Vec<BookSummary>> {
        let books = sqlx::query_as::<_, BookSummary>(
            "SELECT b.title, b.page_count, b.language, b.publication_date \
             FROM book_publisher bp \
             JOIN book b ON b.id = bp.book_id \
             WHERE bp.publisher_id = $1",
        )
        .bind(publisher_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }
}
