//! Categories repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        book::BookSummary,
        category::{Category, NewCategory},
    },
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM category WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM category ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Look up a category by its unique name (natural-key conflict check)
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM category WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Resolve a list of names; unknown names are silently dropped
    pub async fn find_by_name_in(&self, names: &[String]) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM category WHERE name = ANY($1)",
        )
        .bind(names)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Filtered page: case-sensitive substring match on description only.
    pub async fn find_page(
        &self,
        description: &str,
        page: i64,
        size: i64,
    ) -> AppResult<(Vec<Category>, i64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM category WHERE description LIKE '%' || $1 || '%'",
        )
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        let (limit, offset) = super::page_bounds(page, size);
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM category \
             WHERE description LIKE '%' || $1 || '%' \
             ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(description)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((categories, total))
    }

    pub async fn create(&self, category: &NewCategory) -> AppResult<Category> {
        let created = sqlx::query_as::<_, Category>(
            "INSERT INTO category (name, description) VALUES ($1, $2) \
             RETURNING id, name, description",
        )
        .bind(&category.name)
        .bind(&category.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Full replace of every scalar field
    pub async fn update(&self, id: i64, category: &NewCategory) -> AppResult<Category> {
        let updated = sqlx::query_as::<_, Category>(
            "UPDATE category SET name = $1, description = $2 WHERE id = $3 \
             RETURNING id, name, description",
        )
        .bind(&category.name)
        .bind(&category.description)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a category; join rows cascade through book_category.
    /// Returns the number of deleted rows.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Book summaries linked to a category, in join-row order
    pub async fn books_for(&self, category_id: i64) -> AppResult<Vec<BookSummary>> {
        let books = sqlx::query_as::<_, BookSummary>(
            "SELECT b.title, b.page_count, b.language, b.publication_date \
             FROM book_category bc \
             JOIN book b ON b.id = bc.book_id \
             WHERE bc.category_id = $1",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }
}
