//! Category management service

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CategoryPageQuery, CategoryWithBooks, NewCategory},
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a category; the unique name is checked before the write.
    pub async fn create(&self, category: NewCategory) -> AppResult<Category> {
        if self
            .repository
            .categories
            .find_by_name(&category.name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A category with this name already exists.".to_string(),
            ));
        }

        self.repository.categories.create(&category).await
    }

    /// Replace every scalar field of an existing category
    pub async fn update(&self, id: i64, category: NewCategory) -> AppResult<Category> {
        if self.repository.categories.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category not found with ID: {}",
                id
            )));
        }

        self.repository.categories.update(id, &category).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = self.repository.categories.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Category not found with ID: {}",
                id
            )));
        }
        Ok(())
    }

    /// Category with its book summaries, loaded and projected in request scope
    pub async fn get_with_books(&self, id: i64) -> AppResult<CategoryWithBooks> {
        let category = self
            .repository
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category not found with ID: {}", id)))?;

        let books = self.repository.categories.books_for(category.id).await?;
        Ok(CategoryWithBooks::project(category, books))
    }

    /// Every category with book summaries; empty table is a not-found condition
    pub async fn list_with_books(&self) -> AppResult<Vec<CategoryWithBooks>> {
        let categories = self.repository.categories.find_all().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("No categories found".to_string()));
        }

        let mut projected = Vec::with_capacity(categories.len());
        for category in categories {
            let books = self.repository.categories.books_for(category.id).await?;
            projected.push(CategoryWithBooks::project(category, books));
        }
        Ok(projected)
    }

    /// Filtered page of categories; an empty page is a not-found condition
    pub async fn page_with_filters(
        &self,
        query: &CategoryPageQuery,
    ) -> AppResult<(Vec<CategoryWithBooks>, i64)> {
        let description = query.description.as_deref().unwrap_or("");
        let page = query.page.unwrap_or(0);
        let size = query.size.unwrap_or(10);

        let (categories, total) = self
            .repository
            .categories
            .find_page(description, page, size)
            .await?;

        if categories.is_empty() {
            return Err(AppError::NotFound("No categories found".to_string()));
        }

        let mut projected = Vec::with_capacity(categories.len());
        for category in categories {
            let books = self.repository.categories.books_for(category.id).await?;
            projected.push(CategoryWithBooks::project(category, books));
        }
        Ok((projected, total))
    }
}
