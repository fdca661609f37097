//! Category model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::book::BookSummary,
    validation::FieldValidator,
};

/// Full category model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Create/update category request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Validated category fields, ready for persistence
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl CategoryPayload {
    /// Check every field constraint and convert into a [`NewCategory`].
    pub fn validate(self) -> AppResult<NewCategory> {
        let mut v = FieldValidator::new();

        let name = self.name.unwrap_or_default();
        v.required(&name, "Please provide a name.");
        v.max_length(&name, 20, "Name should not exceed 20 characters.");

        let description = self.description.unwrap_or_default();
        v.required(&description, "Please provide a description.");
        v.max_length(&description, 100, "Description should not exceed 100 characters.");

        v.finish()?;

        Ok(NewCategory { name, description })
    }
}

/// Category scalar fields plus linked book summaries
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithBooks {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub books: Vec<BookSummary>,
}

impl CategoryWithBooks {
    /// Projection of a loaded category and its relation collection.
    pub fn project(category: Category, books: Vec<BookSummary>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            books,
        }
    }
}

/// Category scalar subset embedded in book details
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub name: String,
    pub description: String,
}

/// Filtered pagination parameters for categories
#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryPageQuery {
    /// Substring filter on description (empty matches everything)
    pub description: Option<String>,
    /// Zero-based page index
    pub page: Option<i64>,
    /// Page size
    pub size: Option<i64>,
}
