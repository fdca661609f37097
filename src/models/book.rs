//! Book model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{author::AuthorSummary, category::CategorySummary, publisher::PublisherSummary},
    validation::FieldValidator,
};

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub page_count: i32,
    pub language: String,
    pub price: f64,
    pub publication_date: NaiveDate,
    pub format: String,
}

/// Create/update book request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub page_count: Option<i32>,
    pub language: Option<String>,
    pub price: Option<f64>,
    pub publication_date: Option<NaiveDate>,
    pub format: Option<String>,
    pub author_names: Option<Vec<String>>,
    pub category_names: Option<Vec<String>>,
    pub publisher_names: Option<Vec<String>>,
}

/// Validated book fields plus the relation name lists, ready for resolution
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub page_count: i32,
    pub language: String,
    pub price: f64,
    pub publication_date: NaiveDate,
    pub format: String,
    pub author_names: Vec<String>,
    pub category_names: Vec<String>,
    pub publisher_names: Vec<String>,
}

impl BookPayload {
    /// Check every field constraint and convert into a [`NewBook`].
    pub fn validate(self) -> AppResult<NewBook> {
        let mut v = FieldValidator::new();

        let title = self.title.unwrap_or_default();
        v.required(&title, "Please provide a title.");
        v.max_length(&title, 50, "Title should not exceed 50 characters.");

        let isbn = self.isbn.unwrap_or_default();
        v.required(&isbn, "Please provide an ISBN.");
        v.max_length(&isbn, 13, "ISBN should not exceed 13 characters.");

        let page_count = self.page_count.unwrap_or(0);
        v.range_i32(
            page_count,
            100,
            1500,
            "Page count must be at least 100.",
            "Page count cannot exceed 1500.",
        );

        let language = self.language.unwrap_or_default();
        v.required(&language, "Please provide a language.");
        v.max_length(&language, 10, "Language should not exceed 10 characters.");

        let price = self.price.unwrap_or(0.0);
        v.range_f64(
            price,
            0.0,
            1000.0,
            "Price cannot be negative.",
            "Price cannot exceed 1000.",
        );

        match self.publication_date {
            None => {
                v.required("", "Publication date cannot be null.");
            }
            Some(date) => {
                v.past_or_present_date(date, "Publication date cannot exceed the current date.");
            }
        }

        let format = self.format.unwrap_or_default();
        v.required(&format, "Please provide a format.");
        v.max_length(&format, 20, "Format should not exceed 20 characters.");

        let author_names = self.author_names.unwrap_or_default();
        v.non_empty(&author_names, "Author names should not be empty.");

        let category_names = self.category_names.unwrap_or_default();
        v.non_empty(&category_names, "Category names should not be empty.");

        let publisher_names = self.publisher_names.unwrap_or_default();
        v.non_empty(&publisher_names, "Publisher names should not be empty.");

        v.finish()?;

        Ok(NewBook {
            title,
            isbn,
            page_count,
            language,
            price,
            publication_date: self.publication_date.unwrap_or_default(),
            format,
            author_names,
            category_names,
            publisher_names,
        })
    }
}

/// Book scalar subset embedded in "with books" projections
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub title: String,
    pub page_count: i32,
    pub language: String,
    pub publication_date: NaiveDate,
}

/// Book scalar fields plus summaries of every linked relation
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub page_count: i32,
    pub language: String,
    pub price: f64,
    pub publication_date: NaiveDate,
    pub format: String,
    pub authors: Vec<AuthorSummary>,
    pub publishers: Vec<PublisherSummary>,
    pub categories: Vec<CategorySummary>,
}

impl BookDetails {
    /// Projection of a loaded book and its three relation collections.
    pub fn project(
        book: Book,
        authors: Vec<AuthorSummary>,
        publishers: Vec<PublisherSummary>,
        categories: Vec<CategorySummary>,
    ) -> Self {
        Self {
            id: book.id,
            title: book.title,
            isbn: book.isbn,
            page_count: book.page_count,
            language: book.language,
            price: book.price,
            publication_date: book.publication_date,
            format: book.format,
            authors,
            publishers,
            categories,
        }
    }
}

/// Filtered pagination parameters for books
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookPageQuery {
    /// Substring filter on language (empty matches everything)
    pub language: Option<String>,
    /// Substring filter on format
    pub format: Option<String>,
    /// Zero-based page index
    pub page: Option<i64>,
    /// Page size
    pub size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn full_payload() -> BookPayload {
        BookPayload {
            title: Some("Emma".to_string()),
            isbn: Some("9780141439587".to_string()),
            page_count: Some(474),
            language: Some("English".to_string()),
            price: Some(19.99),
            publication_date: NaiveDate::from_ymd_opt(1815, 12, 23),
            format: Some("Hardcover".to_string()),
            author_names: Some(vec!["Jane Austen".to_string()]),
            category_names: Some(vec!["Novel".to_string()]),
            publisher_names: Some(vec!["John Murray".to_string()]),
        }
    }

    #[test]
    fn valid_payload_converts() {
        let book = full_payload().validate().expect("payload should be valid");
        assert_eq!(book.isbn, "9780141439587");
        assert_eq!(book.author_names, vec!["Jane Austen"]);
    }

    #[test]
    fn page_count_bounds_are_inclusive() {
        let mut payload = full_payload();
        payload.page_count = Some(100);
        assert!(payload.validate().is_ok());

        let mut payload = full_payload();
        payload.page_count = Some(1500);
        assert!(payload.validate().is_ok());

        let mut payload = full_payload();
        payload.page_count = Some(99);
        let Err(AppError::Validation(errors)) = payload.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors, vec!["Page count must be at least 100."]);
    }

    #[test]
    fn missing_relation_lists_are_rejected() {
        let mut payload = full_payload();
        payload.author_names = None;
        payload.category_names = Some(vec![]);
        let Err(AppError::Validation(errors)) = payload.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors,
            vec![
                "Author names should not be empty.",
                "Category names should not be empty.",
            ]
        );
    }

    #[test]
    fn price_above_cap_is_rejected() {
        let mut payload = full_payload();
        payload.price = Some(1000.01);
        let Err(AppError::Validation(errors)) = payload.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors, vec!["Price cannot exceed 1000."]);
    }

    #[test]
    fn details_projection_flattens_relations() {
        let book = Book {
            id: 3,
            title: "Emma".to_string(),
            isbn: "9780141439587".to_string(),
            page_count: 474,
            language: "English".to_string(),
            price: 19.99,
            publication_date: NaiveDate::from_ymd_opt(1815, 12, 23).unwrap(),
            format: "Hardcover".to_string(),
        };
        let details = BookDetails::project(
            book,
            vec![AuthorSummary {
                name: "Jane Austen".to_string(),
                nationality: "British".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1775, 12, 16).unwrap(),
                biography: "English novelist.".to_string(),
                email: "jane@austen.org".to_string(),
            }],
            vec![PublisherSummary {
                name: "John Murray".to_string(),
                publisher_type: "Trade".to_string(),
                website: "https://johnmurray.co.uk".to_string(),
            }],
            vec![CategorySummary {
                name: "Novel".to_string(),
                description: "Long-form fiction".to_string(),
            }],
        );
        assert_eq!(details.id, 3);
        assert_eq!(details.authors[0].name, "Jane Austen");
        assert_eq!(details.publishers[0].publisher_type, "Trade");
        assert_eq!(details.categories[0].name, "Novel");
    }
}
