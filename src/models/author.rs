//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::book::BookSummary,
    validation::FieldValidator,
};

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub biography: String,
    pub email: String,
}

/// Create/update author request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub biography: Option<String>,
    pub email: Option<String>,
}

/// Validated author fields, ready for persistence
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub biography: String,
    pub email: String,
}

impl AuthorPayload {
    /// Check every field constraint and convert into a [`NewAuthor`].
    /// Fails the whole request with the ordered message list on any violation.
    pub fn validate(self) -> AppResult<NewAuthor> {
        let mut v = FieldValidator::new();

        let name = self.name.unwrap_or_default();
        v.required(&name, "Please provide a name.");
        v.max_length(&name, 50, "Name should not exceed 50 characters.");

        let nationality = self.nationality.unwrap_or_default();
        v.required(&nationality, "Please provide a nationality.");
        v.max_length(&nationality, 15, "Nationality should not exceed 15 characters.");

        match self.birth_date {
            None => {
                v.required("", "Birth date cannot be null.");
            }
            Some(date) => {
                v.past_date(date, "Birth date must be in the past");
            }
        }

        let biography = self.biography.unwrap_or_default();
        v.required(&biography, "Please provide a biography.");
        v.max_length(&biography, 300, "Biography should not exceed 300 characters.");

        let email = self.email.unwrap_or_default();
        v.required(&email, "Please provide an email.");
        if !email.is_empty() {
            v.email(&email, "Email should be valid.");
        }
        v.max_length(&email, 100, "Email should not exceed 100 characters.");

        v.finish()?;

        Ok(NewAuthor {
            name,
            nationality,
            // finish() rejected the None case above
            birth_date: self.birth_date.unwrap_or_default(),
            biography,
            email,
        })
    }
}

/// Author scalar fields plus linked book summaries
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorWithBooks {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub biography: String,
    pub email: String,
    pub books: Vec<BookSummary>,
}

impl AuthorWithBooks {
    /// Projection of a loaded author and its relation collection.
    /// Pure read-time transformation; never mutates the inputs.
    pub fn project(author: Author, books: Vec<BookSummary>) -> Self {
        Self {
            id: author.id,
            name: author.name,
            nationality: author.nationality,
            birth_date: author.birth_date,
            biography: author.biography,
            email: author.email,
            books,
        }
    }
}

/// Author scalar subset embedded in book details
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub biography: String,
    pub email: String,
}

/// Filtered pagination parameters for authors
#[derive(Debug, Deserialize, IntoParams)]
pub struct AuthorPageQuery {
    /// Substring filter on name (empty matches everything)
    pub name: Option<String>,
    /// Substring filter on nationality
    pub nationality: Option<String>,
    /// Zero-based page index
    pub page: Option<i64>,
    /// Page size
    pub size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn full_payload() -> AuthorPayload {
        AuthorPayload {
            name: Some("Jane Austen".to_string()),
            nationality: Some("British".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1775, 12, 16),
            biography: Some("English novelist.".to_string()),
            email: Some("jane@austen.org".to_string()),
        }
    }

    #[test]
    fn valid_payload_converts() {
        let author = full_payload().validate().expect("payload should be valid");
        assert_eq!(author.name, "Jane Austen");
        assert_eq!(author.birth_date, NaiveDate::from_ymd_opt(1775, 12, 16).unwrap());
    }

    #[test]
    fn missing_fields_produce_one_message_each() {
        let payload = AuthorPayload {
            name: None,
            nationality: None,
            birth_date: None,
            biography: None,
            email: None,
        };
        let Err(AppError::Validation(errors)) = payload.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors,
            vec![
                "Please provide a name.",
                "Please provide a nationality.",
                "Birth date cannot be null.",
                "Please provide a biography.",
                "Please provide an email.",
            ]
        );
    }

    #[test]
    fn overlong_name_is_rejected() {
        let mut payload = full_payload();
        payload.name = Some("x".repeat(51));
        let Err(AppError::Validation(errors)) = payload.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors, vec!["Name should not exceed 50 characters."]);
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut payload = full_payload();
        payload.email = Some("not-an-email".to_string());
        let Err(AppError::Validation(errors)) = payload.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors, vec!["Email should be valid."]);
    }

    #[test]
    fn projection_carries_scalars_and_books() {
        let author = Author {
            id: 7,
            name: "Jane Austen".to_string(),
            nationality: "British".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1775, 12, 16).unwrap(),
            biography: "English novelist.".to_string(),
            email: "jane@austen.org".to_string(),
        };
        let books = vec![BookSummary {
            title: "Emma".to_string(),
            page_count: 474,
            language: "English".to_string(),
            publication_date: NaiveDate::from_ymd_opt(1815, 12, 23).unwrap(),
        }];
        let projected = AuthorWithBooks::project(author, books);
        assert_eq!(projected.id, 7);
        assert_eq!(projected.books.len(), 1);
        assert_eq!(projected.books[0].title, "Emma");
    }
}
