//! Publisher model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::book::BookSummary,
    validation::FieldValidator,
};

/// Full publisher model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    pub contact_number: String,
    pub email: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub publisher_type: String,
    pub country: String,
    pub website: String,
}

/// Create/update publisher request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublisherPayload {
    pub name: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub publisher_type: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
}

/// Validated publisher fields, ready for persistence
#[derive(Debug, Clone)]
pub struct NewPublisher {
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub publisher_type: String,
    pub country: String,
    pub website: String,
}

impl PublisherPayload {
    /// Check every field constraint and convert into a [`NewPublisher`].
    pub fn validate(self) -> AppResult<NewPublisher> {
        let mut v = FieldValidator::new();

        let name = self.name.unwrap_or_default();
        v.required(&name, "Please provide a name.");
        v.max_length(&name, 100, "Name should not exceed 100 characters.");

        let contact_number = self.contact_number.unwrap_or_default();
        v.required(&contact_number, "Please provide a contact number.");
        v.max_length(&contact_number, 15, "Contact number should not exceed 15 characters.");

        let email = self.email.unwrap_or_default();
        v.required(&email, "Please provide a email.");
        if !email.is_empty() {
            v.email(&email, "Email should be valid.");
        }
        v.max_length(&email, 100, "Email should not exceed 100 characters.");

        let publisher_type = self.publisher_type.unwrap_or_default();
        v.required(&publisher_type, "Please provide a type.");
        v.max_length(&publisher_type, 20, "Type should not exceed 20 characters.");

        let country = self.country.unwrap_or_default();
        v.required(&country, "Please provide a country.");
        v.max_length(&country, 20, "Country should not exceed 20 characters.");

        let website = self.website.unwrap_or_default();
        v.required(&website, "Please provide a website.");
        v.max_length(&website, 100, "Website should not exceed 100 characters.");

        v.finish()?;

        Ok(NewPublisher {
            name,
            contact_number,
            email,
            publisher_type,
            country,
            website,
        })
    }
}

/// Publisher scalar fields plus linked book summaries
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublisherWithBooks {
    pub id: i64,
    pub name: String,
    pub contact_number: String,
    pub email: String,
    #[serde(rename = "type")]
    pub publisher_type: String,
    pub country: String,
    pub website: String,
    pub books: Vec<BookSummary>,
}

impl PublisherWithBooks {
    /// Projection of a loaded publisher and its relation collection.
    pub fn project(publisher: Publisher, books: Vec<BookSummary>) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name,
            contact_number: publisher.contact_number,
            email: publisher.email,
            publisher_type: publisher.publisher_type,
            country: publisher.country,
            website: publisher.website,
            books,
        }
    }
}

/// Publisher scalar subset embedded in book details
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublisherSummary {
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub publisher_type: String,
    pub website: String,
}

/// Filtered pagination parameters for publishers
#[derive(Debug, Deserialize, IntoParams)]
pub struct PublisherPageQuery {
    /// Substring filter on country (empty matches everything)
    pub country: Option<String>,
    /// Substring filter on type
    #[serde(rename = "type")]
    pub publisher_type: Option<String>,
    /// Zero-based page index
    pub page: Option<i64>,
    /// Page size
    pub size: Option<i64>,
}
