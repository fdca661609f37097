//! User model for the auth service

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::{error::AppResult, validation::FieldValidator};

/// Full user model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Registration request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Validated registration fields
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl RegisterUser {
    /// Check every field constraint and convert into a [`NewUser`].
    pub fn validate(self) -> AppResult<NewUser> {
        let mut v = FieldValidator::new();

        let username = self.username.unwrap_or_default();
        v.required(&username, "Please provide a username.");
        v.max_length(&username, 50, "Username should not exceed 50 characters.");

        let password = self.password.unwrap_or_default();
        v.required(&password, "Please provide a password.");
        if !password.is_empty() {
            v.min_length(&password, 4, "Password must be at least 4 characters.");
        }

        v.finish()?;

        Ok(NewUser { username, password })
    }
}
