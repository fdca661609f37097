//! Request payload validation.
//!
//! Each payload DTO exposes a `validate()` method built on [`FieldValidator`],
//! an accumulator that collects one message per violated field in field
//! declaration order. A request fails as a whole: no partially valid payload
//! ever reaches the repository layer.

use chrono::{NaiveDate, Utc};
use validator::ValidateEmail;

use crate::error::{AppError, AppResult};

/// Accumulates field-level violation messages in check order.
#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: Vec<String>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank/empty check. Whitespace-only values count as blank.
    pub fn required(&mut self, value: &str, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(message.to_string());
        }
        self
    }

    /// Upper length bound, counted in characters.
    pub fn max_length(&mut self, value: &str, max: usize, message: &str) -> &mut Self {
        if value.chars().count() > max {
            self.errors.push(message.to_string());
        }
        self
    }

    /// Inclusive integer range.
    pub fn range_i32(&mut self, value: i32, min: i32, max: i32, below: &str, above: &str) -> &mut Self {
        if value < min {
            self.errors.push(below.to_string());
        } else if value > max {
            self.errors.push(above.to_string());
        }
        self
    }

    /// Inclusive float range.
    pub fn range_f64(&mut self, value: f64, min: f64, max: f64, below: &str, above: &str) -> &mut Self {
        if value < min {
            self.errors.push(below.to_string());
        } else if value > max {
            self.errors.push(above.to_string());
        }
        self
    }

    /// Email format check, delegated to the validator crate.
    pub fn email(&mut self, value: &str, message: &str) -> &mut Self {
        if !value.validate_email() {
            self.errors.push(message.to_string());
        }
        self
    }

    /// Date strictly before today.
    pub fn past_date(&mut self, value: NaiveDate, message: &str) -> &mut Self {
        if value >= Utc::now().date_naive() {
            self.errors.push(message.to_string());
        }
        self
    }

    /// Date no later than today.
    pub fn past_or_present_date(&mut self, value: NaiveDate, message: &str) -> &mut Self {
        if value > Utc::now().date_naive() {
            self.errors.push(message.to_string());
        }
        self
    }

    /// Non-empty list check.
    pub fn non_empty<T>(&mut self, values: &[T], message: &str) -> &mut Self {
        if values.is_empty() {
            self.errors.push(message.to_string());
        }
        self
    }

    /// Minimum length, counted in characters.
    pub fn min_length(&mut self, value: &str, min: usize, message: &str) -> &mut Self {
        if value.chars().count() < min {
            self.errors.push(message.to_string());
        }
        self
    }

    /// Succeeds only if no check recorded a violation.
    pub fn finish(self) -> AppResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}
