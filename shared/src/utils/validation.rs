//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Validation error with field-level details
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) {
        self.errors.push(ValidationError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First recorded error, if any
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }
}

/// Common validation functions
pub mod validators {
    use super::EMAIL_REGEX;

    /// Check that a string has visible content
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check a string's length in characters (not bytes)
    pub fn max_chars(value: &str, max: usize) -> bool {
        value.chars().count() <= max
    }

    /// Check if an email address is well formed
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Paint fence"));
        assert!(!not_blank("   "));
        assert!(!not_blank(""));
    }

    #[test]
    fn test_max_chars_counts_characters() {
        assert!(max_chars("ééé", 3));
        assert!(!max_chars("abcd", 3));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("alice@example.com"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("not an email"));
    }

    #[test]
    fn test_field_errors_grouping() {
        let mut errors = ValidationErrors::new();
        errors.add_error("title", "must not be blank", "required");
        errors.add_error("title", "too long", "length");
        errors.add_error("payment", "must not be negative", "range");

        let grouped = errors.to_field_errors();
        assert_eq!(grouped["title"].len(), 2);
        assert_eq!(errors.first().unwrap().field, "title");
    }
}
