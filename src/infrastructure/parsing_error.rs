//! Parsing error types
//!
//! Extraction-side errors are contained per item: the extractors log them and
//! move on to the next result. Nothing here aborts a batch.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("required field '{field}' not found{}", .context.as_deref().map(|c| format!(" in {c}")).unwrap_or_default())]
    RequiredFieldMissing {
        field: String,
        context: Option<String>,
    },

    #[error("invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("no usable selectors for '{field}': {}", .errors.join(", "))]
    SelectorChainEmpty { field: String, errors: Vec<String> },

    #[error("unrecognized date format: '{input}' (expected YYYY-MM-DD or DD/MM/YYYY)")]
    InvalidDateFormat { input: String },
}

impl ParsingError {
    pub fn required_field_missing(field: &str, context: Option<&str>) -> Self {
        Self::RequiredFieldMissing {
            field: field.to_string(),
            context: context.map(|s| s.to_string()),
        }
    }

    pub fn invalid_date(input: &str) -> Self {
        Self::InvalidDateFormat {
            input: input.to_string(),
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
