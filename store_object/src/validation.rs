//! Identifier validation
//!
//! Column names passed to the lookup helpers end up in SQL text, so they are
//! validated the same way `table-derive` validates names at compile time.

use std::fmt;
use type_mapping::is_reserved_keyword;

/// Validation errors for database identifiers
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name contains invalid characters (only alphanumeric and underscore allowed)
    InvalidCharacters(String),
    /// Name is too long
    TooLong {
        name: String,
        length: usize,
        max_length: usize,
    },
    /// Name is empty
    Empty,
    /// Name starts with invalid character (must start with letter or underscore)
    InvalidStartCharacter(String),
    /// Name is a reserved SQL keyword
    ReservedKeyword(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidCharacters(name) => {
                write!(f, "Invalid characters in name '{}': only alphanumeric characters and underscores are allowed", name)
            }
            ValidationError::TooLong {
                name,
                length,
                max_length,
            } => {
                write!(
                    f,
                    "Name '{}' is too long: {} characters (max {})",
                    name, length, max_length
                )
            }
            ValidationError::Empty => {
                write!(f, "Name cannot be empty")
            }
            ValidationError::InvalidStartCharacter(name) => {
                write!(f, "Name '{}' must start with a letter or underscore", name)
            }
            ValidationError::ReservedKeyword(name) => {
                write!(f, "Name '{}' is a reserved SQL keyword", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Longest identifier accepted; same limit `table-derive` enforces at compile time
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Check that `name` is a plain identifier: ASCII letters, digits and
/// underscores, not starting with a digit, and not a reserved keyword.
fn validate_identifier(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Empty);
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ValidationError::TooLong {
            name: name.to_string(),
            length: name.len(),
            max_length: MAX_IDENTIFIER_LENGTH,
        });
    }

    let first_char = name.chars().next().ok_or(ValidationError::Empty)?;
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(ValidationError::InvalidStartCharacter(name.to_string()));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidCharacters(name.to_string()));
    }

    if is_reserved_keyword(name) {
        return Err(ValidationError::ReservedKeyword(name.to_string()));
    }

    Ok(())
}

/// A validated field name that is safe to use in SQL queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedFieldName(String);

impl ValidatedFieldName {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
