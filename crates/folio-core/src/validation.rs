//! # Validation Module
//!
//! Input validation for catalog entries and member identities.
//!
//! The catalog itself accepts any [`Item`](crate::Item) or
//! [`Member`](crate::Member) it is handed; these checks run when a caller
//! builds one through `try_new`.
//!
//! ## Usage
//! ```rust
//! use folio_core::validation::{validate_card_id, validate_isbn13};
//!
//! assert!(validate_card_id("U001").is_ok());
//! assert!(validate_isbn13("978-7-115-42802-8").is_ok());
//! assert!(validate_isbn13("9787115428029").is_err()); // bad check digit
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted title, author or member name.
pub const MAX_NAME_LEN: usize = 200;

/// Longest accepted item id or card id.
pub const MAX_ID_LEN: usize = 32;

// =============================================================================
// Text Validators
// =============================================================================

fn validate_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a book title.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    validate_text("title", title)
}

/// Validates an author name.
pub fn validate_author(author: &str) -> ValidationResult<()> {
    validate_text("author", author)
}

/// Validates a member's display name.
pub fn validate_member_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name)
}

// =============================================================================
// Identifier Validators
// =============================================================================

fn validate_identifier(field: &str, id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.chars().count() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates an item id.
///
/// ## Rules
/// - Must not be empty
/// - At most 32 characters
/// - No whitespace (ids are compared byte for byte)
///
/// Any string satisfying these is accepted; use [`validate_isbn13`] when the
/// id must be a real ISBN.
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    validate_identifier("id", id)
}

/// Validates a library card id. Same rules as [`validate_item_id`].
pub fn validate_card_id(card_id: &str) -> ValidationResult<()> {
    validate_identifier("card_id", card_id)
}

/// Validates an ISBN-13.
///
/// ## Rules
/// - Exactly 13 digits once hyphens are removed
/// - Weighted sum (1,3,1,3,...) over all 13 digits is divisible by 10
///
/// ## Example
/// ```rust
/// use folio_core::validation::validate_isbn13;
///
/// assert!(validate_isbn13("9787111407010").is_ok());
/// assert!(validate_isbn13("978711140701").is_err());
/// ```
pub fn validate_isbn13(isbn: &str) -> ValidationResult<()> {
    let digits: Vec<u32> = isbn
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "isbn".to_string(),
            reason: "must contain only digits and hyphens".to_string(),
        })?;

    if digits.len() != 13 {
        return Err(ValidationError::InvalidFormat {
            field: "isbn".to_string(),
            reason: format!("expected 13 digits, found {}", digits.len()),
        });
    }

    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();

    if sum % 10 != 0 {
        return Err(ValidationError::InvalidFormat {
            field: "isbn".to_string(),
            reason: "check digit does not match".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
