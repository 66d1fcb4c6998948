//! # Error Types
//!
//! Domain-specific error types for folio-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  folio-core errors (this file)                                         │
//! │  ├── CoreError        - Lending rule failures                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  folio-demo errors (app)                                               │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ISBN, card id, etc.)
//! 3. Errors are enum variants, never String
//! 4. None of these are fatal; every one leaves the catalog untouched

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Lending rule failures.
///
/// Returned by the `try_*` operations on [`Catalog`](crate::Catalog). The
/// bool-returning operations collapse these into `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No item with this id is in the catalog.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// No member with this card id is registered.
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    /// The item is already checked out.
    ///
    /// ## User Workflow
    /// ```text
    /// request_borrow("U002", "9787115428028")
    ///      │
    ///      ▼
    /// item.checkout() → false (held by U001)
    ///      │
    ///      ▼
    /// AlreadyBorrowed { item_id: "9787115428028", card_id: "U002" }
    /// ```
    #[error("Item {item_id} is already checked out, cannot lend it to {card_id}")]
    AlreadyBorrowed { item_id: String, card_id: String },

    /// The member tried to return an item they do not hold.
    #[error("Item {item_id} is not borrowed by {card_id}")]
    NotBorrowed { item_id: String, card_id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used by [`Item::try_new`](crate::Item::try_new) and
/// [`Member::try_new`](crate::Member::try_new) before an entity exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., whitespace in an id, bad ISBN check digit).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::AlreadyBorrowed {
            item_id: "9787115428028".to_string(),
            card_id: "U002".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Item 9787115428028 is already checked out, cannot lend it to U002"
        );

        let err = CoreError::NotBorrowed {
            item_id: "X1".to_string(),
            card_id: "C2".to_string(),
        };
        assert_eq!(err.to_string(), "Item X1 is not borrowed by C2");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::TooLong {
            field: "card_id".to_string(),
            max: 32,
        };
        assert_eq!(err.to_string(), "card_id must be at most 32 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
