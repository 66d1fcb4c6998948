//! # folio-core: Lending Logic for Folio
//!
//! This crate holds the whole lending model: items, members and the catalog
//! that mediates between them. It performs no I/O; outcomes are returned to
//! the caller and emitted as `tracing` events.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    folio-demo (binary)                          │   │
//! │  │    config ──► tracing subscriber ──► scripted lending run       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ folio-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │  events   │  │ validation│  │   │
//! │  │   │   Item    │  │  Catalog  │  │ Lending-  │  │   rules   │  │   │
//! │  │   │  Member   │  │           │  │   Event   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item and Member
//! - [`catalog`] - The Catalog and its lending operations
//! - [`events`] - Recorded outcomes of catalog operations
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_core::{Catalog, Item, Member};
//!
//! let mut library = Catalog::new("City Library");
//! library.add_item(Item::new("Introduction to Algorithms", "Thomas Cormen", "9787111407010"));
//! library.register_member(Member::new("Zhang San", "U001"));
//! library.register_member(Member::new("Li Si", "U002"));
//!
//! assert!(library.request_borrow("U001", "9787111407010"));
//! assert!(!library.request_borrow("U002", "9787111407010")); // already out
//! assert!(library.request_return("U001", "9787111407010"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod events;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use events::{EventRecord, LendingEvent};
pub use types::{Item, ItemStatus, Member};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Catalog name used when the caller does not supply one.
pub const DEFAULT_CATALOG_NAME: &str = "City Library";
