//! # Error Types
//!
//! Fatal errors for tally-core.
//!
//! There is exactly one fatal error family in the engine: a structurally
//! invalid catalogue. Without a defined price domain no record can be priced,
//! so construction aborts the run. Everything that can go wrong with an
//! individual sale record is recoverable and lives in the report as a
//! [`RejectedRecord`](crate::types::RejectedRecord), never here.

use thiserror::Error;

use crate::money::Money;

/// Fatal catalogue construction errors.
///
/// Raised by [`Catalogue::build`](crate::catalogue::Catalogue::build) before
/// any sale record is processed. `index` is the 0-based position of the
/// offending entry in the catalogue input.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Entry has no usable name.
    #[error("catalogue entry {index}: missing required field 'title'")]
    MissingTitle { index: usize },

    /// Entry name is present but blank.
    #[error("catalogue entry {index}: 'title' must be a non-empty string")]
    BlankTitle { index: usize },

    /// Entry name carries a non-string type.
    #[error("catalogue entry {index}: 'title' must be a string, got {found}")]
    InvalidTitle { index: usize, found: &'static str },

    /// Entry has no price.
    #[error("catalogue entry {index} ('{title}'): missing required field 'price'")]
    MissingPrice { index: usize, title: String },

    /// Entry price is present but not numeric.
    #[error("catalogue entry {index} ('{title}'): 'price' must be a number, got {found}")]
    InvalidPrice {
        index: usize,
        title: String,
        found: String,
    },

    /// Entry price is numeric but below zero.
    #[error("catalogue entry {index} ('{title}'): 'price' cannot be negative (got {price})")]
    NegativePrice {
        index: usize,
        title: String,
        price: Money,
    },
}

/// Convenience alias for catalogue construction results.
pub type CatalogueResult<T> = Result<T, CatalogueError>;
