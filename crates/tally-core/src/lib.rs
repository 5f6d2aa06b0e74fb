//! # tally-core: Pure Pricing Engine for Tally
//!
//! This crate is the **heart** of Tally. It cross-references a product price
//! catalogue against a list of sale records and computes a validated total
//! cost, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     CLI (apps/cli)                              │   │
//! │  │   arg parsing ──► file loading ──► rendering ──► timing         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │ catalogue │  │ validation│  │  report   │  │   money   │   │   │
//! │  │   │ name→price│  │ rule table│  │ fold/merge│  │  Decimal  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO LOGGING • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (SaleRecord, ErrorKind, RejectedRecord, ...)
//! - [`money`] - Money type over exact decimal arithmetic
//! - [`catalogue`] - Immutable name to price lookup
//! - [`validation`] - The per-record rule table
//! - [`report`] - Fold outcomes into the final SalesReport
//! - [`error`] - Fatal catalogue construction errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same catalogue + same records = same report, always
//! 2. **No I/O**: file, console, and clock access live in the caller
//! 3. **Errors Are Data**: a bad record never aborts the run; it becomes an
//!    entry in the report's error list, in input order
//! 4. **Round Once**: contributions stay exact; the total is rounded to two
//!    fractional digits only at finalization
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use tally_core::{compute_report, Catalogue, RawProduct, SaleRecord};
//!
//! let entries: Vec<RawProduct> = serde_json::from_value(json!([
//!     { "title": "Widget", "price": 2.50 }
//! ]))
//! .unwrap();
//! let catalogue = Catalogue::build(&entries).unwrap();
//!
//! let records: Vec<SaleRecord> = serde_json::from_value(json!([
//!     { "SALE_ID": 1, "SALE_Date": "01/02/23", "Product": "Widget", "Quantity": 4 }
//! ]))
//! .unwrap();
//!
//! let report = compute_report(&catalogue, &records);
//! assert_eq!(report.valid_records, 1);
//! assert_eq!(report.total_cost.to_string(), "10.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalogue;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use catalogue::{Catalogue, RawProduct};
pub use error::CatalogueError;
pub use money::Money;
pub use report::{compute_report, ReportBuilder, SalesReport};
pub use types::{ErrorKind, Product, RejectedRecord, SaleRecord, ValidationOutcome};
pub use validation::validate_record;
