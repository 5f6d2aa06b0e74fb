//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                                   │
//! │                                                                         │
//! │   SaleRecord ──► validate_record ──► ValidationOutcome                  │
//! │                                          │                              │
//! │                        ┌─────────────────┴──────────────┐               │
//! │                        ▼                                ▼               │
//! │               Priced { contribution }        Rejected(RejectedRecord)   │
//! │                        │                                │               │
//! │                        └───────────► fold ◄─────────────┘               │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                                  SalesReport                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sale record's `Product` and `Quantity` fields are kept as raw JSON
//! values on purpose: the input is loosely typed, and classifying a wrong
//! type is the validator's job, not the deserializer's.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalogue product. Identity is the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name, the catalogue lookup key.
    pub name: String,

    /// Unit price. Never negative once the catalogue is built.
    pub price: Money,
}

// =============================================================================
// Sale Record
// =============================================================================

/// One sale transaction entry, as it appears in the sales input.
///
/// Only `Product` and `Quantity` are required for pricing. The identifier
/// and date are opaque: they are carried for reporting and never validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleRecord {
    /// 0-based position in the input sequence. Assigned by the loader;
    /// the basis for error ordering and attribution.
    #[serde(skip)]
    pub index: usize,

    /// Caller-supplied identifier. Opaque; may be missing or duplicated.
    #[serde(rename = "SALE_ID", default)]
    pub id: Option<Value>,

    /// Caller-supplied date. Opaque.
    #[serde(rename = "SALE_Date", default)]
    pub date: Option<Value>,

    /// Name of the product sold. Required; must match a catalogue key.
    #[serde(rename = "Product", default)]
    pub product: Option<Value>,

    /// Units sold. Required; must coerce to a positive whole number.
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<Value>,
}

// =============================================================================
// Error Kinds
// =============================================================================

/// The closed set of per-record data-quality failures.
///
/// Each kind is a property of a single record and never affects any other
/// record's evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required field (`Product`, `Quantity`) is absent or null.
    MissingField,
    /// A required field is present but carries an unusable type or value.
    InvalidType,
    /// The quantity parses but is zero or negative.
    NegativeQuantity,
    /// The product name is not a catalogue key.
    UnknownProduct,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::MissingField => "MissingField",
            ErrorKind::InvalidType => "InvalidType",
            ErrorKind::NegativeQuantity => "NegativeQuantity",
            ErrorKind::UnknownProduct => "UnknownProduct",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Rejected Record
// =============================================================================

/// A sale record excluded from the total, with enough context to render a
/// report line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRecord {
    /// 0-based position of the record in the input.
    pub index: usize,

    /// Which rule rejected the record.
    pub kind: ErrorKind,

    /// Human-readable description naming the offending field or value.
    pub detail: String,
}

/// Renders as `Record 12: UnknownProduct: 'Widget X' not found in catalogue`.
impl fmt::Display for RejectedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record {}: {}: {}", self.index, self.kind, self.detail)
    }
}

// =============================================================================
// Validation Outcome
// =============================================================================

/// The result of validating one sale record. Exactly one of these is
/// produced per record; failures are data, never panics.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The record passed every rule; `contribution` is price × quantity,
    /// exact and unrounded.
    Priced { contribution: Money },
    /// The record failed a rule and contributes exactly zero.
    Rejected(RejectedRecord),
}

// =============================================================================
// JSON type names
// =============================================================================

/// Human-readable JSON type name for validation messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
