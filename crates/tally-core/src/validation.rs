//! # Validation Module
//!
//! The per-record rule table. Exactly one [`ValidationOutcome`] per sale
//! record; a failing record becomes data in the report, never a panic or an
//! early return from the run.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate_record(record, catalogue)                                     │
//! │                                                                         │
//! │  1. MissingField      'Product' or 'Quantity' absent or null            │
//! │  2. InvalidType       'Product' not a string, or 'Quantity' not         │
//! │                       coercible to a whole number                       │
//! │  3. NegativeQuantity  quantity parses but is <= 0                       │
//! │  4. UnknownProduct    product name is not a catalogue key               │
//! │                                                                         │
//! │  first failing rule wins; all pass => Priced { price × quantity }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order is fixed so that identical input always yields the identical
//! error taxonomy, independent of catalogue contents.

use serde_json::Value;

use crate::catalogue::Catalogue;
use crate::types::{json_type_name, ErrorKind, RejectedRecord, SaleRecord, ValidationOutcome};

/// Largest float magnitude whose whole values are all exactly representable.
const MAX_EXACT_WHOLE: f64 = 9_007_199_254_740_992.0; // 2^53

// =============================================================================
// Quantity Coercion
// =============================================================================

/// Tagged result of coercing the raw `Quantity` value.
///
/// The input is loosely typed, so the coercion is an explicit decision table
/// rather than scattered dynamic checks; every raw shape lands in exactly
/// one variant.
#[derive(Debug, Clone, PartialEq)]
enum QuantityParse {
    /// A usable whole number.
    Whole(i64),
    /// Numeric, but carries a fractional part.
    NotWhole(f64),
    /// Numeric, but outside the supported whole-number range.
    OutOfRange(String),
    /// Not a number at all; holds the JSON type name.
    WrongType(&'static str),
}

fn parse_quantity(value: &Value) -> QuantityParse {
    match value {
        Value::Number(number) => {
            if let Some(quantity) = number.as_i64() {
                return QuantityParse::Whole(quantity);
            }
            // u64 beyond i64::MAX
            if number.as_u64().is_some() {
                return QuantityParse::OutOfRange(number.to_string());
            }
            match number.as_f64() {
                Some(float) if float.fract() == 0.0 && float.abs() <= MAX_EXACT_WHOLE => {
                    QuantityParse::Whole(float as i64)
                }
                Some(float) if float.fract() != 0.0 => QuantityParse::NotWhole(float),
                _ => QuantityParse::OutOfRange(number.to_string()),
            }
        }
        other => QuantityParse::WrongType(json_type_name(other)),
    }
}

// =============================================================================
// Record Validation
// =============================================================================

/// Validates one sale record against the catalogue and the structural rules.
///
/// Pure: same record + same catalogue = same outcome. Never fails; every
/// data-quality problem is classified into an [`ErrorKind`] with a
/// human-readable detail.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use tally_core::{validate_record, Catalogue, RawProduct, SaleRecord, ValidationOutcome};
///
/// let entries: Vec<RawProduct> =
///     serde_json::from_value(json!([{ "title": "Widget", "price": 2.50 }])).unwrap();
/// let catalogue = Catalogue::build(&entries).unwrap();
///
/// let record: SaleRecord =
///     serde_json::from_value(json!({ "Product": "Widget", "Quantity": 4 })).unwrap();
///
/// match validate_record(&record, &catalogue) {
///     ValidationOutcome::Priced { contribution } => {
///         assert_eq!(contribution.round_2().to_string(), "10.00");
///     }
///     ValidationOutcome::Rejected(rejected) => panic!("unexpected: {rejected}"),
/// }
/// ```
pub fn validate_record(record: &SaleRecord, catalogue: &Catalogue) -> ValidationOutcome {
    // Rule 1: required fields present and non-null
    let product = match present(&record.product) {
        Some(value) => value,
        None => {
            return reject(
                record,
                ErrorKind::MissingField,
                "missing required field 'Product'".to_string(),
            );
        }
    };
    let quantity = match present(&record.quantity) {
        Some(value) => value,
        None => {
            return reject(
                record,
                ErrorKind::MissingField,
                "missing required field 'Quantity'".to_string(),
            );
        }
    };

    // Rule 2: usable types
    let name = match product.as_str() {
        Some(name) => name,
        None => {
            return reject(
                record,
                ErrorKind::InvalidType,
                format!("'Product' must be a string, got {}", json_type_name(product)),
            );
        }
    };
    let quantity = match parse_quantity(quantity) {
        QuantityParse::Whole(quantity) => quantity,
        QuantityParse::NotWhole(float) => {
            return reject(
                record,
                ErrorKind::InvalidType,
                format!("'Quantity' must be a whole number, got {float}"),
            );
        }
        QuantityParse::OutOfRange(repr) => {
            return reject(
                record,
                ErrorKind::InvalidType,
                format!("'Quantity' is out of range, got {repr}"),
            );
        }
        QuantityParse::WrongType(found) => {
            return reject(
                record,
                ErrorKind::InvalidType,
                format!("'Quantity' must be a number, got {found}"),
            );
        }
    };

    // Rule 3: a sale of zero or fewer units has no economic effect
    if quantity <= 0 {
        return reject(
            record,
            ErrorKind::NegativeQuantity,
            format!("'Quantity' must be positive, got {quantity}"),
        );
    }

    // Rule 4: the product must be priced
    match catalogue.price(name) {
        Some(price) => ValidationOutcome::Priced {
            contribution: price * quantity,
        },
        None => reject(
            record,
            ErrorKind::UnknownProduct,
            format!("'{name}' not found in catalogue"),
        ),
    }
}

/// Treats an absent field and an explicit JSON null the same way.
fn present(field: &Option<Value>) -> Option<&Value> {
    match field {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn reject(record: &SaleRecord, kind: ErrorKind, detail: String) -> ValidationOutcome {
    ValidationOutcome::Rejected(RejectedRecord {
        index: record.index,
        kind,
        detail,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
