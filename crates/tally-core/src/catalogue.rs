//! # Catalogue Module
//!
//! Builds the immutable name to price lookup that every sale record is
//! validated against.
//!
//! ## Construction Contract
//! The catalogue defines the price domain for a whole run, so it is held to
//! a stricter standard than sale records: an entry with a missing or blank
//! name, or a missing, non-numeric, or negative price, fails construction
//! with a fatal [`CatalogueError`]. Extra fields on an entry are ignored,
//! which keeps the input forward-compatible with richer product metadata.
//!
//! When two entries share a name, the later entry wins. Source data is
//! treated as an ordered changelog: a re-listed product is a price update.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{CatalogueError, CatalogueResult};
use crate::money::Money;
use crate::types::{json_type_name, Product};

// =============================================================================
// Raw Catalogue Entry
// =============================================================================

/// A catalogue entry as deserialized from the input, before any checking.
///
/// Both fields stay raw JSON values so that construction can distinguish
/// "absent" from "present with the wrong type" when reporting a fatal error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    /// Product name. Required, non-blank string.
    #[serde(default)]
    pub title: Option<Value>,

    /// Unit price. Required, non-negative number.
    #[serde(default)]
    pub price: Option<Value>,
}

// =============================================================================
// Catalogue
// =============================================================================

/// Immutable product name to unit price mapping for one computation run.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: HashMap<String, Product>,
}

impl Catalogue {
    /// Builds the catalogue from raw entries.
    ///
    /// Fails fast on the first structurally invalid entry; a partial price
    /// domain would silently misprice every record referencing the gap.
    ///
    /// ## Example
    /// ```rust
    /// use serde_json::json;
    /// use tally_core::catalogue::{Catalogue, RawProduct};
    ///
    /// let entries: Vec<RawProduct> = serde_json::from_value(json!([
    ///     { "title": "Widget", "price": 2.50 },
    ///     { "title": "Widget", "price": 2.75 }
    /// ]))
    /// .unwrap();
    ///
    /// let catalogue = Catalogue::build(&entries).unwrap();
    /// // later entries overwrite earlier ones
    /// assert_eq!(catalogue.price("Widget").unwrap().to_string(), "2.75");
    /// ```
    pub fn build(entries: &[RawProduct]) -> CatalogueResult<Catalogue> {
        let mut products = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let name = match &entry.title {
                None | Some(Value::Null) => {
                    return Err(CatalogueError::MissingTitle { index });
                }
                Some(Value::String(s)) if s.trim().is_empty() => {
                    return Err(CatalogueError::BlankTitle { index });
                }
                Some(Value::String(s)) => s.clone(),
                Some(other) => {
                    return Err(CatalogueError::InvalidTitle {
                        index,
                        found: json_type_name(other),
                    });
                }
            };

            let price = match &entry.price {
                None | Some(Value::Null) => {
                    return Err(CatalogueError::MissingPrice { index, title: name });
                }
                Some(Value::Number(number)) => match decimal_from_number(number) {
                    Some(price) => price,
                    None => {
                        return Err(CatalogueError::InvalidPrice {
                            index,
                            title: name,
                            found: number.to_string(),
                        });
                    }
                },
                Some(other) => {
                    return Err(CatalogueError::InvalidPrice {
                        index,
                        title: name,
                        found: json_type_name(other).to_string(),
                    });
                }
            };

            if price < Decimal::ZERO {
                return Err(CatalogueError::NegativePrice {
                    index,
                    title: name,
                    price: Money::new(price),
                });
            }

            // last-wins on duplicate names
            products.insert(
                name.clone(),
                Product {
                    name,
                    price: Money::new(price),
                },
            );
        }

        Ok(Catalogue { products })
    }

    /// Looks up the unit price for a product name.
    #[inline]
    pub fn price(&self, name: &str) -> Option<Money> {
        self.products.get(name).map(|product| product.price)
    }

    /// Looks up a product by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// Checks whether a product name exists in the catalogue.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.products.contains_key(name)
    }

    /// Number of distinct products.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalogue holds no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Converts a JSON number to an exact decimal.
///
/// Goes through the number's literal representation rather than f64 so that
/// a price written as `9.99` stays exactly `9.99`.
fn decimal_from_number(number: &serde_json::Number) -> Option<Decimal> {
    let repr = number.to_string();
    Decimal::from_str(&repr)
        .ok()
        .or_else(|| Decimal::from_scientific(&repr).ok())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn entries(value: Value) -> Vec<RawProduct> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_build_basic_lookup() {
        let catalogue = Catalogue::build(&entries(json!([
            { "title": "Widget", "price": 2.50 },
            { "title": "Gadget", "price": 19.99 },
            { "title": "Gizmo", "price": 100 }
        ])))
        .unwrap();

        assert_eq!(catalogue.len(), 3);
        assert_eq!(catalogue.price("Widget"), Some(Money::new(dec!(2.50))));
        assert_eq!(catalogue.price("Gizmo"), Some(Money::new(dec!(100))));
        assert_eq!(catalogue.price("Unknown"), None);
        assert!(catalogue.contains("Gadget"));

        let gadget = catalogue.get("Gadget").unwrap();
        assert_eq!(gadget.name, "Gadget");
        assert_eq!(gadget.price, Money::new(dec!(19.99)));
    }

    #[test]
    fn test_build_ignores_extra_fields() {
        let catalogue = Catalogue::build(&entries(json!([
            { "title": "Widget", "price": 2.50, "category": "tools", "stock": 14 }
        ])))
        .unwrap();
        assert_eq!(catalogue.len(), 1);
    }

    #[test]
    fn test_build_duplicate_names_last_wins() {
        let catalogue = Catalogue::build(&entries(json!([
            { "title": "Widget", "price": 2.50 },
            { "title": "Widget", "price": 3.00 }
        ])))
        .unwrap();

        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.price("Widget"), Some(Money::new(dec!(3.00))));
    }

    #[test]
    fn test_build_missing_title_is_fatal() {
        let err = Catalogue::build(&entries(json!([{ "price": 2.50 }]))).unwrap_err();
        assert!(matches!(err, CatalogueError::MissingTitle { index: 0 }));

        let err = Catalogue::build(&entries(json!([
            { "title": "Widget", "price": 1.0 },
            { "title": null, "price": 2.50 }
        ])))
        .unwrap_err();
        assert!(matches!(err, CatalogueError::MissingTitle { index: 1 }));
    }

    #[test]
    fn test_build_blank_title_is_fatal() {
        let err = Catalogue::build(&entries(json!([{ "title": "   ", "price": 2.50 }])))
            .unwrap_err();
        assert!(matches!(err, CatalogueError::BlankTitle { index: 0 }));
    }

    #[test]
    fn test_build_non_string_title_is_fatal() {
        let err = Catalogue::build(&entries(json!([{ "title": 7, "price": 2.50 }]))).unwrap_err();
        assert!(matches!(
            err,
            CatalogueError::InvalidTitle {
                index: 0,
                found: "number"
            }
        ));
    }

    #[test]
    fn test_build_missing_price_is_fatal() {
        let err = Catalogue::build(&entries(json!([{ "title": "Widget" }]))).unwrap_err();
        match err {
            CatalogueError::MissingPrice { index, title } => {
                assert_eq!(index, 0);
                assert_eq!(title, "Widget");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_non_numeric_price_is_fatal() {
        let err = Catalogue::build(&entries(json!([{ "title": "Widget", "price": "2.50" }])))
            .unwrap_err();
        assert!(matches!(err, CatalogueError::InvalidPrice { .. }));
    }

    #[test]
    fn test_build_negative_price_is_fatal() {
        let err = Catalogue::build(&entries(json!([{ "title": "Widget", "price": -0.01 }])))
            .unwrap_err();
        assert!(matches!(err, CatalogueError::NegativePrice { .. }));
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let catalogue =
            Catalogue::build(&entries(json!([{ "title": "Flyer", "price": 0 }]))).unwrap();
        assert_eq!(catalogue.price("Flyer"), Some(Money::zero()));
    }

    #[test]
    fn test_empty_catalogue() {
        let catalogue = Catalogue::build(&[]).unwrap();
        assert!(catalogue.is_empty());
        assert_eq!(catalogue.len(), 0);
    }

    #[test]
    fn test_decimal_from_number_is_exact() {
        let number: serde_json::Number = serde_json::from_str("9.99").unwrap();
        assert_eq!(decimal_from_number(&number), Some(dec!(9.99)));

        let number: serde_json::Number = serde_json::from_str("1e2").unwrap();
        assert_eq!(decimal_from_number(&number), Some(dec!(100)));
    }
}
