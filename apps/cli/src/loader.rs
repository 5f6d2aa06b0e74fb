//! Input loading.
//!
//! Reads the catalogue and sales record JSON files and hands the engine its
//! in-memory inputs. Sale records are stamped with their 0-based input
//! position here; that index is what every error line in the report refers
//! back to.

use std::fs;
use std::path::Path;

use tally_core::{RawProduct, SaleRecord};

use crate::error::LoadError;

/// Loads the raw catalogue entries from a JSON file.
pub fn load_catalogue(path: &Path) -> Result<Vec<RawProduct>, LoadError> {
    parse_catalogue(&read(path)?).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the sale records from a JSON file, in input order.
pub fn load_sales(path: &Path) -> Result<Vec<SaleRecord>, LoadError> {
    parse_sales(&read(path)?).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_catalogue(json: &str) -> Result<Vec<RawProduct>, serde_json::Error> {
    serde_json::from_str(json)
}

fn parse_sales(json: &str) -> Result<Vec<SaleRecord>, serde_json::Error> {
    let mut records: Vec<SaleRecord> = serde_json::from_str(json)?;
    for (index, record) in records.iter_mut().enumerate() {
        record.index = index;
    }
    Ok(records)
}
