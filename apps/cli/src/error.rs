//! Loader error types.
//!
//! Every failure here is fatal: an unreadable or syntactically invalid input
//! file leaves the run with no data to price, so the binary reports once and
//! exits non-zero. Per-record data-quality problems never appear here; the
//! engine returns those inside the report.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal input loading errors.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("could not read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid JSON of the expected shape.
    #[error("invalid JSON in '{}'", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
