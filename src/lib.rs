//! # Stonecat
//!
//! Content filtering and categorization for a stone heritage directory.
//!
//! Stonecat holds a small, read-only catalog of monuments, quarries, marble
//! varieties, and companies, and answers search queries over it with a single
//! filtering pipeline:
//!
//! ```text
//! Query ──► build_predicate ──► filter_records(Dataset) ──► partition_featured
//! ```
//!
//! ## Features
//!
//! - Closed content taxonomy with display metadata
//! - Validated ingestion from JSON, YAML, or CSV catalog files
//! - Case-insensitive free-text, type, category, and tag filtering
//! - Stable, deterministic results (a subsequence of catalog order)
//! - Featured / regular partitioning for two-tier display
//!
//! ## Example
//!
//! ```rust
//! use stonecat::{ContentType, Query, filter_records, partition_featured};
//!
//! let dataset = stonecat::catalog::fixtures::seed_dataset()?;
//! let query = Query::new().with_term("marble").with_type(ContentType::Quarry);
//! let hits = filter_records(&dataset, &query);
//! let split = partition_featured(&hits);
//! assert_eq!(split.len(), hits.len());
//! # Ok::<(), stonecat::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod services;

pub use catalog::Dataset;
pub use config::StonecatConfig;
pub use models::{
    ContentRecord, ContentType, DisplayMeta, Partition, Query, RecordAttributes, RecordId,
    TagMatch, display_meta_for, types_of,
};
pub use services::{
    FilterEngine, RecordPredicate, build_predicate, filter_records, parse_filter_query,
    partition_by, partition_featured,
};

/// Error type for stonecat operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `UnknownType` | A content type string is outside the closed taxonomy |
/// | `InvalidInput` | Empty ids or titles, duplicate ids, bad calculator input |
/// | `OperationFailed` | Catalog or config files cannot be read or parsed |
///
/// Filtering itself never fails: all records are validated at ingestion.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A content type lookup used a value outside the closed taxonomy.
    ///
    /// Raised when:
    /// - `display_meta_for` is called with an unrecognized type string
    /// - A catalog record carries an unrecognized `type`
    #[error("unknown content type: {0}")]
    UnknownType(String),

    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A catalog record has an empty id or title
    /// - Two catalog records share an id
    /// - Calculator dimensions are not positive, or the material is unknown
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem I/O errors occur
    /// - A catalog or config file cannot be parsed
    /// - Logging is initialized twice
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for stonecat operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownType("spaceship".to_string());
        assert_eq!(err.to_string(), "unknown content type: spaceship");

        let err = Error::InvalidInput("duplicate id: 1".to_string());
        assert_eq!(err.to_string(), "invalid input: duplicate id: 1");

        let err = Error::OperationFailed {
            operation: "read_catalog".to_string(),
            cause: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'read_catalog' failed: not found");
    }
}
