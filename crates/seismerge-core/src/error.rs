//! Error types for catalog reconciliation

use thiserror::Error;

/// Core reconciliation errors
#[derive(Error, Debug)]
pub enum CatalogError {
    // Time errors
    #[error("Time {0} outside the configured leap-second table span")]
    OutOfRangeTime(f64),

    #[error("Invalid leap-second table: {0}")]
    InvalidLeapTable(String),

    // Identifier errors
    #[error("Variant {variant} not below multiplier {multiplier}")]
    VariantOutOfRange { variant: i64, multiplier: i64 },

    #[error("Id {value} below namespace base {base}")]
    NotInNamespace { value: i64, base: i64 },

    #[error("Namespace multiplier {0} not at least 1")]
    InvalidMultiplier(i64),

    #[error("Unknown source namespace: {0}")]
    UnknownSource(String),

    // Batch cursor errors
    #[error("Broken key ordering: key {key} not above cursor position {cursor}")]
    BrokenOrdering { key: i64, cursor: i64 },

    #[error("Page source error: {0}")]
    Source(String),

    #[error("Page sink error: {0}")]
    Sink(String),
}

/// Result type for reconciliation operations
pub type CatalogResult<T> = Result<T, CatalogError>;
