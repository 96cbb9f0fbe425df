//! Error types for record linkage.

use thiserror::Error;

/// Errors that can occur while linking canonical tables.
#[derive(Debug, Error)]
pub enum LinkError {
    /// A join key or output field is absent from an input table.
    #[error("{table} table is missing column '{column}'")]
    MissingColumn { table: &'static str, column: String },

    /// A Stage-1 row qualified for both directory match paths.
    #[error("stage-1 row {row} is in both the agreeing and disagreeing partitions")]
    OverlappingPartition { row: usize },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),
}

/// Result type for linkage operations.
pub type Result<T> = std::result::Result<T, LinkError>;
