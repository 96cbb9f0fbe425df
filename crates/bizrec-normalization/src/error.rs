//! Error types for normalization.

use bizrec_model::Source;
use thiserror::Error;

/// Errors raised while normalizing a source table.
///
/// Malformed values are never errors; they are filtered out and counted in the
/// [`crate::NormalizeReport`]. Only a structurally unusable table fails.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A field the schema relies on is absent after renaming.
    #[error("{dataset} table is missing column '{column}'")]
    MissingColumn { dataset: Source, column: String },

    /// Polars operation failed.
    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
