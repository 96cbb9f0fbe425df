//! Shared utilities for the listing reconciliation crates.
//!
//! Every table in the pipeline is a Polars `DataFrame` whose columns are
//! `String` typed, with missing cells stored as nulls. This crate provides the
//! helpers the normalizer and linker use to read, rebuild and reshape such
//! frames without reaching for row-by-row `AnyValue` access.

pub mod frame;
pub mod values;

// Re-export commonly used functions at crate root for convenience
pub use frame::{
    build_frame, column_names, filter_rows, require_columns, set_string_column, string_series,
    string_values, take_rows,
};
pub use values::{integer_text, parse_f64};
