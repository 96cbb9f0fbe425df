//! Per-source normalization of listing tables.
//!
//! A raw table from one source is reshaped into that source's canonical
//! table: prefixed field names, lower-cased and sanitized text, validated
//! domains and phones, no rows without a usable key and no exact duplicates.
//!
//! # Example
//!
//! ```ignore
//! use bizrec_model::Source;
//! use bizrec_normalization::Normalizer;
//!
//! let table = Normalizer::new(Source::Social).normalize(&raw)?;
//! println!("{} rows", table.report.output_rows);
//! ```

mod error;
mod normalizer;
mod phone;
mod sanitize;
mod steps;
mod validate;

pub use error::{NormalizeError, Result};
pub use normalizer::{NormalizeReport, NormalizedTable, Normalizer};
pub use phone::coerce_phone;
pub use sanitize::{LEGAL_SUFFIXES, sanitize, strip_legal_suffixes};
pub use validate::{is_suspect_phone, matches_pattern};
