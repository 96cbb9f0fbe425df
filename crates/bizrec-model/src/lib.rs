//! Data model for business listing reconciliation.
//!
//! This crate holds the typed description of the three listing sources:
//! - [`Source`]: the origin datasets and their field prefixes
//! - [`fields`]: canonical field names as compile-time constants
//! - [`schema`]: per-source normalization schemas
//! - [`output`]: the resolved entity schema, sort order and alternate keys

pub mod fields;
pub mod output;
pub mod schema;
mod source;

pub use output::{
    AlternateKey, DIRECTORY_KEY, OUTPUT_FIELDS, SOCIAL_KEY, SORT_KEYS, WEB_KEY,
};
pub use schema::{
    CategorySplit, DIRECTORY_SCHEMA, FieldCheck, FieldPattern, SOCIAL_SCHEMA, SourceSchema,
    WEB_SCHEMA,
};
pub use source::Source;
