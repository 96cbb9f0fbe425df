//! Listing data ingestion utilities.
//!
//! This crate reads the three source exports into Polars DataFrames and
//! persists the tables handed between pipeline stages.
//!
//! # Features
//!
//! - **Source reading**: delimiter and escape aware reading via the `csv` crate,
//!   every column typed as `String`, empty cells as nulls
//! - **Checkpoints**: comma-separated stage outputs with SHA-256 digests
//! - **Profiling**: unique %, null % and key overlap % for diagnostics
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bizrec_ingest::{SourceFormat, read_source_table, write_checkpoint};
//!
//! let web = read_source_table(Path::new("source/website_dataset.csv"), SourceFormat::semicolon())?;
//! let checkpoint = write_checkpoint(&web, Path::new("raw/website_dataset.csv"))?;
//! ```

mod error;
mod format;
mod profile;
mod reader;
mod writer;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use format::SourceFormat;
pub use reader::{read_checkpoint, read_source_table};

// === Writing ===
pub use writer::{Checkpoint, sha256_hex, write_checkpoint};

// === Diagnostics ===
pub use profile::{ColumnProfile, overlap_percent, profile_columns};
