//! Delimiter and quoting conventions of the source files.

use serde::{Deserialize, Serialize};

/// How a delimited file separates and quotes its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFormat {
    pub delimiter: u8,
    pub quote: u8,
    /// Escape byte inside quoted fields, if the producer used one.
    pub escape: Option<u8>,
    /// Whether `""` inside a quoted field means a literal quote.
    pub double_quote: bool,
}

impl SourceFormat {
    /// Plain comma-separated file with doubled quotes; used for checkpoints.
    pub const fn standard() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            escape: None,
            double_quote: true,
        }
    }

    /// Semicolon-separated export of the web crawl.
    pub const fn semicolon() -> Self {
        Self {
            delimiter: b';',
            ..Self::standard()
        }
    }

    /// Comma-separated export where quotes are escaped with a backslash.
    pub const fn backslash_escaped() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            escape: Some(b'\\'),
            double_quote: false,
        }
    }
}

impl Default for SourceFormat {
    fn default() -> Self {
        Self::standard()
    }
}
