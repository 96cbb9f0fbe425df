//! Per-source normalizer.

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{debug, info, info_span};

use bizrec_model::{Source, SourceSchema};

use crate::error::Result;
use crate::phone::coerce_phone;
use crate::sanitize::{sanitize, strip_legal_suffixes};
use crate::steps::{
    drop_duplicates, drop_missing, expand_categories, filter_checks, flag_suspect_phones,
    lowercase_fields, map_present, rename_fields,
};

/// Row accounting for one normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    pub input_rows: usize,
    /// Rows after category expansion (equal to `input_rows` when the source
    /// has no multi-valued field).
    pub expanded_rows: usize,
    pub pattern_rejected: usize,
    /// Phones that matched only through the exponent allowance.
    pub suspect_phones: usize,
    pub missing_key_rejected: usize,
    pub duplicates_removed: usize,
    pub output_rows: usize,
}

/// A canonical table and how it was produced.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub source: Source,
    pub frame: DataFrame,
    pub report: NormalizeReport,
}

/// Turns a raw source table into its canonical table.
#[derive(Debug, Clone)]
pub struct Normalizer {
    schema: &'static SourceSchema,
    placeholder: String,
}

impl Normalizer {
    pub fn new(source: Source) -> Self {
        Self {
            schema: SourceSchema::for_source(source),
            placeholder: String::new(),
        }
    }

    /// Uses `placeholder` for characters the sanitizer rejects.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn source(&self) -> Source {
        self.schema.source
    }

    pub fn normalize(&self, raw: &DataFrame) -> Result<NormalizedTable> {
        let schema = self.schema;
        let span = info_span!("normalize", source = %schema.source);
        let _guard = span.enter();

        let mut report = NormalizeReport {
            input_rows: raw.height(),
            ..NormalizeReport::default()
        };

        let mut df = rename_fields(raw, schema)?;
        debug!(rows = df.height(), columns = df.width(), "renamed");

        lowercase_fields(&mut df, schema.lowercase)?;

        if let Some(split) = &schema.category_split {
            df = expand_categories(&df, split)?;
            debug!(rows = df.height(), field = split.target, "expanded");
        }
        report.expanded_rows = df.height();

        let placeholder = self.placeholder.as_str();
        for column in schema.sanitize {
            map_present(&mut df, column, |value| sanitize(value, placeholder))?;
        }
        map_present(&mut df, schema.company_name, strip_legal_suffixes)?;
        debug!(rows = df.height(), "sanitized");

        let (filtered, rejected) = filter_checks(&df, schema.checks)?;
        df = filtered;
        report.pattern_rejected = rejected;
        debug!(rows = df.height(), rejected, "pattern filter");

        let (kept, dropped) = drop_missing(&df, schema.required)?;
        df = kept;
        report.missing_key_rejected = dropped;
        debug!(rows = df.height(), dropped, "required fields");

        if let Some(phone) = schema.numeric_phone {
            report.suspect_phones = flag_suspect_phones(&df, phone)?;
            map_present(&mut df, phone, coerce_phone)?;
            debug!(rows = df.height(), "phones coerced");
        }

        let (deduped, removed) = drop_duplicates(&df)?;
        df = deduped;
        report.duplicates_removed = removed;
        report.output_rows = df.height();

        info!(
            input = report.input_rows,
            output = report.output_rows,
            duplicates = removed,
            "normalized"
        );
        Ok(NormalizedTable {
            source: schema.source,
            frame: df,
            report,
        })
    }
}
