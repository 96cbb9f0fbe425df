//! Whole-table normalization steps.
//!
//! Every step takes the table by reference and returns a new one (or mutates a
//! single column in place). Missing values are never touched by value
//! transforms.

use std::collections::HashSet;

use polars::prelude::DataFrame;
use tracing::warn;

use bizrec_common::{
    column_names, filter_rows, require_columns, set_string_column, string_values, take_rows,
};
use bizrec_model::{CategorySplit, FieldCheck, SourceSchema};

use crate::error::{NormalizeError, Result};
use crate::validate::{is_suspect_phone, matches_pattern};

/// Renames native columns to canonical names.
///
/// Columns without a mapping are kept under their native name. Every
/// canonical column must be present afterwards.
pub fn rename_fields(df: &DataFrame, schema: &SourceSchema) -> Result<DataFrame> {
    let mut renamed = df.clone();
    for name in column_names(df) {
        if let Some(canonical) = schema.canonical_name(&name) {
            renamed.rename(&name, canonical.into())?;
        }
    }
    let expected: Vec<&str> = schema.canonical_fields().collect();
    if let Some(column) = require_columns(&renamed, &expected).first() {
        return Err(NormalizeError::MissingColumn {
            dataset: schema.source,
            column: (*column).to_string(),
        });
    }
    Ok(renamed)
}

/// Applies `f` to every present value of `column`.
pub fn map_present<F>(df: &mut DataFrame, column: &str, f: F) -> Result<()>
where
    F: Fn(&str) -> String,
{
    let values = string_values(df, column)?
        .into_iter()
        .map(|value| value.map(|v| f(&v)))
        .collect();
    set_string_column(df, column, values)?;
    Ok(())
}

/// Lower-cases the given columns.
pub fn lowercase_fields(df: &mut DataFrame, columns: &[&str]) -> Result<()> {
    for column in columns {
        map_present(df, column, str::to_lowercase)?;
    }
    Ok(())
}

/// Splits a delimited field into one row per value.
///
/// The other columns are repeated for every value. A missing field yields a
/// single row with a missing target. The delimited column is dropped.
pub fn expand_categories(df: &DataFrame, split: &CategorySplit) -> Result<DataFrame> {
    let values = string_values(df, split.source)?;
    let mut rows = Vec::with_capacity(values.len());
    let mut categories = Vec::with_capacity(values.len());
    for (idx, value) in values.into_iter().enumerate() {
        match value {
            Some(value) => {
                for part in value.split(split.delimiter) {
                    rows.push(Some(idx));
                    categories.push(Some(part.to_string()));
                }
            }
            None => {
                rows.push(Some(idx));
                categories.push(None);
            }
        }
    }
    let mut expanded = take_rows(df, &rows)?.drop(split.source)?;
    set_string_column(&mut expanded, split.target, categories)?;
    Ok(expanded)
}

/// Keeps rows whose checked fields are missing or match their pattern.
///
/// Returns the filtered table and the number of rejected rows.
pub fn filter_checks(df: &DataFrame, checks: &[FieldCheck]) -> Result<(DataFrame, usize)> {
    let mut keep = vec![true; df.height()];
    for check in checks {
        let values = string_values(df, check.field)?;
        for (flag, value) in keep.iter_mut().zip(&values) {
            if let Some(value) = value {
                *flag &= matches_pattern(value, check.pattern);
            }
        }
    }
    let rejected = keep.iter().filter(|flag| !**flag).count();
    Ok((filter_rows(df, &keep)?, rejected))
}

/// Counts phone values that pass validation only through the exponent
/// allowance, logging a warning when any are found.
pub fn flag_suspect_phones(df: &DataFrame, column: &str) -> Result<usize> {
    let suspect = string_values(df, column)?
        .iter()
        .flatten()
        .filter(|value| is_suspect_phone(value))
        .count();
    if suspect > 0 {
        warn!(column, suspect, "phone values in scientific notation");
    }
    Ok(suspect)
}

/// Drops rows missing any of `required`.
///
/// Returns the filtered table and the number of dropped rows.
pub fn drop_missing(df: &DataFrame, required: &[&str]) -> Result<(DataFrame, usize)> {
    let mut keep = vec![true; df.height()];
    for column in required {
        let values = string_values(df, column)?;
        for (flag, value) in keep.iter_mut().zip(&values) {
            *flag &= value.is_some();
        }
    }
    let dropped = keep.iter().filter(|flag| !**flag).count();
    Ok((filter_rows(df, &keep)?, dropped))
}

/// Drops exact duplicate rows, keeping the first occurrence.
///
/// Two missing values compare equal. Returns the table and the number of
/// removed rows.
pub fn drop_duplicates(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let columns = column_names(df)
        .iter()
        .map(|name| string_values(df, name))
        .collect::<polars::prelude::PolarsResult<Vec<_>>>()?;
    let mut seen: HashSet<Vec<Option<&str>>> = HashSet::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row: Vec<Option<&str>> = columns
            .iter()
            .map(|values| values[idx].as_deref())
            .collect();
        keep.push(seen.insert(row));
    }
    let removed = keep.iter().filter(|flag| !**flag).count();
    Ok((filter_rows(df, &keep)?, removed))
}
