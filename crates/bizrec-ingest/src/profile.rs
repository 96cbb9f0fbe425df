//! Column statistics for diagnostics.
//!
//! These are the numbers the data-quality review looks at before and after
//! normalization: how unique each column is, how often it is missing, and how
//! much one table's key column overlaps another's.

use std::collections::HashSet;

use polars::prelude::DataFrame;
use serde::Serialize;

use bizrec_common::string_values;

use crate::error::{IngestError, Result};

/// Uniqueness and missingness of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Distinct present values as a percentage of all rows.
    pub unique_percent: f64,
    /// Missing values as a percentage of all rows.
    pub null_percent: f64,
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Values of a named column, failing with [`IngestError::ColumnNotFound`]
/// when it is absent.
fn column_strings(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    if df.column(name).is_err() {
        return Err(IngestError::ColumnNotFound {
            column: name.to_string(),
        });
    }
    Ok(string_values(df, name)?)
}

/// Profiles every column of a frame, in column order.
pub fn profile_columns(df: &DataFrame) -> Result<Vec<ColumnProfile>> {
    let total = df.height();
    df.get_column_names()
        .into_iter()
        .map(|name| {
            let values = column_strings(df, name)?;
            let nulls = values.iter().filter(|value| value.is_none()).count();
            let unique: HashSet<&str> = values.iter().flatten().map(String::as_str).collect();
            Ok(ColumnProfile {
                name: name.to_string(),
                unique_percent: percent(unique.len(), total),
                null_percent: percent(nulls, total),
            })
        })
        .collect()
}

/// Percentage of `right` rows whose `right_column` value appears in
/// `left.left_column`. Missing values never count as overlapping.
pub fn overlap_percent(
    left: &DataFrame,
    left_column: &str,
    right: &DataFrame,
    right_column: &str,
) -> Result<f64> {
    let left_values = column_strings(left, left_column)?;
    let right_values = column_strings(right, right_column)?;
    let known: HashSet<&str> = left_values.iter().flatten().map(String::as_str).collect();
    let hits = right_values
        .iter()
        .filter(|value| value.as_deref().is_some_and(|v| known.contains(v)))
        .count();
    Ok(percent(hits, right_values.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizrec_common::build_frame;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn frame(name: &str, values: &[Option<&str>]) -> DataFrame {
        build_frame(vec![(
            name.to_string(),
            values.iter().map(|v| v.map(str::to_string)).collect(),
        )])
        .unwrap()
    }

    #[test]
    fn test_profile_columns() {
        let df = frame("fb_domain", &[Some("a.com"), Some("a.com"), None, Some("b.com")]);
        let profiles = profile_columns(&df).unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "fb_domain");
        assert_eq!(profiles[0].unique_percent, 50.0);
        assert_eq!(profiles[0].null_percent, 25.0);
    }

    #[test]
    fn test_profile_empty_frame() {
        let df = frame("fb_domain", &[]);
        let profiles = profile_columns(&df).unwrap();

        assert_eq!(profiles[0].unique_percent, 0.0);
        assert_eq!(profiles[0].null_percent, 0.0);
    }

    #[test]
    fn test_profile_counts_nulls_in_non_string_columns() {
        let rank = Series::new("rank".into(), &[Some(1i64), None, None, Some(1)]);
        let df = DataFrame::new(vec![rank.into_column()]).unwrap();
        let profiles = profile_columns(&df).unwrap();

        assert_eq!(profiles[0].null_percent, 50.0);
        assert_eq!(profiles[0].unique_percent, 25.0);
    }

    #[test]
    fn test_overlap_percent() {
        let social = frame("fb_domain", &[Some("a.com"), Some("b.com")]);
        let web = frame(
            "web_domain",
            &[Some("a.com"), Some("c.com"), None, Some("b.com")],
        );

        let overlap = overlap_percent(&social, "fb_domain", &web, "web_domain").unwrap();
        assert_eq!(overlap, 50.0);
    }

    #[test]
    fn test_overlap_unknown_column() {
        let social = frame("fb_domain", &[Some("a.com")]);
        let result = overlap_percent(&social, "fb_domain", &social, "web_domain");

        assert!(matches!(result, Err(IngestError::ColumnNotFound { .. })));
    }
}
