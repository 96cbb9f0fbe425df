//! Projection and ordering of the resolved table.

use std::cmp::Ordering;

use polars::prelude::DataFrame;

use bizrec_common::{string_values, take_rows};
use bizrec_model::{OUTPUT_FIELDS, SORT_KEYS};

use crate::error::Result;
use crate::join::require;

/// Selects the output fields, in output order.
pub fn project(df: &DataFrame) -> Result<DataFrame> {
    require(df, "resolved", &OUTPUT_FIELDS)?;
    Ok(df.select(OUTPUT_FIELDS)?)
}

/// Ascending order with missing values last.
fn compare_present_first(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable ascending sort by `keys`; missing values sort last.
pub fn sort_by_keys(df: &DataFrame, keys: &[&str]) -> Result<DataFrame> {
    require(df, "resolved", keys)?;
    let columns = keys
        .iter()
        .map(|key| string_values(df, key))
        .collect::<polars::prelude::PolarsResult<Vec<_>>>()?;
    let mut order: Vec<usize> = (0..df.height()).collect();
    order.sort_by(|&a, &b| {
        columns
            .iter()
            .map(|values| compare_present_first(&values[a], &values[b]))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    let rows: Vec<Option<usize>> = order.into_iter().map(Some).collect();
    Ok(take_rows(df, &rows)?)
}

/// Stable sort by the resolved table's sort keys.
pub fn sort_resolved(df: &DataFrame) -> Result<DataFrame> {
    sort_by_keys(df, &SORT_KEYS)
}
