//! String-column DataFrame helpers.

use polars::prelude::{
    BooleanChunked, Column, DataFrame, DataType, IntoColumn, NamedFrom, NewChunkedArray,
    PolarsError, PolarsResult, Series,
};

/// Returns the column names of a frame in order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

/// Returns the names from `required` that are absent from `df`.
pub fn require_columns<'a>(df: &DataFrame, required: &[&'a str]) -> Vec<&'a str> {
    let present = column_names(df);
    required
        .iter()
        .copied()
        .filter(|name| !present.iter().any(|p| p == name))
        .collect()
}

/// Reads a column as optional strings, casting non-string columns first.
pub fn string_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let values = column
        .str()?
        .iter()
        .map(|value| value.map(str::to_string))
        .collect();
    Ok(values)
}

/// Builds a `String` series from optional values.
pub fn string_series(name: &str, values: Vec<Option<String>>) -> Series {
    Series::new(name.into(), values)
}

/// Replaces (or appends) a string column.
pub fn set_string_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<String>>,
) -> PolarsResult<()> {
    df.with_column(string_series(name, values))?;
    Ok(())
}

/// Builds a frame from named string columns, preserving order.
pub fn build_frame(columns: Vec<(String, Vec<Option<String>>)>) -> PolarsResult<DataFrame> {
    let columns: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| string_series(&name, values).into_column())
        .collect();
    DataFrame::new(columns)
}

/// Keeps the rows whose flag is `true`.
pub fn filter_rows(df: &DataFrame, keep: &[bool]) -> PolarsResult<DataFrame> {
    if keep.len() != df.height() {
        return Err(PolarsError::ShapeMismatch(
            format!(
                "row mask has {} entries for a frame of height {}",
                keep.len(),
                df.height()
            )
            .into(),
        ));
    }
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    df.filter(&mask)
}

/// Gathers rows by position into a new frame with the same columns.
///
/// A `None` position produces a row of nulls, which is how unmatched rows of
/// a left join are materialized.
pub fn take_rows(df: &DataFrame, rows: &[Option<usize>]) -> PolarsResult<DataFrame> {
    let mut columns = Vec::with_capacity(df.width());
    for name in column_names(df) {
        let values = string_values(df, &name)?;
        let gathered = rows
            .iter()
            .map(|row| row.and_then(|idx| values.get(idx).cloned().flatten()))
            .collect();
        columns.push((name, gathered));
    }
    build_frame(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        build_frame(vec![
            (
                "domain".to_string(),
                vec![Some("a.com".to_string()), None, Some("c.com".to_string())],
            ),
            (
                "name".to_string(),
                vec![Some("a".to_string()), Some("b".to_string()), None],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn string_values_keep_nulls() {
        let df = sample();
        let values = string_values(&df, "domain").unwrap();
        assert_eq!(
            values,
            vec![Some("a.com".to_string()), None, Some("c.com".to_string())]
        );
    }

    #[test]
    fn filter_rows_applies_mask() {
        let df = sample();
        let filtered = filter_rows(&df, &[true, false, true]).unwrap();
        assert_eq!(filtered.height(), 2);
        assert_eq!(
            string_values(&filtered, "name").unwrap(),
            vec![Some("a".to_string()), None]
        );
    }

    #[test]
    fn filter_rows_rejects_wrong_length() {
        let df = sample();
        assert!(filter_rows(&df, &[true]).is_err());
    }

    #[test]
    fn take_rows_fills_missing_positions_with_nulls() {
        let df = sample();
        let taken = take_rows(&df, &[Some(2), None, Some(0), Some(0)]).unwrap();
        assert_eq!(taken.height(), 4);
        assert_eq!(
            string_values(&taken, "domain").unwrap(),
            vec![
                Some("c.com".to_string()),
                None,
                Some("a.com".to_string()),
                Some("a.com".to_string()),
            ]
        );
    }

    #[test]
    fn require_columns_reports_missing() {
        let df = sample();
        assert_eq!(require_columns(&df, &["domain", "phone"]), vec!["phone"]);
    }
}
