//! Delimited file reading into string-typed DataFrames.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{Reader, ReaderBuilder};
use polars::prelude::DataFrame;
use tracing::debug;

use bizrec_common::build_frame;

use crate::error::{IngestError, Result};
use crate::format::SourceFormat;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Normalizes a header value: strips a UTF-8 BOM and surrounding whitespace.
fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

fn read_headers<R: std::io::Read>(reader: &mut Reader<R>, path: &Path) -> Result<Vec<String>> {
    let record = reader.headers().map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })?;
    if record.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    let mut seen = BTreeSet::new();
    let mut headers = Vec::with_capacity(record.len());
    for (position, raw) in record.iter().enumerate() {
        let name = normalize_header(raw);
        if name.is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
                position,
            });
        }
        if !seen.insert(name.clone()) {
            return Err(IngestError::DuplicateColumn {
                path: path.to_path_buf(),
                column: name,
            });
        }
        headers.push(name);
    }
    Ok(headers)
}

/// Reads a delimited file into a DataFrame of `String` columns.
///
/// Cells are kept verbatim; only empty cells become nulls. Short records are
/// padded with nulls, records longer than the header are rejected.
pub fn read_source_table(path: &Path, format: SourceFormat) -> Result<DataFrame> {
    let file = open(path)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter)
        .quote(format.quote)
        .escape(format.escape)
        .double_quote(format.double_quote)
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = read_headers(&mut reader, path)?;
    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];

    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() > headers.len() {
            return Err(IngestError::RaggedRow {
                path: path.to_path_buf(),
                line: record.position().map(|pos| pos.line()).unwrap_or_default(),
                expected: headers.len(),
                found: record.len(),
            });
        }
        for (idx, column) in columns.iter_mut().enumerate() {
            let value = record
                .get(idx)
                .filter(|value| !value.is_empty())
                .map(str::to_string);
            column.push(value);
        }
    }

    let df = build_frame(headers.into_iter().zip(columns).collect())?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read delimited table"
    );
    Ok(df)
}

/// Reads a checkpoint written by [`crate::write_checkpoint`].
pub fn read_checkpoint(path: &Path) -> Result<DataFrame> {
    read_source_table(path, SourceFormat::standard())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizrec_common::string_values;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_semicolon_table() {
        let file = create_temp_file("root_domain;legal_name\nacme.com;Acme, Inc\n");
        let df = read_source_table(file.path(), SourceFormat::semicolon()).unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(
            string_values(&df, "legal_name").unwrap(),
            vec![Some("Acme, Inc".to_string())]
        );
    }

    #[test]
    fn test_read_backslash_escaped_quotes() {
        let file = create_temp_file("domain,name\nacme.com,\"The \\\"Best\\\" Shop\"\n");
        let df = read_source_table(file.path(), SourceFormat::backslash_escaped()).unwrap();

        assert_eq!(
            string_values(&df, "name").unwrap(),
            vec![Some("The \"Best\" Shop".to_string())]
        );
    }

    #[test]
    fn test_empty_cells_become_null_and_short_rows_are_padded() {
        let file = create_temp_file("a,b,c\n1,,3\n4\n");
        let df = read_source_table(file.path(), SourceFormat::standard()).unwrap();

        assert_eq!(
            string_values(&df, "b").unwrap(),
            vec![None, None]
        );
        assert_eq!(
            string_values(&df, "c").unwrap(),
            vec![Some("3".to_string()), None]
        );
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let file = create_temp_file("a,b\n1,2,3\n");
        let result = read_source_table(file.path(), SourceFormat::standard());

        assert!(matches!(result, Err(IngestError::RaggedRow { found: 3, .. })));
    }

    #[test]
    fn test_header_with_bom() {
        let file = create_temp_file("\u{feff}domain,name\nacme.com,acme\n");
        let df = read_source_table(file.path(), SourceFormat::standard()).unwrap();

        assert_eq!(bizrec_common::column_names(&df), vec!["domain", "name"]);
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_file("");
        let result = read_source_table(file.path(), SourceFormat::standard());

        assert!(matches!(result, Err(IngestError::EmptyFile { .. })));
    }

    #[test]
    fn test_duplicate_header() {
        let file = create_temp_file("a,a\n1,2\n");
        let result = read_source_table(file.path(), SourceFormat::standard());

        assert!(matches!(result, Err(IngestError::DuplicateColumn { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_source_table(
            Path::new("/definitely/not/here.csv"),
            SourceFormat::standard(),
        );

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
