//! Checkpoint writing.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::Serialize;
use sha2::Digest;
use tracing::info;

use crate::error::{IngestError, Result};

/// A table persisted between pipeline stages.
#[derive(Debug, Clone, Serialize)]
pub struct Checkpoint {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    /// SHA-256 of the written file, hex encoded.
    pub sha256: String,
}

/// Hex encoded SHA-256 of a byte slice.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// Writes `df` as a comma-separated file with a header row.
///
/// Parent folders are created; nulls are written as empty cells.
pub fn write_checkpoint(df: &DataFrame, path: &Path) -> Result<Checkpoint> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let mut file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut out)?;
    drop(file);

    let bytes = fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let checkpoint = Checkpoint {
        path: path.to_path_buf(),
        rows: df.height(),
        columns: df.width(),
        sha256: sha256_hex(&bytes),
    };
    info!(
        path = %path.display(),
        rows = checkpoint.rows,
        columns = checkpoint.columns,
        "checkpoint written"
    );
    Ok(checkpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_checkpoint;
    use bizrec_common::{build_frame, string_values};

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_checkpoint_round_trip_keeps_nulls_and_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transform").join("web.csv");
        let df = build_frame(vec![
            (
                "web_domain".to_string(),
                vec![Some("acme.com".to_string()), Some("b.org".to_string())],
            ),
            (
                "web_site_name".to_string(),
                vec![Some("Acme, the \"shop\"".to_string()), None],
            ),
        ])
        .unwrap();

        let checkpoint = write_checkpoint(&df, &path).unwrap();
        assert_eq!(checkpoint.rows, 2);
        assert_eq!(checkpoint.columns, 2);
        assert_eq!(checkpoint.sha256.len(), 64);

        let back = read_checkpoint(&path).unwrap();
        assert_eq!(
            string_values(&back, "web_site_name").unwrap(),
            vec![Some("Acme, the \"shop\"".to_string()), None]
        );
    }
}
