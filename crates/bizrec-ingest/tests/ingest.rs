//! Integration tests for source reading and checkpointing.

use std::fs;

use bizrec_common::{column_names, string_values};
use bizrec_ingest::{
    SourceFormat, profile_columns, read_checkpoint, read_source_table, write_checkpoint,
};

#[test]
fn raw_stage_round_trip_normalizes_delimiters() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source").join("facebook_dataset.csv");
    fs::create_dir_all(source.parent().unwrap()).unwrap();
    fs::write(
        &source,
        "domain,name,categories,phone\n\
         acme.com,\"Acme \\\"Tools\\\", Inc\",Retail|Finance,+1555\n\
         beta.io,Beta,,\n",
    )
    .unwrap();

    let df = read_source_table(&source, SourceFormat::backslash_escaped()).unwrap();
    let raw = dir.path().join("raw").join("facebook_dataset.csv");
    let checkpoint = write_checkpoint(&df, &raw).unwrap();
    assert_eq!(checkpoint.rows, 2);

    let back = read_checkpoint(&raw).unwrap();
    assert_eq!(
        column_names(&back),
        vec!["domain", "name", "categories", "phone"]
    );
    assert_eq!(
        string_values(&back, "name").unwrap(),
        vec![
            Some("Acme \"Tools\", Inc".to_string()),
            Some("Beta".to_string())
        ]
    );
    assert_eq!(
        string_values(&back, "categories").unwrap(),
        vec![Some("Retail|Finance".to_string()), None]
    );
}

#[test]
fn checkpoint_digest_is_stable_for_identical_tables() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("web.csv");
    fs::write(&source, "root_domain;phone\nacme.com;1555\n").unwrap();
    let df = read_source_table(&source, SourceFormat::semicolon()).unwrap();

    let first = write_checkpoint(&df, &dir.path().join("a.csv")).unwrap();
    let second = write_checkpoint(&df, &dir.path().join("b.csv")).unwrap();
    assert_eq!(first.sha256, second.sha256);
}

#[test]
fn profile_reports_every_column() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("google.csv");
    fs::write(&source, "domain,name\nacme.com,Acme\nacme.com,\n").unwrap();
    let df = read_source_table(&source, SourceFormat::backslash_escaped()).unwrap();

    let profiles = profile_columns(&df).unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].unique_percent, 50.0);
    assert_eq!(profiles[1].null_percent, 50.0);
}
