//! Integration tests for the three source normalizers.

use std::collections::HashSet;

use bizrec_common::{build_frame, column_names, string_values};
use bizrec_model::{FieldPattern, Source, SourceSchema};
use bizrec_normalization::{NormalizeError, Normalizer, matches_pattern};
use polars::prelude::{DataFrame, NamedFrom, Series};

/// Builds a raw table for `source`, filling unspecified native columns with
/// nulls.
fn raw_table(source: Source, rows: &[&[(&str, &str)]]) -> DataFrame {
    let schema = SourceSchema::for_source(source);
    let columns = schema
        .renames
        .iter()
        .map(|(native, _)| {
            let values = rows
                .iter()
                .map(|row| {
                    row.iter()
                        .find(|(name, _)| name == native)
                        .map(|(_, value)| (*value).to_string())
                })
                .collect();
            ((*native).to_string(), values)
        })
        .collect();
    build_frame(columns).unwrap()
}

fn social_raw() -> DataFrame {
    raw_table(
        Source::Social,
        &[
            &[
                ("domain", "Acme.com"),
                ("name", "ACME Corp"),
                ("categories", "Retail|Finance"),
                ("phone", "+15551234"),
                ("city", "Paris"),
            ],
            &[
                ("domain", "acme.com"),
                ("name", "ACME Corp"),
                ("categories", "Retail|Finance"),
                ("phone", "+15551234"),
                ("city", "Paris"),
            ],
            &[("domain", "bad domain.com"), ("name", "Bad")],
            &[("name", "No Domain Ltd")],
            &[("domain", "beta.io"), ("name", "Beta")],
        ],
    )
}

fn directory_raw() -> DataFrame {
    raw_table(
        Source::Directory,
        &[
            &[
                ("domain", "acme.com"),
                ("name", "Acme Inc"),
                ("phone", "+15551234"),
            ],
            &[("domain", "beta.io")],
            &[
                ("domain", "gamma.org"),
                ("name", "Gamma LLC"),
                ("category", "Food & Drink"),
            ],
        ],
    )
}

fn web_raw() -> DataFrame {
    raw_table(
        Source::Web,
        &[
            &[
                ("root_domain", "acme.com"),
                ("legal_name", "Acme Corp"),
                ("phone", "15551234.0"),
            ],
            &[
                ("root_domain", "acme.com"),
                ("legal_name", "Acme Corp"),
                ("phone", "15551234.0"),
            ],
            &[
                ("root_domain", "beta.io"),
                ("domain_suffix", "IO!"),
                ("phone", "1"),
            ],
        ],
    )
}

fn raw_for(source: Source) -> DataFrame {
    match source {
        Source::Web => web_raw(),
        Source::Social => social_raw(),
        Source::Directory => directory_raw(),
    }
}

#[test]
fn normalizing_twice_yields_identical_tables() {
    for source in Source::ALL {
        let raw = raw_for(source);
        let first = Normalizer::new(source).normalize(&raw).unwrap();
        let second = Normalizer::new(source).normalize(&raw).unwrap();
        assert!(first.frame.equals_missing(&second.frame), "{source}");
        assert_eq!(first.report, second.report);
    }
}

#[test]
fn canonical_domains_are_present_and_valid() {
    for source in Source::ALL {
        let schema = SourceSchema::for_source(source);
        let table = Normalizer::new(source).normalize(&raw_for(source)).unwrap();
        for value in string_values(&table.frame, schema.domain).unwrap() {
            let value = value.expect("domain must be present");
            assert!(
                matches_pattern(&value, FieldPattern::Domain),
                "{value}"
            );
        }
    }
}

#[test]
fn canonical_tables_have_no_duplicate_rows() {
    for source in Source::ALL {
        let table = Normalizer::new(source).normalize(&raw_for(source)).unwrap();
        let df = &table.frame;
        let columns: Vec<Vec<Option<String>>> = column_names(df)
            .iter()
            .map(|name| string_values(df, name).unwrap())
            .collect();
        let rows: HashSet<Vec<Option<String>>> = (0..df.height())
            .map(|idx| columns.iter().map(|col| col[idx].clone()).collect())
            .collect();
        assert_eq!(rows.len(), df.height(), "{source}");
    }
}

#[test]
fn social_categories_expand_to_one_row_each() {
    let table = Normalizer::new(Source::Social)
        .normalize(&social_raw())
        .unwrap();
    let df = &table.frame;

    assert!(!column_names(df).contains(&"fb_categories".to_string()));
    assert_eq!(
        string_values(df, "fb_category").unwrap(),
        vec![Some("retail".to_string()), Some("finance".to_string()), None]
    );
    assert_eq!(
        string_values(df, "fb_company_name").unwrap(),
        vec![
            Some("acme".to_string()),
            Some("acme".to_string()),
            Some("beta".to_string())
        ]
    );
    assert_eq!(table.report.expanded_rows, 7);
    assert_eq!(table.report.pattern_rejected, 1);
    assert_eq!(table.report.missing_key_rejected, 1);
    assert_eq!(table.report.duplicates_removed, 2);
    assert_eq!(table.report.output_rows, 3);
}

#[test]
fn directory_requires_domain_and_company_name() {
    let table = Normalizer::new(Source::Directory)
        .normalize(&directory_raw())
        .unwrap();
    let df = &table.frame;
    assert_eq!(
        string_values(df, "gg_company_name").unwrap(),
        vec![Some("acme".to_string()), Some("gamma".to_string())]
    );
    assert_eq!(
        string_values(df, "gg_category").unwrap(),
        vec![None, Some("food_drink".to_string())]
    );
    // Phones outside the web source are not coerced
    assert_eq!(
        string_values(df, "gg_phone").unwrap(),
        vec![Some("+15551234".to_string()), None]
    );
}

#[test]
fn web_phones_are_coerced_and_invalid_suffixes_rejected() {
    let table = Normalizer::new(Source::Web).normalize(&web_raw()).unwrap();
    let df = &table.frame;
    assert_eq!(df.height(), 1);
    assert_eq!(
        string_values(df, "web_phone").unwrap(),
        vec![Some("15551234".to_string())]
    );
    assert_eq!(table.report.pattern_rejected, 1);
    assert_eq!(table.report.duplicates_removed, 1);
}

#[test]
fn missing_native_column_is_fatal() {
    let raw = web_raw().drop("legal_name").unwrap();
    let err = Normalizer::new(Source::Web).normalize(&raw).unwrap_err();
    assert!(matches!(
        err,
        NormalizeError::MissingColumn { dataset: Source::Web, ref column } if column == "web_company_name"
    ));
}

#[test]
fn unknown_columns_pass_through() {
    let mut raw = directory_raw();
    raw.with_column(Series::new(
        "rating".into(),
        vec![Some("5"), None, Some("4")],
    ))
    .unwrap();
    let table = Normalizer::new(Source::Directory).normalize(&raw).unwrap();
    assert!(column_names(&table.frame).contains(&"rating".to_string()));
}
