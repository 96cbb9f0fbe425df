use std::collections::BTreeSet;

use bizrec_model::{
    DIRECTORY_KEY, OUTPUT_FIELDS, SOCIAL_KEY, SORT_KEYS, Source, SourceSchema, WEB_KEY,
};

#[test]
fn output_fields_are_unique() {
    let unique: BTreeSet<&str> = OUTPUT_FIELDS.iter().copied().collect();
    assert_eq!(unique.len(), OUTPUT_FIELDS.len());
}

#[test]
fn output_fields_come_from_known_schemas() {
    let mut known: BTreeSet<&str> = BTreeSet::new();
    for source in Source::ALL {
        let schema = SourceSchema::for_source(source);
        known.extend(schema.canonical_fields());
        if let Some(split) = schema.category_split {
            known.insert(split.target);
        }
    }
    for field in OUTPUT_FIELDS {
        assert!(known.contains(field), "{field} is not produced by any source");
    }
}

#[test]
fn sort_keys_are_social_output_fields() {
    for key in SORT_KEYS {
        assert!(key.starts_with(Source::Social.prefix()));
        assert!(OUTPUT_FIELDS.contains(&key));
    }
}

#[test]
fn alternate_keys_line_up_by_position() {
    let suffixes = |fields: [&str; 3]| -> Vec<String> {
        fields
            .iter()
            .map(|f| f.split_once('_').map(|(_, rest)| rest.to_string()).unwrap())
            .collect()
    };
    assert_eq!(suffixes(DIRECTORY_KEY.fields()), suffixes(SOCIAL_KEY.fields()));
    assert_eq!(suffixes(SOCIAL_KEY.fields()), suffixes(WEB_KEY.fields()));
}

#[test]
fn source_serializes_as_snake_case() {
    let json = serde_json::to_string(&Source::Directory).unwrap();
    assert_eq!(json, "\"directory\"");
}
