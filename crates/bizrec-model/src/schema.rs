//! Static normalization schemas, one per source.
//!
//! A [`SourceSchema`] is plain data: which native columns are renamed to which
//! canonical names, which canonical columns are lower-cased and sanitized, which
//! are validated and which are mandatory. The normalizer interprets it.

use serde::Serialize;

use crate::Source;
use crate::fields::{directory, social, web};

/// Structural pattern a validated field must fully match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPattern {
    /// `^[a-z0-9._-]*$`
    Domain,
    /// `^[0-9E.+]*$`
    Phone,
}

/// A validated field and the pattern its present values must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCheck {
    pub field: &'static str,
    pub pattern: FieldPattern,
}

/// Multi-valued field expanded into one row per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySplit {
    /// Delimited field; dropped after expansion.
    pub source: &'static str,
    /// Single-valued field written per expanded row.
    pub target: &'static str,
    pub delimiter: char,
}

/// Normalization rules for one source.
#[derive(Debug, Clone, Copy)]
pub struct SourceSchema {
    pub source: Source,
    /// `(native name, canonical name)` pairs.
    pub renames: &'static [(&'static str, &'static str)],
    pub lowercase: &'static [&'static str],
    pub category_split: Option<CategorySplit>,
    /// Descriptive text fields passed through the sanitizer.
    pub sanitize: &'static [&'static str],
    /// Field whose legal-entity suffixes are stripped after sanitizing.
    pub company_name: &'static str,
    pub domain: &'static str,
    pub checks: &'static [FieldCheck],
    /// Rows missing any of these are dropped.
    pub required: &'static [&'static str],
    /// Phone field coerced to an integer representation, if any.
    pub numeric_phone: Option<&'static str>,
}

impl SourceSchema {
    /// Schema for the given source.
    pub fn for_source(source: Source) -> &'static SourceSchema {
        match source {
            Source::Web => &WEB_SCHEMA,
            Source::Social => &SOCIAL_SCHEMA,
            Source::Directory => &DIRECTORY_SCHEMA,
        }
    }

    /// Canonical name for a native column, if the schema maps it.
    pub fn canonical_name(&self, native: &str) -> Option<&'static str> {
        self.renames
            .iter()
            .find(|(from, _)| *from == native)
            .map(|(_, to)| *to)
    }

    /// Canonical columns the renamed table must contain.
    pub fn canonical_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.renames.iter().map(|(_, to)| *to)
    }
}

pub static WEB_SCHEMA: SourceSchema = SourceSchema {
    source: Source::Web,
    renames: &[
        ("root_domain", web::DOMAIN),
        ("domain_suffix", web::DOMAIN_SUFFIX),
        ("language", web::LANGUAGE),
        ("legal_name", web::COMPANY_NAME),
        ("main_city", web::CITY),
        ("main_country", web::COUNTRY),
        ("main_region", web::REGION),
        ("phone", web::PHONE),
        ("site_name", web::SITE_NAME),
        ("tld", web::TLD),
        ("s_category", web::CATEGORY),
    ],
    lowercase: &[
        web::DOMAIN,
        web::DOMAIN_SUFFIX,
        web::LANGUAGE,
        web::COMPANY_NAME,
        web::CITY,
        web::COUNTRY,
        web::REGION,
        web::SITE_NAME,
        web::TLD,
        web::CATEGORY,
    ],
    category_split: None,
    sanitize: &[
        web::LANGUAGE,
        web::COMPANY_NAME,
        web::CITY,
        web::COUNTRY,
        web::REGION,
        web::SITE_NAME,
        web::TLD,
        web::CATEGORY,
    ],
    company_name: web::COMPANY_NAME,
    domain: web::DOMAIN,
    checks: &[
        FieldCheck {
            field: web::DOMAIN,
            pattern: FieldPattern::Domain,
        },
        FieldCheck {
            field: web::DOMAIN_SUFFIX,
            pattern: FieldPattern::Domain,
        },
        FieldCheck {
            field: web::PHONE,
            pattern: FieldPattern::Phone,
        },
    ],
    required: &[web::DOMAIN],
    numeric_phone: Some(web::PHONE),
};

pub static SOCIAL_SCHEMA: SourceSchema = SourceSchema {
    source: Source::Social,
    renames: &[
        ("domain", social::DOMAIN),
        ("address", social::ADDRESS),
        ("categories", social::CATEGORIES),
        ("city", social::CITY),
        ("country_code", social::COUNTRY_CODE),
        ("country_name", social::COUNTRY),
        ("description", social::DESCRIPTION),
        ("email", social::EMAIL),
        ("link", social::LINK),
        ("name", social::COMPANY_NAME),
        ("page_type", social::PAGE_TYPE),
        ("phone", social::PHONE),
        ("phone_country_code", social::PHONE_COUNTRY_CODE),
        ("region_code", social::REGION_CODE),
        ("region_name", social::REGION),
        ("zip_code", social::ZIP_CODE),
    ],
    lowercase: &[
        social::DOMAIN,
        social::CATEGORIES,
        social::CITY,
        social::COUNTRY_CODE,
        social::COUNTRY,
        social::EMAIL,
        social::LINK,
        social::COMPANY_NAME,
        social::PAGE_TYPE,
        social::PHONE_COUNTRY_CODE,
        social::REGION_CODE,
        social::REGION,
    ],
    category_split: Some(CategorySplit {
        source: social::CATEGORIES,
        target: social::CATEGORY,
        delimiter: '|',
    }),
    sanitize: &[
        social::CATEGORY,
        social::CITY,
        social::COUNTRY_CODE,
        social::COUNTRY,
        social::COMPANY_NAME,
        social::PAGE_TYPE,
        social::PHONE_COUNTRY_CODE,
        social::REGION_CODE,
        social::REGION,
    ],
    company_name: social::COMPANY_NAME,
    domain: social::DOMAIN,
    checks: &[FieldCheck {
        field: social::DOMAIN,
        pattern: FieldPattern::Domain,
    }],
    required: &[social::DOMAIN],
    numeric_phone: None,
};

pub static DIRECTORY_SCHEMA: SourceSchema = SourceSchema {
    source: Source::Directory,
    renames: &[
        ("address", directory::ADDRESS),
        ("category", directory::CATEGORY),
        ("city", directory::CITY),
        ("country_code", directory::COUNTRY_CODE),
        ("country_name", directory::COUNTRY),
        ("name", directory::COMPANY_NAME),
        ("phone", directory::PHONE),
        ("phone_country_code", directory::PHONE_COUNTRY_CODE),
        ("raw_address", directory::RAW_ADDRESS),
        ("raw_phone", directory::RAW_PHONE),
        ("region_code", directory::REGION_CODE),
        ("region_name", directory::REGION),
        ("text", directory::TEXT),
        ("zip_code", directory::ZIP_CODE),
        ("domain", directory::DOMAIN),
    ],
    lowercase: &[
        directory::DOMAIN,
        directory::CATEGORY,
        directory::CITY,
        directory::COUNTRY_CODE,
        directory::COUNTRY,
        directory::COMPANY_NAME,
        directory::PHONE_COUNTRY_CODE,
        directory::REGION_CODE,
        directory::REGION,
    ],
    category_split: None,
    sanitize: &[
        directory::CATEGORY,
        directory::CITY,
        directory::COUNTRY_CODE,
        directory::COUNTRY,
        directory::COMPANY_NAME,
        directory::PHONE_COUNTRY_CODE,
        directory::REGION_CODE,
        directory::REGION,
    ],
    company_name: directory::COMPANY_NAME,
    domain: directory::DOMAIN,
    checks: &[FieldCheck {
        field: directory::DOMAIN,
        pattern: FieldPattern::Domain,
    }],
    required: &[directory::DOMAIN, directory::COMPANY_NAME],
    numeric_phone: None,
};
