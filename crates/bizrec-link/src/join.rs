//! Index-based equi-joins over canonical tables.
//!
//! Joins are planned as pairs of row positions, then both sides are gathered
//! with [`take_rows`] and placed side by side. Output order is always the
//! outer side's row order, then the inner side's.

use std::collections::{HashMap, HashSet};

use polars::prelude::{Column, DataFrame};
use tracing::{debug, info};

use bizrec_common::{column_names, integer_text, require_columns, string_values, take_rows};
use bizrec_model::fields::{social, web};
use bizrec_model::{AlternateKey, DIRECTORY_KEY, SOCIAL_KEY, WEB_KEY};

use crate::error::{LinkError, Result};

/// Fails with [`LinkError::MissingColumn`] on the first absent column.
pub(crate) fn require(df: &DataFrame, table: &'static str, columns: &[&str]) -> Result<()> {
    match require_columns(df, columns).first() {
        Some(column) => Err(LinkError::MissingColumn {
            table,
            column: (*column).to_string(),
        }),
        None => Ok(()),
    }
}

/// Places `right`'s columns after `left`'s.
///
/// Names present on both sides get an `_x` suffix on the left and `_y` on the
/// right, so no column is silently overwritten.
fn combine(mut left: DataFrame, mut right: DataFrame) -> Result<DataFrame> {
    let left_names = column_names(&left);
    let right_names: HashSet<String> = column_names(&right).into_iter().collect();
    for name in left_names.iter().filter(|name| right_names.contains(*name)) {
        left.rename(name, format!("{name}_x").into())?;
        right.rename(name, format!("{name}_y").into())?;
    }
    let columns: Vec<Column> = right.get_columns().to_vec();
    Ok(left.hstack(&columns)?)
}

/// Gathers `pairs` from both tables and combines them.
fn gather(
    left: &DataFrame,
    right: &DataFrame,
    pairs: &[(Option<usize>, Option<usize>)],
) -> Result<DataFrame> {
    let left_rows: Vec<Option<usize>> = pairs.iter().map(|(l, _)| *l).collect();
    let right_rows: Vec<Option<usize>> = pairs.iter().map(|(_, r)| *r).collect();
    combine(take_rows(left, &left_rows)?, take_rows(right, &right_rows)?)
}

/// Alternate key values per row, `None` when any component is missing.
///
/// The phone component is compared as a number, so `+15550100`,
/// `15550100.0` and `15550100` are the same key. Column values are untouched.
fn key_values(df: &DataFrame, key: &AlternateKey) -> Result<Vec<Option<[String; 3]>>> {
    let [names, phones, domains] = key.fields().map(|field| string_values(df, field));
    let (names, phones, domains) = (names?, phones?, domains?);
    Ok(names
        .into_iter()
        .zip(phones)
        .zip(domains)
        .map(|((name, phone), domain)| Some([name?, integer_text(&phone?), domain?]))
        .collect())
}

/// Joins Social to Web on `fb_domain = web_domain`, keeping every Social row.
///
/// A Social row whose domain appears on several Web rows is repeated once per
/// Web row, in Web row order. Unmatched rows carry missing Web fields.
pub fn join_primary(social_df: &DataFrame, web_df: &DataFrame) -> Result<DataFrame> {
    require(social_df, "social", &[social::DOMAIN])?;
    require(web_df, "web", &[web::DOMAIN])?;

    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (row, domain) in string_values(web_df, web::DOMAIN)?.into_iter().enumerate() {
        if let Some(domain) = domain {
            index.entry(domain).or_default().push(row);
        }
    }

    let mut pairs = Vec::with_capacity(social_df.height());
    let mut matched = 0usize;
    for (row, domain) in string_values(social_df, social::DOMAIN)?
        .iter()
        .enumerate()
    {
        match domain.as_ref().and_then(|d| index.get(d)) {
            Some(web_rows) => {
                matched += 1;
                pairs.extend(web_rows.iter().map(|w| (Some(row), Some(*w))));
            }
            None => pairs.push((Some(row), None)),
        }
    }

    let joined = gather(social_df, web_df, &pairs)?;
    info!(
        rows = joined.height(),
        columns = joined.width(),
        matched_social_rows = matched,
        "primary join"
    );
    Ok(joined)
}

/// Row counts of the directory join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondaryCounts {
    /// Directory rows with a complete alternate key.
    pub directory_eligible: usize,
    /// Stage-1 rows whose Social and Web company names agree.
    pub agreeing: usize,
    pub disagreeing: usize,
    pub agreeing_matches: usize,
    pub disagreeing_matches: usize,
}

/// Inner-joins eligible directory rows to Stage-1 rows on `key`.
fn match_directory(
    directory_keys: &[Option<[String; 3]>],
    stage_keys: &[Option<[String; 3]>],
    candidates: &[usize],
) -> Vec<(Option<usize>, Option<usize>)> {
    let mut index: HashMap<&[String; 3], Vec<usize>> = HashMap::new();
    for &row in candidates {
        if let Some(key) = &stage_keys[row] {
            index.entry(key).or_default().push(row);
        }
    }
    let mut pairs = Vec::new();
    for (dir_row, key) in directory_keys.iter().enumerate() {
        let Some(key) = key else { continue };
        if let Some(stage_rows) = index.get(key) {
            pairs.extend(stage_rows.iter().map(|s| (Some(dir_row), Some(*s))));
        }
    }
    pairs
}

/// Corroborates Stage-1 rows against the directory.
///
/// Rows whose Social and Web company names agree are matched on the Social
/// alternate key; all other rows on the Web alternate key. Both results are
/// concatenated, agreeing matches first, each in directory row order.
pub fn join_secondary(
    directory_df: &DataFrame,
    stage1: &DataFrame,
) -> Result<(DataFrame, SecondaryCounts)> {
    require(directory_df, "directory", &DIRECTORY_KEY.fields())?;
    require(stage1, "stage-1", &SOCIAL_KEY.fields())?;
    require(stage1, "stage-1", &WEB_KEY.fields())?;

    let directory_keys = key_values(directory_df, &DIRECTORY_KEY)?;
    let social_keys = key_values(stage1, &SOCIAL_KEY)?;
    let web_keys = key_values(stage1, &WEB_KEY)?;

    let social_names = string_values(stage1, SOCIAL_KEY.company_name)?;
    let web_names = string_values(stage1, WEB_KEY.company_name)?;
    let agrees: Vec<bool> = social_names
        .iter()
        .zip(&web_names)
        .map(|(s, w)| s.is_some() && s == w)
        .collect();

    let agreeing: Vec<usize> = (0..stage1.height())
        .filter(|&row| agrees[row] && social_keys[row].is_some())
        .collect();
    let disagreeing: Vec<usize> = (0..stage1.height())
        .filter(|&row| !agrees[row] && web_keys[row].is_some())
        .collect();
    let agreeing_set: HashSet<usize> = agreeing.iter().copied().collect();
    if let Some(&row) = disagreeing.iter().find(|row| agreeing_set.contains(row)) {
        return Err(LinkError::OverlappingPartition { row });
    }

    let mut pairs = match_directory(&directory_keys, &social_keys, &agreeing);
    let agreeing_matches = pairs.len();
    pairs.extend(match_directory(&directory_keys, &web_keys, &disagreeing));

    let counts = SecondaryCounts {
        directory_eligible: directory_keys.iter().filter(|k| k.is_some()).count(),
        agreeing: agrees.iter().filter(|a| **a).count(),
        disagreeing: agrees.iter().filter(|a| !**a).count(),
        agreeing_matches,
        disagreeing_matches: pairs.len() - agreeing_matches,
    };
    debug!(?counts, "directory partitions");

    let joined = gather(directory_df, stage1, &pairs)?;
    info!(
        rows = joined.height(),
        columns = joined.width(),
        "directory join"
    );
    Ok((joined, counts))
}
