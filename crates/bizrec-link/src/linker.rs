//! Three-way linkage of canonical tables.

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{info, info_span};

use crate::error::Result;
use crate::join::{join_primary, join_secondary};
use crate::resolve::{project, sort_resolved};

/// Row counts per linkage stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub social_rows: usize,
    pub web_rows: usize,
    pub directory_rows: usize,
    /// Rows after the Social/Web domain join.
    pub primary_rows: usize,
    pub directory_eligible: usize,
    pub agreeing_rows: usize,
    pub disagreeing_rows: usize,
    pub agreeing_matches: usize,
    pub disagreeing_matches: usize,
    pub output_rows: usize,
}

/// The resolved entity table and its accounting.
#[derive(Debug, Clone)]
pub struct LinkedTable {
    pub frame: DataFrame,
    pub report: LinkReport,
}

/// Links the Social, Web and Directory canonical tables.
///
/// Inputs are only borrowed. The result carries exactly the output fields,
/// sorted by the resolved sort keys.
pub fn link(social: &DataFrame, web: &DataFrame, directory: &DataFrame) -> Result<LinkedTable> {
    let span = info_span!("link");
    let _guard = span.enter();

    let stage1 = info_span!("primary").in_scope(|| join_primary(social, web))?;
    let (matched, counts) =
        info_span!("secondary").in_scope(|| join_secondary(directory, &stage1))?;
    let resolved = sort_resolved(&project(&matched)?)?;

    let report = LinkReport {
        social_rows: social.height(),
        web_rows: web.height(),
        directory_rows: directory.height(),
        primary_rows: stage1.height(),
        directory_eligible: counts.directory_eligible,
        agreeing_rows: counts.agreeing,
        disagreeing_rows: counts.disagreeing,
        agreeing_matches: counts.agreeing_matches,
        disagreeing_matches: counts.disagreeing_matches,
        output_rows: resolved.height(),
    };
    info!(
        rows = report.output_rows,
        columns = resolved.width(),
        "resolved table ready"
    );
    Ok(LinkedTable {
        frame: resolved,
        report,
    })
}
