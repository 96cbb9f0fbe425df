//! Data-quality diagnostics over the persisted checkpoints.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info_span, warn};

use bizrec_ingest::{ColumnProfile, overlap_percent, profile_columns, read_checkpoint};
use bizrec_model::Source;
use bizrec_model::fields::{social, web};

use crate::config::PipelineConfig;

/// Which checkpoint a profile was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointKind {
    Raw,
    Transform,
}

impl CheckpointKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckpointKind::Raw => "raw",
            CheckpointKind::Transform => "transform",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableProfile {
    pub kind: CheckpointKind,
    pub source: Source,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub tables: Vec<TableProfile>,
    /// Share of canonical Web rows whose domain appears in the Social table.
    pub domain_overlap_percent: Option<f64>,
}

/// Profiles every checkpoint that exists. Missing checkpoints are skipped
/// with a warning; unreadable ones are errors.
pub fn profile_checkpoints(config: &PipelineConfig) -> Result<ProfileReport> {
    let span = info_span!("profile");
    let _guard = span.enter();

    let mut tables = Vec::new();
    for kind in [CheckpointKind::Raw, CheckpointKind::Transform] {
        for source in Source::ALL {
            let path = match kind {
                CheckpointKind::Raw => config.raw_path(source),
                CheckpointKind::Transform => config.transform_path(source),
            };
            if !path.exists() {
                warn!(path = %path.display(), "checkpoint missing, skipped");
                continue;
            }
            let df = read_checkpoint(&path)
                .with_context(|| format!("read {} checkpoint {}", kind.as_str(), path.display()))?;
            let columns = profile_columns(&df)
                .with_context(|| format!("profile {} checkpoint {}", kind.as_str(), path.display()))?;
            tables.push(TableProfile {
                kind,
                source,
                rows: df.height(),
                columns,
                path,
            });
        }
    }

    let social_path = config.transform_path(Source::Social);
    let web_path = config.transform_path(Source::Web);
    let domain_overlap_percent = if social_path.exists() && web_path.exists() {
        let social_df = read_checkpoint(&social_path).context("read social canonical")?;
        let web_df = read_checkpoint(&web_path).context("read web canonical")?;
        Some(
            overlap_percent(&social_df, social::DOMAIN, &web_df, web::DOMAIN)
                .context("domain overlap")?,
        )
    } else {
        None
    };

    Ok(ProfileReport {
        tables,
        domain_overlap_percent,
    })
}
