//! Run report persisted next to the resolved table.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use bizrec_ingest::Checkpoint;
use bizrec_link::LinkReport;
use bizrec_model::Source;
use bizrec_normalization::NormalizeReport;

/// Pipeline stage names as used on the command line and in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Ingest,
    Normalize,
    Link,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Ingest, Stage::Normalize, Stage::Link];
}

/// Outcome of one source through the ingest and normalize stages.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub source: Source,
    /// Raw checkpoint written by the ingest stage.
    pub raw: Option<Checkpoint>,
    pub normalize: Option<NormalizeReport>,
    /// Canonical checkpoint written by the normalize stage.
    pub canonical: Option<Checkpoint>,
}

impl SourceSummary {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            raw: None,
            normalize: None,
            canonical: None,
        }
    }
}

/// Outcome of the link stage.
#[derive(Debug, Clone, Serialize)]
pub struct LinkSummary {
    pub report: LinkReport,
    pub output: Checkpoint,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub root: PathBuf,
    pub stages: Vec<Stage>,
    pub sources: Vec<SourceSummary>,
    pub link: Option<LinkSummary>,
    /// Where this report was written, once it has been.
    #[serde(skip)]
    pub report_path: Option<PathBuf>,
}

impl RunReport {
    pub fn new(root: &Path) -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            root: root.to_path_buf(),
            stages: Vec::new(),
            sources: Source::ALL.into_iter().map(SourceSummary::new).collect(),
            link: None,
            report_path: None,
        }
    }

    pub fn source_mut(&mut self, source: Source) -> &mut SourceSummary {
        if let Some(idx) = self.sources.iter().position(|s| s.source == source) {
            return &mut self.sources[idx];
        }
        self.sources.push(SourceSummary::new(source));
        let last = self.sources.len() - 1;
        &mut self.sources[last]
    }

    pub fn source(&self, source: Source) -> Option<&SourceSummary> {
        self.sources.iter().find(|s| s.source == source)
    }

    /// Stamps the finish time and writes the report as pretty JSON.
    pub fn finish(&mut self, path: &Path) -> Result<()> {
        self.finished_at = Utc::now();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serialize run report")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        self.report_path = Some(path.to_path_buf());
        Ok(())
    }
}
