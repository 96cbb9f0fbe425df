//! Listing reconciliation pipeline with explicit, persisted stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read each source export and write it to `raw/`
//! 2. **Normalize**: read `raw/`, build canonical tables, write `transform/`
//! 3. **Link**: read `transform/`, resolve entities, write `process/`
//!
//! Every stage reads its inputs from the previous stage's checkpoints, so a
//! stage can be rerun on its own and a full run behaves exactly like the
//! three stages run one after another.

use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use bizrec_ingest::{read_checkpoint, read_source_table, write_checkpoint};
use bizrec_link::link;
use bizrec_model::Source;
use bizrec_normalization::Normalizer;

use crate::config::{PipelineConfig, source_format};
use crate::types::{LinkSummary, RunReport, Stage};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Reads every source export and persists it as a raw checkpoint.
pub fn ingest(config: &PipelineConfig, report: &mut RunReport) -> Result<()> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let start = Instant::now();

    for source in Source::ALL {
        let path = config.source_path(source);
        let df = read_source_table(&path, source_format(source))
            .with_context(|| format!("read {source} source {}", path.display()))?;
        info!(%source, rows = df.height(), columns = df.width(), "source read");
        let checkpoint = write_checkpoint(&df, &config.raw_path(source))
            .with_context(|| format!("write {source} raw checkpoint"))?;
        report.source_mut(source).raw = Some(checkpoint);
    }

    report.stages.push(Stage::Ingest);
    info!(duration_ms = start.elapsed().as_millis(), "ingest complete");
    Ok(())
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

/// Builds and persists the canonical table of every source.
pub fn normalize(config: &PipelineConfig, report: &mut RunReport) -> Result<()> {
    let span = info_span!("normalize_all");
    let _guard = span.enter();
    let start = Instant::now();

    for source in Source::ALL {
        let raw_path = config.raw_path(source);
        let raw = read_checkpoint(&raw_path)
            .with_context(|| format!("read {source} raw checkpoint {}", raw_path.display()))?;
        let table = Normalizer::new(source)
            .with_placeholder(config.placeholder.as_str())
            .normalize(&raw)
            .with_context(|| format!("normalize {source}"))?;
        let checkpoint = write_checkpoint(&table.frame, &config.transform_path(source))
            .with_context(|| format!("write {source} canonical checkpoint"))?;

        let summary = report.source_mut(source);
        summary.normalize = Some(table.report);
        summary.canonical = Some(checkpoint);
    }

    report.stages.push(Stage::Normalize);
    info!(duration_ms = start.elapsed().as_millis(), "normalize complete");
    Ok(())
}

// ============================================================================
// Stage 3: Link
// ============================================================================

fn read_canonical(config: &PipelineConfig, source: Source) -> Result<DataFrame> {
    let path = config.transform_path(source);
    read_checkpoint(&path)
        .with_context(|| format!("read {source} canonical checkpoint {}", path.display()))
}

/// Links the canonical tables and persists the resolved table.
pub fn link_stage(config: &PipelineConfig, report: &mut RunReport) -> Result<()> {
    let span = info_span!("link_all");
    let _guard = span.enter();
    let start = Instant::now();

    let social = read_canonical(config, Source::Social)?;
    let web = read_canonical(config, Source::Web)?;
    let directory = read_canonical(config, Source::Directory)?;

    let linked = link(&social, &web, &directory).context("link canonical tables")?;
    let output = write_checkpoint(&linked.frame, &config.output_path())
        .context("write resolved table")?;
    report.link = Some(LinkSummary {
        report: linked.report,
        output,
    });

    report.stages.push(Stage::Link);
    info!(duration_ms = start.elapsed().as_millis(), "link complete");
    Ok(())
}

// ============================================================================
// Orchestration
// ============================================================================

/// Runs one stage and writes the run report.
pub fn run_stage(config: &PipelineConfig, stage: Stage) -> Result<RunReport> {
    run_stages(config, &[stage])
}

/// Runs the whole pipeline and writes the run report.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunReport> {
    run_stages(config, &Stage::ALL)
}

fn run_stages(config: &PipelineConfig, stages: &[Stage]) -> Result<RunReport> {
    let span = info_span!("pipeline", root = %config.root.display());
    let _guard = span.enter();

    let mut report = RunReport::new(&config.root);
    for stage in stages {
        match stage {
            Stage::Ingest => ingest(config, &mut report)?,
            Stage::Normalize => normalize(config, &mut report)?,
            Stage::Link => link_stage(config, &mut report)?,
        }
    }
    report.finish(&config.report_path())?;
    Ok(report)
}
