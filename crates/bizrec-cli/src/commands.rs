use anyhow::Result;
use tracing::info;

use bizrec_cli::config::PipelineConfig;
use bizrec_cli::pipeline::{run_pipeline, run_stage};
use bizrec_cli::profile::profile_checkpoints;
use bizrec_cli::types::{RunReport, Stage};

use crate::cli::Cli;
use crate::summary::print_profile;

fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let config = PipelineConfig::resolve(cli.config.as_deref(), cli.root.as_deref())?;
    info!(root = %config.root.display(), "configuration resolved");
    Ok(config)
}

pub fn run_all(cli: &Cli) -> Result<RunReport> {
    let config = resolve_config(cli)?;
    run_pipeline(&config)
}

pub fn run_one(cli: &Cli, stage: Stage) -> Result<RunReport> {
    let config = resolve_config(cli)?;
    run_stage(&config, stage)
}

pub fn run_profile(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let report = profile_checkpoints(&config)?;
    print_profile(&report);
    Ok(())
}
