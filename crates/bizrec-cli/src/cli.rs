//! CLI argument definitions for the listing reconciler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bizrec_cli::types::Stage;

#[derive(Parser)]
#[command(
    name = "bizrec",
    version,
    about = "Reconcile business listings from web, social and map directory exports",
    long_about = "Reconcile business listings from three independent exports.\n\n\
                  Sources are read from source/, checkpointed to raw/ and transform/,\n\
                  and resolved into a single table under process/."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML configuration file (folders, file names, placeholder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Project root containing the stage folders (overrides the config file).
    #[arg(long = "root", value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run ingest, normalize and link in sequence.
    Run,

    /// Run a single stage from the previous stage's checkpoints.
    Stage {
        #[arg(value_enum)]
        stage: StageArg,
    },

    /// Print column statistics and domain overlap of the checkpoints.
    Profile,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StageArg {
    Ingest,
    Normalize,
    Link,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Ingest => Stage::Ingest,
            StageArg::Normalize => Stage::Normalize,
            StageArg::Link => Stage::Link,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
