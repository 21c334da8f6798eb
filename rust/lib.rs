pub mod backend;
pub mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod extractor;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;

pub use crate::{
    backend::{PdfBackend, PdfExtractBackend},
    commands::extract::report_line,
    config::ExtractorConfig,
    error::{BackendError, ExtractionError},
    extractor::{ExtractedText, ExtractionSummary, TextExtractor},
};

use crate::{
    cli::Cli,
    commands::{CommandContext, run_command},
};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // stdout belongs to the command's result line; logs go to stderr.
    let max = match cli.global.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    fmt()
        .with_max_level(max)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .ok();

    let config = ExtractorConfig::from_env();
    let context = CommandContext::from_config(&config);

    run_command(cli.command, context)
}
