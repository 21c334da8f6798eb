use anyhow::Result;

use crate::{cli::Command, config::ExtractorConfig, extractor::TextExtractor};

pub mod extract;
pub mod pages;
pub mod print;

pub struct CommandContext {
    pub extractor: TextExtractor,
}

impl CommandContext {
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            extractor: TextExtractor::from_config(config),
        }
    }
}

pub fn run_command(command: Command, ctx: CommandContext) -> Result<()> {
    match command {
        Command::Extract(args) => extract::handle(args, &ctx),
        Command::Print(args) => print::handle(args, &ctx),
        Command::Pages(args) => pages::handle(args, &ctx),
    }
}
