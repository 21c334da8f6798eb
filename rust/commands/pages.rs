use anyhow::{Context, Result};

use crate::cli::PagesArgs;

use super::CommandContext;

pub fn handle(args: PagesArgs, ctx: &CommandContext) -> Result<()> {
    let count = ctx
        .extractor
        .page_count(&args.input)
        .with_context(|| format!("Failed to count pages in {}", args.input.display()))?;
    println!("{count}");
    Ok(())
}
