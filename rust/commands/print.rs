use anyhow::{Context, Result};
use tracing::info;

use crate::cli::PrintArgs;

use super::CommandContext;

pub fn handle(args: PrintArgs, ctx: &CommandContext) -> Result<()> {
    let text = ctx
        .extractor
        .extract_pages(&args.input)
        .with_context(|| format!("Failed to extract text from {}", args.input.display()))?;

    info!(
        input = %args.input.display(),
        page_count = text.page_count(),
        "printing extracted text"
    );
    print!("{}", text.render());
    Ok(())
}
