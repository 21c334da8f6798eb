use anyhow::Result;
use tracing::{error, info};

use crate::{
    cli::ExtractArgs,
    error::ExtractionError,
    extractor::ExtractionSummary,
};

use super::CommandContext;

/// Failures are reported on stdout and swallowed; the command itself never errors.
pub fn handle(args: ExtractArgs, ctx: &CommandContext) -> Result<()> {
    let outcome = ctx
        .extractor
        .extract_text_from_pdf(&args.input, &args.output);

    match &outcome {
        Ok(summary) => info!(
            input = %args.input.display(),
            page_count = summary.page_count,
            "extract command finished"
        ),
        Err(err) => error!(input = %args.input.display(), error = ?err, "extract command failed"),
    }

    println!("{}", report_line(&outcome));
    Ok(())
}

pub fn report_line(outcome: &Result<ExtractionSummary, ExtractionError>) -> String {
    match outcome {
        Ok(_) => "Success".to_string(),
        Err(err) => format!("Error: {err}"),
    }
}
