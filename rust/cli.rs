use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pdftext-cli",
    version,
    about = "Extract the text of a PDF document page by page"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct GlobalOpts {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Write the text of every page to a UTF-8 file and report Success or Error")]
    Extract(ExtractArgs),
    #[command(about = "Print the extracted text to stdout (no file written)")]
    Print(PrintArgs),
    #[command(about = "Print the number of pages in a PDF")]
    Pages(PagesArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    #[arg(long, value_name = "PATH", required = true, help = "PDF file to read")]
    pub input: PathBuf,

    #[arg(
        long,
        value_name = "PATH",
        required = true,
        help = "Text file to create or overwrite"
    )]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    #[arg(long, value_name = "PATH", required = true, help = "PDF file to read")]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct PagesArgs {
    #[arg(long, value_name = "PATH", required = true, help = "PDF file to inspect")]
    pub input: PathBuf,
}
