//! memo-port - converts dated note files into static-site memos.

mod cli;
mod convert;
mod logger;
mod memo;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use convert::{ConvertOptions, convert_note};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert {
            note,
            output,
            images,
            title,
        } => {
            let report = convert_note(&ConvertOptions {
                note,
                output,
                images,
                title: title.as_deref(),
            })?;
            log!(
                "memo";
                "`{}` -> {} ({} image(s) copied, {} missing)",
                report.title,
                report.memo_path.display(),
                report.copied_images.len(),
                report.warnings.len()
            );
            Ok(())
        }
    }
}
