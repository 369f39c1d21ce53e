//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert dated notes into static-site memos
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert one note file into a memo
    Convert {
        /// the note file, named `<date>-<words>.<ext>`
        note: PathBuf,

        /// Directory the memo is written to
        #[arg(short, long, default_value = "_memos")]
        output: PathBuf,

        /// Directory referenced images are copied to
        #[arg(short, long, default_value = "assets/images/memos")]
        images: PathBuf,

        /// Use this title instead of deriving it from the file name
        #[arg(short, long)]
        title: Option<String>,
    },
}
