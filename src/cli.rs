use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
pub struct Cli {
    /// Scan a script and print its tokens; starts a prompt when omitted
    pub script: Option<PathBuf>,

    /// Print debug info
    #[arg(short, long)]
    pub debug: bool,
}
