use std::path::PathBuf;

pub mod commands;
pub mod config;
pub mod creds;
pub mod registries;
pub mod state;
pub mod store;
pub mod utils;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "regpush",
    about = "📦 Log CI runners in to container registries and push build images",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        short = 'c',
        long = "creds",
        help = "Path to the registry credential file",
        env = "REGPUSH_CREDS_FILE",
        global = true
    )]
    pub creds: Option<PathBuf>,

    #[clap(
        short = 'a',
        long = "app",
        help = "Application name used as the image repository segment",
        env = "REGPUSH_APP",
        global = true
    )]
    pub app: Option<String>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_cli() {
        use super::*;
        use clap::CommandFactory;

        CLI::command().debug_assert();
    }
}
