#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use regpush::commands::handle_command;
use regpush::state::{State, StateOptions};
use regpush::{utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    // create a new CLI instance
    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = State::new(StateOptions {
        override_app: cli.app,
        override_creds: cli.creds,
    })
    .await?;

    if let Err(error) = handle_command(cli.commands, state).await {
        log::error!("{}", error);
        std::process::exit(1);
    }

    Ok(())
}
