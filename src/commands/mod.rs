pub mod completions;
pub mod list;
pub mod login;
pub mod push;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Login(login::Options),
    Push(push::Options),
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    Completions(completions::Options),
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    match command {
        Commands::Login(options) => login::handle(&options, state).await,
        Commands::Push(options) => push::handle(&options, state).await,
        Commands::List(options) => list::handle(&options, state).await,
        Commands::Completions(options) => {
            completions::handle(&options);

            Ok(())
        }
    }
}
