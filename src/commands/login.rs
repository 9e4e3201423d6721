use anyhow::{bail, Result};
use clap::Parser;

use crate::creds;
use crate::registries;
use crate::state::State;
use crate::utils::in_path;

#[derive(Debug, Parser)]
#[clap(about = "Authenticate with every registry in the credential file")]
pub struct Options {}

pub async fn handle(_options: &Options, state: State) -> Result<()> {
    if !in_path("docker").await {
        bail!("Docker is not installed");
    }

    let path = state.creds_path()?;
    let records = creds::load(&path).await?;

    let mut logged_in = 0usize;

    for record in &records {
        // platform managed records get their logins elsewhere
        if record.platform_managed() {
            log::debug!(
                "Skipping platform managed record for `{}`",
                record.credentials.registry
            );

            continue;
        }

        registries::login(record).await?;

        log::info!("Logged in to `{}`", record.credentials.registry);

        logged_in += 1;
    }

    if logged_in == 0 {
        log::warn!("No records in `{}` were eligible for login", path.display());
    }

    Ok(())
}
