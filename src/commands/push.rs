use anyhow::{bail, Result};
use clap::Parser;

use crate::creds;
use crate::registries;
use crate::state::State;
use crate::utils::in_path;

#[derive(Debug, Parser)]
#[clap(about = "Authenticate, then tag and push the build image to every registry")]
pub struct Options {
    #[clap(
        short = 'i',
        long = "image",
        help = "Locally built image to push",
        env = "REGPUSH_IMAGE"
    )]
    pub image: String,

    #[clap(
        short = 't',
        long = "tag",
        help = "Tag for the pushed image, usually the commit sha",
        env = "REGPUSH_TAG"
    )]
    pub tag: String,
}

pub async fn handle(options: &Options, state: State) -> Result<()> {
    if !in_path("docker").await {
        bail!("Docker is not installed");
    }

    let app = state.app()?;
    let path = state.creds_path()?;
    let records = creds::load(&path).await?;

    for record in &records {
        registries::push(record, &app, &options.image, &options.tag).await?;
    }

    log::info!(
        "Pushed `{}` to {} registries",
        options.image,
        records.len()
    );

    Ok(())
}
