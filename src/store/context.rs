use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::utils::home_path;
use super::Storable;
use crate::config::CONTEXT_STORE_PATH;
use crate::impl_store;

/// Defaults picked up when the matching flag or env var is absent, so
/// the tool can be exercised outside of CI without retyping the wiring.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct Context {
    pub default_app: Option<String>,

    pub default_creds: Option<PathBuf>,
}

impl Storable for Context {
    fn path() -> Result<PathBuf> {
        home_path(CONTEXT_STORE_PATH)
    }
}

impl_store!(Context);
