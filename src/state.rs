use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::store::context::Context;
use crate::store::Store;

#[derive(Debug, Clone)]
pub struct State {
    pub ctx: Context,
    override_app: Option<String>,
    override_creds: Option<PathBuf>,
}

pub struct StateOptions {
    pub override_app: Option<String>,
    pub override_creds: Option<PathBuf>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let ctx = Context::new().await?;

        Ok(Self {
            ctx,
            override_app: options.override_app,
            override_creds: options.override_creds,
        })
    }

    /// Application name used as the image repository segment, `--app`
    /// over the stored default.
    pub fn app(&self) -> Result<String> {
        self.override_app
            .clone()
            .or_else(|| self.ctx.default_app.clone())
            .context("No application name, pass `--app` or set REGPUSH_APP")
    }

    /// Credential file path, `--creds` over the stored default.
    pub fn creds_path(&self) -> Result<PathBuf> {
        self.override_creds
            .clone()
            .or_else(|| self.ctx.default_creds.clone())
            .context("No credential file, pass `--creds` or set REGPUSH_CREDS_FILE")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn state_with(app: Option<&str>, creds: Option<&str>) -> State {
        State {
            ctx: Context::default(),
            override_app: app.map(ToString::to_string),
            override_creds: creds.map(PathBuf::from),
        }
    }

    #[test]
    fn test_overrides_win() {
        let mut state = state_with(Some("web"), Some("creds.json"));
        state.ctx.default_app = Some("other".to_string());

        assert_eq!(state.app().unwrap(), "web");
        assert_eq!(state.creds_path().unwrap(), PathBuf::from("creds.json"));
    }

    #[test]
    fn test_falls_back_to_context() {
        let mut state = state_with(None, None);
        state.ctx.default_app = Some("web".to_string());
        state.ctx.default_creds = Some(PathBuf::from("/ci/creds.json"));

        assert_eq!(state.app().unwrap(), "web");
        assert_eq!(state.creds_path().unwrap(), PathBuf::from("/ci/creds.json"));
    }

    #[test]
    fn test_missing_values_error() {
        let state = state_with(None, None);

        assert!(state.app().is_err());
        assert!(state.creds_path().is_err());
    }
}
