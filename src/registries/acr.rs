use anyhow::Result;

use super::docker;
use crate::creds::Credentials;

// ACR admin credentials are a plain username/password pair against the
// registry host itself.
pub async fn login(creds: &Credentials) -> Result<()> {
    docker::login(creds.user()?, &creds.registry_password, &creds.registry).await
}
