use std::process::Stdio;

use anyhow::{bail, Context as _, Result};
use tokio::process::Command;

use super::docker;
use crate::creds::Credentials;
use crate::utils::in_path;

pub const PUBLIC_GALLERY_HOST: &str = "public.ecr.aws";

// the public gallery has its own subcommand family
fn service(registry: &str) -> &'static str {
    if is_public(registry) {
        "ecr-public"
    } else {
        "ecr"
    }
}

pub fn is_public(registry: &str) -> bool {
    registry == PUBLIC_GALLERY_HOST || registry.starts_with("public.ecr.aws/")
}

/// An `aws` invocation carrying the record's key pair and region in
/// the child environment. Shared `aws configure` state is never
/// touched.
fn aws(creds: &Credentials) -> Result<Command> {
    let mut command = Command::new("aws");

    command
        .env("AWS_ACCESS_KEY_ID", creds.user()?)
        .env("AWS_SECRET_ACCESS_KEY", &creds.registry_password)
        .env("AWS_DEFAULT_REGION", creds.region()?);

    Ok(command)
}

pub async fn login(creds: &Credentials) -> Result<()> {
    if !in_path("aws").await {
        bail!("The aws CLI is not installed, it is required for ECR records");
    }

    let output = aws(creds)?
        .arg(service(&creds.registry))
        .arg("get-login-password")
        .arg("--region")
        .arg(creds.region()?)
        .stderr(Stdio::inherit())
        .output()
        .await?;

    if !output.status.success() {
        bail!(
            "Failed to obtain an ECR login password: exit code {}",
            output.status.code().unwrap_or(1)
        );
    }

    let password =
        String::from_utf8(output.stdout).context("ECR login password is not valid utf-8")?;

    // ECR hands out short-lived passwords for the fixed `AWS` user
    docker::login("AWS", password.trim(), &creds.registry).await
}

/// `describe-repositories` followed by `create-repository` on miss.
pub async fn ensure_repository(creds: &Credentials, app: &str) -> Result<()> {
    let status = aws(creds)?
        .arg(service(&creds.registry))
        .arg("describe-repositories")
        .arg("--repository-names")
        .arg(app)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;

    if status.success() {
        log::debug!("Repository `{app}` already exists");

        return Ok(());
    }

    log::info!("Creating {} repository `{app}`", service(&creds.registry));

    let mut command = aws(creds)?;

    command.arg(service(&creds.registry)).arg("create-repository");

    // scan on push is not supported on the public gallery
    if !is_public(&creds.registry) {
        command
            .arg("--image-scanning-configuration")
            .arg("scanOnPush=true");
    }

    let status = command.arg("--repository-name").arg(app).status().await?;

    if !status.success() {
        bail!(
            "Failed to create repository `{app}`: exit code {}",
            status.code().unwrap_or(1)
        );
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_public() {
        assert!(is_public("public.ecr.aws"));
        assert!(is_public("public.ecr.aws/acme"));

        assert!(!is_public("123456789012.dkr.ecr.us-east-1.amazonaws.com"));
        assert!(!is_public("notpublic.ecr.aws.example.com"));
    }

    #[test]
    fn test_service() {
        assert_eq!(service("public.ecr.aws"), "ecr-public");
        assert_eq!(
            service("123456789012.dkr.ecr.us-east-1.amazonaws.com"),
            "ecr"
        );
    }
}
