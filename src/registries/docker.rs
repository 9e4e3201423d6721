use std::process::Stdio;

use anyhow::{bail, Result};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Log in to a registry, feeding the password over
/// `--password-stdin`.
pub async fn login(username: &str, password: &str, server: &str) -> Result<()> {
    let mut child = Command::new("docker")
        .arg("login")
        .arg("--username")
        .arg(username)
        .arg("--password-stdin")
        .arg(server)
        // making the stdin piped disables tty
        .stdin(Stdio::piped())
        .spawn()?;

    log::debug!("Writing password to stdin");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(password.as_bytes())
        .await?;

    let status = child.wait().await?;

    log::debug!("Docker login exited with {status}");

    if status.success() {
        log::debug!("Docker login successful");

        return Ok(());
    }

    // if the command failed there are few possible reasons:
    // 1. docker daemon is not running
    // 2. the registry is unreachable
    // 3. the credentials expired
    bail!("Docker login to `{server}` failed, is the docker daemon running?");
}

pub async fn tag_and_push(local: &str, target: &str) -> Result<()> {
    let command = Command::new("docker")
        .arg("image")
        .arg("tag")
        .arg(local)
        .arg(target)
        .status()
        .await?;

    if !command.success() {
        bail!(
            "Failed to tag `{local}` as `{target}`: exit code {}",
            command.code().unwrap_or(1)
        );
    }

    let command = Command::new("docker").arg("push").arg(target).status().await?;

    if !command.success() {
        bail!(
            "Failed to push image: exit code {}",
            command.code().unwrap_or(1)
        );
    }

    println!();
    log::info!("Pushed image `{target}`");

    Ok(())
}

pub async fn logout(server: &str) -> Result<()> {
    let status = Command::new("docker")
        .arg("logout")
        .arg(server)
        .stdout(Stdio::null())
        .status()
        .await?;

    log::debug!("Docker logout exited with {status}");

    if !status.success() {
        bail!("Docker logout from `{server}` failed");
    }

    Ok(())
}
