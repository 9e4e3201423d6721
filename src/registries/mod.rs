pub mod acr;
pub mod docker;
pub mod docker_hub;
pub mod ecr;
pub mod gcp;

use anyhow::Result;

use crate::creds::{RegistryCredential, RegistryType};

/// Image reference a record pushes to. Everything except GCP pushes to
/// `<registry>/<app>:<tag>`, Artifact Registry encodes the project and
/// repository in the path.
pub fn target_image(record: &RegistryCredential, app: &str, tag: &str) -> Result<String> {
    match record.registry_type {
        RegistryType::Gcp => gcp::target_image(&record.credentials, app, tag),
        _ => Ok(format!("{}/{app}:{tag}", record.credentials.registry)),
    }
}

pub async fn login(record: &RegistryCredential) -> Result<()> {
    match record.registry_type {
        RegistryType::Acr => acr::login(&record.credentials).await,
        RegistryType::Ecr => ecr::login(&record.credentials).await,
        RegistryType::Gcp => gcp::login(&record.credentials).await,
        RegistryType::DockerHub => docker_hub::login(&record.credentials).await,
    }
}

/// Full push-mode pass for a single record: login, make sure the
/// target repository exists where the registry requires it, tag the
/// local image and push, then drop the session.
pub async fn push(record: &RegistryCredential, app: &str, image: &str, tag: &str) -> Result<()> {
    login(record).await?;

    if record.registry_type == RegistryType::Ecr {
        ecr::ensure_repository(&record.credentials, app).await?;
    }

    let target = target_image(record, app, tag)?;

    docker::tag_and_push(image, &target).await?;
    docker::logout(&record.credentials.registry).await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::creds::Credentials;

    fn record(registry_type: RegistryType, registry: &str) -> RegistryCredential {
        RegistryCredential {
            registry_type,
            credentials: Credentials {
                registry: registry.to_string(),
                registry_user: Some("acme".to_string()),
                registry_password: "hunter2".to_string(),
                region: None,
                repository: None,
            },
            is_cdp: None,
        }
    }

    #[test]
    fn test_target_image() {
        let acr = record(RegistryType::Acr, "acme.azurecr.io");

        assert_eq!(
            target_image(&acr, "web", "deadbeef").unwrap(),
            "acme.azurecr.io/web:deadbeef"
        );

        let hub = record(RegistryType::DockerHub, "docker.io");

        assert_eq!(
            target_image(&hub, "web", "v1.2.3").unwrap(),
            "docker.io/web:v1.2.3"
        );
    }
}
