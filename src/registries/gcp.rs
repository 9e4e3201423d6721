use anyhow::{Context as _, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use super::docker;
use crate::creds::Credentials;

// Artifact Registry authenticates service accounts with the key JSON
// itself as the password.
const KEY_USER: &str = "_json_key";

#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    project_id: String,
}

/// Decode the base64 key material carried in the record. The decoded
/// key never touches disk.
fn decode_key(creds: &Credentials) -> Result<String> {
    let raw = STANDARD
        .decode(creds.registry_password.trim())
        .context("GCP key material is not valid base64")?;

    String::from_utf8(raw).context("GCP key material is not valid utf-8")
}

fn project_id(key: &str) -> Result<String> {
    let key: ServiceAccountKey =
        serde_json::from_str(key).context("GCP key material is not a service account key")?;

    Ok(key.project_id)
}

pub async fn login(creds: &Credentials) -> Result<()> {
    let key = decode_key(creds)?;

    docker::login(KEY_USER, &key, &creds.registry).await
}

/// Artifact Registry paths carry the project and repository:
/// `<region>-docker.pkg.dev/<project>/<repository>/<app>:<tag>`.
pub fn target_image(creds: &Credentials, app: &str, tag: &str) -> Result<String> {
    let project = project_id(&decode_key(creds)?)?;
    let region = creds.region()?;
    let repository = creds.repository()?;

    Ok(format!(
        "{region}-docker.pkg.dev/{project}/{repository}/{app}:{tag}"
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    fn creds_with_key(key: &str) -> Credentials {
        Credentials {
            registry: "europe-west1-docker.pkg.dev".to_string(),
            registry_user: None,
            registry_password: STANDARD.encode(key),
            region: Some("europe-west1".to_string()),
            repository: Some("apps".to_string()),
        }
    }

    #[test]
    fn test_decode_key() {
        let creds = creds_with_key(r#"{"project_id":"acme-prod"}"#);

        assert_eq!(decode_key(&creds).unwrap(), r#"{"project_id":"acme-prod"}"#);
    }

    #[test]
    fn test_decode_key_rejects_garbage() {
        let mut creds = creds_with_key("{}");
        creds.registry_password = "not base64!!".to_string();

        assert!(decode_key(&creds).is_err());
    }

    #[test]
    fn test_project_id() {
        let key = r#"{"type":"service_account","project_id":"acme-prod"}"#;

        assert_eq!(project_id(key).unwrap(), "acme-prod");
        assert!(project_id(r#"{"type":"service_account"}"#).is_err());
        assert!(project_id("not a key").is_err());
    }

    #[test]
    fn test_target_image() {
        let creds = creds_with_key(r#"{"project_id":"acme-prod"}"#);

        assert_eq!(
            target_image(&creds, "web", "deadbeef").unwrap(),
            "europe-west1-docker.pkg.dev/acme-prod/apps/web:deadbeef"
        );
    }

    #[test]
    fn test_target_image_requires_repository() {
        let mut creds = creds_with_key(r#"{"project_id":"acme-prod"}"#);
        creds.repository = None;

        assert!(target_image(&creds, "web", "deadbeef").is_err());
    }
}
