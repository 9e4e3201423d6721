use anyhow::Result;

use super::docker;
use crate::creds::Credentials;

pub const DEFAULT_LOGIN_SERVER: &str = "https://index.docker.io/v1/";

/// Hosted Docker Hub logins go to the default v1 endpoint. Anything
/// else carried as a DOCKER_HUB record (a mirror, a generic
/// self-hosted registry) is used verbatim.
pub fn login_server(registry: &str) -> &str {
    if registry.contains("docker.io") {
        DEFAULT_LOGIN_SERVER
    } else {
        registry
    }
}

pub async fn login(creds: &Credentials) -> Result<()> {
    docker::login(
        creds.user()?,
        &creds.registry_password,
        login_server(&creds.registry),
    )
    .await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_login_server() {
        assert_eq!(login_server("docker.io"), DEFAULT_LOGIN_SERVER);
        assert_eq!(login_server("registry-1.docker.io"), DEFAULT_LOGIN_SERVER);
        assert_eq!(login_server("index.docker.io"), DEFAULT_LOGIN_SERVER);

        assert_eq!(
            login_server("registry.example.com"),
            "registry.example.com"
        );
    }
}
