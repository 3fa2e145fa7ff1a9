// ABOUTME: Private-registry runtime handler validation.
// ABOUTME: Requires server id and full credentials before building the request.

use super::ConfigurationError;
use crate::config::{ContainerSettings, EnvValue};
use crate::request::{RegistryCredentials, RuntimeSetting};
use tracing::debug;

/// Build the runtime setting for an image pulled from a private registry.
///
/// Validation order, first failure wins: server id, then presence of both
/// credentials, then credential resolution.
pub(super) fn runtime_setting(
    settings: &ContainerSettings,
) -> Result<RuntimeSetting, ConfigurationError> {
    let server_id = settings
        .server_id
        .as_deref()
        .ok_or(ConfigurationError::MissingServerId)?;

    let (Some(username), Some(password)) = (&settings.username, &settings.password) else {
        return Err(ConfigurationError::MissingCredentials);
    };

    let credentials = RegistryCredentials {
        username: resolve(username)?,
        password: resolve(password)?,
    };

    debug!(
        server_id,
        image = %settings.image,
        "validated private registry settings"
    );

    Ok(RuntimeSetting::PrivateRegistryImage {
        image: settings.image.clone(),
        server_url: settings.server_url.clone(),
        credentials,
    })
}

fn resolve(value: &EnvValue) -> Result<String, ConfigurationError> {
    value.resolve().map_err(ConfigurationError::UnresolvedCredential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageRef;

    fn settings() -> ContainerSettings {
        ContainerSettings {
            image: ImageRef::parse("registry.example.com/org/app:1.0").unwrap(),
            server_id: Some("my-registry".to_string()),
            server_url: Some("registry.example.com".to_string()),
            username: Some(EnvValue::Literal("deploy".to_string())),
            password: Some(EnvValue::Literal("hunter2".to_string())),
        }
    }

    #[test]
    fn missing_server_id_wins_over_missing_credentials() {
        let mut s = settings();
        s.server_id = None;
        s.username = None;
        s.password = None;

        let err = runtime_setting(&s).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingServerId));
    }

    #[test]
    fn either_absent_credential_is_rejected() {
        let mut s = settings();
        s.username = None;
        assert!(matches!(
            runtime_setting(&s).unwrap_err(),
            ConfigurationError::MissingCredentials
        ));

        let mut s = settings();
        s.password = None;
        assert!(matches!(
            runtime_setting(&s).unwrap_err(),
            ConfigurationError::MissingCredentials
        ));
    }

    #[test]
    fn complete_settings_produce_the_full_setting() {
        let setting = runtime_setting(&settings()).unwrap();
        match setting {
            RuntimeSetting::PrivateRegistryImage {
                image,
                server_url,
                credentials,
            } => {
                assert_eq!(image.to_string(), "registry.example.com/org/app:1.0");
                assert_eq!(server_url.as_deref(), Some("registry.example.com"));
                assert_eq!(credentials.username, "deploy");
                assert_eq!(credentials.password, "hunter2");
            }
            other => panic!("unexpected runtime setting: {other:?}"),
        }
    }
}
