// ABOUTME: Archive runtime handler validation.
// ABOUTME: Accepts zip and war application archives.

use super::ConfigurationError;
use crate::config::{DeployConfig, RuntimeSection};
use crate::request::RuntimeSetting;
use tracing::debug;

pub(super) fn runtime_setting(
    config: &DeployConfig,
) -> Result<RuntimeSetting, ConfigurationError> {
    let RuntimeSection::Archive { path } = &config.runtime else {
        return Err(ConfigurationError::MissingArchivePath);
    };

    if path.as_os_str().is_empty() {
        return Err(ConfigurationError::MissingArchivePath);
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("zip") | Some("war") => {}
        _ => return Err(ConfigurationError::UnsupportedArchive(path.clone())),
    }

    debug!(path = %path.display(), "validated archive settings");

    Ok(RuntimeSetting::Archive { path: path.clone() })
}
