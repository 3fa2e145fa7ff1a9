// ABOUTME: Public-registry runtime handler validation.
// ABOUTME: Anonymous image pull; only the image reference matters.

use super::ConfigurationError;
use crate::config::ContainerSettings;
use crate::request::RuntimeSetting;
use tracing::debug;

/// Build the runtime setting for an anonymously-pulled public image.
/// Credentials and server id, if present, are ignored.
pub(super) fn runtime_setting(
    settings: &ContainerSettings,
) -> Result<RuntimeSetting, ConfigurationError> {
    debug!(image = %settings.image, "validated public registry settings");

    Ok(RuntimeSetting::PublicImage {
        image: settings.image.clone(),
    })
}
