// ABOUTME: Builtin runtime handler validation.
// ABOUTME: Platform-native Linux runtime stacks, e.g. tomcat or node.

use super::ConfigurationError;
use crate::config::{DeployConfig, RuntimeSection};
use crate::request::RuntimeSetting;
use tracing::debug;

pub(super) fn runtime_setting(
    config: &DeployConfig,
) -> Result<RuntimeSetting, ConfigurationError> {
    let RuntimeSection::Builtin { stack, version } = &config.runtime else {
        return Err(ConfigurationError::MissingRuntimeStack);
    };

    if stack.trim().is_empty() || version.trim().is_empty() {
        return Err(ConfigurationError::MissingRuntimeStack);
    }

    debug!(stack, version, "validated builtin runtime settings");

    Ok(RuntimeSetting::Builtin {
        stack: stack.clone(),
        version: version.clone(),
    })
}
