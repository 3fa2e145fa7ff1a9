// ABOUTME: Check command implementation.
// ABOUTME: Runs handler validation against the configuration, no execution.

use crate::config::DeployConfig;
use crate::error::Result;
use crate::handlers::RuntimeHandler;

/// Validate the configuration the same way a deploy would, returning the
/// selected handler on success.
pub fn check(config: &DeployConfig) -> Result<RuntimeHandler> {
    let handler = RuntimeHandler::select(&config.runtime);
    handler.define_app(config)?;
    Ok(handler)
}
