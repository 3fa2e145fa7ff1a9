// ABOUTME: Plan command implementation.
// ABOUTME: Renders the pending create request without executing anything.

use crate::config::DeployConfig;
use crate::error::Result;
use crate::handlers::RuntimeHandler;

/// Rendering format for `weblift plan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Yaml,
    Json,
}

/// Validate the configuration and render the app definition that a deploy
/// would commit. Registry credentials are redacted in the output.
pub fn plan(config: &DeployConfig, format: PlanFormat) -> Result<String> {
    let handler = RuntimeHandler::select(&config.runtime);
    let definition = handler.define_app(config)?;

    let rendered = match format {
        PlanFormat::Yaml => serde_yaml::to_string(&definition)?,
        PlanFormat::Json => serde_json::to_string_pretty(&definition)?,
    };

    Ok(rendered)
}
