// ABOUTME: Deploy command implementation.
// ABOUTME: Selects a handler, builds the pending request, executes it via the client.

use crate::client::{DeployOutcome, PlatformClient};
use crate::config::DeployConfig;
use crate::error::Result;
use crate::handlers::RuntimeHandler;
use crate::output::Output;
use tracing::debug;

/// Deploy one web app.
///
/// Create-or-update: if the platform already knows the app, the handler
/// produces an update request, otherwise a full definition with a new Linux
/// plan. Validation failures abort immediately; nothing is retried.
pub fn deploy(
    config: &DeployConfig,
    client: &dyn PlatformClient,
    output: &mut Output,
) -> Result<DeployOutcome> {
    output.start_timer();

    let handler = RuntimeHandler::select(&config.runtime);
    debug!(%handler, app = %config.app, "selected runtime handler");

    output.progress(&format!(
        "Deploying {} ({} runtime, tier {})",
        config.app, handler, config.pricing_tier
    ));

    let existing = client.get_app(&config.resource_group, &config.app)?;

    let outcome = match existing {
        Some(app) => {
            output.progress(&format!("  → Updating existing app {}", app.name));
            let update = handler.update_app(config, &app)?;
            client.update_app(&update)?
        }
        None => {
            output.progress("  → No existing app (first deploy)");
            let definition = handler.define_app(config)?;
            client.create_app(&definition)?
        }
    };

    output.success(&format!("App {} {}", outcome.app, outcome.operation));
    Ok(outcome)
}
