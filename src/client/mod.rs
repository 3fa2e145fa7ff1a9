// ABOUTME: Platform client seam for executing pending deployment requests.
// ABOUTME: Real SDK-backed clients plug in behind the trait; dry-run ships in-tree.

mod dry_run;

pub use dry_run::{DryRunClient, RecordedRequest};

use crate::handlers::ConfigurationError;
use crate::request::{AppDefinition, AppUpdate, OsKind};
use crate::types::AppName;
use std::fmt;
use thiserror::Error;

/// Errors surfaced by a platform client while executing a request.
///
/// Everything behind this variant (auth, transport, provisioning state) is the
/// client's problem; it is never caught or translated by the handlers.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("platform request failed: {0}")]
    Platform(String),
}

/// An already-provisioned app as reported by the platform.
#[derive(Debug, Clone)]
pub struct ExistingApp {
    pub name: AppName,
    pub resource_group: String,
    pub os: OsKind,
}

/// Assert that an existing app runs on a Linux plan.
///
/// Container runtimes only apply to Linux apps; update handlers call this
/// before looking at any registry settings.
pub fn assure_linux_web_app(app: &ExistingApp) -> Result<(), ConfigurationError> {
    if app.os != OsKind::Linux {
        return Err(ConfigurationError::NotLinuxApp {
            app: app.name.to_string(),
            os: app.os,
        });
    }
    Ok(())
}

/// Whether a deploy created a new app or updated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Created,
    Updated,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Created => write!(f, "created"),
            Operation::Updated => write!(f, "updated"),
        }
    }
}

/// Result of a committed deployment request.
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    pub app: AppName,
    pub operation: Operation,
}

/// Executes pending requests against the hosting platform.
///
/// Synchronous by design: one deploy invocation runs to completion before
/// another is considered, and nothing in this crate suspends. Implementations
/// own authentication, transport, and provisioning semantics entirely.
pub trait PlatformClient {
    /// Look up an app by resource group and name. `None` means the app does
    /// not exist yet and the deploy takes the create path.
    fn get_app(
        &self,
        resource_group: &str,
        name: &AppName,
    ) -> Result<Option<ExistingApp>, ClientError>;

    /// Commit an app-creation request.
    fn create_app(&self, definition: &AppDefinition) -> Result<DeployOutcome, ClientError>;

    /// Commit a runtime-update request against an existing app.
    fn update_app(&self, update: &AppUpdate) -> Result<DeployOutcome, ClientError>;
}
