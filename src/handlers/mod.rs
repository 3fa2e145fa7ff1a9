// ABOUTME: Runtime handler selection and dispatch for deployment strategies.
// ABOUTME: Validates settings and produces pending requests; never touches the network.

mod archive;
mod builtin;
mod private_registry;
mod public_registry;

use crate::client::{ExistingApp, assure_linux_web_app};
use crate::config::{ContainerSettings, DeployConfig, RuntimeSection};
use crate::request::{AppDefinition, AppUpdate, NewPlan, OsKind, RuntimeSetting};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Validation failures raised by runtime handlers.
///
/// Every variant is fatal to the current deploy attempt: there are no retries
/// and nothing is caught locally. Client-side failures (auth, transport,
/// provisioning) are a different layer and propagate unchanged past this one.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("container settings not found in deployment configuration")]
    MissingContainerSettings,

    #[error("server id not found in container settings")]
    MissingServerId,

    #[error("container registry credentials not found in container settings")]
    MissingCredentials,

    #[error("could not resolve credential from environment variable {0}")]
    UnresolvedCredential(String),

    #[error("app {app} runs on a {os} plan; container runtimes require linux")]
    NotLinuxApp { app: String, os: OsKind },

    #[error("archive path is empty")]
    MissingArchivePath,

    #[error("unsupported archive type (expected .zip or .war): {0}")]
    UnsupportedArchive(PathBuf),

    #[error("builtin runtime stack and version must both be set")]
    MissingRuntimeStack,
}

/// Deployment strategy handler, one variant per supported runtime.
///
/// The variant set is closed: selection is a single match on the configured
/// runtime section, and each handler is stateless. Handlers take the
/// configuration explicitly per call and only ever read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeHandler {
    PrivateRegistry,
    PublicRegistry,
    Archive,
    Builtin,
}

impl RuntimeHandler {
    /// Select the handler matching the configured runtime section.
    pub fn select(runtime: &RuntimeSection) -> Self {
        match runtime {
            RuntimeSection::PrivateRegistry(_) => RuntimeHandler::PrivateRegistry,
            RuntimeSection::PublicRegistry(_) => RuntimeHandler::PublicRegistry,
            RuntimeSection::Archive { .. } => RuntimeHandler::Archive,
            RuntimeSection::Builtin { .. } => RuntimeHandler::Builtin,
        }
    }

    /// Validate settings and produce a request to create a new app on a new
    /// Linux plan at the configured pricing tier.
    ///
    /// No I/O happens here; executing the returned definition is the caller's
    /// responsibility.
    pub fn define_app(&self, config: &DeployConfig) -> Result<AppDefinition, ConfigurationError> {
        let runtime = self.runtime_setting(config)?;
        Ok(AppDefinition {
            app: config.app.clone(),
            resource_group: config.resource_group.clone(),
            region: config.region.clone(),
            plan: NewPlan::linux(config.pricing_tier),
            runtime,
        })
    }

    /// Validate settings and produce a request to swap the runtime of an
    /// already-provisioned app.
    ///
    /// For container and builtin runtimes the existing app must be on a Linux
    /// plan; that check runs before any settings validation.
    pub fn update_app(
        &self,
        config: &DeployConfig,
        existing: &ExistingApp,
    ) -> Result<AppUpdate, ConfigurationError> {
        match self {
            RuntimeHandler::PrivateRegistry
            | RuntimeHandler::PublicRegistry
            | RuntimeHandler::Builtin => assure_linux_web_app(existing)?,
            RuntimeHandler::Archive => {}
        }

        let runtime = self.runtime_setting(config)?;
        Ok(AppUpdate {
            app: config.app.clone(),
            resource_group: config.resource_group.clone(),
            runtime,
        })
    }

    fn runtime_setting(&self, config: &DeployConfig) -> Result<RuntimeSetting, ConfigurationError> {
        match self {
            RuntimeHandler::PrivateRegistry => {
                private_registry::runtime_setting(container_settings(config)?)
            }
            RuntimeHandler::PublicRegistry => {
                public_registry::runtime_setting(container_settings(config)?)
            }
            RuntimeHandler::Archive => archive::runtime_setting(config),
            RuntimeHandler::Builtin => builtin::runtime_setting(config),
        }
    }
}

impl fmt::Display for RuntimeHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeHandler::PrivateRegistry => write!(f, "private-registry"),
            RuntimeHandler::PublicRegistry => write!(f, "public-registry"),
            RuntimeHandler::Archive => write!(f, "archive"),
            RuntimeHandler::Builtin => write!(f, "builtin"),
        }
    }
}

/// Container settings from the configured runtime section.
///
/// A container handler asked to run against a configuration without container
/// settings gets a clean configuration error, on both the define and update
/// paths.
fn container_settings(config: &DeployConfig) -> Result<&ContainerSettings, ConfigurationError> {
    match &config.runtime {
        RuntimeSection::PrivateRegistry(settings) | RuntimeSection::PublicRegistry(settings) => {
            Ok(settings)
        }
        _ => Err(ConfigurationError::MissingContainerSettings),
    }
}
