// ABOUTME: Recording platform client used by deploy --dry-run and tests.
// ABOUTME: Executes nothing; remembers every request it was asked to commit.

use super::{ClientError, DeployOutcome, ExistingApp, Operation, PlatformClient};
use crate::request::{AppDefinition, AppUpdate};
use crate::types::AppName;
use std::sync::Mutex;
use tracing::info;

/// A request the dry-run client was asked to execute.
#[derive(Debug, Clone)]
pub enum RecordedRequest {
    Create(AppDefinition),
    Update(AppUpdate),
}

/// Platform client that records requests instead of executing them.
///
/// Seed it with [`with_existing`](DryRunClient::with_existing) to steer the
/// orchestrator down the update path.
#[derive(Debug, Default)]
pub struct DryRunClient {
    existing: Vec<ExistingApp>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

impl DryRunClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(apps: Vec<ExistingApp>) -> Self {
        DryRunClient {
            existing: apps,
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// Requests committed so far, in order.
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().expect("recorded lock poisoned").clone()
    }
}

impl PlatformClient for DryRunClient {
    fn get_app(
        &self,
        resource_group: &str,
        name: &AppName,
    ) -> Result<Option<ExistingApp>, ClientError> {
        Ok(self
            .existing
            .iter()
            .find(|app| app.resource_group == resource_group && &app.name == name)
            .cloned())
    }

    fn create_app(&self, definition: &AppDefinition) -> Result<DeployOutcome, ClientError> {
        info!(app = %definition.app, "dry-run: would create app");
        self.recorded
            .lock()
            .expect("recorded lock poisoned")
            .push(RecordedRequest::Create(definition.clone()));
        Ok(DeployOutcome {
            app: definition.app.clone(),
            operation: Operation::Created,
        })
    }

    fn update_app(&self, update: &AppUpdate) -> Result<DeployOutcome, ClientError> {
        info!(app = %update.app, "dry-run: would update app");
        self.recorded
            .lock()
            .expect("recorded lock poisoned")
            .push(RecordedRequest::Update(update.clone()));
        Ok(DeployOutcome {
            app: update.app.clone(),
            operation: Operation::Updated,
        })
    }
}
