// ABOUTME: Pending deployment requests as plain data values.
// ABOUTME: Handlers produce these; a platform client later executes them.

use crate::config::PricingTier;
use crate::types::{AppName, ImageRef};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Operating system of a hosting plan or provisioned app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsKind {
    Linux,
    Windows,
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsKind::Linux => write!(f, "linux"),
            OsKind::Windows => write!(f, "windows"),
        }
    }
}

/// Username/password pair for a private container registry.
///
/// The password is redacted from Debug output and serialization; the real
/// value is only read by the client executing the request.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistryCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for RegistryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Serialize for RegistryCredentials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("RegistryCredentials", 2)?;
        s.serialize_field("username", &self.username)?;
        s.serialize_field("password", "<redacted>")?;
        s.end()
    }
}

/// What the deployed app runs, one variant per deployment strategy.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RuntimeSetting {
    PrivateRegistryImage {
        image: ImageRef,
        #[serde(skip_serializing_if = "Option::is_none")]
        server_url: Option<String>,
        credentials: RegistryCredentials,
    },
    PublicImage {
        image: ImageRef,
    },
    Archive {
        path: PathBuf,
    },
    Builtin {
        stack: String,
        version: String,
    },
}

/// The hosting plan created alongside a new app.
#[derive(Debug, Clone, Serialize)]
pub struct NewPlan {
    pub os: OsKind,
    pub tier: PricingTier,
}

impl NewPlan {
    pub fn linux(tier: PricingTier) -> Self {
        NewPlan {
            os: OsKind::Linux,
            tier,
        }
    }
}

/// A not-yet-executed request to create a web app.
///
/// Inert by construction: building one performs no I/O. The orchestrator hands
/// it to a [`PlatformClient`](crate::client::PlatformClient) to commit.
#[derive(Debug, Clone, Serialize)]
pub struct AppDefinition {
    pub app: AppName,
    pub resource_group: String,
    pub region: String,
    pub plan: NewPlan,
    pub runtime: RuntimeSetting,
}

/// A not-yet-executed request to swap the runtime of an existing app.
#[derive(Debug, Clone, Serialize)]
pub struct AppUpdate {
    pub app: AppName,
    pub resource_group: String,
    pub runtime: RuntimeSetting,
}
