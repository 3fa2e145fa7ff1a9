// ABOUTME: Configuration types and parsing for weblift.yml.
// ABOUTME: Handles YAML parsing, runtime section selection, and init template.

mod container;
mod env_value;
mod pricing;

pub use container::ContainerSettings;
pub use env_value::EnvValue;
pub use pricing::PricingTier;

use crate::error::{Error, Result};
use crate::types::{AppName, ImageRef};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "weblift.yml";
pub const CONFIG_FILENAME_ALT: &str = "weblift.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".weblift/config.yml";

/// The full deployment configuration for one web app.
///
/// Loaded once per invocation and treated as immutable from then on; handlers
/// receive it by shared reference and never modify it.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
    #[serde(deserialize_with = "deserialize_app_name")]
    pub app: AppName,

    pub resource_group: String,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default)]
    pub pricing_tier: PricingTier,

    pub runtime: RuntimeSection,
}

/// Which deployment strategy the app uses, one variant per strategy.
///
/// Tagged by `kind` in the YAML:
///
/// ```yaml
/// runtime:
///   kind: private-registry
///   image: registry.example.com/org/app:1.4
///   server_id: my-registry
///   username: deploy
///   password:
///     env: REGISTRY_PASSWORD
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RuntimeSection {
    /// Container image pulled from a private registry with credentials.
    PrivateRegistry(ContainerSettings),

    /// Container image pulled from a public registry, no credentials.
    PublicRegistry(ContainerSettings),

    /// Application archive (zip or war) uploaded to the platform.
    Archive { path: PathBuf },

    /// Platform-native runtime stack, e.g. a managed Java or Node stack.
    Builtin { stack: String, version: String },
}

fn default_region() -> String {
    "westus".to_string()
}

impl DeployConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    pub fn template() -> Self {
        DeployConfig {
            app: AppName::new("my-app").unwrap(),
            resource_group: "my-resource-group".to_string(),
            region: default_region(),
            pricing_tier: PricingTier::default(),
            runtime: RuntimeSection::PrivateRegistry(ContainerSettings {
                image: ImageRef::parse("registry.example.com/org/my-app:latest").unwrap(),
                server_id: Some("my-registry".to_string()),
                server_url: Some("registry.example.com".to_string()),
                username: Some(EnvValue::Literal("deploy".to_string())),
                password: Some(EnvValue::FromEnv {
                    var: "REGISTRY_PASSWORD".to_string(),
                    default: None,
                }),
            }),
        }
    }
}

pub fn init_config(dir: &Path, app: Option<&str>, image: Option<&str>, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let mut config = DeployConfig::template();

    if let Some(a) = app {
        config.app = AppName::new(a).map_err(|e| Error::InvalidConfig(e.to_string()))?;
    }

    let image = match image {
        Some(i) => ImageRef::parse(i).map_err(|e| Error::InvalidConfig(e.to_string()))?,
        None => ImageRef::parse("registry.example.com/org/my-app:latest").unwrap(),
    };

    let yaml = generate_template_yaml(&config, &image);
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &DeployConfig, image: &ImageRef) -> String {
    format!(
        r#"app: {}
resource_group: {}
region: {}
pricing_tier: {}
runtime:
  kind: private-registry
  image: {}
  server_id: my-registry
  username: deploy
  password:
    env: REGISTRY_PASSWORD
"#,
        config.app, config.resource_group, config.region, config.pricing_tier, image
    )
}

fn deserialize_app_name<'de, D>(deserializer: D) -> std::result::Result<AppName, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    AppName::new(&s).map_err(serde::de::Error::custom)
}
