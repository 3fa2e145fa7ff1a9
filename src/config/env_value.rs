// ABOUTME: Secret-capable value type with environment variable indirection.
// ABOUTME: Lets registry credentials reference env vars instead of living in YAML.

use serde::Deserialize;

/// A value that is either written literally in the configuration file or
/// resolved from an environment variable at deploy time. Registry credentials
/// use this so passwords never have to be committed alongside the config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl EnvValue {
    /// Resolve to a concrete string, consulting the process environment for
    /// `FromEnv` values. Returns the unresolved variable name on failure.
    pub fn resolve(&self) -> Result<String, String> {
        match self {
            EnvValue::Literal(s) => Ok(s.clone()),
            EnvValue::FromEnv { var, default } => match std::env::var(var) {
                Ok(val) => Ok(val),
                Err(_) => default.clone().ok_or_else(|| var.clone()),
            },
        }
    }
}
