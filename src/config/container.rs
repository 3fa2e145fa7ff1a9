// ABOUTME: Container registry settings for image-based runtimes.
// ABOUTME: Credentials are optional here; handlers enforce what each strategy needs.

use super::env_value::EnvValue;
use crate::types::ImageRef;
use serde::Deserialize;

/// Registry settings for container-based deployment.
///
/// Every field except the image is optional at parse time: the public-registry
/// strategy needs none of them, while the private-registry strategy requires
/// the server id and both credentials. That requirement is enforced by the
/// runtime handler, not here, so a half-filled config still parses and
/// produces a precise validation error at deploy time.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerSettings {
    #[serde(deserialize_with = "deserialize_image_ref")]
    pub image: ImageRef,

    #[serde(default)]
    pub server_id: Option<String>,

    /// Registry host the credentials belong to. Absent means the default
    /// public registry's private namespace.
    #[serde(default)]
    pub server_url: Option<String>,

    #[serde(default)]
    pub username: Option<EnvValue>,

    #[serde(default)]
    pub password: Option<EnvValue>,
}

fn deserialize_image_ref<'de, D>(deserializer: D) -> Result<ImageRef, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    ImageRef::parse(&s).map_err(serde::de::Error::custom)
}
