// ABOUTME: Container image reference parsing and validation.
// ABOUTME: Handles formats like nginx, nginx:tag, registry/image:tag@digest.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseImageRefError {
    #[error("image reference cannot be empty")]
    Empty,

    #[error("invalid character in image reference: {0}")]
    InvalidChar(char),

    #[error("invalid image reference format: {0}")]
    InvalidFormat(String),
}

/// A parsed container image reference: `[registry/]name[:tag][@digest]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    registry: Option<String>,
    name: String,
    tag: Option<String>,
    digest: Option<String>,
}

impl ImageRef {
    pub fn parse(input: &str) -> Result<Self, ParseImageRefError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseImageRefError::Empty);
        }

        if let Some(c) = input
            .chars()
            .find(|&c| !c.is_ascii_alphanumeric() && !"/:.-_@".contains(c))
        {
            return Err(ParseImageRefError::InvalidChar(c));
        }

        // Digest comes off first, then the tag, then the registry.
        let (remainder, digest) = match input.split_once('@') {
            Some((before, after)) => (before, Some(after.to_string())),
            None => (input, None),
        };

        let (remainder, tag) = match remainder.rsplit_once(':') {
            // A colon followed by a slash is a registry port, not a tag.
            Some((_, after)) if after.contains('/') => (remainder, None),
            Some((before, after)) => (before, Some(after.to_string())),
            None => (remainder, None),
        };

        let (registry, name) = Self::split_registry(remainder)?;

        // An untagged, undigested reference means "latest".
        let tag = match (&tag, &digest) {
            (None, None) => Some("latest".to_string()),
            _ => tag,
        };

        Ok(Self {
            registry,
            name,
            tag,
            digest,
        })
    }

    fn split_registry(input: &str) -> Result<(Option<String>, String), ParseImageRefError> {
        match input.split_once('/') {
            None => {
                if input.is_empty() {
                    return Err(ParseImageRefError::InvalidFormat(input.to_string()));
                }
                Ok((None, input.to_string()))
            }
            Some((first, rest)) => {
                // The first component is a registry only if it looks like a
                // hostname: contains a dot or port, or is "localhost".
                if first.contains('.') || first.contains(':') || first == "localhost" {
                    if rest.is_empty() {
                        return Err(ParseImageRefError::InvalidFormat(input.to_string()));
                    }
                    Ok((Some(first.to_string()), rest.to_string()))
                } else {
                    Ok((None, input.to_string()))
                }
            }
        }
    }

    pub fn registry(&self) -> Option<&str> {
        self.registry.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref registry) = self.registry {
            write!(f, "{}/", registry)?;
        }
        write!(f, "{}", self.name)?;
        if let Some(ref tag) = self.tag {
            write!(f, ":{}", tag)?;
        }
        if let Some(ref digest) = self.digest {
            write!(f, "@{}", digest)?;
        }
        Ok(())
    }
}

impl serde::Serialize for ImageRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
