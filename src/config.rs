//! Loader configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::http::DEFAULT_HTTP_TIMEOUT;

/// Configuration for a [`DefaultResourceLoader`](crate::DefaultResourceLoader).
///
/// | Field | Effect |
/// |-------|--------|
/// | `base_dir` | ambient base for unqualified locations |
/// | `class_path` | directory roots of the lookup context, in order |
/// | `http_timeout` | request timeout for `http`/`https` resources |
///
/// With the `serde` feature the struct deserializes from e.g. JSON, with the
/// timeout given as whole seconds in `http_timeout_secs`:
///
/// ```json
/// { "base_dir": "/srv/app", "class_path": ["/srv/app/assets"], "http_timeout_secs": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoaderConfig {
    /// Ambient base directory for unqualified locations.
    pub base_dir: Option<PathBuf>,
    /// Class path directory roots, searched in order.
    pub class_path: Vec<PathBuf>,
    /// Request timeout for network resources.
    #[cfg_attr(feature = "serde", serde(rename = "http_timeout_secs", with = "duration_secs"))]
    pub http_timeout: Duration,
}

impl LoaderConfig {
    /// Set the ambient base directory.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Append a class path directory root.
    pub fn class_path_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.class_path.push(dir.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            class_path: Vec::new(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

#[cfg(feature = "serde")]
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
