//! Resources backed by an in-memory byte buffer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::Cursor;
use std::sync::Arc;
use std::time::SystemTime;

use crate::{ByteChannel, ByteStream, Resource, ResourceError, ResourceKind, Url};

/// A resource over a shared, immutable byte buffer.
///
/// Always exists and can be read any number of times. Useful for content
/// produced at runtime that must be handed to code expecting a [`Resource`].
#[derive(Debug, Clone)]
pub struct ByteArrayResource {
    data: Arc<[u8]>,
    label: String,
}

impl ByteArrayResource {
    /// Wrap `data`.
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self::with_label(data, "resource loaded from byte array")
    }

    /// Wrap `data`, naming its origin in the description.
    pub fn with_label(data: impl Into<Arc<[u8]>>, label: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            label: label.into(),
        }
    }

    /// The wrapped bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Resource for ByteArrayResource {
    fn exists(&self) -> bool {
        true
    }

    fn url(&self) -> Result<Url, ResourceError> {
        Err(ResourceError::UnresolvableLocator {
            description: self.description(),
            form: "URL",
        })
    }

    fn open_stream(&self) -> Result<ByteStream, ResourceError> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.data))))
    }

    /// Hands out a cursor over the shared buffer; no copy, no extra buffering.
    fn readable_channel(&self) -> Result<ByteChannel, ResourceError> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.data))))
    }

    fn content_length(&self) -> Result<u64, ResourceError> {
        Ok(self.data.len() as u64)
    }

    fn last_modified(&self) -> Result<SystemTime, ResourceError> {
        Err(ResourceError::resolution(
            self.description(),
            "in-memory content has no modification time",
        ))
    }

    fn description(&self) -> String {
        format!("byte array resource [{}]", self.label)
    }

    fn kind(&self) -> ResourceKind {
        ResourceKind::ByteArray
    }
}

/// Content equality; the label is diagnostic only.
impl PartialEq for ByteArrayResource {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for ByteArrayResource {}

impl Hash for ByteArrayResource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl fmt::Display for ByteArrayResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
