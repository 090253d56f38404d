//! Resources wrapping an already-open stream.

use std::fmt;
use std::io::Read;
use std::sync::Mutex;
use std::time::SystemTime;

use crate::{ByteStream, Resource, ResourceError, ResourceKind, Url};

/// A resource over a single, already-open reader.
///
/// Unlike every other backend, this one can be read exactly once: the first
/// [`open_stream`](Resource::open_stream) hands out the wrapped reader and
/// every later call fails with [`ResourceError::AlreadyConsumed`]. The
/// consumer owns the reader from then on and closes it by dropping it.
///
/// Length and modification time are never derived from the stream, since
/// that would consume it.
///
/// # Example
///
/// ```rust
/// use resource_loader::{InputStreamResource, Resource, ResourceError};
/// use std::io::{Cursor, Read};
///
/// let once = InputStreamResource::new(Cursor::new(b"payload".to_vec()));
/// assert!(once.is_open());
///
/// let mut body = String::new();
/// once.open_stream()?.read_to_string(&mut body)?;
/// assert_eq!(body, "payload");
///
/// assert!(matches!(once.open_stream(), Err(ResourceError::AlreadyConsumed { .. })));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct InputStreamResource {
    stream: Mutex<Option<ByteStream>>,
    label: String,
}

impl InputStreamResource {
    /// Wrap `reader`.
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        Self::with_label(reader, "resource loaded through InputStream")
    }

    /// Wrap `reader`, naming its origin in the description.
    pub fn with_label(reader: impl Read + Send + 'static, label: impl Into<String>) -> Self {
        Self {
            stream: Mutex::new(Some(Box::new(reader))),
            label: label.into(),
        }
    }

    /// Returns `true` once the wrapped reader has been handed out.
    pub fn is_consumed(&self) -> bool {
        self.stream
            .lock()
            .map(|slot| slot.is_none())
            .unwrap_or(true)
    }
}

impl Resource for InputStreamResource {
    fn exists(&self) -> bool {
        true
    }

    fn is_open(&self) -> bool {
        true
    }

    fn url(&self) -> Result<Url, ResourceError> {
        Err(ResourceError::UnresolvableLocator {
            description: self.description(),
            form: "URL",
        })
    }

    fn open_stream(&self) -> Result<ByteStream, ResourceError> {
        let taken = match self.stream.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        taken.ok_or_else(|| ResourceError::AlreadyConsumed {
            description: self.description(),
        })
    }

    fn content_length(&self) -> Result<u64, ResourceError> {
        Err(ResourceError::resolution(
            self.description(),
            "length of an open stream is unknown without consuming it",
        ))
    }

    fn last_modified(&self) -> Result<SystemTime, ResourceError> {
        Err(ResourceError::resolution(
            self.description(),
            "an open stream has no modification time",
        ))
    }

    fn description(&self) -> String {
        format!("InputStream resource [{}]", self.label)
    }

    fn kind(&self) -> ResourceKind {
        ResourceKind::InputStream
    }
}

impl fmt::Debug for InputStreamResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputStreamResource")
            .field("label", &self.label)
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

impl fmt::Display for InputStreamResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
