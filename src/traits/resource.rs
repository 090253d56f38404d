//! The resource capability contract.

use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::time::SystemTime;

use crate::{ByteChannel, ByteStream, ResourceError, ResourceHandle, ResourceKind, Url};

/// A descriptor for a readable piece of content.
///
/// A handle is a lazy descriptor, not a proof of existence: building one
/// performs no I/O. Backend failures surface only from the method that needed
/// the backend.
///
/// # Re-reading
///
/// Unless [`is_open`](Self::is_open) returns `true`, every call to
/// [`open_stream`](Self::open_stream) opens a fresh, independent stream over
/// the same content. A handle with `is_open() == true` wraps one already-open
/// stream: it hands that stream out once and refuses every later request with
/// [`ResourceError::AlreadyConsumed`].
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Handles are immutable, so the
/// non-stream methods can be called from any number of threads. Stream
/// opening blocks on I/O and should stay off latency-sensitive threads.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn Resource`.
///
/// # Example
///
/// ```rust
/// use resource_loader::{ByteArrayResource, Resource};
/// use std::io::Read;
///
/// let resource = ByteArrayResource::new(b"hello".to_vec());
/// assert!(resource.exists());
///
/// let mut text = String::new();
/// resource.open_stream()?.read_to_string(&mut text)?;
/// assert_eq!(text, "hello");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Resource: Send + Sync {
    /// Check whether the resource exists in physical form right now.
    ///
    /// Backend errors collapse to `false`.
    fn exists(&self) -> bool;

    /// Whether non-empty content can be read via [`open_stream`](Self::open_stream).
    ///
    /// `true` implies [`exists`](Self::exists). Backends return `false` for
    /// entries that exist but carry no content of their own, such as
    /// directories. Reading may still fail when attempted.
    fn is_readable(&self) -> bool {
        self.exists()
    }

    /// Whether this handle wraps an already-open, single-use stream.
    fn is_open(&self) -> bool {
        false
    }

    /// Hint that the resource lives in a file system.
    ///
    /// `true` strongly suggests, but does not guarantee, that
    /// [`file`](Self::file) succeeds.
    fn is_file(&self) -> bool {
        false
    }

    /// The URL of this resource.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::UnresolvableLocator`] if the backend has no URL form
    fn url(&self) -> Result<Url, ResourceError>;

    /// The URI of this resource.
    ///
    /// Identical to [`url`](Self::url) for the built-in backends.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::UnresolvableLocator`] if the backend has no URI form
    fn uri(&self) -> Result<Url, ResourceError> {
        self.url()
    }

    /// A local file system path for this resource.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if the resource has no file system path
    /// - [`ResourceError::UnresolvableLocator`] for remote URLs
    fn file(&self) -> Result<PathBuf, ResourceError> {
        Err(ResourceError::NotFound {
            description: self.description(),
        })
    }

    /// Open a readable stream over the content.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if the resource does not exist
    /// - [`ResourceError::Io`] / [`ResourceError::Http`] if reading fails
    /// - [`ResourceError::AlreadyConsumed`] on a second call for an open stream
    fn open_stream(&self) -> Result<ByteStream, ResourceError>;

    /// Open a buffered channel over the content.
    ///
    /// Each call is expected to create a fresh channel. The default wraps
    /// [`open_stream`](Self::open_stream) in a [`BufReader`].
    ///
    /// # Errors
    ///
    /// Same as [`open_stream`](Self::open_stream).
    fn readable_channel(&self) -> Result<ByteChannel, ResourceError> {
        Ok(Box::new(BufReader::new(self.open_stream()?)))
    }

    /// Length of the content in bytes.
    ///
    /// The default reads the whole stream and counts. Backends that know
    /// their length override this.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if the resource does not exist
    /// - [`ResourceError::Resolution`] if the length cannot be determined
    fn content_length(&self) -> Result<u64, ResourceError> {
        let mut stream = self.open_stream()?;
        std::io::copy(&mut stream, &mut std::io::sink())
            .map_err(|e| ResourceError::io("content_length", self.description(), e))
    }

    /// Last-modified timestamp of the content.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if the resource does not exist
    /// - [`ResourceError::Resolution`] if no timestamp is available
    fn last_modified(&self) -> Result<SystemTime, ResourceError>;

    /// Create a resource addressed relative to this one.
    ///
    /// `.` and `..` are normalized, and a `relative_path` starting with `/`
    /// replaces this resource's path entirely.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotSupported`] if the backend has no relative addressing
    /// - [`ResourceError::Resolution`] if the combined path is invalid
    fn create_relative(&self, relative_path: &str) -> Result<ResourceHandle, ResourceError> {
        let _ = relative_path;
        Err(ResourceError::NotSupported {
            operation: "create_relative",
            description: self.description(),
        })
    }

    /// Last path segment, e.g. `"app.yaml"`; `None` if the backend has no
    /// path concept.
    fn filename(&self) -> Option<String> {
        None
    }

    /// Stable diagnostic string naming the backend kind and locator,
    /// e.g. `"class path resource [config/app.yaml]"`.
    fn description(&self) -> String;

    /// The backend this handle is bound to.
    fn kind(&self) -> ResourceKind;
}

/// Read a stream to its end, mapping failures to the resource's description.
pub(crate) fn read_all(
    mut stream: impl Read,
    description: impl FnOnce() -> String,
) -> Result<Vec<u8>, ResourceError> {
    let mut buf = Vec::new();
    stream
        .read_to_end(&mut buf)
        .map_err(|e| ResourceError::io("read", description(), e))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Minimal backend relying on every default.
    struct Fixed(&'static [u8]);

    impl Resource for Fixed {
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
            Ok(Box::new(Cursor::new(self.0)))
        }

        fn last_modified(&self) -> Result<SystemTime, ResourceError> {
            Err(ResourceError::resolution(self.description(), "no timestamp"))
        }

        fn description(&self) -> String {
            "fixed resource".into()
        }

        fn kind(&self) -> ResourceKind {
            ResourceKind::ByteArray
        }
    }

    #[test]
    fn resource_is_object_safe() {
        fn _check(_: &dyn Resource) {}
    }

    #[test]
    fn defaults_are_conservative() {
        let r = Fixed(b"abc");
        assert!(r.is_readable());
        assert!(!r.is_open());
        assert!(!r.is_file());
        assert!(r.filename().is_none());
    }

    #[test]
    fn default_uri_follows_url() {
        let r = Fixed(b"abc");
        assert!(matches!(
            r.uri(),
            Err(ResourceError::UnresolvableLocator { .. })
        ));
    }

    #[test]
    fn default_file_is_not_found() {
        let r = Fixed(b"abc");
        assert!(matches!(r.file(), Err(ResourceError::NotFound { .. })));
    }

    #[test]
    fn default_content_length_counts_stream() {
        let r = Fixed(b"abcdef");
        assert_eq!(r.content_length().unwrap(), 6);
    }

    #[test]
    fn default_channel_wraps_stream() {
        use std::io::BufRead;

        let r = Fixed(b"line one\nline two\n");
        let lines: Vec<String> = r
            .readable_channel()
            .unwrap()
            .lines()
            .map(Result::unwrap)
            .collect();
        assert_eq!(lines, vec!["line one", "line two"]);
    }

    #[test]
    fn default_create_relative_is_not_supported() {
        let r = Fixed(b"abc");
        let err = r.create_relative("x").unwrap_err();
        assert!(matches!(err, ResourceError::NotSupported { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::Resolution);
    }

    #[test]
    fn read_all_collects() {
        let data = read_all(Cursor::new(b"xyz"), || "t".into()).unwrap();
        assert_eq!(data, b"xyz");
    }
}
