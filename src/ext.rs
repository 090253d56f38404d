//! # Extension Traits
//!
//! Convenience readers for any resource.
//!
//! ## Overview
//!
//! [`ResourceExt`] provides commonly-needed helpers that are not part of the
//! capability contract. They are default methods with a blanket
//! implementation, so every [`Resource`] gets them for free.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`read_to_vec`](ResourceExt::read_to_vec) | Read the whole content as bytes |
//! | [`read_to_string`](ResourceExt::read_to_string) | Read the whole content as UTF-8 |
//!
//! ## JSON Support (Feature-Gated)
//!
//! With the `serde` feature enabled, [`ResourceExtJson::read_json`] reads and
//! deserializes JSON content.

use crate::traits::read_all;
use crate::{Resource, ResourceError};

/// Extension methods for any resource.
///
/// Each call opens a fresh stream, so for a resource with
/// [`is_open`](Resource::is_open) the first call consumes it.
///
/// # Example
///
/// ```rust
/// use resource_loader::{ByteArrayResource, ResourceExt};
///
/// let r = ByteArrayResource::new(b"hello".to_vec());
/// assert_eq!(r.read_to_string()?, "hello");
/// assert_eq!(r.read_to_vec()?, b"hello");
/// # Ok::<(), resource_loader::ResourceError>(())
/// ```
pub trait ResourceExt: Resource {
    /// Read the entire content as bytes.
    ///
    /// # Errors
    ///
    /// Same as [`Resource::open_stream`], plus [`ResourceError::Io`] if
    /// reading fails midway.
    fn read_to_vec(&self) -> Result<Vec<u8>, ResourceError> {
        read_all(self.open_stream()?, || self.description())
    }

    /// Read the entire content as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Io`] with [`std::io::ErrorKind::InvalidData`] if the
    ///   content is not valid UTF-8
    /// - Other errors from [`read_to_vec`](Self::read_to_vec)
    fn read_to_string(&self) -> Result<String, ResourceError> {
        let bytes = self.read_to_vec()?;
        String::from_utf8(bytes).map_err(|e| ResourceError::Io {
            operation: "read_to_string",
            description: self.description(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }
}

// Blanket implementation - every resource gets ResourceExt for free
impl<R: Resource + ?Sized> ResourceExt for R {}

// =============================================================================
// JSON Support (Feature-Gated)
// =============================================================================

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde::de::DeserializeOwned;

    /// JSON deserialization extension methods.
    ///
    /// Available when the `serde` feature is enabled.
    pub trait ResourceExtJson: Resource {
        /// Read the content and deserialize it as JSON.
        ///
        /// # Errors
        ///
        /// - [`ResourceError::Io`] with [`std::io::ErrorKind::InvalidData`] if
        ///   the content is not valid JSON for `T`
        /// - Other errors from [`Resource::open_stream`]
        fn read_json<T: DeserializeOwned>(&self) -> Result<T, ResourceError> {
            let stream = self.open_stream()?;
            serde_json::from_reader(stream).map_err(|e| ResourceError::Io {
                operation: "read_json",
                description: self.description(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            })
        }
    }

    // Blanket implementation
    impl<R: Resource + ?Sized> ResourceExtJson for R {}
}

#[cfg(feature = "serde")]
pub use json::ResourceExtJson;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteArrayResource, InputStreamResource};
    use std::io::Cursor;

    #[test]
    fn reads_bytes_and_text() {
        let r = ByteArrayResource::new(b"text".to_vec());
        assert_eq!(r.read_to_vec().unwrap(), b"text");
        assert_eq!(r.read_to_string().unwrap(), "text");
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let r = ByteArrayResource::new(vec![0xff, 0xfe]);
        let err = r.read_to_string().unwrap_err();
        match err {
            ResourceError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn open_stream_resource_reads_once() {
        let r = InputStreamResource::new(Cursor::new(b"once".to_vec()));
        assert_eq!(r.read_to_string().unwrap(), "once");
        assert!(matches!(
            r.read_to_vec(),
            Err(ResourceError::AlreadyConsumed { .. })
        ));
    }

    #[test]
    fn available_on_dyn_resource() {
        let r: &dyn Resource = &ByteArrayResource::new(b"dyn".to_vec());
        assert_eq!(r.read_to_string().unwrap(), "dyn");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reads_json() {
        let r = ByteArrayResource::new(br#"{"port": 8080}"#.to_vec());
        let value: serde_json::Value = r.read_json().unwrap();
        assert_eq!(value["port"], 8080);

        let bad = ByteArrayResource::new(b"{".to_vec());
        assert!(bad.read_json::<serde_json::Value>().is_err());
    }
}
