//! Core types shared by every resource backend.

use std::fmt;
use std::io::{BufRead, Read};

/// A readable byte stream handed out by [`Resource::open_stream`](crate::Resource::open_stream).
///
/// The caller owns the stream; dropping it closes the underlying source.
pub type ByteStream = Box<dyn Read + Send>;

/// A buffered byte channel handed out by
/// [`Resource::readable_channel`](crate::Resource::readable_channel).
pub type ByteChannel = Box<dyn BufRead + Send>;

/// The backend a resource handle is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    /// A path in the local file system.
    File,
    /// A name in the application's packaged assets.
    ClassPath,
    /// A network-addressable URL.
    Url,
    /// An in-memory byte buffer.
    ByteArray,
    /// An already-open, single-use stream.
    InputStream,
}

impl ResourceKind {
    /// Returns `true` for kinds whose content can be read more than once.
    #[inline]
    pub const fn is_rereadable(&self) -> bool {
        !matches!(self, ResourceKind::InputStream)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::File => "file",
            ResourceKind::ClassPath => "class path",
            ResourceKind::Url => "url",
            ResourceKind::ByteArray => "byte array",
            ResourceKind::InputStream => "input stream",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_input_stream_is_single_use() {
        assert!(ResourceKind::File.is_rereadable());
        assert!(ResourceKind::ClassPath.is_rereadable());
        assert!(ResourceKind::Url.is_rereadable());
        assert!(ResourceKind::ByteArray.is_rereadable());
        assert!(!ResourceKind::InputStream.is_rereadable());
    }

    #[test]
    fn kind_display() {
        assert_eq!(ResourceKind::ClassPath.to_string(), "class path");
    }

    #[test]
    fn types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        fn assert_send<T: Send>() {}
        assert_send_sync::<ResourceKind>();
        assert_send::<ByteStream>();
        assert_send::<ByteChannel>();
    }
}
