//! The closed set of resource kinds a loader can hand out.

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::{
    ByteArrayResource, ByteChannel, ByteStream, ClassPathResource, FileSystemResource,
    InputStreamResource, Resource, ResourceError, ResourceKind, UrlResource, Url,
};

/// A resource handle of any built-in kind.
///
/// This is what [`ResourceLoader::get_resource`](crate::ResourceLoader::get_resource)
/// and [`Resource::create_relative`] return. The set of variants is closed so
/// the loader's dispatch rule stays exhaustive; every [`Resource`] method is
/// forwarded to the wrapped backend.
///
/// # Example
///
/// ```rust
/// use resource_loader::{FileSystemResource, Resource, ResourceHandle, ResourceKind};
///
/// let handle = ResourceHandle::from(FileSystemResource::new("/etc/hosts"));
/// assert_eq!(handle.kind(), ResourceKind::File);
/// assert!(matches!(handle, ResourceHandle::File(_)));
/// ```
#[derive(Debug)]
pub enum ResourceHandle {
    /// A local file system path.
    File(FileSystemResource),
    /// A name in the class path.
    ClassPath(ClassPathResource),
    /// A URL.
    Url(UrlResource),
    /// An in-memory buffer.
    ByteArray(ByteArrayResource),
    /// An already-open, single-use stream.
    InputStream(InputStreamResource),
}

macro_rules! forward {
    ($self:ident, $r:ident => $body:expr) => {
        match $self {
            ResourceHandle::File($r) => $body,
            ResourceHandle::ClassPath($r) => $body,
            ResourceHandle::Url($r) => $body,
            ResourceHandle::ByteArray($r) => $body,
            ResourceHandle::InputStream($r) => $body,
        }
    };
}

impl ResourceHandle {
    /// Borrow the wrapped backend as a trait object.
    pub fn as_resource(&self) -> &dyn Resource {
        forward!(self, r => r as &dyn Resource)
    }
}

impl Resource for ResourceHandle {
    fn exists(&self) -> bool {
        forward!(self, r => r.exists())
    }

    fn is_readable(&self) -> bool {
        forward!(self, r => r.is_readable())
    }

    fn is_open(&self) -> bool {
        forward!(self, r => r.is_open())
    }

    fn is_file(&self) -> bool {
        forward!(self, r => r.is_file())
    }

    fn url(&self) -> Result<Url, ResourceError> {
        forward!(self, r => r.url())
    }

    fn uri(&self) -> Result<Url, ResourceError> {
        forward!(self, r => r.uri())
    }

    fn file(&self) -> Result<PathBuf, ResourceError> {
        forward!(self, r => r.file())
    }

    fn open_stream(&self) -> Result<ByteStream, ResourceError> {
        forward!(self, r => r.open_stream())
    }

    fn readable_channel(&self) -> Result<ByteChannel, ResourceError> {
        forward!(self, r => r.readable_channel())
    }

    fn content_length(&self) -> Result<u64, ResourceError> {
        forward!(self, r => r.content_length())
    }

    fn last_modified(&self) -> Result<SystemTime, ResourceError> {
        forward!(self, r => r.last_modified())
    }

    fn create_relative(&self, relative_path: &str) -> Result<ResourceHandle, ResourceError> {
        forward!(self, r => r.create_relative(relative_path))
    }

    fn filename(&self) -> Option<String> {
        forward!(self, r => r.filename())
    }

    fn description(&self) -> String {
        forward!(self, r => r.description())
    }

    fn kind(&self) -> ResourceKind {
        forward!(self, r => r.kind())
    }
}

/// Same-kind handles compare by locator; stream handles never compare equal.
impl PartialEq for ResourceHandle {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ResourceHandle::File(a), ResourceHandle::File(b)) => a == b,
            (ResourceHandle::ClassPath(a), ResourceHandle::ClassPath(b)) => a == b,
            (ResourceHandle::Url(a), ResourceHandle::Url(b)) => a == b,
            (ResourceHandle::ByteArray(a), ResourceHandle::ByteArray(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl From<FileSystemResource> for ResourceHandle {
    fn from(resource: FileSystemResource) -> Self {
        ResourceHandle::File(resource)
    }
}

impl From<ClassPathResource> for ResourceHandle {
    fn from(resource: ClassPathResource) -> Self {
        ResourceHandle::ClassPath(resource)
    }
}

impl From<UrlResource> for ResourceHandle {
    fn from(resource: UrlResource) -> Self {
        ResourceHandle::Url(resource)
    }
}

impl From<ByteArrayResource> for ResourceHandle {
    fn from(resource: ByteArrayResource) -> Self {
        ResourceHandle::ByteArray(resource)
    }
}

impl From<InputStreamResource> for ResourceHandle {
    fn from(resource: InputStreamResource) -> Self {
        ResourceHandle::InputStream(resource)
    }
}
