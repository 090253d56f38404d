//! The resource loading strategy.

use std::sync::Arc;

use crate::{ClassPath, ResourceHandle};

/// Pseudo-URL prefix for loading from the class path: `"classpath:"`.
pub const CLASSPATH_URL_PREFIX: &str = "classpath:";

/// Strategy for turning location strings into resource handles.
///
/// # Contract
///
/// - Fully qualified URLs are supported, e.g. `"file:/tmp/test.dat"`.
/// - Class path pseudo-URLs are supported, e.g. `"classpath:test.dat"`.
/// - Unqualified paths such as `"data/test.dat"` are resolved in an
///   implementation-specific way.
///
/// [`get_resource`](Self::get_resource) is total: it always returns a handle
/// and never fails. The handle does not imply an existing resource; call
/// [`Resource::exists`](crate::Resource::exists) to check.
///
/// # Thread Safety
///
/// Loaders are long-lived and shared; `get_resource` is reentrant.
pub trait ResourceLoader: Send + Sync {
    /// Return a handle for `location`.
    fn get_resource(&self, location: &str) -> ResourceHandle;

    /// The class path this loader resolves `classpath:` names against.
    ///
    /// Exposed so callers needing the namespace directly do not depend on
    /// ambient state. `None` only when no namespace is configured.
    fn lookup_context(&self) -> Option<&ClassPath>;
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for Arc<L> {
    fn get_resource(&self, location: &str) -> ResourceHandle {
        (**self).get_resource(location)
    }

    fn lookup_context(&self) -> Option<&ClassPath> {
        (**self).lookup_context()
    }
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for &L {
    fn get_resource(&self, location: &str) -> ResourceHandle {
        (**self).get_resource(location)
    }

    fn lookup_context(&self) -> Option<&ClassPath> {
        (**self).lookup_context()
    }
}
