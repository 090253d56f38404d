//! Error types for resource resolution and access.

use std::fmt;

/// Coarse failure category of a [`ResourceError`].
///
/// Callers that only care about *why* something failed, not the exact
/// context, match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The backend confirmed the resource is absent.
    NotFound,
    /// The resource has no URL/URI form.
    UnresolvableLocator,
    /// Relative-path composition failed, a length or timestamp could not be
    /// determined, or the operation is unsupported by this backend kind.
    Resolution,
    /// Reading an existing resource failed.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::UnresolvableLocator => "unresolvable locator",
            ErrorKind::Resolution => "resolution",
            ErrorKind::Io => "io",
        };
        f.write_str(name)
    }
}

/// Resource error type.
///
/// Every variant carries the description of the resource it concerns
/// (see [`Resource::description`](crate::Resource::description)).
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use resource_loader::{ErrorKind, ResourceError};
///
/// let err = ResourceError::NotFound { description: "file [/missing]".into() };
/// assert_eq!(err.to_string(), "not found: file [/missing]");
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The underlying resource does not exist.
    #[error("not found: {description}")]
    NotFound {
        /// Description of the missing resource.
        description: String,
    },

    /// The resource cannot be expressed in the requested addressable form.
    #[error("{description} cannot be resolved to {form}")]
    UnresolvableLocator {
        /// Description of the resource.
        description: String,
        /// The form that was requested (`"URL"`, `"file path"`, ...).
        form: &'static str,
    },

    /// A relative path, length, or timestamp could not be determined.
    #[error("cannot resolve {description}: {reason}")]
    Resolution {
        /// Description of the resource.
        description: String,
        /// What went wrong.
        reason: String,
    },

    /// The backend does not support this operation.
    #[error("{operation} not supported by {description}")]
    NotSupported {
        /// The unsupported operation.
        operation: &'static str,
        /// Description of the resource.
        description: String,
    },

    /// A single-use stream was requested a second time.
    #[error("stream already consumed: {description}")]
    AlreadyConsumed {
        /// Description of the resource.
        description: String,
    },

    /// I/O error with context.
    #[error("{operation} failed for {description}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// Description of the resource.
        description: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport error.
    #[error("http request failed for {description}: {source}")]
    Http {
        /// Description of the resource.
        description: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },
}

impl ResourceError {
    /// The failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResourceError::NotFound { .. } => ErrorKind::NotFound,
            ResourceError::UnresolvableLocator { .. } => ErrorKind::UnresolvableLocator,
            ResourceError::Resolution { .. } | ResourceError::NotSupported { .. } => {
                ErrorKind::Resolution
            }
            ResourceError::AlreadyConsumed { .. }
            | ResourceError::Io { .. }
            | ResourceError::Http { .. } => ErrorKind::Io,
        }
    }

    /// Wrap an I/O error raised while performing `operation` on a resource.
    ///
    /// `NotFound` I/O errors become [`ResourceError::NotFound`] so callers
    /// see the backend-confirmed absence rather than a transport failure.
    pub(crate) fn io(operation: &'static str, description: String, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ResourceError::NotFound { description }
        } else {
            ResourceError::Io {
                operation,
                description,
                source,
            }
        }
    }

    pub(crate) fn resolution(description: String, reason: impl Into<String>) -> Self {
        ResourceError::Resolution {
            description,
            reason: reason.into(),
        }
    }
}
