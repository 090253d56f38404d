//! # resource-loader
//!
//! Uniform **resource descriptors** and a **prefix-dispatching loader**.
//!
//! A [`Resource`] is "a readable thing", whatever backs it: a local file, an
//! asset packaged with the application (the *class path*), a URL, an
//! in-memory buffer, or an already-open stream. A [`ResourceLoader`] turns a
//! location string into such a handle.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_loader::{
//!     ClassPath, DefaultResourceLoader, EmbeddedAssets, Resource, ResourceExt, ResourceLoader,
//! };
//!
//! let loader = DefaultResourceLoader::new().with_class_path(
//!     ClassPath::new()
//!         .with_embedded(EmbeddedAssets::new("builtin").with_static("config/app.yaml", b"port: 8080\n")),
//! );
//!
//! let config = loader.get_resource("classpath:config/app.yaml");
//! assert!(config.exists());
//! assert_eq!(config.read_to_string()?, "port: 8080\n");
//!
//! // Handles are lazy: nothing is checked until asked.
//! let missing = loader.get_resource("classpath:config/missing.yaml");
//! assert!(!missing.exists());
//! # Ok::<(), resource_loader::ResourceError>(())
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Resource`] | Capability contract: existence, streams, metadata, relative addressing |
//! | [`ResourceLoader`] | Location string → handle |
//! | [`DefaultResourceLoader`] | Standard prefix-dispatch loader |
//! | [`ResourceHandle`] | Closed enum over the five backends |
//! | [`ClassPath`] | Lookup context for `classpath:` names |
//! | [`ResourceError`] | Error type with resource context |
//!
//! ## Location Syntax
//!
//! | Location | Handle |
//! |----------|--------|
//! | `classpath:config/app.yaml` | [`ClassPathResource`] |
//! | `file:/tmp/x.txt` | [`FileSystemResource`] |
//! | `https://example.com/a.json` | [`UrlResource`] |
//! | `relative/path.txt` | [`FileSystemResource`] under the base directory |
//!
//! See [`DefaultResourceLoader`] for the full rule, including the fallbacks
//! when no base directory is configured.
//!
//! ---
//!
//! ## Error Handling
//!
//! Resolution never fails. Failures surface from the capability method that
//! needed the backend, and every error names the resource:
//!
//! ```rust
//! use resource_loader::{DefaultResourceLoader, ErrorKind, Resource, ResourceLoader};
//!
//! let loader = DefaultResourceLoader::new();
//! let remote = loader.get_resource("https://example.com/a.json");
//! let err = remote.file().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnresolvableLocator);
//! ```
//!
//! Treat `exists() == false` as the normal "not found" signal.
//!
//! ---
//!
//! ## Thread Safety
//!
//! Loaders and handles are `Send + Sync` and immutable. The only exception to
//! free sharing is [`InputStreamResource`]: it can be read exactly once.
//! Opening streams blocks on I/O.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | [`LoaderConfig`] (de)serialization and `ResourceExtJson::read_json` |

// Private modules
mod backends;
mod class_path;
mod config;
mod error;
mod ext;
mod handle;
mod http;
mod loader;
mod traits;
mod types;

pub mod path_utils;

// Public re-exports - error types
pub use error::{ErrorKind, ResourceError};

// Public re-exports - core types
pub use types::{ByteChannel, ByteStream, ResourceKind};

/// URL type used for every addressable locator.
pub use reqwest::Url;

// Public re-exports - contracts
pub use traits::{CLASSPATH_URL_PREFIX, Resource, ResourceLoader};

// Public re-exports - backends
pub use backends::{
    ByteArrayResource, ClassPathResource, FileSystemResource, InputStreamResource, UrlResource,
};
pub use handle::ResourceHandle;

// Public re-exports - lookup context and loading
pub use class_path::{ClassPath, ClassPathEntry, ClassPathRoot, EmbeddedAssets};
pub use config::LoaderConfig;
pub use http::{DEFAULT_HTTP_TIMEOUT, HttpClient};
pub use loader::DefaultResourceLoader;

// Public re-exports - infrastructure
pub use ext::ResourceExt;

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::ResourceExtJson;
