//! # Default Resource Loader
//!
//! Prefix-dispatching [`ResourceLoader`] implementation.
//!
//! ## Resolution Order
//!
//! ```text
//! "classpath:<name>"         → ClassPathResource   (always, even if <name> looks like a URL)
//! "file:<...>"               → FileSystemResource  when the URL has a local path
//! "file:", "http:", "https:" → UrlResource         otherwise
//! anything else              → FileSystemResource  under the base directory, if configured
//!                            → ClassPathResource   if a class path is configured
//!                            → FileSystemResource  as given (relative to the working directory)
//! ```
//!
//! Any other scheme-like prefix (`notes:v1.txt`, `C:\data`) is part of a path.
//!
//! Resolution performs no I/O and never fails; see [`ResourceLoader`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    CLASSPATH_URL_PREFIX, ClassPath, ClassPathResource, FileSystemResource, HttpClient,
    LoaderConfig, ResourceHandle, ResourceLoader, UrlResource, Url,
};

/// The standard [`ResourceLoader`].
///
/// Cheap to share: wrap in an [`Arc`] and hand out clones, or borrow it.
///
/// # Example
///
/// ```rust
/// use resource_loader::{DefaultResourceLoader, Resource, ResourceHandle, ResourceLoader};
///
/// let loader = DefaultResourceLoader::new().with_base_dir("/srv/app");
///
/// let rel = loader.get_resource("relative/path.txt");
/// assert_eq!(rel.description(), "file [/srv/app/relative/path.txt]");
///
/// let abs = loader.get_resource("file:/tmp/x.txt");
/// assert_eq!(abs.file()?, std::path::PathBuf::from("/tmp/x.txt"));
///
/// let remote = loader.get_resource("https://example.com/a.json");
/// assert!(matches!(remote, ResourceHandle::Url(_)));
/// # Ok::<(), resource_loader::ResourceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DefaultResourceLoader {
    base_dir: Option<PathBuf>,
    class_path: Arc<ClassPath>,
    http: HttpClient,
}

impl DefaultResourceLoader {
    /// A loader with no base directory and no class path.
    pub fn new() -> Self {
        Self {
            base_dir: None,
            class_path: Arc::new(ClassPath::new()),
            http: HttpClient::default(),
        }
    }

    /// Build a loader from configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        let class_path = config
            .class_path
            .into_iter()
            .fold(ClassPath::new(), |cp, dir| cp.with_directory(dir));
        Self {
            base_dir: config.base_dir,
            class_path: Arc::new(class_path),
            http: HttpClient::new(config.http_timeout),
        }
    }

    /// Replace the lookup context.
    pub fn with_class_path(mut self, class_path: ClassPath) -> Self {
        self.class_path = Arc::new(class_path);
        self
    }

    /// Set the ambient base directory for unqualified locations.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// The ambient base directory, if any.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// The HTTP client shared by every URL resource this loader creates.
    pub fn http_client(&self) -> &HttpClient {
        &self.http
    }

    fn has_class_path(&self) -> bool {
        !self.class_path.is_empty()
    }

    /// Resolve a location that carries no recognized prefix or scheme.
    fn resource_by_path(&self, location: &str) -> ResourceHandle {
        if let Some(base) = &self.base_dir {
            let relative = location.trim_start_matches(['/', '\\']);
            tracing::debug!(location, base = %base.display(), "resolving against base directory");
            return FileSystemResource::new(base.join(relative)).into();
        }
        if self.has_class_path() {
            tracing::debug!(location, "no base directory, resolving via class path");
            return ClassPathResource::new(location, Arc::clone(&self.class_path)).into();
        }
        tracing::debug!(location, "no base directory or class path, using path as given");
        FileSystemResource::new(location).into()
    }
}

impl Default for DefaultResourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLoader for DefaultResourceLoader {
    fn get_resource(&self, location: &str) -> ResourceHandle {
        if let Some(name) = location.strip_prefix(CLASSPATH_URL_PREFIX) {
            tracing::debug!(location, "resolving via class path");
            return ClassPathResource::new(name, Arc::clone(&self.class_path)).into();
        }

        if let Some(url) = parse_url(location) {
            if url.scheme() == "file" {
                if let Ok(path) = url.to_file_path() {
                    tracing::debug!(location, "resolving file URL to a file resource");
                    return FileSystemResource::new(path).into();
                }
            }
            tracing::debug!(location, "resolving as URL");
            return UrlResource::with_client(url, self.http.clone()).into();
        }

        self.resource_by_path(location)
    }

    fn lookup_context(&self) -> Option<&ClassPath> {
        self.has_class_path().then_some(&*self.class_path)
    }
}

/// URL schemes the loader dispatches to URL handling.
const URL_SCHEMES: &[&str] = &["file", "http", "https"];

/// Parse `location` as a URL with a recognized scheme.
///
/// Unrecognized schemes fall through to path handling, so drive paths and
/// file names containing a colon stay paths.
fn parse_url(location: &str) -> Option<Url> {
    Url::parse(location)
        .ok()
        .filter(|url| URL_SCHEMES.contains(&url.scheme()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmbeddedAssets, Resource, ResourceKind};

    fn embedded_loader() -> DefaultResourceLoader {
        DefaultResourceLoader::new().with_class_path(ClassPath::new().with_embedded(
            EmbeddedAssets::new("test").with_static("config/app.yaml", b"app: true\n"),
        ))
    }

    #[test]
    fn classpath_prefix_wins() {
        let loader = embedded_loader();
        let r = loader.get_resource("classpath:config/app.yaml");
        assert_eq!(r.kind(), ResourceKind::ClassPath);
        assert!(r.exists());
    }

    #[test]
    fn classpath_prefix_wins_over_url_syntax() {
        let loader = embedded_loader();
        let r = loader.get_resource("classpath:https://example.com/x");
        assert_eq!(r.kind(), ResourceKind::ClassPath);
        assert!(!r.exists());
    }

    #[test]
    fn classpath_without_context_is_absent() {
        let loader = DefaultResourceLoader::new();
        let r = loader.get_resource("classpath:config/app.yaml");
        assert_eq!(r.kind(), ResourceKind::ClassPath);
        assert!(!r.exists());
        assert!(loader.lookup_context().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn file_url_becomes_file_resource() {
        let r = DefaultResourceLoader::new().get_resource("file:/tmp/x.txt");
        assert!(matches!(r, ResourceHandle::File(_)));
        assert_eq!(r.file().unwrap(), PathBuf::from("/tmp/x.txt"));
    }

    #[test]
    fn http_url_becomes_url_resource() {
        let r = DefaultResourceLoader::new().get_resource("https://example.com/a.json");
        assert!(matches!(r, ResourceHandle::Url(_)));
        assert!(r.url().is_ok());
        assert!(r.file().is_err());
    }

    #[test]
    fn clones_share_http_client() {
        let loader = DefaultResourceLoader::new();
        let clone = loader.clone();
        assert!(loader.http_client().same_client(clone.http_client()));
    }

    #[test]
    fn relative_path_uses_base_dir() {
        let loader = DefaultResourceLoader::new().with_base_dir("/srv/app");
        let r = loader.get_resource("relative/path.txt");
        assert_eq!(r.file().unwrap(), PathBuf::from("/srv/app/relative/path.txt"));

        let rooted = loader.get_resource("/conf/app.toml");
        assert_eq!(rooted.file().unwrap(), PathBuf::from("/srv/app/conf/app.toml"));
    }

    #[test]
    fn relative_path_without_base_uses_class_path() {
        let loader = embedded_loader();
        let r = loader.get_resource("config/app.yaml");
        assert_eq!(r.kind(), ResourceKind::ClassPath);
        assert!(r.exists());
    }

    #[test]
    fn relative_path_without_base_or_class_path_is_kept() {
        let r = DefaultResourceLoader::new().get_resource("data/x.bin");
        assert!(matches!(r, ResourceHandle::File(_)));
        assert_eq!(r.file().unwrap(), PathBuf::from("data/x.bin"));
    }

    #[test]
    fn only_recognized_schemes_are_urls() {
        assert!(parse_url("C:/data/x.bin").is_none());
        assert!(parse_url("notes:v1.txt").is_none());
        assert!(parse_url("mailto:nobody@example.com").is_none());
        assert!(parse_url("file:/x").is_some());
        assert!(parse_url("HTTPS://example.com/x").is_some());
        assert!(parse_url("relative/x").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn colon_file_name_resolves_under_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes:v1.txt"), "v1").unwrap();

        let loader = DefaultResourceLoader::new().with_base_dir(dir.path());
        let r = loader.get_resource("notes:v1.txt");
        assert!(matches!(r, ResourceHandle::File(_)));
        assert!(r.exists());
        assert_eq!(r.file().unwrap(), dir.path().join("notes:v1.txt"));
    }

    #[test]
    fn config_builds_class_path_and_base() {
        let config = LoaderConfig::default()
            .base_dir("/srv/app")
            .class_path_dir("/srv/app/assets");
        let loader = DefaultResourceLoader::with_config(config);
        assert_eq!(loader.base_dir(), Some(Path::new("/srv/app")));
        assert_eq!(loader.lookup_context().map(|cp| cp.roots().len()), Some(1));
    }

    #[test]
    fn loader_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DefaultResourceLoader>();
    }
}
