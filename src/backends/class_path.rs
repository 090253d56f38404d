//! Resources addressed by name in a [`ClassPath`].

use std::fmt;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::class_path::{ClassPathEntry, normalize_name};
use crate::path_utils::{apply_relative_path, filename};
use crate::{ByteStream, ClassPath, Resource, ResourceError, ResourceHandle, ResourceKind, Url};

/// A resource named relative to the roots of a [`ClassPath`].
///
/// The name is normalized on construction: separators unified, `.`/`..`
/// folded, and a leading `/` dropped, so `"/config/app.yaml"` and
/// `"config/app.yaml"` are the same resource. Each capability call performs a
/// fresh lookup, so the answer tracks the roots at call time.
///
/// # Example
///
/// ```rust
/// use resource_loader::{ClassPath, ClassPathResource, EmbeddedAssets, Resource};
/// use std::sync::Arc;
///
/// let cp = Arc::new(ClassPath::new().with_embedded(
///     EmbeddedAssets::new("builtin").with_static("config/app.yaml", b"port: 80\n"),
/// ));
///
/// let app = ClassPathResource::new("/config/app.yaml", Arc::clone(&cp));
/// assert!(app.exists());
/// assert_eq!(app.content_length()?, 9);
///
/// let sibling = app.create_relative("db.yaml")?;
/// assert_eq!(sibling.description(), "class path resource [config/db.yaml]");
/// assert!(!sibling.exists());
/// # Ok::<(), resource_loader::ResourceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClassPathResource {
    name: String,
    class_path: Arc<ClassPath>,
}

impl ClassPathResource {
    /// Create a handle for `name` in `class_path`.
    pub fn new(name: &str, class_path: Arc<ClassPath>) -> Self {
        Self {
            name: normalize_name(name),
            class_path,
        }
    }

    /// The normalized name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lookup context this resource resolves against.
    pub fn class_path(&self) -> &Arc<ClassPath> {
        &self.class_path
    }

    fn resolve(&self) -> Result<ClassPathEntry, ResourceError> {
        self.class_path
            .lookup(&self.name)
            .ok_or_else(|| ResourceError::NotFound {
                description: self.description(),
            })
    }

    fn file_metadata(
        &self,
        path: &Path,
        operation: &'static str,
    ) -> Result<std::fs::Metadata, ResourceError> {
        std::fs::metadata(path).map_err(|e| ResourceError::io(operation, self.description(), e))
    }
}

impl Resource for ClassPathResource {
    fn exists(&self) -> bool {
        self.class_path.lookup(&self.name).is_some()
    }

    /// `false` for directories found under a directory root.
    fn is_readable(&self) -> bool {
        match self.class_path.lookup(&self.name) {
            Some(ClassPathEntry::File(path)) => std::fs::metadata(path)
                .map(|m| !m.is_dir())
                .unwrap_or(false),
            Some(ClassPathEntry::Embedded(_)) => true,
            None => false,
        }
    }

    fn is_file(&self) -> bool {
        matches!(
            self.class_path.lookup(&self.name),
            Some(ClassPathEntry::File(_))
        )
    }

    /// The `file://` URL of a hit under a directory root.
    ///
    /// Embedded entries and missing names have no URL.
    fn url(&self) -> Result<Url, ResourceError> {
        let unresolvable = || ResourceError::UnresolvableLocator {
            description: self.description(),
            form: "URL",
        };
        match self.class_path.lookup(&self.name) {
            Some(ClassPathEntry::File(path)) => {
                let absolute = std::path::absolute(&path).map_err(|_| unresolvable())?;
                Url::from_file_path(absolute).map_err(|()| unresolvable())
            }
            _ => Err(unresolvable()),
        }
    }

    fn file(&self) -> Result<PathBuf, ResourceError> {
        match self.resolve()? {
            ClassPathEntry::File(path) => Ok(path),
            ClassPathEntry::Embedded(_) => Err(ResourceError::NotFound {
                description: format!("{} (embedded, not in a file system)", self.description()),
            }),
        }
    }

    fn open_stream(&self) -> Result<ByteStream, ResourceError> {
        match self.resolve()? {
            ClassPathEntry::File(path) => {
                tracing::trace!(name = %self.name, path = %path.display(), "opening class path file");
                if self.file_metadata(&path, "open")?.is_dir() {
                    return Err(ResourceError::Io {
                        operation: "open",
                        description: self.description(),
                        source: std::io::Error::new(
                            std::io::ErrorKind::IsADirectory,
                            "is a directory",
                        ),
                    });
                }
                let file = File::open(&path)
                    .map_err(|e| ResourceError::io("open", self.description(), e))?;
                Ok(Box::new(file))
            }
            ClassPathEntry::Embedded(data) => {
                tracing::trace!(name = %self.name, "opening embedded asset");
                Ok(Box::new(Cursor::new(data)))
            }
        }
    }

    fn content_length(&self) -> Result<u64, ResourceError> {
        match self.resolve()? {
            ClassPathEntry::File(path) => Ok(self.file_metadata(&path, "content_length")?.len()),
            ClassPathEntry::Embedded(data) => Ok(data.len() as u64),
        }
    }

    fn last_modified(&self) -> Result<SystemTime, ResourceError> {
        match self.resolve()? {
            ClassPathEntry::File(path) => self
                .file_metadata(&path, "last_modified")?
                .modified()
                .map_err(|e| ResourceError::resolution(self.description(), e.to_string())),
            ClassPathEntry::Embedded(_) => Err(ResourceError::resolution(
                self.description(),
                "embedded assets carry no modification time",
            )),
        }
    }

    fn create_relative(&self, relative_path: &str) -> Result<ResourceHandle, ResourceError> {
        let resolved = apply_relative_path(&self.name, relative_path)
            .ok_or_else(|| ResourceError::resolution(self.description(), "empty relative path"))?;
        let name = normalize_name(&resolved);
        if name == ".." || name.starts_with("../") {
            return Err(ResourceError::resolution(
                self.description(),
                format!("'{relative_path}' escapes the class path root"),
            ));
        }
        Ok(ClassPathResource {
            name,
            class_path: Arc::clone(&self.class_path),
        }
        .into())
    }

    fn filename(&self) -> Option<String> {
        filename(&self.name).map(str::to_string)
    }

    fn description(&self) -> String {
        format!("class path resource [{}]", self.name)
    }

    fn kind(&self) -> ResourceKind {
        ResourceKind::ClassPath
    }
}

impl PartialEq for ClassPathResource {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.class_path, &other.class_path)
    }
}

impl Eq for ClassPathResource {}

impl Hash for ClassPathResource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for ClassPathResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
