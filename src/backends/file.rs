//! Resources backed by the local file system.

use std::fmt;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::path_utils::{apply_relative_path, clean_path, filename};
use crate::{ByteStream, Resource, ResourceError, ResourceHandle, ResourceKind, Url};

/// A resource at a path in the local file system.
///
/// The path is cleaned lexically on construction (`.`/`..` folded,
/// separators unified); nothing touches the disk until a capability method
/// needs it. Relative paths are resolved by the operating system against the
/// process working directory at I/O time.
///
/// # Example
///
/// ```rust
/// use resource_loader::{FileSystemResource, Resource};
///
/// let config = FileSystemResource::new("/srv/app/conf/../config.toml");
/// assert_eq!(config.path(), "/srv/app/config.toml");
/// assert_eq!(config.filename().as_deref(), Some("config.toml"));
///
/// let data = config.create_relative("data/seed.json")?;
/// assert_eq!(data.description(), "file [/srv/app/data/seed.json]");
/// # Ok::<(), resource_loader::ResourceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileSystemResource {
    path: String,
    file: PathBuf,
}

impl FileSystemResource {
    /// Create a handle for `path`.
    ///
    /// A path that is not valid UTF-8 is kept as given for I/O and is not
    /// cleaned; only its display form in [`path`](Self::path) is lossy.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match path.to_str() {
            Some(text) => {
                let cleaned = clean_path(text);
                Self {
                    file: PathBuf::from(&cleaned),
                    path: cleaned,
                }
            }
            None => Self {
                path: path.to_string_lossy().into_owned(),
                file: path.to_path_buf(),
            },
        }
    }

    /// The cleaned path string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The cleaned path used for I/O.
    pub fn as_path(&self) -> &Path {
        &self.file
    }

    fn metadata(&self, operation: &'static str) -> Result<std::fs::Metadata, ResourceError> {
        std::fs::metadata(&self.file).map_err(|e| ResourceError::io(operation, self.description(), e))
    }
}

impl Resource for FileSystemResource {
    fn exists(&self) -> bool {
        self.file.try_exists().unwrap_or(false)
    }

    /// `false` for directories.
    fn is_readable(&self) -> bool {
        std::fs::metadata(&self.file)
            .map(|m| !m.is_dir())
            .unwrap_or(false)
    }

    fn is_file(&self) -> bool {
        true
    }

    fn url(&self) -> Result<Url, ResourceError> {
        let unresolvable = || ResourceError::UnresolvableLocator {
            description: self.description(),
            form: "URL",
        };
        let absolute = std::path::absolute(&self.file).map_err(|_| unresolvable())?;
        Url::from_file_path(&absolute).map_err(|()| unresolvable())
    }

    fn file(&self) -> Result<PathBuf, ResourceError> {
        Ok(self.file.clone())
    }

    fn open_stream(&self) -> Result<ByteStream, ResourceError> {
        tracing::trace!(path = %self.path, "opening file");
        let file =
            File::open(&self.file).map_err(|e| ResourceError::io("open", self.description(), e))?;
        let is_dir = file
            .metadata()
            .map_err(|e| ResourceError::io("open", self.description(), e))?
            .is_dir();
        if is_dir {
            return Err(ResourceError::Io {
                operation: "open",
                description: self.description(),
                source: std::io::Error::new(std::io::ErrorKind::IsADirectory, "is a directory"),
            });
        }
        Ok(Box::new(file))
    }

    fn content_length(&self) -> Result<u64, ResourceError> {
        Ok(self.metadata("content_length")?.len())
    }

    fn last_modified(&self) -> Result<SystemTime, ResourceError> {
        self.metadata("last_modified")?
            .modified()
            .map_err(|e| ResourceError::resolution(self.description(), e.to_string()))
    }

    fn create_relative(&self, relative_path: &str) -> Result<ResourceHandle, ResourceError> {
        let resolved = apply_relative_path(&self.path, relative_path)
            .ok_or_else(|| ResourceError::resolution(self.description(), "empty relative path"))?;
        Ok(FileSystemResource::new(resolved).into())
    }

    fn filename(&self) -> Option<String> {
        filename(&self.path).map(str::to_string)
    }

    fn description(&self) -> String {
        format!("file [{}]", self.path)
    }

    fn kind(&self) -> ResourceKind {
        ResourceKind::File
    }
}

impl PartialEq for FileSystemResource {
    fn eq(&self, other: &Self) -> bool {
        self.file == other.file
    }
}

impl Eq for FileSystemResource {}

impl Hash for FileSystemResource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.file.hash(state);
    }
}

impl fmt::Display for FileSystemResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read(resource: &FileSystemResource) -> String {
        let mut out = String::new();
        resource
            .open_stream()
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        out
    }

    #[test]
    fn missing_file_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let r = FileSystemResource::new(dir.path().join("missing.txt"));
        assert!(!r.exists());
        assert!(!r.is_readable());
        assert!(matches!(r.open_stream(), Err(ResourceError::NotFound { .. })));
        assert!(matches!(
            r.content_length(),
            Err(ResourceError::NotFound { .. })
        ));
    }

    #[test]
    fn existing_file_reads_repeatedly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "payload").unwrap();

        let r = FileSystemResource::new(&path);
        assert!(r.exists());
        assert!(r.is_readable());
        assert_eq!(read(&r), "payload");
        assert_eq!(read(&r), "payload");
        assert_eq!(r.content_length().unwrap(), 7);
        assert!(r.last_modified().is_ok());
    }

    #[test]
    fn directory_exists_but_is_not_readable() {
        let dir = tempfile::tempdir().unwrap();
        let r = FileSystemResource::new(dir.path());
        assert!(r.exists());
        assert!(!r.is_readable());
        assert!(matches!(r.open_stream(), Err(ResourceError::Io { .. })));
    }

    #[test]
    fn file_returns_cleaned_path() {
        let r = FileSystemResource::new("/tmp/./a/../x.txt");
        assert_eq!(r.file().unwrap(), PathBuf::from("/tmp/x.txt"));
        assert!(r.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn url_is_file_scheme() {
        let r = FileSystemResource::new("/tmp/x.txt");
        assert_eq!(r.url().unwrap().as_str(), "file:///tmp/x.txt");
    }

    #[test]
    fn create_relative_resolves_sibling() {
        let r = FileSystemResource::new("a/b/c.txt");
        let sibling = r.create_relative("../d.txt").unwrap();
        assert_eq!(sibling.description(), "file [a/d.txt]");
        assert_eq!(sibling.kind(), ResourceKind::File);
    }

    #[test]
    fn create_relative_rejects_empty_path() {
        let r = FileSystemResource::new("a/b/c.txt");
        let err = r.create_relative("").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Resolution);
    }

    #[test]
    fn equality_uses_cleaned_path() {
        assert_eq!(
            FileSystemResource::new("/a/./b"),
            FileSystemResource::new("/a/c/../b")
        );
    }

    #[test]
    fn colon_in_name_is_not_a_prefix() {
        let r = FileSystemResource::new("12:30/../x.txt");
        assert_eq!(r.path(), "x.txt");
        assert_eq!(r.file().unwrap(), PathBuf::from("x.txt"));

        let sibling = FileSystemResource::new("logs/12:30/run.log")
            .create_relative("../summary.txt")
            .unwrap();
        assert_eq!(sibling.description(), "file [logs/summary.txt]");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_kept_for_io() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"data-\xff.txt"));
        if std::fs::write(&path, "raw").is_err() {
            // Some file systems reject non-UTF-8 names.
            return;
        }

        let r = FileSystemResource::new(&path);
        assert_eq!(r.file().unwrap(), path);
        assert!(r.exists());
        assert_eq!(read(&r), "raw");
        assert!(r.path().contains('\u{FFFD}'));
    }

    #[test]
    fn display_matches_description() {
        let r = FileSystemResource::new("/tmp/x.txt");
        assert_eq!(r.to_string(), "file [/tmp/x.txt]");
    }
}
