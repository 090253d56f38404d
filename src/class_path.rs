//! # Class Path
//!
//! The lookup context used to resolve `classpath:` names to bytes.
//!
//! A [`ClassPath`] is an ordered list of roots. A name is looked up in each
//! root in turn and the first hit wins:
//!
//! | Root | Lookup |
//! |------|--------|
//! | [`ClassPathRoot::Directory`] | `root.join(name)` on the local file system |
//! | [`ClassPathRoot::Embedded`] | exact name match in an in-memory bundle |
//!
//! Embedded bundles are how assets compiled into the binary (for example via
//! `include_bytes!`) become addressable by name.
//!
//! ```rust
//! use resource_loader::{ClassPath, EmbeddedAssets};
//!
//! let assets = EmbeddedAssets::new("builtin")
//!     .with_static("config/app.yaml", b"port: 8080\n");
//!
//! let class_path = ClassPath::new()
//!     .with_directory("/etc/myapp")
//!     .with_embedded(assets);
//!
//! assert_eq!(class_path.roots().len(), 2);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A named in-memory bundle of assets.
///
/// Cloning is cheap: entry contents are reference-counted.
#[derive(Clone, Default)]
pub struct EmbeddedAssets {
    label: String,
    entries: HashMap<String, Arc<[u8]>>,
}

impl EmbeddedAssets {
    /// Create an empty bundle. `label` only shows up in diagnostics.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: HashMap::new(),
        }
    }

    /// Add an entry backed by static data (e.g. `include_bytes!`).
    pub fn with_static(self, name: &str, data: &'static [u8]) -> Self {
        self.with_bytes(name, data)
    }

    /// Add an entry. The name is normalized the same way class path
    /// resource names are, so `"/config/./app.yaml"` and `"config/app.yaml"`
    /// address the same entry.
    pub fn with_bytes(mut self, name: &str, data: impl Into<Arc<[u8]>>) -> Self {
        self.entries.insert(normalize_name(name), data.into());
        self
    }

    /// The diagnostic label of this bundle.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Look up an entry by normalized name.
    pub fn get(&self, name: &str) -> Option<&Arc<[u8]>> {
        self.entries.get(name)
    }

    /// Number of entries in the bundle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bundle has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entry names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl fmt::Debug for EmbeddedAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedAssets")
            .field("label", &self.label)
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// One root of a [`ClassPath`].
#[derive(Debug, Clone)]
pub enum ClassPathRoot {
    /// A directory on the local file system.
    Directory(PathBuf),
    /// An in-memory asset bundle.
    Embedded(EmbeddedAssets),
}

/// Where a class path name was found.
#[derive(Debug, Clone)]
pub enum ClassPathEntry {
    /// Found under a directory root; the full path of the hit.
    File(PathBuf),
    /// Found in an embedded bundle.
    Embedded(Arc<[u8]>),
}

/// Ordered set of roots used to resolve class path names.
#[derive(Debug, Clone, Default)]
pub struct ClassPath {
    roots: Vec<ClassPathRoot>,
}

impl ClassPath {
    /// Create an empty class path. Every lookup against it misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory root.
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.roots.push(ClassPathRoot::Directory(dir.into()));
        self
    }

    /// Append an embedded bundle root.
    pub fn with_embedded(mut self, assets: EmbeddedAssets) -> Self {
        self.roots.push(ClassPathRoot::Embedded(assets));
        self
    }

    /// The roots in lookup order.
    pub fn roots(&self) -> &[ClassPathRoot] {
        &self.roots
    }

    /// Returns `true` if there are no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find `name` in the first root that contains it.
    ///
    /// `name` must already be normalized (see
    /// [`ClassPathResource`](crate::ClassPathResource)). Names that climb out
    /// of the namespace with a leading `..` never match. File system errors
    /// while probing a directory root count as a miss for that root.
    pub fn lookup(&self, name: &str) -> Option<ClassPathEntry> {
        if name == ".." || name.starts_with("../") {
            return None;
        }

        let hit = self.roots.iter().find_map(|root| match root {
            ClassPathRoot::Directory(dir) => find_in_directory(dir, name),
            ClassPathRoot::Embedded(assets) => assets
                .get(name)
                .map(|data| ClassPathEntry::Embedded(Arc::clone(data))),
        });

        tracing::trace!(name, found = hit.is_some(), "class path lookup");
        hit
    }
}

fn find_in_directory(dir: &Path, name: &str) -> Option<ClassPathEntry> {
    let candidate = if name.is_empty() {
        dir.to_path_buf()
    } else {
        dir.join(name)
    };
    match candidate.try_exists() {
        Ok(true) => Some(ClassPathEntry::File(candidate)),
        _ => None,
    }
}

/// Normalize a class path name: clean it and drop any leading `/`.
pub(crate) fn normalize_name(name: &str) -> String {
    let cleaned = crate::path_utils::clean_path(name);
    match cleaned.strip_prefix('/') {
        Some(stripped) => stripped.to_string(),
        None => cleaned,
    }
}
