//! # Path Utilities
//!
//! Lexical path handling shared by the path-based backends.
//!
//! ## Responsibility
//! - Normalize `.`/`..` segments and separators without touching any backend
//! - Compose a relative path against an existing resource locator
//!
//! All functions here are pure string operations. They never check existence
//! and never follow symlinks; the backends decide what a resolved string means.
//!
//! ## Usage
//!
//! ```rust
//! use resource_loader::path_utils::{apply_relative_path, clean_path};
//!
//! assert_eq!(clean_path("a/./b/../c.txt"), "a/c.txt");
//! assert_eq!(apply_relative_path("a/b/c.txt", "../d.txt").as_deref(), Some("a/d.txt"));
//! ```

/// Separator used in every normalized locator.
pub const SEPARATOR: char = '/';

/// Normalize a path lexically.
///
/// - `\` separators become `/`
/// - empty and `.` segments are dropped
/// - `name/..` pairs are folded
/// - `..` directly under the root is dropped (the root is its own parent)
/// - leading `..` segments of a relative path are kept
/// - a leading `/`, a trailing `/`, and a drive prefix (`C:`) are preserved
///
/// Only a single ASCII letter followed by `:` counts as a drive prefix. Any
/// other colon is an ordinary character of a segment.
///
/// # Example
///
/// ```rust
/// use resource_loader::path_utils::clean_path;
///
/// assert_eq!(clean_path("/srv//app/./conf/../data.bin"), "/srv/app/data.bin");
/// assert_eq!(clean_path("../shared/x"), "../shared/x");
/// assert_eq!(clean_path("/../etc"), "/etc");
/// assert_eq!(clean_path("C:\\work\\..\\tmp"), "C:/tmp");
/// ```
pub fn clean_path(path: &str) -> String {
    let unified = path.replace('\\', "/");

    let (prefix, rest) = split_drive(&unified);

    let absolute = rest.starts_with(SEPARATOR);
    let trailing = rest.len() > 1 && rest.ends_with(SEPARATOR);

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            name => segments.push(name),
        }
    }

    let mut cleaned = String::with_capacity(unified.len());
    cleaned.push_str(prefix);
    if absolute {
        cleaned.push(SEPARATOR);
    }
    cleaned.push_str(&segments.join("/"));
    if trailing && !segments.is_empty() {
        cleaned.push(SEPARATOR);
    }
    cleaned
}

/// Split a leading drive prefix such as `C:` off `path`.
fn split_drive(path: &str) -> (&str, &str) {
    match path.as_bytes() {
        [letter, b':', ..] if letter.is_ascii_alphabetic() => path.split_at(2),
        _ => ("", path),
    }
}

/// Resolve `relative` against the locator `base`.
///
/// A `relative` path starting with a separator replaces `base` entirely.
/// Otherwise it is appended to the directory part of `base` (everything up
/// to and including the last `/`) and the result is cleaned with
/// [`clean_path`].
///
/// Returns `None` when `relative` is empty: there is nothing to resolve.
///
/// # Example
///
/// ```rust
/// use resource_loader::path_utils::apply_relative_path;
///
/// assert_eq!(apply_relative_path("/srv/app/a.txt", "b.txt").as_deref(), Some("/srv/app/b.txt"));
/// assert_eq!(apply_relative_path("conf/", "app.yaml").as_deref(), Some("conf/app.yaml"));
/// assert_eq!(apply_relative_path("a/b/c.txt", "/d.txt").as_deref(), Some("/d.txt"));
/// assert_eq!(apply_relative_path("a/b/c.txt", ""), None);
/// ```
pub fn apply_relative_path(base: &str, relative: &str) -> Option<String> {
    if relative.is_empty() {
        return None;
    }

    let relative = relative.replace('\\', "/");
    if relative.starts_with(SEPARATOR) {
        return Some(clean_path(&relative));
    }

    let base = base.replace('\\', "/");
    let directory = match base.rfind(SEPARATOR) {
        Some(idx) => &base[..=idx],
        None => "",
    };
    Some(clean_path(&format!("{directory}{relative}")))
}

/// Last non-empty segment of a `/`- or `\`-separated path.
///
/// ```rust
/// use resource_loader::path_utils::filename;
///
/// assert_eq!(filename("config/app.yaml"), Some("app.yaml"));
/// assert_eq!(filename("config/"), Some("config"));
/// assert_eq!(filename("/"), None);
/// ```
pub fn filename(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\']).find(|segment| !segment.is_empty())
}
