//! # Backends
//!
//! The five concrete resource kinds.
//!
//! | Backend | Locator | Re-readable | `file()` |
//! |---------|---------|-------------|----------|
//! | [`FileSystemResource`] | path | yes | always |
//! | [`ClassPathResource`] | name in a [`ClassPath`](crate::ClassPath) | yes | directory-root hits |
//! | [`UrlResource`] | URL | yes | `file:` URLs |
//! | [`ByteArrayResource`] | none | yes | never |
//! | [`InputStreamResource`] | none | **once** | never |

mod bytes;
mod class_path;
mod file;
mod stream;
mod url;

pub use bytes::ByteArrayResource;
pub use class_path::ClassPathResource;
pub use file::FileSystemResource;
pub use stream::InputStreamResource;
pub use url::UrlResource;
