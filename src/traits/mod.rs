//! # Resource Traits
//!
//! The two contracts of the crate.
//!
//! | Trait | Role |
//! |-------|------|
//! | [`Resource`] | What a handle can do: existence, streams, metadata, relative addressing |
//! | [`ResourceLoader`] | How a location string becomes a handle |
//!
//! ```text
//! location ──▶ ResourceLoader::get_resource ──▶ ResourceHandle ──▶ Resource methods (I/O happens here)
//! ```
//!
//! Both traits are object-safe and require `Send + Sync`.

mod resource;
mod resource_loader;

pub use resource::Resource;
pub(crate) use resource::read_all;
pub use resource_loader::{CLASSPATH_URL_PREFIX, ResourceLoader};
