//! Content Loading
//!
//! - [`ContentProvider`]: the injected decoder for models and audio
//! - [`ContentLoader`]: turns a [`ContentPair`] into a normalized [`ContentBundle`]
//! - `FileContentProvider` (feature `gltf`): reads glTF models and audio from disk

pub mod loader;
pub mod provider;

#[cfg(feature = "gltf")]
pub mod file;

pub use loader::{normalization_scale, ContentBundle, ContentLoader, ContentPair, LoadSettings};
pub use provider::ContentProvider;

#[cfg(feature = "gltf")]
pub use file::FileContentProvider;
