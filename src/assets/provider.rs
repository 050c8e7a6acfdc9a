use std::future::Future;

use crate::scene::{AudioClip, ModelAsset};

/// Content decoder supplied by the host.
///
/// Loading is the only operation in the engine that suspends. Errors are
/// reported with `anyhow` and wrapped into a [`LoadError`](crate::errors::LoadError)
/// by the loader.
pub trait ContentProvider {
    /// Decodes the model at `path`. Fails on a bad path or format.
    fn load_model(&self, path: &str) -> impl Future<Output = anyhow::Result<ModelAsset>>;

    /// Decodes the audio clip at `path`. Same failure contract as models.
    fn load_audio(&self, path: &str) -> impl Future<Output = anyhow::Result<AudioClip>>;
}
