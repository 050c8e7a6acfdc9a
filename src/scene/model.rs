use std::sync::Arc;

use glam::Vec3;

use crate::animation::AnimationClip;
use crate::scene::bounds::BoundingBox;
use crate::scene::transform::Transform;

/// Decoded model as delivered by a content provider.
///
/// Only the data the engine orchestrates with is kept: the bounds of the
/// root geometry in model space and the list of animation clips. Meshes and
/// materials stay with the rendering engine.
#[derive(Debug, Clone)]
pub struct ModelAsset {
    pub name: String,
    pub bounds: BoundingBox,
    pub animations: Vec<Arc<AnimationClip>>,
}

impl ModelAsset {
    #[must_use]
    pub fn new(name: impl Into<String>, bounds: BoundingBox) -> Self {
        Self {
            name: name.into(),
            bounds,
            animations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_animation(mut self, clip: AnimationClip) -> Self {
        self.animations.push(Arc::new(clip));
        self
    }
}

/// A model placed on the stage, with its own transform.
#[derive(Debug, Clone)]
pub struct ModelInstance {
    pub name: String,
    pub transform: Transform,
    bounds: BoundingBox,
    animations: Vec<Arc<AnimationClip>>,
}

impl ModelInstance {
    #[must_use]
    pub fn from_asset(asset: ModelAsset) -> Self {
        Self {
            name: asset.name,
            transform: Transform::new(),
            bounds: asset.bounds,
            animations: asset.animations,
        }
    }

    /// Bounds of the root geometry in model space (before the transform).
    #[inline]
    #[must_use]
    pub fn local_bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Extent of the model after its current scale is applied.
    #[must_use]
    pub fn scaled_size(&self) -> Vec3 {
        self.bounds.size() * self.transform.scale
    }

    #[inline]
    #[must_use]
    pub fn animations(&self) -> &[Arc<AnimationClip>] {
        &self.animations
    }
}
