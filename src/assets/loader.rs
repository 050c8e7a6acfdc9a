use std::sync::Arc;

use anyhow::anyhow;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationBinder, AnimationMixer};
use crate::assets::provider::ContentProvider;
use crate::config::AudioSettings;
use crate::errors::{ConfigError, LoadError};
use crate::scene::{BoundingBox, ModelInstance, PositionalAudio};

/// One (model, audio) pair of static configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPair {
    pub index: usize,
    pub model_path: String,
    pub audio_path: String,
}

impl ContentPair {
    #[must_use]
    pub fn new(index: usize, model_path: impl Into<String>, audio_path: impl Into<String>) -> Self {
        Self {
            index,
            model_path: model_path.into(),
            audio_path: audio_path.into(),
        }
    }
}

/// Per-deployment constants applied while loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSettings {
    /// Largest bounding-box extent after normalization.
    pub target_size: f32,
    /// Vertical baseline offset for every model.
    pub vertical_offset: f32,
    pub audio: AudioSettings,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            target_size: 1.0,
            vertical_offset: -0.4,
            audio: AudioSettings::default(),
        }
    }
}

impl LoadSettings {
    /// Rejects placement constants that would collapse or poison model transforms.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target_size.is_finite() || self.target_size <= 0.0 {
            return Err(ConfigError::InvalidTargetSize(self.target_size));
        }
        if !self.vertical_offset.is_finite() {
            return Err(ConfigError::InvalidVerticalOffset(self.vertical_offset));
        }
        Ok(())
    }
}

/// A fully loaded, normalized content pair.
#[derive(Debug)]
pub struct ContentBundle {
    pub index: usize,
    pub model: ModelInstance,
    pub audio: PositionalAudio,
    pub animation: Option<AnimationMixer>,
    /// Uniform scale applied by normalization.
    pub scale: f32,
}

impl ContentBundle {
    /// Binds the model's first clip. Returns `false` for a static model.
    pub fn bind_animation(&mut self) -> bool {
        self.animation = AnimationBinder::bind(&self.model);
        self.animation.is_some()
    }
}

/// Uniform factor that brings the largest extent of `bounds` to `target_size`.
///
/// `None` for empty, flat-in-every-axis or non-finite bounds.
#[must_use]
pub fn normalization_scale(bounds: &BoundingBox, target_size: f32) -> Option<f32> {
    let max_dimension = bounds.max_dimension();
    if !max_dimension.is_finite() || max_dimension <= 0.0 {
        return None;
    }
    Some(target_size / max_dimension)
}

/// Loads content pairs through a [`ContentProvider`].
pub struct ContentLoader<'a, P> {
    provider: &'a P,
    settings: LoadSettings,
}

impl<'a, P: ContentProvider> ContentLoader<'a, P> {
    #[must_use]
    pub fn new(provider: &'a P, settings: LoadSettings) -> Self {
        Self { provider, settings }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &LoadSettings {
        &self.settings
    }

    /// Loads and normalizes one pair.
    ///
    /// The model is loaded first, then the audio. Either failure yields a
    /// [`LoadError`] naming the pair and the failed resource.
    pub async fn load(&self, pair: &ContentPair) -> Result<ContentBundle, LoadError> {
        let asset = self
            .provider
            .load_model(&pair.model_path)
            .await
            .map_err(|err| LoadError::model(pair.index, err))?;

        let scale = normalization_scale(&asset.bounds, self.settings.target_size).ok_or_else(|| {
            LoadError::model(
                pair.index,
                anyhow!("model '{}' has degenerate bounds", pair.model_path),
            )
        })?;

        let clip = self
            .provider
            .load_audio(&pair.audio_path)
            .await
            .map_err(|err| LoadError::audio(pair.index, err))?;

        let mut model = ModelInstance::from_asset(asset);
        model.transform.set_uniform_scale(scale);
        model.transform.position = Vec3::new(0.0, self.settings.vertical_offset, 0.0);

        let mut audio = PositionalAudio::new(Arc::new(clip));
        audio.looping = self.settings.audio.looping;
        audio.ref_distance = self.settings.audio.ref_distance;

        log::debug!(
            "Loaded content {}: '{}' scaled by {scale:.4}, audio '{}'",
            pair.index,
            pair.model_path,
            pair.audio_path
        );

        Ok(ContentBundle {
            index: pair.index,
            model,
            audio,
            animation: None,
            scale,
        })
    }
}
