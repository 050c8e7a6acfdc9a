//! In-memory test doubles for the injected capabilities.
//!
//! Used by the integration tests and handy for hosts that want to exercise
//! the engine without a camera or asset files.

use std::cell::RefCell;

use glam::Vec3;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::anchors::TrackingProvider;
use crate::animation::AnimationClip;
use crate::assets::{ContentPair, ContentProvider};
use crate::errors::TrackingError;
use crate::scene::{AudioClip, BoundingBox, ModelAsset};

/// Content provider serving models and audio from memory.
#[derive(Default)]
pub struct MemoryContent {
    models: FxHashMap<String, ModelAsset>,
    audio: FxHashMap<String, AudioClip>,
    requests: RefCell<Vec<String>>,
}

impl MemoryContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_model(mut self, path: impl Into<String>, asset: ModelAsset) -> Self {
        self.models.insert(path.into(), asset);
        self
    }

    #[must_use]
    pub fn with_audio(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        let clip = AudioClip::new(path.clone(), vec![0_u8; 16]);
        self.audio.insert(path, clip);
        self
    }

    /// Registers an animated box model of the given extent plus its audio
    /// for `pair`.
    #[must_use]
    pub fn with_pair(self, pair: &ContentPair, size: Vec3, clip_duration: Option<f32>) -> Self {
        let mut asset = ModelAsset::new(pair.model_path.clone(), BoundingBox::from_size(size));
        if let Some(duration) = clip_duration {
            asset = asset.with_animation(AnimationClip::new("Take 001", duration));
        }
        self.with_model(pair.model_path.clone(), asset)
            .with_audio(pair.audio_path.clone())
    }

    /// Every path requested so far, in request order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ContentProvider for MemoryContent {
    async fn load_model(&self, path: &str) -> anyhow::Result<ModelAsset> {
        self.requests.borrow_mut().push(path.to_string());
        self.models
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("model not found: {path}"))
    }

    async fn load_audio(&self, path: &str) -> anyhow::Result<AudioClip> {
        self.requests.borrow_mut().push(path.to_string());
        self.audio
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("audio not found: {path}"))
    }
}

/// Tracking provider that records what the engine asked of it.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    pub anchor_count: Option<usize>,
    pub created: Vec<usize>,
    pub start_calls: usize,
    pub fail_start: bool,
    unknown: FxHashSet<usize>,
}

impl RecordingTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_anchor_count(mut self, count: usize) -> Self {
        self.anchor_count = Some(count);
        self
    }

    /// Makes `create_anchor` fail for this index.
    #[must_use]
    pub fn rejecting(mut self, anchor_index: usize) -> Self {
        self.unknown.insert(anchor_index);
        self
    }

    #[must_use]
    pub fn started(&self) -> bool {
        self.start_calls > 0
    }
}

impl TrackingProvider for RecordingTracker {
    fn anchor_count(&self) -> Option<usize> {
        self.anchor_count
    }

    fn create_anchor(&mut self, anchor_index: usize) -> Result<(), TrackingError> {
        if self.unknown.contains(&anchor_index) {
            return Err(TrackingError::UnknownAnchor(anchor_index));
        }
        self.created.push(anchor_index);
        Ok(())
    }

    fn start(&mut self) -> Result<(), TrackingError> {
        self.start_calls += 1;
        if self.fail_start {
            return Err(TrackingError::StartFailed("camera unavailable".into()));
        }
        Ok(())
    }
}
