use slotmap::SlotMap;

use crate::animation::AnimationMixer;
use crate::scene::audio::PositionalAudio;
use crate::scene::model::ModelInstance;
use crate::scene::{AudioKey, MixerKey, ModelKey};

/// Arena of installed content.
///
/// Keys handed out by the stage are generational: a key whose entry is gone
/// resolves to `None` instead of aliasing a newer entry, which is what lets
/// the animation scheduler hold them as weak references.
#[derive(Debug, Default)]
pub struct Stage {
    pub models: SlotMap<ModelKey, ModelInstance>,
    pub audio: SlotMap<AudioKey, PositionalAudio>,
    pub mixers: SlotMap<MixerKey, AnimationMixer>,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_model(&mut self, model: ModelInstance) -> ModelKey {
        self.models.insert(model)
    }

    pub fn add_audio(&mut self, audio: PositionalAudio) -> AudioKey {
        self.audio.insert(audio)
    }

    pub fn add_mixer(&mut self, mixer: AnimationMixer) -> MixerKey {
        self.mixers.insert(mixer)
    }

    #[inline]
    #[must_use]
    pub fn model(&self, key: ModelKey) -> Option<&ModelInstance> {
        self.models.get(key)
    }

    #[inline]
    pub fn model_mut(&mut self, key: ModelKey) -> Option<&mut ModelInstance> {
        self.models.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub fn audio(&self, key: AudioKey) -> Option<&PositionalAudio> {
        self.audio.get(key)
    }

    #[inline]
    pub fn audio_mut(&mut self, key: AudioKey) -> Option<&mut PositionalAudio> {
        self.audio.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub fn mixer(&self, key: MixerKey) -> Option<&AnimationMixer> {
        self.mixers.get(key)
    }

    #[inline]
    pub fn mixer_mut(&mut self, key: MixerKey) -> Option<&mut AnimationMixer> {
        self.mixers.get_mut(key)
    }

    /// Rebuilds local matrices of every model whose TRS changed.
    ///
    /// Returns how many matrices were rebuilt.
    pub fn update_matrices(&mut self) -> usize {
        let mut rebuilt = 0;
        for model in self.models.values_mut() {
            if model.transform.update_local_matrix() {
                rebuilt += 1;
            }
        }
        rebuilt
    }
}
