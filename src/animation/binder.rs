use crate::animation::mixer::AnimationMixer;
use crate::scene::ModelInstance;

/// Turns a model's first animation clip into a running mixer.
pub struct AnimationBinder;

impl AnimationBinder {
    /// Builds a mixer rooted at `model` and starts looping its first clip.
    ///
    /// Playback begins immediately, independent of anchor visibility.
    /// Returns `None` when the model carries no clip; callers treat the
    /// content as a static model.
    #[must_use]
    pub fn bind(model: &ModelInstance) -> Option<AnimationMixer> {
        let clip = model.animations().first()?;

        let mut mixer = AnimationMixer::new(model.name.clone());
        mixer.clip_action(clip).play();

        log::debug!(
            "Bound clip '{}' ({:.2}s) on '{}'",
            clip.name,
            clip.duration,
            model.name
        );
        Some(mixer)
    }
}
