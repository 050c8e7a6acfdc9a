use crate::scene::{MixerKey, Stage};

/// The shared animation clock.
///
/// Holds one entry per bound mixer, in registration order. Entries are never
/// removed; a key whose mixer has left the stage is skipped on tick.
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    entries: Vec<MixerKey>,
}

impl AnimationScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: MixerKey) {
        self.entries.push(key);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[MixerKey] {
        &self.entries
    }

    /// Advances every registered mixer by `dt` seconds.
    ///
    /// Visibility of the owning anchor is irrelevant here. `dt` is expected
    /// finite and non-negative; [`ContentRuntime::update`] sanitizes host
    /// deltas before they reach the clock. Returns the number of mixers
    /// advanced.
    ///
    /// [`ContentRuntime::update`]: crate::ContentRuntime::update
    pub fn tick(&self, stage: &mut Stage, dt: f32) -> usize {
        let mut advanced = 0;
        for &key in &self.entries {
            if let Some(mixer) = stage.mixer_mut(key) {
                mixer.update(dt);
                advanced += 1;
            }
        }
        advanced
    }
}
