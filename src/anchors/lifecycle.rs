use crate::anchors::tracking::TrackingEvent;
use crate::scene::{AudioKey, MixerKey, ModelKey, Stage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    Visible,
}

/// Per-anchor visibility state machine.
///
/// Found starts the audio and rewinds the animation to its first frame.
/// Lost pauses the audio only; the animation keeps running on the shared
/// clock. The controller lives for the whole process once created.
#[derive(Debug, Clone)]
pub struct LifecycleController {
    content_index: usize,
    anchor_index: usize,
    state: LifecycleState,

    model: ModelKey,
    audio: AudioKey,
    mixer: Option<MixerKey>,
}

impl LifecycleController {
    #[must_use]
    pub fn new(
        content_index: usize,
        anchor_index: usize,
        model: ModelKey,
        audio: AudioKey,
        mixer: Option<MixerKey>,
    ) -> Self {
        Self {
            content_index,
            anchor_index,
            state: LifecycleState::Idle,
            model,
            audio,
            mixer,
        }
    }

    #[inline]
    #[must_use]
    pub fn content_index(&self) -> usize {
        self.content_index
    }

    #[inline]
    #[must_use]
    pub fn anchor_index(&self) -> usize {
        self.anchor_index
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn model(&self) -> ModelKey {
        self.model
    }

    #[inline]
    #[must_use]
    pub fn audio(&self) -> AudioKey {
        self.audio
    }

    #[inline]
    #[must_use]
    pub fn mixer(&self) -> Option<MixerKey> {
        self.mixer
    }

    /// Applies a tracking event. Returns whether the state changed.
    pub fn handle(&mut self, event: TrackingEvent, stage: &mut Stage) -> bool {
        match event {
            TrackingEvent::Found(_) => self.on_found(stage),
            TrackingEvent::Lost(_) => self.on_lost(stage),
        }
    }

    /// `Idle -> Visible`. A repeated found while visible changes nothing.
    pub fn on_found(&mut self, stage: &mut Stage) -> bool {
        if self.state == LifecycleState::Visible {
            return false;
        }
        self.state = LifecycleState::Visible;

        log::info!(
            "Anchor {} found: playing content {}",
            self.anchor_index,
            self.content_index
        );

        if let Some(audio) = stage.audio_mut(self.audio) {
            audio.play();
        }
        if let Some(mixer) = self.mixer.and_then(|key| stage.mixer_mut(key)) {
            mixer.set_time(0.0);
        }
        true
    }

    /// `Visible -> Idle`. Lost while idle changes nothing.
    pub fn on_lost(&mut self, stage: &mut Stage) -> bool {
        if self.state == LifecycleState::Idle {
            return false;
        }
        self.state = LifecycleState::Idle;

        log::info!(
            "Anchor {} lost: pausing content {}",
            self.anchor_index,
            self.content_index
        );

        if let Some(audio) = stage.audio_mut(self.audio) {
            audio.pause();
        }
        true
    }
}
