use std::sync::Arc;

/// Decoded audio as delivered by a content provider.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub name: String,
    pub data: Arc<[u8]>,
}

impl AudioClip {
    #[must_use]
    pub fn new(name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// A positional audio emitter attached to an anchor.
///
/// The emitter owns at most one voice. `play` on an emitter that is already
/// playing is refused, so repeated starts never stack overlapping playback.
#[derive(Debug, Clone)]
pub struct PositionalAudio {
    clip: Arc<AudioClip>,
    pub looping: bool,
    pub ref_distance: f32,

    state: PlaybackState,
    start_count: u64,
}

impl PositionalAudio {
    #[must_use]
    pub fn new(clip: Arc<AudioClip>) -> Self {
        Self {
            clip,
            looping: true,
            ref_distance: 1.0,
            state: PlaybackState::Stopped,
            start_count: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn clip(&self) -> &Arc<AudioClip> {
        &self.clip
    }

    /// Starts (or resumes) playback. Returns `false` if already playing.
    pub fn play(&mut self) -> bool {
        if self.state == PlaybackState::Playing {
            log::debug!("Audio '{}' is already playing", self.clip.name);
            return false;
        }
        self.state = PlaybackState::Playing;
        self.start_count += 1;
        true
    }

    /// Pauses playback, keeping the position. No-op unless playing.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Number of voices currently sounding (0 or 1).
    #[inline]
    #[must_use]
    pub fn active_voices(&self) -> usize {
        usize::from(self.is_playing())
    }

    /// How many times playback was actually started.
    #[inline]
    #[must_use]
    pub fn start_count(&self) -> u64 {
        self.start_count
    }
}
