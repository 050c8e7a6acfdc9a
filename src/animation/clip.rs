/// A named animation clip carried by a model.
///
/// Keyframe sampling happens in the rendering engine; the orchestrator only
/// needs the clip identity and its duration to drive playback time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
        }
    }
}
