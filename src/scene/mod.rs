//! Stage Module
//!
//! Holds the content the engine has installed, in a form the render host can
//! read every frame:
//! - [`ModelInstance`]: a placed model with its [`Transform`]
//! - [`PositionalAudio`]: the audio emitter for one content
//! - [`AnimationMixer`](crate::animation::AnimationMixer): the clock-driven animation controller
//! - [`Stage`]: the slotmap arena owning all of the above

pub mod audio;
pub mod bounds;
pub mod model;
pub mod stage;
pub mod transform;

pub use audio::{AudioClip, PlaybackState, PositionalAudio};
pub use bounds::BoundingBox;
pub use model::{ModelAsset, ModelInstance};
pub use stage::Stage;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct ModelKey;
    pub struct AudioKey;
    pub struct MixerKey;
}
