pub mod action;
pub mod binder;
pub mod clip;
pub mod mixer;
pub mod scheduler;

pub use action::AnimationAction;
pub use binder::AnimationBinder;
pub use clip::AnimationClip;
pub use mixer::AnimationMixer;
pub use scheduler::AnimationScheduler;
