use std::sync::Arc;

use crate::animation::action::AnimationAction;
use crate::animation::clip::AnimationClip;

/// Drives the actions of a single model.
///
/// The mixer keeps its own accumulated time, which advances on every
/// [`update`](Self::update) whether or not any action is running.
#[derive(Debug, Clone)]
pub struct AnimationMixer {
    root_name: String,
    actions: Vec<AnimationAction>,
    time: f32,
}

impl AnimationMixer {
    #[must_use]
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            actions: Vec::new(),
            time: 0.0,
        }
    }

    /// Name of the model this mixer is bound to.
    #[inline]
    #[must_use]
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Returns the action for `clip`, creating it on first request.
    pub fn clip_action(&mut self, clip: &Arc<AnimationClip>) -> &mut AnimationAction {
        let index = match self
            .actions
            .iter()
            .position(|action| Arc::ptr_eq(action.clip(), clip))
        {
            Some(index) => index,
            None => {
                self.actions.push(AnimationAction::new(Arc::clone(clip)));
                self.actions.len() - 1
            }
        };
        &mut self.actions[index]
    }

    #[inline]
    #[must_use]
    pub fn actions(&self) -> &[AnimationAction] {
        &self.actions
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;
        for action in &mut self.actions {
            action.update(dt);
        }
    }

    /// Moves the mixer and all of its actions to `time`.
    ///
    /// Running actions keep running; only their position changes.
    pub fn set_time(&mut self, time: f32) {
        self.time = 0.0;
        for action in &mut self.actions {
            action.time = 0.0;
        }
        if time > 0.0 {
            self.update(time);
        }
    }
}
