//! Interaction Module
//!
//! Optional gesture-driven behaviours attached to content by index. They
//! react to user input only, never to anchor visibility:
//! - [`ZoomToggle`]: scale up / scale back on each activation
//! - [`OneShotRotation`]: one self-terminating turn about the vertical axis

pub mod rotation;
pub mod zoom;

pub use rotation::{OneShotRotation, RotationState, DEFAULT_ROTATION_STEP};
pub use zoom::{ZoomState, ZoomToggle, DEFAULT_ZOOM_FACTOR};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::scene::{ModelInstance, ModelKey, Stage};

/// A per-content gesture state machine.
///
/// Implementations own their state; two contents never share an instance.
pub trait Interaction: Send {
    fn name(&self) -> &'static str;

    /// Handles an activation gesture. Returns `false` if it was ignored.
    fn trigger(&mut self, model: &mut ModelInstance) -> bool;

    /// Called once per frame tick.
    fn tick(&mut self, _model: &mut ModelInstance) {}
}

/// User input the interactions respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Click/touch aimed at one content.
    Activate(usize),
    /// Click/touch anywhere; every attached interaction reacts.
    ActivateAll,
}

/// Configured interaction for one content index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractionKind {
    Zoom {
        #[serde(default = "default_zoom_factor")]
        factor: f32,
    },
    Rotate {
        #[serde(default = "default_rotation_step")]
        step: f32,
    },
}

fn default_zoom_factor() -> f32 {
    DEFAULT_ZOOM_FACTOR
}

fn default_rotation_step() -> f32 {
    DEFAULT_ROTATION_STEP
}

impl InteractionKind {
    /// Rejects parameters that would make the behaviour degenerate.
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let (value, reason) = match *self {
            Self::Zoom { factor } => (factor, "zoom factor must be positive and finite"),
            Self::Rotate { step } => (step, "rotation step must be positive and finite"),
        };
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidInteraction { index, reason })
        }
    }

    #[must_use]
    pub fn build(&self) -> Box<dyn Interaction> {
        match *self {
            Self::Zoom { factor } => Box::new(ZoomToggle::new(factor)),
            Self::Rotate { step } => Box::new(OneShotRotation::new(step)),
        }
    }
}

struct InteractionSlot {
    content_index: usize,
    model: ModelKey,
    behavior: Box<dyn Interaction>,
}

impl fmt::Debug for InteractionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionSlot")
            .field("content_index", &self.content_index)
            .field("model", &self.model)
            .field("behavior", &self.behavior.name())
            .finish()
    }
}

/// All attached interactions, keyed by content index.
#[derive(Debug, Default)]
pub struct InteractionSet {
    slots: Vec<InteractionSlot>,
}

impl InteractionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, content_index: usize, model: ModelKey, behavior: Box<dyn Interaction>) {
        log::debug!(
            "Attached '{}' interaction to content {content_index}",
            behavior.name()
        );
        self.slots.push(InteractionSlot {
            content_index,
            model,
            behavior,
        });
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Name of the interaction attached to `content_index`, if any.
    #[must_use]
    pub fn kind_of(&self, content_index: usize) -> Option<&'static str> {
        self.slots
            .iter()
            .find(|slot| slot.content_index == content_index)
            .map(|slot| slot.behavior.name())
    }

    /// Routes a gesture. Returns how many interactions accepted it.
    pub fn handle_gesture(&mut self, gesture: Gesture, stage: &mut Stage) -> usize {
        let mut accepted = 0;
        for slot in &mut self.slots {
            let targeted = match gesture {
                Gesture::Activate(index) => slot.content_index == index,
                Gesture::ActivateAll => true,
            };
            if !targeted {
                continue;
            }
            let Some(model) = stage.model_mut(slot.model) else {
                continue;
            };
            if slot.behavior.trigger(model) {
                log::debug!(
                    "'{}' interaction triggered on content {}",
                    slot.behavior.name(),
                    slot.content_index
                );
                accepted += 1;
            }
        }
        accepted
    }

    pub fn tick(&mut self, stage: &mut Stage) {
        for slot in &mut self.slots {
            if let Some(model) = stage.model_mut(slot.model) {
                slot.behavior.tick(model);
            }
        }
    }
}
