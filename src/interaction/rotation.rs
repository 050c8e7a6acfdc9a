use std::f32::consts::TAU;

use glam::Quat;

use crate::interaction::Interaction;
use crate::scene::ModelInstance;

pub const DEFAULT_ROTATION_STEP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub rotating: bool,
    /// Angle accumulated about the vertical axis, in radians.
    pub angle: f32,
}

/// Spins a model one full turn about the vertical axis, then stops.
///
/// The angle grows by a fixed `step` per frame tick. Once it reaches a full
/// turn the model is put back at its rest orientation and the angle is
/// cleared. Triggers that arrive mid-turn are ignored.
#[derive(Debug, Clone)]
pub struct OneShotRotation {
    step: f32,
    state: RotationState,
    rest: Quat,
}

impl OneShotRotation {
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            step,
            state: RotationState::default(),
            rest: Quat::IDENTITY,
        }
    }

    #[inline]
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> RotationState {
        self.state
    }
}

impl Default for OneShotRotation {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_STEP)
    }
}

impl Interaction for OneShotRotation {
    fn name(&self) -> &'static str {
        "rotate"
    }

    fn trigger(&mut self, model: &mut ModelInstance) -> bool {
        if self.state.rotating {
            return false;
        }
        self.rest = model.transform.rotation;
        self.state = RotationState {
            rotating: true,
            angle: 0.0,
        };
        true
    }

    fn tick(&mut self, model: &mut ModelInstance) {
        if !self.state.rotating {
            return;
        }

        self.state.angle += self.step;
        if self.state.angle >= TAU {
            self.state = RotationState::default();
            model.transform.rotation = self.rest;
        } else {
            model.transform.rotation = self.rest * Quat::from_rotation_y(self.state.angle);
        }
    }
}
