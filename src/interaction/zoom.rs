use crate::interaction::Interaction;
use crate::scene::ModelInstance;

pub const DEFAULT_ZOOM_FACTOR: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomState {
    pub zoomed_in: bool,
}

/// Toggles a model between its normal scale and `factor` times that scale.
#[derive(Debug, Clone)]
pub struct ZoomToggle {
    factor: f32,
    state: ZoomState,
}

impl ZoomToggle {
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self {
            factor,
            state: ZoomState::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }
}

impl Default for ZoomToggle {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_FACTOR)
    }
}

impl Interaction for ZoomToggle {
    fn name(&self) -> &'static str {
        "zoom"
    }

    fn trigger(&mut self, model: &mut ModelInstance) -> bool {
        if self.state.zoomed_in {
            model.transform.scale /= self.factor;
        } else {
            model.transform.scale *= self.factor;
        }
        self.state.zoomed_in = !self.state.zoomed_in;
        true
    }
}
