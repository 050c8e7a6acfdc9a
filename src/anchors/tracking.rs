use crate::errors::TrackingError;

/// Image-tracking backend.
///
/// Every anchor referenced by the binding table is created before `start`
/// is invoked. Found/lost notifications are delivered to the runtime as
/// [`TrackingEvent`]s.
pub trait TrackingProvider {
    /// Number of targets the provider can recognize, if it knows.
    fn anchor_count(&self) -> Option<usize> {
        None
    }

    fn create_anchor(&mut self, anchor_index: usize) -> Result<(), TrackingError>;

    fn start(&mut self) -> Result<(), TrackingError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingEvent {
    /// The target for this anchor entered recognition.
    Found(usize),
    /// The target for this anchor left recognition.
    Lost(usize),
}

impl TrackingEvent {
    #[inline]
    #[must_use]
    pub fn anchor_index(self) -> usize {
        match self {
            Self::Found(index) | Self::Lost(index) => index,
        }
    }
}
