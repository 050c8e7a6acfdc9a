//! Anchor Module
//!
//! Everything between the tracking provider and installed content:
//! - [`AnchorBindingTable`]: logical content index to physical anchor index
//! - [`TrackingProvider`]: the injected tracking backend
//! - [`LifecycleController`]: found/lost state machine per bound content

pub mod binding;
pub mod lifecycle;
pub mod tracking;

pub use binding::{AnchorBinding, AnchorBindingTable};
pub use lifecycle::{LifecycleController, LifecycleState};
pub use tracking::{TrackingEvent, TrackingProvider};
