//! Utility Module
//!
//! - [`FrameClock`]: wall-clock frame deltas for hosts whose render loop
//!   does not report one

pub mod clock;

pub use clock::FrameClock;
