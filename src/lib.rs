//! # Folio
//!
//! Binds tracked image targets (book pages, posters) to content bundles made
//! of a 3D model, a positional audio clip and a looping animation, and keeps
//! their playback in step with what the tracking camera sees.
//!
//! The crate is the orchestration layer only. Marker tracking, asset decoding
//! and rendering are injected through [`TrackingProvider`], [`ContentProvider`]
//! and the host's frame loop calling [`ContentRuntime::update`].
//!
//! ```rust,ignore
//! use folio::{FolioConfig, StartupOrchestrator};
//!
//! let config = FolioConfig::load("book.json")?;
//! let pairs = config.pairs("en")?;
//! let orchestrator = StartupOrchestrator::from_config(&config);
//! let mut runtime = orchestrator.run(&pairs, &content, &mut tracker).await?;
//!
//! runtime.handle_tracking_event(TrackingEvent::Found(0));
//! runtime.update(1.0 / 60.0);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod anchors;
pub mod animation;
pub mod assets;
pub mod config;
pub mod errors;
pub mod interaction;
pub mod orchestrator;
pub mod runtime;
pub mod scene;
pub mod testing;
pub mod utils;

pub use anchors::{AnchorBindingTable, LifecycleController, LifecycleState, TrackingEvent, TrackingProvider};
pub use animation::{AnimationBinder, AnimationClip, AnimationMixer, AnimationScheduler};
pub use assets::{ContentBundle, ContentLoader, ContentPair, ContentProvider, LoadSettings};
pub use config::{FailurePolicy, FolioConfig};
pub use errors::{LoadError, StartupError};
pub use interaction::{Gesture, Interaction, InteractionKind, OneShotRotation, ZoomToggle};
pub use orchestrator::StartupOrchestrator;
pub use runtime::{ContentRuntime, FrameState, RuntimeEvent};
pub use scene::{Stage, Transform};
