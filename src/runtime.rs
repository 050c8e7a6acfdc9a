//! Content Runtime
//!
//! [`ContentRuntime`] is the running engine handed to the host once startup
//! succeeds. It owns the [`Stage`], the lifecycle controllers, the shared
//! animation clock and the attached interactions, and it is driven from two
//! directions:
//!
//! - **Discrete events**: tracking found/lost and user gestures, delivered
//!   directly or through the channel returned by [`ContentRuntime::event_sender`]
//! - **Frame ticks**: the render host calls [`ContentRuntime::update`] once per
//!   rendered frame with the elapsed time
//!
//! Every event and every tick runs to completion before the next one starts.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut runtime = pollster::block_on(orchestrator.run(&pairs, &content, &mut tracker))?;
//!
//! // Frame callback
//! let mut clock = folio::utils::FrameClock::new();
//! loop {
//!     runtime.update(clock.tick());
//!     host.draw(runtime.stage());
//! }
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::anchors::{LifecycleController, TrackingEvent};
use crate::animation::AnimationScheduler;
use crate::interaction::{Gesture, InteractionSet};
use crate::scene::Stage;

/// Anything the runtime can be told from outside the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEvent {
    Tracking(TrackingEvent),
    Gesture(Gesture),
}

impl From<TrackingEvent> for RuntimeEvent {
    fn from(event: TrackingEvent) -> Self {
        Self::Tracking(event)
    }
}

impl From<Gesture> for RuntimeEvent {
    fn from(gesture: Gesture) -> Self {
        Self::Gesture(gesture)
    }
}

/// Per-frame timing and state information.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    /// Total elapsed time since startup (in seconds).
    pub time: f32,
    /// Delta time applied this frame (in seconds).
    pub dt: f32,
    /// Total number of frames processed since startup.
    pub frame_count: u64,
}

#[derive(Debug)]
pub struct ContentRuntime {
    pub(crate) stage: Stage,
    pub(crate) controllers: Vec<LifecycleController>,
    /// Anchor index -> controller positions. Usually one, more when several
    /// contents share an anchor.
    pub(crate) routes: FxHashMap<usize, SmallVec<[usize; 1]>>,
    pub(crate) scheduler: AnimationScheduler,
    pub(crate) interactions: InteractionSet,

    events_tx: flume::Sender<RuntimeEvent>,
    events_rx: flume::Receiver<RuntimeEvent>,

    time: f32,
    frame_count: u64,
}

impl ContentRuntime {
    pub(crate) fn new() -> Self {
        let (events_tx, events_rx) = flume::unbounded();
        Self {
            stage: Stage::new(),
            controllers: Vec::new(),
            routes: FxHashMap::default(),
            scheduler: AnimationScheduler::new(),
            interactions: InteractionSet::new(),
            events_tx,
            events_rx,
            time: 0.0,
            frame_count: 0,
        }
    }

    pub(crate) fn add_controller(&mut self, controller: LifecycleController) {
        let position = self.controllers.len();
        self.routes
            .entry(controller.anchor_index())
            .or_default()
            .push(position);
        self.controllers.push(controller);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Mutable stage access for the render host (e.g. to attach models to
    /// anchor groups or apply its own transforms).
    #[inline]
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    #[inline]
    #[must_use]
    pub fn controllers(&self) -> &[LifecycleController] {
        &self.controllers
    }

    #[must_use]
    pub fn controller(&self, content_index: usize) -> Option<&LifecycleController> {
        self.controllers
            .iter()
            .find(|c| c.content_index() == content_index)
    }

    /// Controllers bound to `anchor_index`, in binding order.
    pub fn controllers_for_anchor(
        &self,
        anchor_index: usize,
    ) -> impl Iterator<Item = &LifecycleController> + '_ {
        self.routes
            .get(&anchor_index)
            .into_iter()
            .flatten()
            .map(|&position| &self.controllers[position])
    }

    #[inline]
    #[must_use]
    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    #[inline]
    #[must_use]
    pub fn interactions(&self) -> &InteractionSet {
        &self.interactions
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Sender for events produced on other threads or tasks. Queued events
    /// are applied at the start of the next [`update`](Self::update).
    #[must_use]
    pub fn event_sender(&self) -> flume::Sender<RuntimeEvent> {
        self.events_tx.clone()
    }

    // ========================================================================
    // Event handling
    // ========================================================================

    /// Routes a found/lost event to every controller bound to its anchor.
    ///
    /// Returns how many controllers changed state.
    pub fn handle_tracking_event(&mut self, event: TrackingEvent) -> usize {
        let anchor_index = event.anchor_index();
        let Some(positions) = self.routes.get(&anchor_index) else {
            log::warn!("Tracking event for unbound anchor {anchor_index} ignored");
            return 0;
        };

        let mut changed = 0;
        for &position in positions {
            if self.controllers[position].handle(event, &mut self.stage) {
                changed += 1;
            }
        }
        changed
    }

    /// Forwards a gesture to the attached interactions.
    ///
    /// Returns how many interactions accepted it.
    pub fn handle_gesture(&mut self, gesture: Gesture) -> usize {
        self.interactions.handle_gesture(gesture, &mut self.stage)
    }

    pub fn handle_event(&mut self, event: RuntimeEvent) {
        match event {
            RuntimeEvent::Tracking(event) => {
                self.handle_tracking_event(event);
            }
            RuntimeEvent::Gesture(gesture) => {
                self.handle_gesture(gesture);
            }
        }
    }

    // ========================================================================
    // Frame loop
    // ========================================================================

    /// Processes one rendered frame.
    ///
    /// Applies queued events, advances every registered animation by `dt`
    /// regardless of anchor visibility, steps the interactions and refreshes
    /// changed model matrices.
    pub fn update(&mut self, dt: f32) -> FrameState {
        let pending: Vec<RuntimeEvent> = self.events_rx.try_iter().collect();
        for event in pending {
            self.handle_event(event);
        }

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("Invalid frame delta {dt}, treating as 0");
            0.0
        };

        self.scheduler.tick(&mut self.stage, dt);
        self.interactions.tick(&mut self.stage);
        self.stage.update_matrices();

        self.time += dt;
        self.frame_count += 1;

        FrameState {
            time: self.time,
            dt,
            frame_count: self.frame_count,
        }
    }
}
