//! Headless Folio player.
//!
//! Brings up a deployment from its JSON configuration, loads the content
//! pairs from disk and replays a scripted tracking session: each bound
//! anchor is found, tapped and lost in turn while the frame loop runs at
//! roughly 60 Hz.
//!
//! ```text
//! folio_player <config.json> [locale]
//! ```
//!
//! Model and audio paths in the configuration are resolved relative to the
//! configuration file. Set `RUST_LOG=debug` to see every binding.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use folio::assets::FileContentProvider;
use folio::errors::TrackingError;
use folio::utils::FrameClock;
use folio::{
    FolioConfig, Gesture, LifecycleState, RuntimeEvent, StartupOrchestrator, TrackingEvent,
    TrackingProvider,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const FRAMES_PER_VISIT: u64 = 90;

/// Stands in for the camera: accepts every anchor and replays a fixed
/// found/lost sequence once started.
struct ScriptedTracker {
    anchor_count: Option<usize>,
    anchors: Vec<usize>,
    started: bool,
}

impl ScriptedTracker {
    fn new(anchor_count: Option<usize>) -> Self {
        Self {
            anchor_count,
            anchors: Vec::new(),
            started: false,
        }
    }

    /// One visit per distinct anchor, as `(frame, event)` in frame order.
    fn script(&self) -> Vec<(u64, RuntimeEvent)> {
        let mut anchors = self.anchors.clone();
        anchors.sort_unstable();
        anchors.dedup();

        let mut events = Vec::with_capacity(anchors.len() * 3);
        for (visit, anchor) in anchors.into_iter().enumerate() {
            let found_at = visit as u64 * FRAMES_PER_VISIT + 10;
            events.push((found_at, TrackingEvent::Found(anchor).into()));
            events.push((found_at + 20, Gesture::ActivateAll.into()));
            events.push((found_at + 60, TrackingEvent::Lost(anchor).into()));
        }
        events
    }
}

impl TrackingProvider for ScriptedTracker {
    fn anchor_count(&self) -> Option<usize> {
        self.anchor_count
    }

    fn create_anchor(&mut self, anchor_index: usize) -> Result<(), TrackingError> {
        if self.anchor_count.is_some_and(|count| anchor_index >= count) {
            return Err(TrackingError::UnknownAnchor(anchor_index));
        }
        self.anchors.push(anchor_index);
        Ok(())
    }

    fn start(&mut self) -> Result<(), TrackingError> {
        if self.started {
            return Err(TrackingError::StartFailed("already started".into()));
        }
        self.started = true;
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path = PathBuf::from(
        args.next()
            .context("usage: folio_player <config.json> [locale]")?,
    );

    let config = FolioConfig::load(&config_path)?;
    let locale = match args.next() {
        Some(locale) => locale,
        None => config
            .locales()
            .first()
            .map(|locale| (*locale).to_string())
            .context("configuration declares no content variants")?,
    };
    let pairs = config.pairs(&locale)?;
    log::info!("Locale '{locale}': {} content pairs", pairs.len());

    let content = FileContentProvider::new(&config_path);
    let mut tracker = ScriptedTracker::new(config.anchor_count);
    let orchestrator = StartupOrchestrator::from_config(&config);

    let mut runtime = orchestrator
        .run(&pairs, &content, &mut tracker)
        .await
        .context("startup failed")?;

    let script = tracker.script();
    let last_frame = script.last().map_or(0, |(frame, _)| *frame) + 30;
    let mut script = script.into_iter().peekable();
    let events = runtime.event_sender();

    let mut clock = FrameClock::new();
    let mut interval = tokio::time::interval(FRAME_INTERVAL);

    for frame in 0..=last_frame {
        interval.tick().await;

        while let Some((_, event)) = script.next_if(|(at, _)| *at == frame) {
            events.send(event)?;
        }

        let state = runtime.update(clock.tick());

        if state.frame_count % 60 == 0 {
            let visible = runtime
                .controllers()
                .iter()
                .filter(|c| c.state() == LifecycleState::Visible)
                .count();
            log::info!(
                "t = {:.2}s, frame {}, {visible}/{} contents visible",
                state.time,
                state.frame_count,
                runtime.controllers().len()
            );
        }
    }

    log::info!("Session finished after {:.2}s", clock.elapsed().as_secs_f32());
    Ok(())
}
