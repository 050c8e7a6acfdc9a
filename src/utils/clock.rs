use std::time::{Duration, Instant};

/// Measures the delta fed to [`ContentRuntime::update`] from wall-clock time.
///
/// The first tick reports zero, so content loaded long before the first
/// frame does not jump ahead. Later ticks report the time since the previous
/// one and never go negative.
///
/// [`ContentRuntime::update`]: crate::ContentRuntime::update
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    last: Option<Instant>,
    elapsed: Duration,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Seconds between the previous tick and `now`.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last = Some(self.last.map_or(now, |last| last.max(now)));
        self.elapsed += delta;
        delta.as_secs_f32()
    }

    /// Sum of every reported delta.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
