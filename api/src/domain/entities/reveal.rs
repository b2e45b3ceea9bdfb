//! Viewport reveal state machine and counter easing
//!
//! Rendering-independent: callers feed visibility changes and timestamps,
//! and read back the phase and interpolated counter values.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Default counter animation length
#[allow(dead_code)]
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Delay between successive counters starting
#[allow(dead_code)]
pub const COUNTER_STAGGER: Duration = Duration::from_millis(200);

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    Hidden,
    Revealing,
    Revealed,
}

/// A section that reveals once, the first time it becomes visible
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Reveal {
    phase: RevealPhase,
    started_at: Option<Instant>,
    duration: Duration,
}

#[allow(dead_code)]
impl Reveal {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: RevealPhase::Hidden,
            started_at: None,
            duration,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Visibility callback. Only the first `visible == true` has an effect.
    pub fn on_visibility(&mut self, visible: bool, now: Instant) {
        if visible && self.phase == RevealPhase::Hidden {
            self.phase = RevealPhase::Revealing;
            self.started_at = Some(now);
        }
    }

    /// Advance time; moves Revealing to Revealed once the duration elapsed.
    pub fn tick(&mut self, now: Instant) -> RevealPhase {
        if self.phase == RevealPhase::Revealing && self.progress(now) >= 1.0 {
            self.phase = RevealPhase::Revealed;
        }
        self.phase
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f64 {
        match (self.phase, self.started_at) {
            (RevealPhase::Hidden, _) | (_, None) => 0.0,
            (RevealPhase::Revealed, _) => 1.0,
            (RevealPhase::Revealing, Some(start)) => {
                linear_progress(now.saturating_duration_since(start), self.duration)
            }
        }
    }

    /// Counter value `index` positions into a staggered row.
    pub fn counter(&self, target: u64, index: u32, now: Instant) -> u64 {
        let Some(start) = self.started_at else {
            return 0;
        };
        let begins = start + counter_start_delay(index);
        counter_value(target, now.saturating_duration_since(begins), self.duration)
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(COUNTER_DURATION)
    }
}

/// `1 - (1 - p)^4`, with `p` clamped to `[0, 1]`
#[allow(dead_code)]
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Eased counter value at `elapsed`; exactly `target` once complete.
#[allow(dead_code)]
pub fn counter_value(target: u64, elapsed: Duration, duration: Duration) -> u64 {
    let progress = linear_progress(elapsed, duration);
    if progress >= 1.0 {
        return target;
    }
    (target as f64 * ease_out_quart(progress)).floor() as u64
}

#[allow(dead_code)]
pub fn counter_start_delay(index: u32) -> Duration {
    COUNTER_STAGGER * index
}

#[allow(dead_code)]
fn linear_progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}
