//! Adaptive window-position polling during a drag.
//!
//! Some hosts move a window without delivering pointer moves for every frame
//! (e.g. while the header is grabbed by the native drag handler). The runtime
//! therefore also samples the dragged window's position on a timer. The timer
//! interval follows the drag speed so slow drags cost almost nothing.
//!
//! Speed is measured in pixels per millisecond between consecutive samples:
//!
//! | speed     | interval |
//! |-----------|----------|
//! | > 2.0     | 50ms     |
//! | > 0.5     | 100ms    |
//! | > 0.1     | 200ms    |
//! | otherwise | 500ms    |

use std::time::{Duration, Instant};

use crate::modules::snap::constants::polling::{
    FAST_INTERVAL_MS, FAST_SPEED, IDLE_INTERVAL_MS, MEDIUM_INTERVAL_MS, MEDIUM_SPEED,
    RESTART_TOLERANCE_MS, SLOW_INTERVAL_MS, SLOW_SPEED,
};
use crate::modules::snap::state::Point;

/// Interval used when a drag starts and when the window is barely moving.
pub const INITIAL_INTERVAL: Duration = Duration::from_millis(IDLE_INTERVAL_MS);

/// Poll interval for a drag speed in px/ms.
#[must_use]
pub fn interval_for_speed(speed: f64) -> Duration {
    let ms = if speed > FAST_SPEED {
        FAST_INTERVAL_MS
    } else if speed > MEDIUM_SPEED {
        MEDIUM_INTERVAL_MS
    } else if speed > SLOW_SPEED {
        SLOW_INTERVAL_MS
    } else {
        IDLE_INTERVAL_MS
    };
    Duration::from_millis(ms)
}

/// Returns true if switching from `current` to `target` is worth a timer restart.
#[must_use]
pub fn needs_restart(current: Duration, target: Duration) -> bool {
    current.abs_diff(target) > Duration::from_millis(RESTART_TOLERANCE_MS)
}

/// Speed-adaptive poll interval for one drag gesture.
#[derive(Debug)]
pub struct AdaptivePoller {
    interval: Duration,
    last_sample: Option<(Point, Instant)>,
    restarts: u32,
}

impl Default for AdaptivePoller {
    fn default() -> Self { Self::new() }
}

impl AdaptivePoller {
    /// Create a poller at the initial interval.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interval: INITIAL_INTERVAL,
            last_sample: None,
            restarts: 0,
        }
    }

    /// Current poll interval.
    #[must_use]
    pub const fn interval(&self) -> Duration { self.interval }

    /// Number of timer restarts since the last `reset`.
    #[must_use]
    pub const fn restarts(&self) -> u32 { self.restarts }

    /// Forget all samples and return to the initial interval.
    pub fn reset(&mut self) { *self = Self::new(); }

    /// Feed a position sample.
    ///
    /// Returns the new interval when the timer should be restarted. The first
    /// sample only establishes a baseline.
    pub fn sample(&mut self, position: Point, now: Instant) -> Option<Duration> {
        let (previous, at) = self.last_sample.replace((position, now))?;

        let elapsed_ms = now.saturating_duration_since(at).as_secs_f64() * 1000.0;
        if elapsed_ms <= 0.0 {
            return None;
        }

        let speed = previous.distance_to(position) / elapsed_ms;
        let target = interval_for_speed(speed);
        if !needs_restart(self.interval, target) {
            return None;
        }

        tracing::trace!(
            speed,
            from_ms = self.interval.as_millis(),
            to_ms = target.as_millis(),
            "snap: poll interval changed"
        );
        self.interval = target;
        self.restarts += 1;
        Some(target)
    }
}

// ============================================================================
// Tests
// ============================================================================
