//! Performance counters for the snap system.

use std::time::Duration;

use serde::Serialize;

/// Monotonic counters, reset only on request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Completed drag gestures.
    pub drags: u64,

    /// Successful snaps.
    pub snaps: u64,

    /// Successful single-window restores.
    pub restores: u64,

    /// Times the zone picker was shown.
    pub overlay_shows: u64,

    /// Accumulated drag time.
    pub total_drag_time: Duration,
}

impl PerformanceMetrics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            drags: 0,
            snaps: 0,
            restores: 0,
            overlay_shows: 0,
            total_drag_time: Duration::ZERO,
        }
    }

    pub fn record_drag(&mut self, duration: Duration) {
        self.drags += 1;
        self.total_drag_time += duration;
    }

    pub const fn record_snap(&mut self) { self.snaps += 1; }

    pub const fn record_restore(&mut self) { self.restores += 1; }

    pub const fn record_overlay_show(&mut self) { self.overlay_shows += 1; }

    /// Mean drag duration, zero before the first drag.
    #[must_use]
    pub fn average_drag_time(&self) -> Duration {
        u32::try_from(self.drags)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_drag_time / n)
    }

    pub fn reset(&mut self) { *self = Self::new(); }
}
