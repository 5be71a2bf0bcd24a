//! Internal constants for snap layout tuning.
//!
//! This module centralizes the magic numbers used throughout the snap system.
//! Thresholds that users may reasonably want to change (edge trigger, overlay
//! band, minimum viewport, drag threshold) also have a configuration surface in
//! [`crate::config::SnapConfig`]; the values here are the defaults.
//!
//! # Organization
//!
//! - `zone` - Minimum zone sizes and column/row gates for layout generation
//! - `viewport` - Viewport limits for snapping and clamping
//! - `drag` - Pointer thresholds for the drag tracker
//! - `polling` - Adaptive position polling tiers
//! - `picker` - Zone picker thumbnail geometry

/// Zone sizing constants used by the layout generator.
pub mod zone {
    /// Minimum usable zone width (pixels).
    pub const MIN_ZONE_WIDTH: f64 = 300.0;

    /// Minimum usable zone height (pixels).
    pub const MIN_ZONE_HEIGHT: f64 = 200.0;

    /// Column counts offered as split layouts.
    pub const COLUMN_COUNTS: [u32; 4] = [2, 3, 4, 6];

    /// Row counts offered as split layouts.
    pub const ROW_COUNTS: [u32; 2] = [2, 3];

    /// Viewport width required before four columns are offered.
    pub const FOUR_COLUMN_MIN_WIDTH: f64 = 1920.0;

    /// Viewport width required before six columns are offered.
    pub const SIX_COLUMN_MIN_WIDTH: f64 = 2560.0;

    /// Viewport height required before three rows are offered.
    pub const THREE_ROW_MIN_HEIGHT: f64 = 1080.0;

    /// Identifier of the single-cell layout and of its only zone.
    pub const FULL_ID: &str = "full";
}

/// Viewport limits.
pub mod viewport {
    /// Minimum viewport width for snapping (inclusive).
    pub const MIN_SNAP_WIDTH: f64 = 800.0;

    /// Minimum viewport height for snapping (inclusive).
    pub const MIN_SNAP_HEIGHT: f64 = 600.0;

    /// Portion of a window that must stay on screen after clamping (pixels).
    pub const OFFSCREEN_MARGIN: f64 = 100.0;
}

/// Drag detection thresholds.
pub mod drag {
    /// Pointer travel required before a press becomes a drag (pixels).
    pub const DRAG_THRESHOLD: f64 = 3.0;

    /// Distance from the top edge that reveals the overlay (pixels).
    pub const EDGE_TRIGGER: f64 = 10.0;

    /// Height of the overlay band; moving below it hides the overlay (pixels).
    pub const OVERLAY_BAND: f64 = 250.0;
}

/// Adaptive polling tiers for the dragged window position.
pub mod polling {
    /// Interval used for very fast drags (ms).
    pub const FAST_INTERVAL_MS: u64 = 50;

    /// Interval used for fast drags (ms).
    pub const MEDIUM_INTERVAL_MS: u64 = 100;

    /// Interval used for slow drags (ms).
    pub const SLOW_INTERVAL_MS: u64 = 200;

    /// Interval used for idle or nearly idle drags (ms).
    pub const IDLE_INTERVAL_MS: u64 = 500;

    /// Speed above which the fast interval applies (px/ms).
    pub const FAST_SPEED: f64 = 2.0;

    /// Speed above which the medium interval applies (px/ms).
    pub const MEDIUM_SPEED: f64 = 0.5;

    /// Speed above which the slow interval applies (px/ms).
    pub const SLOW_SPEED: f64 = 0.1;

    /// The poll timer is only restarted when the interval moves by more than this (ms).
    pub const RESTART_TOLERANCE_MS: u64 = 25;
}

/// Zone picker geometry defaults.
pub mod picker {
    /// Width of one layout thumbnail (pixels).
    pub const THUMBNAIL_WIDTH: f64 = 120.0;

    /// Gap between thumbnails (pixels).
    pub const THUMBNAIL_GAP: f64 = 12.0;

    /// Padding between the top edge and the first thumbnail row (pixels).
    pub const TOP_PADDING: f64 = 16.0;

    /// Inset between neighbouring zone cells inside a thumbnail (pixels).
    pub const CELL_INSET: f64 = 2.0;
}
