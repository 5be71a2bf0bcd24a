//! Drag tracking for the snap overlay.
//!
//! Turns raw pointer events (and periodic window position samples) into
//! [`DragIntent`]s. The tracker never touches the host or the overlay itself;
//! the runtime hands its output to the controller.
//!
//! # Flow
//!
//! 1. Pointer down on a window's drag handle arms a potential drag
//! 2. Moving further than the drag threshold starts the drag and the poll timer
//! 3. Moving (or the window being moved) above the edge trigger shows the overlay
//! 4. Inside the overlay band the zone under the pointer is highlighted
//! 5. Moving below the band hides the overlay again
//! 6. Releasing over a zone drops the window into it; the drag ends either way

use std::time::Instant;

use uuid::Uuid;

use super::poller::{AdaptivePoller, INITIAL_INTERVAL};
use super::types::{DragIntent, PointerEvent, PointerKind, PollCommand, TrackerOutput};
use crate::config::SnapConfig;
use crate::modules::snap::constants::drag::{DRAG_THRESHOLD, EDGE_TRIGGER, OVERLAY_BAND};
use crate::modules::snap::state::{Point, WindowHandle, ZoneRef};

/// Resolves the picker zone under a point.
///
/// A lookup that finds nothing (including one racing a viewport resize)
/// returns `None`.
pub trait ZoneLocator {
    fn zone_at(&self, point: Point) -> Option<ZoneRef>;
}

/// Pointer thresholds used by the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragThresholds {
    /// Travel needed before a press becomes a drag.
    pub drag_threshold: f64,

    /// The overlay is revealed above this y coordinate.
    pub edge_trigger: f64,

    /// The overlay is hidden below this y coordinate.
    pub overlay_band: f64,
}

impl Default for DragThresholds {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD,
            edge_trigger: EDGE_TRIGGER,
            overlay_band: OVERLAY_BAND,
        }
    }
}

impl From<&SnapConfig> for DragThresholds {
    fn from(config: &SnapConfig) -> Self {
        Self {
            drag_threshold: config.drag_threshold,
            edge_trigger: config.edge_trigger,
            overlay_band: config.overlay_band,
        }
    }
}

/// Phase of the current gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No button pressed on a drag handle.
    #[default]
    Idle,

    /// Pressed on a drag handle but not moved far enough yet.
    PotentialDrag { window: WindowHandle },

    /// Actively dragging a window.
    Dragging {
        window: WindowHandle,
        gesture: Uuid,
    },
}

/// Pointer state machine producing drag intents.
#[derive(Debug)]
pub struct DragTracker {
    thresholds: DragThresholds,
    phase: DragPhase,
    origin: Point,
    started: Option<Instant>,
    overlay_shown: bool,
    hovered: Option<ZoneRef>,
    /// Set when the overlay appears; the controller highlights on its own then.
    hover_stale: bool,
    poller: AdaptivePoller,
}

impl Default for DragTracker {
    fn default() -> Self { Self::new(DragThresholds::default()) }
}

impl DragTracker {
    /// Create an idle tracker.
    #[must_use]
    pub const fn new(thresholds: DragThresholds) -> Self {
        Self {
            thresholds,
            phase: DragPhase::Idle,
            origin: Point::new(0.0, 0.0),
            started: None,
            overlay_shown: false,
            hovered: None,
            hover_stale: false,
            poller: AdaptivePoller::new(),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub const fn phase(&self) -> DragPhase { self.phase }

    #[must_use]
    pub const fn is_dragging(&self) -> bool { matches!(self.phase, DragPhase::Dragging { .. }) }

    /// The window being dragged, once the drag has started.
    #[must_use]
    pub const fn active_window(&self) -> Option<WindowHandle> {
        match self.phase {
            DragPhase::Dragging { window, .. } => Some(window),
            _ => None,
        }
    }

    /// Whether the tracker believes the overlay is visible.
    #[must_use]
    pub const fn overlay_shown(&self) -> bool { self.overlay_shown }

    #[must_use]
    pub const fn hovered(&self) -> Option<&ZoneRef> { self.hovered.as_ref() }

    #[must_use]
    pub const fn poller(&self) -> &AdaptivePoller { &self.poller }

    // ========================================================================
    // Event Handling
    // ========================================================================

    /// Feed a pointer event.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        locator: &impl ZoneLocator,
    ) -> TrackerOutput {
        match event.kind {
            PointerKind::Down => self.on_down(event),
            PointerKind::Move => self.on_move(event, locator),
            PointerKind::Up => self.on_up(event, locator),
            PointerKind::Cancel => self.on_cancel(event),
        }
    }

    /// Feed a sample of the dragged window's top-left corner.
    pub fn handle_poll(&mut self, window_origin: Option<Point>, now: Instant) -> TrackerOutput {
        let mut output = TrackerOutput::none();
        let DragPhase::Dragging { window, .. } = self.phase else {
            return output;
        };
        let Some(origin) = window_origin else {
            return output;
        };

        if !self.overlay_shown && origin.y < self.thresholds.edge_trigger {
            tracing::debug!(window, y = origin.y, "snap: window reached top edge");
            self.overlay_shown = true;
            self.hover_stale = true;
            output.push(DragIntent::Show(window));
        }

        if let Some(interval) = self.poller.sample(origin, now) {
            output.poll = Some(PollCommand::Restart(interval));
        }
        output
    }

    /// Drop any gesture in progress without emitting intents.
    pub fn reset(&mut self) {
        if self.phase != DragPhase::Idle {
            tracing::debug!(phase = ?self.phase, "snap: drag tracker reset");
        }
        self.phase = DragPhase::Idle;
        self.started = None;
        self.overlay_shown = false;
        self.hovered = None;
        self.hover_stale = false;
        self.poller.reset();
    }

    fn on_down(&mut self, event: &PointerEvent) -> TrackerOutput {
        if self.is_dragging() {
            return TrackerOutput::none();
        }

        match event.target.draggable_window() {
            Some(window) => {
                tracing::trace!(window, "snap: potential drag");
                self.phase = DragPhase::PotentialDrag { window };
                self.origin = event.position;
            }
            None => self.phase = DragPhase::Idle,
        }
        TrackerOutput::none()
    }

    fn on_move(&mut self, event: &PointerEvent, locator: &impl ZoneLocator) -> TrackerOutput {
        let mut output = TrackerOutput::none();

        match self.phase {
            DragPhase::Idle => return output,
            DragPhase::PotentialDrag { window } => {
                if self.origin.distance_to(event.position) <= self.thresholds.drag_threshold {
                    return output;
                }

                let gesture = Uuid::now_v7();
                tracing::debug!(window, %gesture, "snap: drag started");
                self.phase = DragPhase::Dragging { window, gesture };
                self.started = Some(event.timestamp);
                self.poller.reset();
                output.push(DragIntent::DragStarted(window));
                output.poll = Some(PollCommand::Start(INITIAL_INTERVAL));
            }
            DragPhase::Dragging { .. } => {}
        }

        let DragPhase::Dragging { window, .. } = self.phase else {
            return output;
        };
        let y = event.position.y;

        if !self.overlay_shown {
            if y < self.thresholds.edge_trigger {
                self.overlay_shown = true;
                self.hover_stale = true;
                output.push(DragIntent::Show(window));
            }
        } else if y > self.thresholds.overlay_band {
            self.overlay_shown = false;
            self.hovered = None;
            output.push(DragIntent::Hide);
        } else {
            let zone = locator.zone_at(event.position);
            if self.hover_stale || zone != self.hovered {
                self.hover_stale = false;
                output.push(zone.clone().map_or(DragIntent::ClearHover, DragIntent::HoverZone));
                self.hovered = zone;
            }
        }
        output
    }

    fn on_up(&mut self, event: &PointerEvent, locator: &impl ZoneLocator) -> TrackerOutput {
        let mut output = TrackerOutput::none();
        let DragPhase::Dragging { window, gesture } = self.phase else {
            self.phase = DragPhase::Idle;
            return output;
        };

        // zones only exist while the picker is visible
        if self.overlay_shown {
            match locator.zone_at(event.position) {
                Some(zone) => {
                    tracing::debug!(window, %gesture, %zone, "snap: dropped on zone");
                    output.push(DragIntent::Drop(window, zone));
                }
                None => tracing::debug!(window, %gesture, "snap: released outside zones"),
            }
        }

        self.finish(window, event.timestamp, &mut output);
        output
    }

    fn on_cancel(&mut self, event: &PointerEvent) -> TrackerOutput {
        let mut output = TrackerOutput::none();
        if let DragPhase::Dragging { window, gesture } = self.phase {
            tracing::debug!(window, %gesture, "snap: drag cancelled");
            self.finish(window, event.timestamp, &mut output);
        } else {
            self.phase = DragPhase::Idle;
        }
        output
    }

    fn finish(&mut self, window: WindowHandle, at: Instant, output: &mut TrackerOutput) {
        let duration = self.started.map(|s| at.saturating_duration_since(s)).unwrap_or_default();
        output.push(DragIntent::Hide);
        output.push(DragIntent::DragEnded { window, duration });
        output.poll = Some(PollCommand::Stop);
        self.reset();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::modules::snap::events::{PointerRegion, PointerTarget};

    /// Reports a fixed zone for every point in the overlay band.
    struct BandLocator(Option<ZoneRef>);

    impl ZoneLocator for BandLocator {
        fn zone_at(&self, point: Point) -> Option<ZoneRef> {
            if point.y <= OVERLAY_BAND { self.0.clone() } else { None }
        }
    }

    /// Reports `left` on the left half of a 1000px wide band and `right` on the other.
    struct SplitLocator;

    impl ZoneLocator for SplitLocator {
        fn zone_at(&self, point: Point) -> Option<ZoneRef> {
            if point.y > 100.0 {
                None
            } else if point.x < 500.0 {
                Some(ZoneRef::new("split-2", "left"))
            } else {
                Some(ZoneRef::new("split-2", "right"))
            }
        }
    }

    struct Gesture {
        tracker: DragTracker,
        t0: Instant,
    }

    impl Gesture {
        fn new() -> Self {
            Self {
                tracker: DragTracker::default(),
                t0: Instant::now(),
            }
        }

        fn event(
            &self,
            kind: PointerKind,
            x: f64,
            y: f64,
            ms: u64,
            target: PointerTarget,
        ) -> PointerEvent {
            PointerEvent::new(kind, Point::new(x, y), self.t0 + Duration::from_millis(ms), target)
        }

        fn down(&mut self, x: f64, y: f64) -> TrackerOutput {
            let ev = self.event(PointerKind::Down, x, y, 0, PointerTarget::drag_handle(7));
            self.tracker.handle_pointer(&ev, &BandLocator(None))
        }

        fn step(
            &mut self,
            kind: PointerKind,
            x: f64,
            y: f64,
            ms: u64,
            locator: &impl ZoneLocator,
        ) -> TrackerOutput {
            let ev = self.event(kind, x, y, ms, PointerTarget::default());
            self.tracker.handle_pointer(&ev, locator)
        }
    }

    fn shows(output: &TrackerOutput) -> usize {
        output.intents.iter().filter(|i| matches!(i, DragIntent::Show(_))).count()
    }

    #[test]
    fn test_down_on_control_never_arms() {
        let mut tracker = DragTracker::default();
        let t0 = Instant::now();
        let down = PointerEvent::new(
            PointerKind::Down,
            Point::new(10.0, 10.0),
            t0,
            PointerTarget::control(7),
        );
        tracker.handle_pointer(&down, &BandLocator(None));
        assert_eq!(tracker.phase(), DragPhase::Idle);

        let mv = PointerEvent::new(
            PointerKind::Move,
            Point::new(300.0, 2.0),
            t0,
            PointerTarget::default(),
        );
        let output = tracker.handle_pointer(&mv, &BandLocator(None));
        assert!(output.is_empty());
    }

    #[test]
    fn test_down_on_content_stays_idle() {
        let mut tracker = DragTracker::default();
        let target = PointerTarget {
            window: Some(3),
            region: PointerRegion::Content,
        };
        let down =
            PointerEvent::new(PointerKind::Down, Point::new(10.0, 10.0), Instant::now(), target);
        tracker.handle_pointer(&down, &BandLocator(None));
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_small_move_stays_potential() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        let output = g.step(PointerKind::Move, 102.0, 402.0, 10, &BandLocator(None));
        assert!(output.is_empty());
        assert_eq!(g.tracker.phase(), DragPhase::PotentialDrag { window: 7 });
    }

    #[test]
    fn test_release_before_threshold_emits_nothing() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        let output = g.step(PointerKind::Up, 101.0, 400.0, 30, &BandLocator(None));
        assert!(output.is_empty());
        assert_eq!(g.tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_crossing_threshold_starts_drag_and_poll() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        let output = g.step(PointerKind::Move, 110.0, 400.0, 10, &BandLocator(None));

        assert_eq!(output.intents.as_slice(), &[DragIntent::DragStarted(7)]);
        assert_eq!(output.poll, Some(PollCommand::Start(INITIAL_INTERVAL)));
        assert!(g.tracker.is_dragging());
        assert_eq!(g.tracker.active_window(), Some(7));
    }

    #[test]
    fn test_show_emitted_once_while_above_trigger() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 300.0, 10, &BandLocator(None));

        let mut total = 0;
        for (i, y) in [5.0, 4.0, 3.0, 8.0, 2.0].into_iter().enumerate() {
            total += shows(&g.step(PointerKind::Move, 100.0, y, 20 + i as u64, &BandLocator(None)));
        }
        assert_eq!(total, 1);
        assert!(g.tracker.overlay_shown());
    }

    #[test]
    fn test_leaving_band_hides_and_reentry_shows_again() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 5.0, 10, &BandLocator(None));

        let hide = g.step(PointerKind::Move, 100.0, 260.0, 20, &BandLocator(None));
        assert_eq!(hide.intents.as_slice(), &[DragIntent::Hide]);
        assert!(!g.tracker.overlay_shown());

        // inside the band but below the trigger: nothing
        assert!(g.step(PointerKind::Move, 100.0, 100.0, 30, &BandLocator(None)).is_empty());

        let show = g.step(PointerKind::Move, 100.0, 5.0, 40, &BandLocator(None));
        assert_eq!(show.intents.as_slice(), &[DragIntent::Show(7)]);
    }

    #[test]
    fn test_hover_changes_emit_once() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 5.0, 10, &SplitLocator);

        let left = ZoneRef::new("split-2", "left");
        let right = ZoneRef::new("split-2", "right");

        let out = g.step(PointerKind::Move, 100.0, 50.0, 20, &SplitLocator);
        assert_eq!(out.intents.as_slice(), &[DragIntent::HoverZone(left.clone())]);

        assert!(g.step(PointerKind::Move, 120.0, 60.0, 30, &SplitLocator).is_empty());

        let out = g.step(PointerKind::Move, 700.0, 60.0, 40, &SplitLocator);
        assert_eq!(out.intents.as_slice(), &[DragIntent::HoverZone(right)]);

        let out = g.step(PointerKind::Move, 700.0, 150.0, 50, &SplitLocator);
        assert_eq!(out.intents.as_slice(), &[DragIntent::ClearHover]);
        assert_eq!(g.tracker.hovered(), None);

        let out = g.step(PointerKind::Move, 100.0, 60.0, 60, &SplitLocator);
        assert_eq!(out.intents.as_slice(), &[DragIntent::HoverZone(left)]);
    }

    #[test]
    fn test_release_on_zone_drops_then_hides() {
        let zone = ZoneRef::new("split-2", "left");
        let locator = BandLocator(Some(zone.clone()));

        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 5.0, 100, &locator);
        let out = g.step(PointerKind::Up, 100.0, 40.0, 600, &locator);

        assert_eq!(out.intents.as_slice(), &[
            DragIntent::Drop(7, zone),
            DragIntent::Hide,
            DragIntent::DragEnded {
                window: 7,
                duration: Duration::from_millis(500),
            },
        ]);
        assert_eq!(out.poll, Some(PollCommand::Stop));
        assert_eq!(g.tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_release_outside_zone_has_no_drop() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 5.0, 10, &BandLocator(None));
        let out = g.step(PointerKind::Up, 100.0, 40.0, 20, &BandLocator(None));

        assert!(!out.intents.iter().any(|i| matches!(i, DragIntent::Drop(..))));
        assert!(out.intents.contains(&DragIntent::Hide));
    }

    #[test]
    fn test_release_without_overlay_has_no_drop() {
        let locator = BandLocator(Some(ZoneRef::full()));
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 300.0, 10, &locator);
        let out = g.step(PointerKind::Up, 100.0, 40.0, 20, &locator);

        assert_eq!(out.intents.len(), 2);
        assert_eq!(out.intents[0], DragIntent::Hide);
    }

    #[test]
    fn test_cancel_ends_without_drop() {
        let locator = BandLocator(Some(ZoneRef::full()));
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 5.0, 10, &locator);
        let out = g.step(PointerKind::Cancel, 100.0, 40.0, 20, &locator);

        assert_eq!(out.intents[0], DragIntent::Hide);
        assert!(matches!(out.intents[1], DragIntent::DragEnded { window: 7, .. }));
        assert_eq!(out.poll, Some(PollCommand::Stop));
        assert_eq!(g.tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_poll_near_top_edge_shows() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 300.0, 10, &BandLocator(None));

        let at = g.t0 + Duration::from_millis(500);
        let out = g.tracker.handle_poll(Some(Point::new(50.0, 4.0)), at);
        assert_eq!(out.intents.as_slice(), &[DragIntent::Show(7)]);

        let at = g.t0 + Duration::from_millis(1000);
        let out = g.tracker.handle_poll(Some(Point::new(50.0, 3.0)), at);
        assert_eq!(shows(&out), 0);
    }

    #[test]
    fn test_first_move_after_poll_show_resyncs_hover() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 40.0, 10, &SplitLocator);

        let at = g.t0 + Duration::from_millis(500);
        g.tracker.handle_poll(Some(Point::new(50.0, 4.0)), at);
        assert_eq!(g.tracker.hovered(), None);

        // the controller may already highlight a zone; a gap must clear it
        let out = g.step(PointerKind::Move, 100.0, 200.0, 520, &SplitLocator);
        assert_eq!(out.intents.as_slice(), &[DragIntent::ClearHover]);

        assert!(g.step(PointerKind::Move, 110.0, 210.0, 540, &SplitLocator).is_empty());

        let out = g.step(PointerKind::Move, 100.0, 40.0, 560, &SplitLocator);
        assert_eq!(out.intents.as_slice(), &[DragIntent::HoverZone(ZoneRef::new("split-2", "left"))]);
    }

    #[test]
    fn test_poll_ignored_when_idle() {
        let mut tracker = DragTracker::default();
        let out = tracker.handle_poll(Some(Point::new(0.0, 0.0)), Instant::now());
        assert!(out.is_empty());
    }

    #[test]
    fn test_fast_poll_restarts_timer() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 300.0, 10, &BandLocator(None));

        g.tracker.handle_poll(Some(Point::new(0.0, 300.0)), g.t0 + Duration::from_millis(100));
        let at = g.t0 + Duration::from_millis(200);
        let out = g.tracker.handle_poll(Some(Point::new(1000.0, 300.0)), at);
        assert_eq!(out.poll, Some(PollCommand::Restart(Duration::from_millis(50))));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut g = Gesture::new();
        g.down(100.0, 400.0);
        g.step(PointerKind::Move, 100.0, 5.0, 10, &BandLocator(None));
        g.tracker.reset();

        assert_eq!(g.tracker.phase(), DragPhase::Idle);
        assert!(!g.tracker.overlay_shown());
        assert_eq!(g.tracker.poller().interval(), INITIAL_INTERVAL);
    }

    #[test]
    fn test_thresholds_from_config() {
        let config = SnapConfig {
            edge_trigger: 20.0,
            ..SnapConfig::default()
        };
        let thresholds = DragThresholds::from(&config);
        assert_eq!(thresholds.edge_trigger, 20.0);
        assert_eq!(thresholds.overlay_band, OVERLAY_BAND);
    }
}
