//! The snap controller.
//!
//! Orchestrates the layout catalog, the zone picker, the registry and the
//! overlay against the host. Everything here is synchronous except
//! [`SnapController::restore_all`], which may have to recreate windows.
//!
//! # Submodules
//!
//! - `snap` - snapping, restoring and restore-all

mod snap;

use eyeball::Subscriber;
use eyeball_im::VectorSubscriber;
pub use snap::{RestoreSummary, clamp_to_viewport};

use super::events::{DragIntent, ZoneLocator};
use super::host::{HostWindow, WindowHost};
use super::layout::{Layout, LayoutCatalog, ZonePicker};
use super::metrics::PerformanceMetrics;
use super::overlay::{Overlay, OverlayState};
use super::state::{
    HeaderAffordance, Point, Rect, SnapRecord, SnapRegistry, Viewport, WindowHandle,
    WindowIdentity, ZoneRef,
};
use crate::config::SnapConfig;

/// Coordinates snapping for every window of one host.
pub struct SnapController<H: WindowHost> {
    host: H,
    config: SnapConfig,
    registry: SnapRegistry,
    catalog: LayoutCatalog,
    picker: ZonePicker,
    overlay: Overlay,
    last_pointer: Option<Point>,
    metrics: PerformanceMetrics,
}

impl<H: WindowHost> SnapController<H> {
    /// Create a controller and generate layouts for the host's current viewport.
    pub fn new(host: H, config: SnapConfig) -> Self {
        let viewport = host.viewport();
        let mut controller = Self {
            host,
            config,
            registry: SnapRegistry::new(),
            catalog: LayoutCatalog::new(),
            picker: ZonePicker::default(),
            overlay: Overlay::new(),
            last_pointer: None,
            metrics: PerformanceMetrics::new(),
        };
        controller.regenerate(viewport);
        controller
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub const fn host(&self) -> &H { &self.host }

    pub const fn host_mut(&mut self) -> &mut H { &mut self.host }

    /// Give the host back, dropping all snap state.
    pub fn into_host(self) -> H { self.host }

    #[must_use]
    pub const fn config(&self) -> &SnapConfig { &self.config }

    #[must_use]
    pub const fn registry(&self) -> &SnapRegistry { &self.registry }

    /// Layouts generated for the current viewport.
    #[must_use]
    pub fn layouts(&self) -> &[Layout] { self.catalog.layouts() }

    #[must_use]
    pub const fn picker(&self) -> &ZonePicker { &self.picker }

    // ========================================================================
    // Overlay
    // ========================================================================

    /// Show the zone picker for a dragged window.
    ///
    /// If the pointer is already over a zone, that zone is highlighted.
    pub fn show(&mut self, window: WindowHandle) {
        let viewport = self.host.viewport();
        if self.catalog.viewport() != Some(viewport) {
            self.regenerate(viewport);
        }

        self.overlay.show(window);
        self.metrics.record_overlay_show();
        tracing::debug!(window, "snap: overlay shown");

        if let Some(zone) = self.last_pointer.and_then(|p| self.picker.hit_test(p)) {
            self.activate_zone(&zone);
        }
    }

    /// Hide the zone picker and drop its highlight.
    pub fn hide(&mut self) {
        if self.overlay.is_visible() {
            tracing::debug!("snap: overlay hidden");
        }
        self.overlay.hide();
    }

    /// Highlight a zone, replacing any previous highlight.
    ///
    /// A zone that no longer resolves clears the highlight instead. Returns
    /// `true` if the zone was highlighted.
    pub fn activate_zone(&mut self, zone: &ZoneRef) -> bool {
        match self.zone_rect(zone) {
            Some(rect) => {
                tracing::trace!(%zone, "snap: zone highlighted");
                self.overlay.highlight(zone.clone(), rect);
                true
            }
            None => {
                tracing::debug!(%zone, "snap: highlighted zone no longer exists");
                self.deactivate_zone();
                false
            }
        }
    }

    /// Clear the zone highlight.
    pub fn deactivate_zone(&mut self) { self.overlay.clear_highlight(); }

    #[must_use]
    pub fn overlay_state(&self) -> OverlayState { self.overlay.get() }

    /// Subscribe to overlay changes.
    #[must_use]
    pub fn subscribe_overlay(&self) -> Subscriber<OverlayState> { self.overlay.subscribe() }

    // ========================================================================
    // Intents
    // ========================================================================

    /// Record the latest pointer position.
    pub const fn track_pointer(&mut self, position: Point) { self.last_pointer = Some(position); }

    /// Carry out one intent produced by the drag tracker.
    pub fn apply_intent(&mut self, intent: DragIntent) {
        match intent {
            DragIntent::Show(window) => self.show(window),
            DragIntent::Hide => self.hide(),
            DragIntent::HoverZone(zone) => {
                self.activate_zone(&zone);
            }
            DragIntent::ClearHover => self.deactivate_zone(),
            DragIntent::Drop(window, zone) => {
                if let Err(err) = self.snap_to_zone(window, &zone) {
                    tracing::debug!(window, %zone, error = %err, "snap: drop not applied");
                }
            }
            DragIntent::DragStarted(window) => tracing::trace!(window, "snap: drag intent started"),
            DragIntent::DragEnded { window, duration } => {
                tracing::trace!(window, ?duration, "snap: drag intent ended");
                self.metrics.record_drag(duration);
            }
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// A snapped window was closed; keep its record for restore-all.
    pub fn on_window_closed(&mut self, identity: &WindowIdentity) -> bool {
        let known = self.registry.mark_closed(identity);
        if known {
            tracing::debug!(%identity, "snap: snapped window closed");
        }
        known
    }

    /// A snapped window was reopened; its header shows restore again.
    pub fn on_window_reopened(&mut self, identity: &WindowIdentity) -> bool {
        if !self.registry.mark_open(identity) {
            return false;
        }
        tracing::debug!(%identity, "snap: snapped window reopened");
        if let Some(handle) = self.find_open_application(identity) {
            self.set_affordance(handle, HeaderAffordance::Restore);
        }
        true
    }

    /// Regenerate layouts for a new viewport size.
    ///
    /// A highlighted zone that no longer exists is dropped; one that still
    /// exists is re-measured.
    pub fn on_viewport_resized(&mut self, viewport: Viewport) {
        tracing::debug!(width = viewport.width, height = viewport.height, "snap: viewport resized");
        self.regenerate(viewport);
        if let Some(zone) = self.overlay.active_zone() {
            self.activate_zone(&zone);
        }
    }

    fn regenerate(&mut self, viewport: Viewport) {
        let layouts = self.catalog.generate(viewport);
        self.picker =
            ZonePicker::build(viewport, layouts, &self.config.picker, self.config.overlay_band);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// First open window whose recomputed identity matches.
    #[must_use]
    pub fn find_open_application(&self, identity: &WindowIdentity) -> Option<WindowHandle> {
        self.host.open_windows().into_iter().find(|&handle| {
            self.host
                .window(handle)
                .is_some_and(|w| w.is_open() && &w.identity() == identity)
        })
    }

    /// The snap record of an open window.
    #[must_use]
    pub fn snap_record(&self, handle: WindowHandle) -> Option<SnapRecord> {
        let identity = self.host.window(handle)?.identity();
        self.registry.get_state(&identity)
    }

    #[must_use]
    pub fn is_snapped(&self, handle: WindowHandle) -> bool {
        self.host.window(handle).is_some_and(|w| self.registry.contains(&w.identity()))
    }

    #[must_use]
    pub fn has_snapped_windows(&self) -> bool { self.registry.has_any() }

    #[must_use]
    pub fn snapped_count(&self) -> usize { self.registry.count() }

    /// Subscribe to registry changes.
    #[must_use]
    pub fn subscribe_registry(&self) -> VectorSubscriber<SnapRecord> { self.registry.subscribe() }

    #[must_use]
    pub fn performance_metrics(&self) -> PerformanceMetrics { self.metrics.clone() }

    pub fn reset_performance_metrics(&mut self) { self.metrics.reset(); }

    /// The picker zone under a point.
    #[must_use]
    pub fn zone_at(&self, point: Point) -> Option<ZoneRef> { self.picker.hit_test(point) }

    /// Viewport rectangle of a zone in the current layout set.
    #[must_use]
    pub fn zone_rect(&self, zone: &ZoneRef) -> Option<Rect> {
        self.catalog.rect(zone, self.host.viewport())
    }

    /// Top-left corner of a window.
    #[must_use]
    pub fn window_position(&self, handle: WindowHandle) -> Option<Point> {
        self.host.window(handle).and_then(HostWindow::geometry).map(|g| g.origin())
    }

    fn set_affordance(&mut self, handle: WindowHandle, affordance: HeaderAffordance) {
        let Some(window) = self.host.window_mut(handle) else {
            return;
        };
        if window.capabilities().element_access {
            window.set_header_affordance(affordance);
        }
    }

    /// Re-derive every open window's header button from the registry.
    pub fn refresh_affordances(&mut self) {
        for handle in self.host.open_windows() {
            let snapped = self.is_snapped(handle);
            self.set_affordance(handle, HeaderAffordance::for_snapped(snapped));
        }
    }
}

impl<H: WindowHost> ZoneLocator for SnapController<H> {
    fn zone_at(&self, point: Point) -> Option<ZoneRef> {
        if self.overlay.is_visible() { self.picker.hit_test(point) } else { None }
    }
}

// ============================================================================
// Tests
// ============================================================================
