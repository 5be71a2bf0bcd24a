//! Snapping and restoring windows.
//!
//! Per-window state machine: **Unsnapped → Snapped → Unsnapped**. The only
//! transitions are `snap_app` (first snap records the original geometry) and
//! `restore_app` / `restore_all` (apply it and forget the record).

use serde::Serialize;

use super::SnapController;
use crate::modules::snap::constants::viewport::OFFSCREEN_MARGIN;
use crate::modules::snap::error::{HostError, SnapError, SnapResult};
use crate::modules::snap::host::{HostWindow, NoticeLevel, WindowHost};
use crate::modules::snap::state::{
    DocumentRef, HeaderAffordance, Rect, Viewport, WindowHandle, WindowIdentity, ZoneRef,
};

/// Outcome of a restore-all pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSummary {
    /// Open windows moved back to their original geometry.
    pub restored_open: usize,

    /// Closed windows recreated at their original geometry.
    pub reopened: usize,

    /// Records that could not be restored.
    pub skipped: usize,

    /// Records present when the pass started.
    pub total: usize,
}

impl RestoreSummary {
    /// Windows that ended up back at their original geometry.
    #[must_use]
    pub const fn restored(&self) -> usize { self.restored_open + self.reopened }
}

/// Clamp a target rectangle so the window stays reachable.
///
/// The origin is kept within `[0, dimension - 100]` on both axes, and the
/// size is cut to what remains of the viewport past that origin.
#[must_use]
pub fn clamp_to_viewport(rect: Rect, viewport: Viewport) -> Rect {
    let max_x = (viewport.width - OFFSCREEN_MARGIN).max(0.0);
    let max_y = (viewport.height - OFFSCREEN_MARGIN).max(0.0);
    let x = rect.x.clamp(0.0, max_x);
    let y = rect.y.clamp(0.0, max_y);

    Rect::new(
        x,
        y,
        rect.width.min(viewport.width - x).max(0.0),
        rect.height.min(viewport.height - y).max(0.0),
    )
}

/// What the controller needs to know about a window before moving it.
struct WindowSnapshot {
    identity: WindowIdentity,
    geometry: Rect,
    document_ref: Option<DocumentRef>,
}

impl<H: WindowHost> SnapController<H> {
    /// Snap a window to `rect`, remembering where it was before.
    ///
    /// The first snap of a window records its current geometry; later snaps
    /// keep that record.
    ///
    /// # Errors
    ///
    /// Returns a precondition error (nothing changed) if the window is gone,
    /// cannot be positioned, cannot report its geometry, or the viewport is
    /// below the minimum. Returns [`SnapError::Apply`] if the host rejects the
    /// geometry; the user is notified and the record is kept.
    pub fn snap_app(&mut self, handle: WindowHandle, rect: Rect, zone: ZoneRef) -> SnapResult<()> {
        let viewport = self.host.viewport();
        let snapshot = self
            .inspect_window(handle)
            .and_then(|snapshot| self.check_viewport(viewport).map(|()| snapshot))
            .inspect_err(|err| tracing::debug!(window = handle, error = %err, "snap: declined"))?;

        let target = clamp_to_viewport(rect, viewport);
        self.registry.register_snap(
            snapshot.identity.clone(),
            snapshot.geometry,
            zone.clone(),
            snapshot.document_ref,
        );

        if let Err(err) = self.apply_geometry(handle, target) {
            tracing::error!(window = handle, %zone, error = %err, "snap: failed to apply zone");
            self.host.notify(NoticeLevel::Error, &format!("Could not snap window: {err}"));
            return Err(err.into());
        }

        self.set_affordance(handle, HeaderAffordance::Restore);
        self.metrics.record_snap();
        tracing::debug!(window = handle, identity = %snapshot.identity, %zone, "snap: window snapped");
        Ok(())
    }

    /// Snap a window into a zone of the current layout set.
    ///
    /// # Errors
    ///
    /// Returns [`SnapError::ZoneNotFound`] if the zone does not resolve (nothing
    /// changes), otherwise anything [`Self::snap_app`] returns.
    pub fn snap_to_zone(&mut self, handle: WindowHandle, zone: &ZoneRef) -> SnapResult<()> {
        let rect = self.zone_rect(zone).ok_or_else(|| SnapError::ZoneNotFound {
            layout_id: zone.layout_id.clone(),
            zone_id: zone.zone_id.clone(),
        })?;
        self.snap_app(handle, rect, zone.clone())
    }

    /// Snap a window to the whole viewport.
    ///
    /// # Errors
    ///
    /// Same as [`Self::snap_app`].
    pub fn maximize(&mut self, handle: WindowHandle) -> SnapResult<()> {
        self.snap_to_zone(handle, &ZoneRef::full())
    }

    /// Header button: maximize an unsnapped window, restore a snapped one.
    ///
    /// Returns the affordance the header shows afterwards.
    ///
    /// # Errors
    ///
    /// Same as [`Self::snap_app`] and [`Self::restore_app`].
    pub fn toggle_maximize(&mut self, handle: WindowHandle) -> SnapResult<HeaderAffordance> {
        if self.is_snapped(handle) {
            self.restore_app(handle)?;
            Ok(HeaderAffordance::Maximize)
        } else {
            self.maximize(handle)?;
            Ok(HeaderAffordance::Restore)
        }
    }

    /// Move a snapped window back to its original geometry and forget it.
    ///
    /// Returns `Ok(false)` if the window was not snapped. A host failure while
    /// applying the geometry is reported to the user but the record is still
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns the same precondition errors as [`Self::snap_app`].
    pub fn restore_app(&mut self, handle: WindowHandle) -> SnapResult<bool> {
        let viewport = self.host.viewport();
        let snapshot = self
            .inspect_window(handle)
            .and_then(|snapshot| self.check_viewport(viewport).map(|()| snapshot))
            .inspect_err(|err| {
                tracing::debug!(window = handle, error = %err, "snap: restore declined");
            })?;

        let Some(record) = self.registry.get_state(&snapshot.identity) else {
            tracing::trace!(window = handle, "snap: restore requested for unsnapped window");
            return Ok(false);
        };

        if let Err(err) = self.apply_geometry(handle, record.original_geometry) {
            tracing::error!(window = handle, error = %err, "snap: failed to restore geometry");
            self.host.notify(NoticeLevel::Error, &format!("Could not restore window: {err}"));
        }

        self.registry.remove_state(&snapshot.identity);
        self.set_affordance(handle, HeaderAffordance::Maximize);
        self.metrics.record_restore();
        tracing::debug!(window = handle, identity = %snapshot.identity, "snap: window restored");
        Ok(true)
    }

    /// Restore every snapped window, recreating closed ones.
    ///
    /// Recreations are awaited one at a time. The registry is emptied
    /// afterwards even for records that could not be restored.
    pub async fn restore_all(&mut self) -> RestoreSummary {
        let records = self.registry.all_records();
        let mut summary = RestoreSummary {
            total: records.len(),
            ..RestoreSummary::default()
        };

        for record in &records {
            let identity = &record.identity;
            let geometry = record.original_geometry;

            if let Some(handle) = self.find_open_application(identity) {
                match self.apply_geometry(handle, geometry) {
                    Ok(()) => summary.restored_open += 1,
                    Err(err) => {
                        tracing::warn!(%identity, error = %err, "snap: restore-all apply failed");
                        summary.skipped += 1;
                    }
                }
                continue;
            }

            let Some(document) = &record.document_ref else {
                tracing::debug!(%identity, "snap: closed window has no content reference");
                summary.skipped += 1;
                continue;
            };

            match self.reopen(document, geometry).await {
                Ok(handle) => {
                    tracing::debug!(%identity, window = handle, "snap: closed window recreated");
                    summary.reopened += 1;
                }
                Err(err) => {
                    tracing::warn!(%identity, %document, error = %err, "snap: recreate failed");
                    summary.skipped += 1;
                }
            }
        }

        self.registry.clear_all();
        self.refresh_affordances();
        self.notify_summary(summary);
        summary
    }

    async fn reopen(&mut self, document: &DocumentRef, geometry: Rect) -> Result<WindowHandle, HostError> {
        let content = self.host.resolve_content(document).await?;
        self.host.open_window(content, geometry).await
    }

    fn notify_summary(&mut self, summary: RestoreSummary) {
        let (level, message) = if summary.total == 0 {
            (NoticeLevel::Info, "No snapped windows to restore".to_string())
        } else if summary.skipped == 0 {
            (NoticeLevel::Info, format!("Restored {} window(s)", summary.restored()))
        } else {
            (
                NoticeLevel::Warning,
                format!(
                    "Restored {} of {} window(s), {} could not be restored",
                    summary.restored(),
                    summary.total,
                    summary.skipped
                ),
            )
        };
        tracing::info!(
            restored_open = summary.restored_open,
            reopened = summary.reopened,
            skipped = summary.skipped,
            "snap: restore-all finished"
        );
        self.host.notify(level, &message);
    }

    fn inspect_window(&self, handle: WindowHandle) -> SnapResult<WindowSnapshot> {
        let window = self
            .host
            .window(handle)
            .filter(|w| w.is_open())
            .ok_or(SnapError::WindowNotFound(handle))?;

        if !window.capabilities().positionable {
            return Err(SnapError::NotPositionable(handle));
        }
        let geometry = window.geometry().ok_or(SnapError::GeometryUnavailable(handle))?;

        Ok(WindowSnapshot {
            identity: window.identity(),
            geometry,
            document_ref: window.document_ref(),
        })
    }

    fn check_viewport(&self, viewport: Viewport) -> SnapResult<()> {
        if self.config.allows_viewport(viewport.width, viewport.height) {
            Ok(())
        } else {
            Err(SnapError::ViewportTooSmall {
                width: viewport.width,
                height: viewport.height,
            })
        }
    }

    fn apply_geometry(&mut self, handle: WindowHandle, geometry: Rect) -> Result<(), HostError> {
        self.host
            .window_mut(handle)
            .ok_or_else(|| HostError::Unavailable(format!("window {handle} disappeared")))?
            .set_geometry(geometry)
    }
}

// ============================================================================
// Tests
// ============================================================================
