//! The `SnapRegistry` tracking pre-snap state for every snapped window.
//!
//! Records are keyed by [`WindowIdentity`], not by live window handle, so a
//! window can be closed and reopened (or recreated) and still be matched with
//! its original geometry. Uses `eyeball-im` so UI layers can subscribe to
//! changes.

use eyeball_im::{ObservableVector, VectorSubscriber};

use super::types::{DocumentRef, Rect, SnapRecord, WindowIdentity, ZoneRef};

/// Durable map from window identity to its snap record.
///
/// The registry is the single source of truth for whether a window is
/// snapped. Header affordances and overlay state are derived from it.
pub struct SnapRegistry {
    records: ObservableVector<SnapRecord>,
}

impl Default for SnapRegistry {
    fn default() -> Self { Self::new() }
}

impl SnapRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self { Self { records: ObservableVector::new() } }

    fn index_of(&self, identity: &WindowIdentity) -> Option<usize> {
        self.records.iter().position(|r| &r.identity == identity)
    }

    /// Record a snap for `identity` unless one already exists.
    ///
    /// Re-snapping an already-snapped window keeps the first recorded
    /// geometry, so a restore always returns to the true pre-snap state.
    /// Returns `true` if a new record was inserted.
    pub fn register_snap(
        &mut self,
        identity: WindowIdentity,
        original_geometry: Rect,
        zone: ZoneRef,
        document_ref: Option<DocumentRef>,
    ) -> bool {
        if self.contains(&identity) {
            tracing::trace!(%identity, "snap: registry already holds original geometry");
            return false;
        }

        tracing::debug!(%identity, %zone, "snap: registering original geometry");
        self.records
            .push_back(SnapRecord::new(identity, original_geometry, zone, document_ref));
        true
    }

    /// Get the record for a window.
    #[must_use]
    pub fn get_state(&self, identity: &WindowIdentity) -> Option<SnapRecord> {
        self.records.iter().find(|r| &r.identity == identity).cloned()
    }

    /// Returns true if the window is currently snapped.
    #[must_use]
    pub fn contains(&self, identity: &WindowIdentity) -> bool { self.index_of(identity).is_some() }

    /// Mark a snapped window as closed without forgetting it.
    pub fn mark_closed(&mut self, identity: &WindowIdentity) -> bool {
        self.set_open(identity, false)
    }

    /// Mark a snapped window as open again.
    pub fn mark_open(&mut self, identity: &WindowIdentity) -> bool { self.set_open(identity, true) }

    fn set_open(&mut self, identity: &WindowIdentity, is_open: bool) -> bool {
        let Some(idx) = self.index_of(identity) else {
            return false;
        };

        if self.records[idx].is_open != is_open {
            let mut record = self.records[idx].clone();
            record.is_open = is_open;
            self.records.set(idx, record);
        }
        true
    }

    /// Delete the record for a window.
    pub fn remove_state(&mut self, identity: &WindowIdentity) -> Option<SnapRecord> {
        self.index_of(identity).map(|idx| self.records.remove(idx))
    }

    /// All records in snap order.
    #[must_use]
    pub fn all_records(&self) -> Vec<SnapRecord> { self.records.iter().cloned().collect() }

    /// Number of snapped windows.
    #[must_use]
    pub fn count(&self) -> usize { self.records.len() }

    /// Returns true if any window is snapped.
    #[must_use]
    pub fn has_any(&self) -> bool { !self.records.is_empty() }

    /// Delete every record.
    pub fn clear_all(&mut self) {
        if self.has_any() {
            tracing::debug!(count = self.count(), "snap: clearing registry");
            self.records.clear();
        }
    }

    /// Subscribe to record changes.
    #[must_use]
    pub fn subscribe(&self) -> VectorSubscriber<SnapRecord> { self.records.subscribe() }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: &str) -> WindowIdentity { WindowIdentity::derive(Some(id), "Sheet") }

    #[test]
    fn test_register_inserts_once() {
        let mut registry = SnapRegistry::new();
        assert!(registry.register_snap(
            identity("1"),
            Rect::new(10.0, 10.0, 400.0, 300.0),
            ZoneRef::full(),
            None,
        ));
        assert_eq!(registry.count(), 1);
        assert!(registry.has_any());
    }

    #[test]
    fn test_register_twice_keeps_first_geometry() {
        let mut registry = SnapRegistry::new();
        let first = Rect::new(10.0, 10.0, 400.0, 300.0);
        let second = Rect::new(0.0, 0.0, 960.0, 1080.0);

        registry.register_snap(identity("1"), first, ZoneRef::new("split-2", "left"), None);
        let inserted =
            registry.register_snap(identity("1"), second, ZoneRef::new("split-2", "right"), None);

        assert!(!inserted);
        assert_eq!(registry.count(), 1);
        let record = registry.get_state(&identity("1")).unwrap();
        assert_eq!(record.original_geometry, first);
        assert_eq!(record.zone, ZoneRef::new("split-2", "left"));
    }

    #[test]
    fn test_mark_closed_and_open_keep_record() {
        let mut registry = SnapRegistry::new();
        registry.register_snap(identity("1"), Rect::zero(), ZoneRef::full(), None);

        assert!(registry.mark_closed(&identity("1")));
        assert!(!registry.get_state(&identity("1")).unwrap().is_open);
        assert_eq!(registry.count(), 1);

        assert!(registry.mark_open(&identity("1")));
        assert!(registry.get_state(&identity("1")).unwrap().is_open);
    }

    #[test]
    fn test_mark_unknown_identity_is_noop() {
        let mut registry = SnapRegistry::new();
        assert!(!registry.mark_closed(&identity("missing")));
        assert!(!registry.mark_open(&identity("missing")));
        assert!(!registry.has_any());
    }

    #[test]
    fn test_remove_state() {
        let mut registry = SnapRegistry::new();
        registry.register_snap(identity("1"), Rect::zero(), ZoneRef::full(), None);
        registry.register_snap(identity("2"), Rect::zero(), ZoneRef::full(), None);

        let removed = registry.remove_state(&identity("1")).unwrap();
        assert_eq!(removed.identity, identity("1"));
        assert!(registry.remove_state(&identity("1")).is_none());
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_register_after_remove_records_new_geometry() {
        let mut registry = SnapRegistry::new();
        registry.register_snap(identity("1"), Rect::zero(), ZoneRef::full(), None);
        registry.remove_state(&identity("1"));

        let geometry = Rect::new(5.0, 5.0, 500.0, 400.0);
        assert!(registry.register_snap(identity("1"), geometry, ZoneRef::full(), None));
        assert_eq!(registry.get_state(&identity("1")).unwrap().original_geometry, geometry);
    }

    #[test]
    fn test_all_records_in_snap_order_and_clear() {
        let mut registry = SnapRegistry::new();
        registry.register_snap(identity("b"), Rect::zero(), ZoneRef::full(), None);
        registry.register_snap(identity("a"), Rect::zero(), ZoneRef::full(), None);

        let ids: Vec<_> =
            registry.all_records().into_iter().map(|r| r.identity.to_string()).collect();
        assert_eq!(ids, vec!["app-b", "app-a"]);

        registry.clear_all();
        assert_eq!(registry.count(), 0);
        assert!(!registry.has_any());
    }

    #[test]
    fn test_document_ref_is_kept() {
        let mut registry = SnapRegistry::new();
        registry.register_snap(
            identity("1"),
            Rect::zero(),
            ZoneRef::full(),
            Some(DocumentRef::new("JournalEntry.abc")),
        );
        let record = registry.get_state(&identity("1")).unwrap();
        assert_eq!(record.document_ref.unwrap().as_str(), "JournalEntry.abc");
    }
}
