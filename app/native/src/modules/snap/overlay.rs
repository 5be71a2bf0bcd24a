//! Observable state of the zone-picker overlay.
//!
//! The overlay itself is drawn by the host UI layer; this module only holds
//! what that layer needs to render it. Changes are published through an
//! `eyeball` observable.

use eyeball::{Observable, Subscriber};
use serde::Serialize;

use super::state::{Rect, WindowHandle, ZoneRef};

/// Snapshot of the overlay.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayState {
    /// Whether the picker is shown.
    pub visible: bool,

    /// The window being dragged while the picker is shown.
    pub active_window: Option<WindowHandle>,

    /// The highlighted zone.
    pub active_zone: Option<ZoneRef>,

    /// Where the highlighted zone would place the window, in viewport pixels.
    pub highlight: Option<Rect>,
}

/// Holder of the observable overlay state.
pub struct Overlay {
    state: Observable<OverlayState>,
}

impl Default for Overlay {
    fn default() -> Self { Self::new() }
}

impl Overlay {
    #[must_use]
    pub fn new() -> Self { Self { state: Observable::new(OverlayState::default()) } }

    /// Current overlay state.
    #[must_use]
    pub fn get(&self) -> OverlayState { Observable::get(&self.state).clone() }

    #[must_use]
    pub fn is_visible(&self) -> bool { Observable::get(&self.state).visible }

    #[must_use]
    pub fn active_zone(&self) -> Option<ZoneRef> { Observable::get(&self.state).active_zone.clone() }

    /// Subscribe to overlay changes.
    #[must_use]
    pub fn subscribe(&self) -> Subscriber<OverlayState> { Observable::subscribe(&self.state) }

    /// Make the overlay visible for `window`, starting with no highlight.
    pub fn show(&mut self, window: WindowHandle) {
        Observable::set(&mut self.state, OverlayState {
            visible: true,
            active_window: Some(window),
            active_zone: None,
            highlight: None,
        });
    }

    /// Hide the overlay and drop all transient state.
    pub fn hide(&mut self) {
        if *Observable::get(&self.state) != OverlayState::default() {
            Observable::set(&mut self.state, OverlayState::default());
        }
    }

    /// Highlight a zone, replacing any previous highlight.
    pub fn highlight(&mut self, zone: ZoneRef, rect: Rect) {
        let mut state = Observable::get(&self.state).clone();
        state.active_zone = Some(zone);
        state.highlight = Some(rect);
        Observable::set(&mut self.state, state);
    }

    /// Clear the highlight, keeping visibility.
    pub fn clear_highlight(&mut self) {
        let current = Observable::get(&self.state);
        if current.active_zone.is_none() && current.highlight.is_none() {
            return;
        }
        let mut state = current.clone();
        state.active_zone = None;
        state.highlight = None;
        Observable::set(&mut self.state, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_highlight_hide() {
        let mut overlay = Overlay::new();
        overlay.show(4);
        assert!(overlay.is_visible());
        assert_eq!(overlay.get().active_window, Some(4));

        let zone = ZoneRef::new("split-2", "left");
        overlay.highlight(zone.clone(), Rect::new(0.0, 0.0, 960.0, 1080.0));
        assert_eq!(overlay.active_zone(), Some(zone));

        overlay.hide();
        assert_eq!(overlay.get(), OverlayState::default());
    }

    #[test]
    fn test_highlight_replaces_previous() {
        let mut overlay = Overlay::new();
        overlay.show(1);
        overlay.highlight(ZoneRef::new("split-2", "left"), Rect::zero());
        overlay.highlight(ZoneRef::new("split-2", "right"), Rect::new(960.0, 0.0, 960.0, 1080.0));

        let state = overlay.get();
        assert_eq!(state.active_zone, Some(ZoneRef::new("split-2", "right")));
        assert_eq!(state.highlight, Some(Rect::new(960.0, 0.0, 960.0, 1080.0)));
    }

    #[test]
    fn test_clear_highlight_keeps_visibility() {
        let mut overlay = Overlay::new();
        overlay.show(1);
        overlay.highlight(ZoneRef::full(), Rect::zero());
        overlay.clear_highlight();

        assert!(overlay.is_visible());
        assert_eq!(overlay.active_zone(), None);
    }

    #[test]
    fn test_subscriber_sees_updates() {
        let mut overlay = Overlay::new();
        let mut subscriber = overlay.subscribe();
        overlay.show(9);

        let next = futures::executor::block_on(subscriber.next()).unwrap();
        assert!(next.visible);
    }
}
