//! Snap Zones - drag-to-snap layout management for floating windows
//!
//! This module lets the user drag a floating window to the top edge of the
//! viewport, pick a zone from a picker of generated grid layouts, and have
//! the window fill that zone. Snapped windows remember where they came from
//! and can be restored individually or all at once.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Window Host                           │
//! │  (pointer events, window close/reopen, viewport resize)     │
//! └─────────────────────────┬───────────────────────────────────┘
//!                           │ SnapHandle (mpsc::Sender<SnapMessage>)
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Snap Runtime                            │
//! │  - Processes messages sequentially                          │
//! │  - Owns the poll deadline of the current drag               │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │ PointerEvent                 │ DragIntent
//!                ▼                              ▼
//! ┌──────────────────────────────┐  ┌───────────────────────────┐
//! │        Drag Tracker          │  │      Snap Controller      │
//! │  - Idle / Potential / Drag   │  │  - Layout catalog, picker │
//! │  - Adaptive position polling │  │  - Registry, overlay      │
//! └──────────────────────────────┘  └─────────────┬─────────────┘
//!                                                 │ Observable
//!                                                 ▼
//!                                      Overlay / registry subscribers
//! ```

pub mod constants;
pub mod controller;
pub mod error;
pub mod events;
pub mod host;
pub mod layout;
pub mod metrics;
pub mod overlay;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub(crate) mod test_host;

pub use controller::{RestoreSummary, SnapController, clamp_to_viewport};
pub use error::{HostError, SnapError, SnapResult};
pub use events::{
    DragIntent, DragPhase, DragThresholds, DragTracker, PointerEvent, PointerKind, PointerRegion,
    PointerTarget, ZoneLocator,
};
pub use host::{HostWindow, ListenerId, ListenerKind, NoticeLevel, WindowCapabilities, WindowHost};
pub use layout::{Layout, LayoutCatalog, Zone, ZonePicker};
pub use metrics::PerformanceMetrics;
pub use overlay::{Overlay, OverlayState};
pub use runtime::{ActorError, SnapHandle, SnapMessage, SnapRuntime, Subscriptions};
pub use state::{
    DocumentRef, HeaderAffordance, Point, Rect, SnapRecord, SnapRegistry, Viewport, WindowHandle,
    WindowIdentity, ZoneRef,
};
