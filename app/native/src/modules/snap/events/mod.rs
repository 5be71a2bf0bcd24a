//! Pointer event processing for the snap system.
//!
//! This module handles:
//! - Classifying pointer events into drag phases (`drag_tracker`)
//! - Speed-adaptive polling of the dragged window position (`poller`)
//! - The intent types handed to the controller (`types`)

mod drag_tracker;
mod poller;
mod types;

pub use drag_tracker::{DragPhase, DragThresholds, DragTracker, ZoneLocator};
pub use poller::{AdaptivePoller, INITIAL_INTERVAL, interval_for_speed, needs_restart};
pub use types::{
    DragIntent, INTENT_INLINE_CAP, IntentList, PointerEvent, PointerKind, PointerRegion,
    PointerTarget, PollCommand, TrackerOutput,
};
