//! Pointer event and drag intent types.

use std::time::{Duration, Instant};

use smallvec::SmallVec;

use crate::modules::snap::state::{Point, WindowHandle, ZoneRef};

// ============================================================================
// Pointer Events
// ============================================================================

/// Kind of pointer event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Part of a window the pointer is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerRegion {
    /// The header area used to move the window.
    DragHandle,

    /// A button or other control; never starts a drag.
    Control,

    /// The window body.
    Content,

    /// Anything else (desktop, other UI).
    #[default]
    Other,
}

/// What the pointer hit when the event fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerTarget {
    /// The window under the pointer, if any.
    pub window: Option<WindowHandle>,

    /// Region of that window.
    pub region: PointerRegion,
}

impl PointerTarget {
    /// Target the drag handle of a window.
    #[must_use]
    pub const fn drag_handle(window: WindowHandle) -> Self {
        Self {
            window: Some(window),
            region: PointerRegion::DragHandle,
        }
    }

    /// Target a control inside a window.
    #[must_use]
    pub const fn control(window: WindowHandle) -> Self {
        Self {
            window: Some(window),
            region: PointerRegion::Control,
        }
    }

    /// The window to drag, if this target arms a drag.
    #[must_use]
    pub const fn draggable_window(&self) -> Option<WindowHandle> {
        match self.region {
            PointerRegion::DragHandle => self.window,
            _ => None,
        }
    }
}

/// A pointer event from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    pub timestamp: Instant,
    pub target: PointerTarget,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(
        kind: PointerKind,
        position: Point,
        timestamp: Instant,
        target: PointerTarget,
    ) -> Self {
        Self { kind, position, timestamp, target }
    }
}

// ============================================================================
// Intents
// ============================================================================

/// What the drag tracker wants the controller to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragIntent {
    /// Show the zone picker for the dragged window.
    Show(WindowHandle),

    /// Hide the zone picker.
    Hide,

    /// Highlight a zone.
    HoverZone(ZoneRef),

    /// Clear the current highlight.
    ClearHover,

    /// Snap the window into a zone.
    Drop(WindowHandle, ZoneRef),

    /// A drag crossed the movement threshold.
    DragStarted(WindowHandle),

    /// A drag finished (released or cancelled).
    DragEnded {
        window: WindowHandle,
        duration: Duration,
    },
}

/// Instruction for the runtime's poll timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollCommand {
    /// Start polling at this interval.
    Start(Duration),

    /// Keep polling but switch to this interval.
    Restart(Duration),

    /// Stop polling.
    Stop,
}

/// Inline capacity for intents; a release emits at most three.
pub const INTENT_INLINE_CAP: usize = 4;

/// Intents produced by one tracker step.
pub type IntentList = SmallVec<[DragIntent; INTENT_INLINE_CAP]>;

/// Result of feeding one event or poll sample to the tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackerOutput {
    pub intents: IntentList,
    pub poll: Option<PollCommand>,
}

impl TrackerOutput {
    /// Output with no intents and no timer change.
    #[must_use]
    pub fn none() -> Self { Self::default() }

    /// Returns true if nothing needs to happen.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.intents.is_empty() && self.poll.is_none() }

    pub(crate) fn push(&mut self, intent: DragIntent) { self.intents.push(intent); }
}
