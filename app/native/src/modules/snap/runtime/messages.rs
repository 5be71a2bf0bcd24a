//! Messages processed by the snap runtime.

use tokio::sync::oneshot;

use crate::modules::snap::controller::RestoreSummary;
use crate::modules::snap::events::PointerEvent;
use crate::modules::snap::state::{Viewport, WindowHandle, WindowIdentity, ZoneRef};

/// Everything the runtime reacts to.
///
/// Host listeners forward their events as the first group of variants; the
/// rest are commands issued by the host UI (header buttons, menu entries).
#[derive(Debug)]
pub enum SnapMessage {
    // Host events
    /// Pointer down/move/up/cancel anywhere in the viewport.
    Pointer(PointerEvent),

    /// A window was closed.
    WindowClosed(WindowIdentity),

    /// A window with a previously seen identity was opened again.
    WindowReopened(WindowIdentity),

    /// The viewport changed size.
    ViewportResized(Viewport),

    // Commands
    /// Snap a window into a zone.
    Snap { window: WindowHandle, zone: ZoneRef },

    /// Header button: maximize or restore depending on snap state.
    ToggleMaximize { window: WindowHandle },

    /// Restore a single window.
    Restore { window: WindowHandle },

    /// Restore every snapped window and reply with the outcome.
    RestoreAll {
        respond_to: oneshot::Sender<RestoreSummary>,
    },

    /// Remove every host listener and drop any gesture in progress.
    Teardown,

    /// Stop the message loop.
    Shutdown,
}

impl SnapMessage {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pointer(_) => "Pointer",
            Self::WindowClosed(_) => "WindowClosed",
            Self::WindowReopened(_) => "WindowReopened",
            Self::ViewportResized(_) => "ViewportResized",
            Self::Snap { .. } => "Snap",
            Self::ToggleMaximize { .. } => "ToggleMaximize",
            Self::Restore { .. } => "Restore",
            Self::RestoreAll { .. } => "RestoreAll",
            Self::Teardown => "Teardown",
            Self::Shutdown => "Shutdown",
        }
    }
}
