//! Host collaborator traits.
//!
//! The snap system never talks to a concrete windowing runtime. Everything it
//! needs from the host (window geometry, content lookup, notifications and
//! event subscriptions) goes through [`WindowHost`] and [`HostWindow`].

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use super::error::HostError;
use super::runtime::SnapHandle;
use super::state::{DocumentRef, HeaderAffordance, Rect, Viewport, WindowHandle, WindowIdentity};

/// What a window allows the snap system to do with it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowCapabilities {
    /// The window exposes a position setter.
    pub positionable: bool,

    /// The window exposes its rendered element (needed for header buttons).
    pub element_access: bool,
}

impl WindowCapabilities {
    /// A window that supports everything.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            positionable: true,
            element_access: true,
        }
    }
}

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Host events the snap runtime subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    WindowClosed,
    WindowReopened,
    ViewportResized,
}

impl ListenerKind {
    /// Every kind the runtime installs, in installation order.
    pub const ALL: [Self; 7] = [
        Self::PointerDown,
        Self::PointerMove,
        Self::PointerUp,
        Self::PointerCancel,
        Self::WindowClosed,
        Self::WindowReopened,
        Self::ViewportResized,
    ];
}

/// Token returned by [`WindowHost::add_listener`], used to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "listener#{}", self.0) }
}

/// One floating window managed by the host.
pub trait HostWindow {
    /// Application-assigned id, if the window was created for a document.
    fn app_id(&self) -> Option<&str>;

    /// The window's type (class) name.
    fn type_name(&self) -> &str;

    /// Stable identity across close/reopen cycles.
    fn identity(&self) -> WindowIdentity { WindowIdentity::derive(self.app_id(), self.type_name()) }

    fn capabilities(&self) -> WindowCapabilities;

    /// Current geometry, or `None` if the host cannot report it.
    fn geometry(&self) -> Option<Rect>;

    /// Move and resize the window.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the host rejects the new geometry.
    fn set_geometry(&mut self, geometry: Rect) -> Result<(), HostError>;

    fn is_open(&self) -> bool;

    /// Reference to the displayed content, used to recreate the window.
    fn document_ref(&self) -> Option<DocumentRef>;

    /// Switch the header maximize/restore button.
    fn set_header_affordance(&mut self, affordance: HeaderAffordance);
}

/// The windowing runtime hosting the snap system.
///
/// Asynchronous methods are awaited one at a time; implementations do not
/// need to be `Send`.
pub trait WindowHost {
    type Window: HostWindow;

    /// Resolved content, handed back to [`WindowHost::open_window`].
    type Content;

    fn viewport(&self) -> Viewport;

    fn window(&self, handle: WindowHandle) -> Option<&Self::Window>;

    fn window_mut(&mut self, handle: WindowHandle) -> Option<&mut Self::Window>;

    /// Handles of every currently open window, in host order.
    fn open_windows(&self) -> Vec<WindowHandle>;

    /// Show a toast to the user.
    fn notify(&mut self, level: NoticeLevel, message: &str);

    /// Look up the content behind a document reference.
    fn resolve_content(
        &mut self,
        document: &DocumentRef,
    ) -> impl Future<Output = Result<Self::Content, HostError>>;

    /// Open a window for `content` at `geometry`.
    fn open_window(
        &mut self,
        content: Self::Content,
        geometry: Rect,
    ) -> impl Future<Output = Result<WindowHandle, HostError>>;

    /// Forward events of `kind` to the snap runtime through `sink`.
    fn add_listener(&mut self, kind: ListenerKind, sink: SnapHandle) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);
}
