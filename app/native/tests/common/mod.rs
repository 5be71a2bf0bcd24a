//! In-memory window host shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use snapzone_lib::snap::{
    DocumentRef, HeaderAffordance, HostError, HostWindow, ListenerId, ListenerKind, NoticeLevel,
    Rect, SnapHandle, Viewport, WindowCapabilities, WindowHandle, WindowHost, WindowIdentity,
};

/// A floating panel window.
#[derive(Clone, Debug)]
pub struct FakeWindow {
    pub app_id: Option<String>,
    pub type_name: String,
    pub geometry: Rect,
    pub open: bool,
    pub document: Option<DocumentRef>,
    pub affordance: HeaderAffordance,
    pub capabilities: WindowCapabilities,
    pub reject_geometry: bool,
}

impl FakeWindow {
    pub fn sheet(app_id: &str, geometry: Rect) -> Self {
        Self {
            app_id: Some(app_id.to_string()),
            type_name: "ActorSheet".to_string(),
            geometry,
            open: true,
            document: Some(DocumentRef::new(format!("Actor.{app_id}"))),
            affordance: HeaderAffordance::Maximize,
            capabilities: WindowCapabilities::full(),
            reject_geometry: false,
        }
    }

    pub fn panel(type_name: &str, geometry: Rect) -> Self {
        Self {
            app_id: None,
            type_name: type_name.to_string(),
            geometry,
            open: true,
            document: None,
            affordance: HeaderAffordance::Maximize,
            capabilities: WindowCapabilities::full(),
            reject_geometry: false,
        }
    }

    pub fn identity(&self) -> WindowIdentity {
        WindowIdentity::derive(self.app_id.as_deref(), &self.type_name)
    }
}

impl HostWindow for FakeWindow {
    fn app_id(&self) -> Option<&str> { self.app_id.as_deref() }

    fn type_name(&self) -> &str { &self.type_name }

    fn capabilities(&self) -> WindowCapabilities { self.capabilities }

    fn geometry(&self) -> Option<Rect> { Some(self.geometry) }

    fn set_geometry(&mut self, geometry: Rect) -> Result<(), HostError> {
        if self.reject_geometry {
            return Err(HostError::Rejected("window is locked".to_string()));
        }
        self.geometry = geometry;
        Ok(())
    }

    fn is_open(&self) -> bool { self.open }

    fn document_ref(&self) -> Option<DocumentRef> { self.document.clone() }

    fn set_header_affordance(&mut self, affordance: HeaderAffordance) {
        self.affordance = affordance;
    }
}

/// A host with a fixed set of documents that closed sheets can be reopened from.
pub struct FakeHost {
    pub viewport: Viewport,
    pub windows: BTreeMap<WindowHandle, FakeWindow>,
    pub documents: Vec<String>,
    pub notices: Vec<(NoticeLevel, String)>,
    pub listeners: BTreeMap<ListenerId, ListenerKind>,
    next_handle: WindowHandle,
    next_listener: u64,
}

impl FakeHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            windows: BTreeMap::new(),
            documents: Vec::new(),
            notices: Vec::new(),
            listeners: BTreeMap::new(),
            next_handle: 1,
            next_listener: 1,
        }
    }

    /// Open a window and return its handle.
    pub fn open(&mut self, window: FakeWindow) -> WindowHandle {
        let handle = self.next_handle;
        self.next_handle += 1;
        if let Some(document) = &window.document {
            self.documents.push(document.as_str().to_string());
        }
        self.windows.insert(handle, window);
        handle
    }

    /// Close a window; its document stays available.
    pub fn close(&mut self, handle: WindowHandle) {
        if let Some(window) = self.windows.get_mut(&handle) {
            window.open = false;
        }
    }

    /// Forget a document so it can no longer be reopened.
    pub fn delete_document(&mut self, document: &str) { self.documents.retain(|d| d != document); }

    pub fn geometry(&self, handle: WindowHandle) -> Rect { self.windows[&handle].geometry }

    /// Open windows whose app id matches.
    pub fn open_with_app_id(&self, app_id: &str) -> Vec<WindowHandle> {
        self.windows
            .iter()
            .filter(|(_, w)| w.open && w.app_id.as_deref() == Some(app_id))
            .map(|(&h, _)| h)
            .collect()
    }
}

impl WindowHost for FakeHost {
    type Content = String;
    type Window = FakeWindow;

    fn viewport(&self) -> Viewport { self.viewport }

    fn window(&self, handle: WindowHandle) -> Option<&FakeWindow> { self.windows.get(&handle) }

    fn window_mut(&mut self, handle: WindowHandle) -> Option<&mut FakeWindow> {
        self.windows.get_mut(&handle)
    }

    fn open_windows(&self) -> Vec<WindowHandle> {
        self.windows.iter().filter(|(_, w)| w.open).map(|(&h, _)| h).collect()
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.notices.push((level, message.to_string()));
    }

    async fn resolve_content(&mut self, document: &DocumentRef) -> Result<String, HostError> {
        self.documents
            .iter()
            .find(|d| d.as_str() == document.as_str())
            .cloned()
            .ok_or_else(|| HostError::ContentNotFound(document.to_string()))
    }

    async fn open_window(&mut self, content: String, geometry: Rect) -> Result<WindowHandle, HostError> {
        let app_id = content
            .strip_prefix("Actor.")
            .ok_or_else(|| HostError::Rejected(format!("cannot render {content}")))?;
        let mut window = FakeWindow::sheet(app_id, geometry);
        window.document = Some(DocumentRef::new(content.clone()));

        let handle = self.next_handle;
        self.next_handle += 1;
        self.windows.insert(handle, window);
        Ok(handle)
    }

    fn add_listener(&mut self, kind: ListenerKind, _sink: SnapHandle) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, kind);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) { self.listeners.remove(&id); }
}
