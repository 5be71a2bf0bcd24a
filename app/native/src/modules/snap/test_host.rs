//! In-memory host used by unit tests.

use std::collections::BTreeMap;

use super::error::HostError;
use super::host::{HostWindow, ListenerId, ListenerKind, NoticeLevel, WindowCapabilities, WindowHost};
use super::runtime::SnapHandle;
use super::state::{DocumentRef, HeaderAffordance, Rect, Viewport, WindowHandle};

/// Handles given to windows opened by the host itself.
const FIRST_OPENED_HANDLE: WindowHandle = 1000;

#[derive(Clone, Debug)]
pub struct MockWindow {
    pub app_id: Option<String>,
    pub type_name: String,
    pub geometry: Option<Rect>,
    pub capabilities: WindowCapabilities,
    pub open: bool,
    pub document: Option<DocumentRef>,
    pub affordance: HeaderAffordance,
    pub fail_apply: bool,
    pub applied: Vec<Rect>,
}

impl MockWindow {
    pub fn new(app_id: Option<&str>, type_name: &str, geometry: Rect) -> Self {
        Self {
            app_id: app_id.map(str::to_string),
            type_name: type_name.to_string(),
            geometry: Some(geometry),
            capabilities: WindowCapabilities::full(),
            open: true,
            document: None,
            affordance: HeaderAffordance::Maximize,
            fail_apply: false,
            applied: Vec::new(),
        }
    }

    pub fn with_document(mut self, document: &str) -> Self {
        self.document = Some(DocumentRef::new(document));
        self
    }
}

impl HostWindow for MockWindow {
    fn app_id(&self) -> Option<&str> { self.app_id.as_deref() }

    fn type_name(&self) -> &str { &self.type_name }

    fn capabilities(&self) -> WindowCapabilities { self.capabilities }

    fn geometry(&self) -> Option<Rect> { self.geometry }

    fn set_geometry(&mut self, geometry: Rect) -> Result<(), HostError> {
        if self.fail_apply {
            return Err(HostError::Rejected("position setter threw".to_string()));
        }
        self.geometry = Some(geometry);
        self.applied.push(geometry);
        Ok(())
    }

    fn is_open(&self) -> bool { self.open }

    fn document_ref(&self) -> Option<DocumentRef> { self.document.clone() }

    fn set_header_affordance(&mut self, affordance: HeaderAffordance) {
        self.affordance = affordance;
    }
}

pub struct MockHost {
    pub viewport: Viewport,
    pub windows: BTreeMap<WindowHandle, MockWindow>,
    pub notices: Vec<(NoticeLevel, String)>,
    pub contents: BTreeMap<String, MockWindow>,
    pub listeners: BTreeMap<ListenerId, ListenerKind>,
    pub sinks: BTreeMap<ListenerId, SnapHandle>,
    next_listener: u64,
    next_handle: WindowHandle,
}

impl MockHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            windows: BTreeMap::new(),
            notices: Vec::new(),
            contents: BTreeMap::new(),
            listeners: BTreeMap::new(),
            sinks: BTreeMap::new(),
            next_listener: 1,
            next_handle: FIRST_OPENED_HANDLE,
        }
    }

    pub fn insert(&mut self, handle: WindowHandle, window: MockWindow) {
        self.windows.insert(handle, window);
    }

    pub fn close(&mut self, handle: WindowHandle) {
        if let Some(window) = self.windows.get_mut(&handle) {
            window.open = false;
        }
    }

    pub fn reopen(&mut self, handle: WindowHandle) {
        if let Some(window) = self.windows.get_mut(&handle) {
            window.open = true;
        }
    }

    /// Make `document` resolvable to a fresh "Sheet" window for `app_id`.
    pub fn register_content(&mut self, document: &str, app_id: &str) {
        let template = MockWindow::new(Some(app_id), "Sheet", Rect::zero()).with_document(document);
        self.contents.insert(document.to_string(), template);
    }
}

impl WindowHost for MockHost {
    type Content = MockWindow;
    type Window = MockWindow;

    fn viewport(&self) -> Viewport { self.viewport }

    fn window(&self, handle: WindowHandle) -> Option<&MockWindow> { self.windows.get(&handle) }

    fn window_mut(&mut self, handle: WindowHandle) -> Option<&mut MockWindow> {
        self.windows.get_mut(&handle)
    }

    fn open_windows(&self) -> Vec<WindowHandle> {
        self.windows.iter().filter(|(_, w)| w.open).map(|(&h, _)| h).collect()
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.notices.push((level, message.to_string()));
    }

    async fn resolve_content(&mut self, document: &DocumentRef) -> Result<MockWindow, HostError> {
        self.contents
            .get(document.as_str())
            .cloned()
            .ok_or_else(|| HostError::ContentNotFound(document.to_string()))
    }

    async fn open_window(
        &mut self,
        mut content: MockWindow,
        geometry: Rect,
    ) -> Result<WindowHandle, HostError> {
        let handle = self.next_handle;
        self.next_handle += 1;
        content.geometry = Some(geometry);
        content.open = true;
        self.windows.insert(handle, content);
        Ok(handle)
    }

    fn add_listener(&mut self, kind: ListenerKind, sink: SnapHandle) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, kind);
        self.sinks.insert(id, sink);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
        self.sinks.remove(&id);
    }
}
