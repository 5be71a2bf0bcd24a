//! Snap runtime.
//!
//! The runtime owns the controller and the drag tracker and processes
//! [`SnapMessage`]s sequentially. Host listeners push events through a
//! [`SnapHandle`]; the only timer is the poll deadline of the current drag.
//!
//! # Panic Recovery
//!
//! Synchronous message handlers run under `catch_unwind`. A panicking handler
//! is logged and the loop keeps going, so one bad pointer event cannot take
//! the overlay down for the rest of the session.

mod handle;
mod messages;

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

pub use handle::{ActorError, SnapHandle};
pub use messages::SnapMessage;
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::controller::SnapController;
use super::events::{DragThresholds, DragTracker, INITIAL_INTERVAL, PollCommand, TrackerOutput};
use super::host::{ListenerId, ListenerKind, WindowHost};
use crate::config::SnapConfig;

/// Channel buffer size for the runtime.
const CHANNEL_BUFFER_SIZE: usize = 256;

/// Host listeners installed by the runtime.
#[derive(Debug, Default)]
pub struct Subscriptions {
    ids: Vec<(ListenerKind, ListenerId)>,
}

impl Subscriptions {
    #[must_use]
    pub fn len(&self) -> usize { self.ids.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    /// Returns true if a listener of this kind is installed.
    #[must_use]
    pub fn contains(&self, kind: ListenerKind) -> bool { self.ids.iter().any(|(k, _)| *k == kind) }

    fn push(&mut self, kind: ListenerKind, id: ListenerId) { self.ids.push((kind, id)); }

    fn drain(&mut self) -> impl Iterator<Item = (ListenerKind, ListenerId)> + '_ {
        self.ids.drain(..)
    }
}

/// What woke the loop up.
enum Wake {
    Message(Option<SnapMessage>),
    Poll,
}

/// Event loop driving one [`SnapController`].
pub struct SnapRuntime<H: WindowHost> {
    controller: SnapController<H>,
    tracker: DragTracker,
    subscriptions: Subscriptions,
    poll_deadline: Option<Instant>,
    poll_interval: Duration,
    sender: mpsc::WeakSender<SnapMessage>,
    receiver: mpsc::Receiver<SnapMessage>,
}

impl<H: WindowHost> SnapRuntime<H> {
    /// Create a runtime and a handle for talking to it.
    ///
    /// Nothing is subscribed until [`Self::install`] is called.
    pub fn new(host: H, config: SnapConfig) -> (Self, SnapHandle) {
        let (sender, receiver) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        let weak = sender.downgrade();
        let handle = SnapHandle::new(sender);
        let tracker = DragTracker::new(DragThresholds::from(&config));

        let runtime = Self {
            controller: SnapController::new(host, config),
            tracker,
            subscriptions: Subscriptions::default(),
            poll_deadline: None,
            poll_interval: INITIAL_INTERVAL,
            sender: weak,
            receiver,
        };
        (runtime, handle)
    }

    #[must_use]
    pub const fn controller(&self) -> &SnapController<H> { &self.controller }

    pub const fn controller_mut(&mut self) -> &mut SnapController<H> { &mut self.controller }

    #[must_use]
    pub const fn tracker(&self) -> &DragTracker { &self.tracker }

    #[must_use]
    pub const fn subscriptions(&self) -> &Subscriptions { &self.subscriptions }

    /// When the next window-position sample is due, if a drag is being polled.
    #[must_use]
    pub const fn poll_deadline(&self) -> Option<Instant> { self.poll_deadline }

    /// Subscribe to every host event the snap system reacts to.
    ///
    /// Does nothing when snapping is disabled, listeners are already installed,
    /// or every handle has been dropped.
    pub fn install(&mut self) {
        if !self.controller.config().enabled {
            tracing::info!("snap: disabled by configuration, not installing listeners");
            return;
        }
        if !self.subscriptions.is_empty() {
            return;
        }
        let Some(sender) = self.sender.upgrade() else {
            tracing::warn!("snap: runtime channel closed, not installing listeners");
            return;
        };

        let sink = SnapHandle::new(sender);
        for kind in ListenerKind::ALL {
            let id = self.controller.host_mut().add_listener(kind, sink.clone());
            tracing::trace!(?kind, %id, "snap: listener installed");
            self.subscriptions.push(kind, id);
        }
        tracing::debug!(listeners = self.subscriptions.len(), "snap: runtime installed");
    }

    /// Remove every host listener, cancel polling and hide the overlay.
    ///
    /// Snap records are kept.
    pub fn teardown(&mut self) {
        let subscriptions: Vec<_> = self.subscriptions.drain().collect();
        for (kind, id) in subscriptions {
            tracing::trace!(?kind, %id, "snap: listener removed");
            self.controller.host_mut().remove_listener(id);
        }
        self.poll_deadline = None;
        self.poll_interval = INITIAL_INTERVAL;
        self.tracker.reset();
        self.controller.hide();
        tracing::debug!("snap: runtime torn down");
    }

    /// Run the message loop until [`SnapMessage::Shutdown`] arrives or every
    /// handle is dropped, then give the runtime back.
    ///
    /// Installed listeners hold handles too; tear down before dropping the
    /// last caller handle to let the loop end on its own.
    pub async fn run(mut self) -> Self {
        tracing::trace!("snap: runtime loop starting");

        loop {
            let deadline = self.poll_deadline;
            let wake = tokio::select! {
                msg = self.receiver.recv() => Wake::Message(msg),
                () = wait_for_deadline(deadline) => Wake::Poll,
            };

            let msg = match wake {
                Wake::Poll => {
                    self.poll_tick();
                    continue;
                }
                Wake::Message(Some(msg)) => msg,
                Wake::Message(None) => {
                    tracing::debug!("snap: runtime channel closed, exiting");
                    return self;
                }
            };

            match msg {
                SnapMessage::Shutdown => {
                    tracing::debug!("snap: runtime received shutdown message");
                    return self;
                }
                SnapMessage::RestoreAll { respond_to } => {
                    let summary = self.controller.restore_all().await;
                    if respond_to.send(summary).is_err() {
                        tracing::debug!("snap: restore-all requester went away");
                    }
                }
                msg => self.dispatch(msg),
            }
        }
    }

    /// Handle one synchronous message with panic recovery.
    fn dispatch(&mut self, msg: SnapMessage) {
        let msg_name = msg.name();
        let result = catch_unwind(AssertUnwindSafe(|| self.handle_message(msg)));

        if let Err(panic_info) = result {
            let panic_msg = panic_info
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| panic_info.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());

            tracing::error!(message = msg_name, panic = %panic_msg, "snap: handler panicked");
            self.tracker.reset();
            self.poll_deadline = None;
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: SnapMessage) {
        match msg {
            SnapMessage::Pointer(event) => {
                self.controller.track_pointer(event.position);
                let output = self.tracker.handle_pointer(&event, &self.controller);
                self.apply(output);
            }
            SnapMessage::WindowClosed(identity) => {
                self.controller.on_window_closed(&identity);
            }
            SnapMessage::WindowReopened(identity) => {
                self.controller.on_window_reopened(&identity);
            }
            SnapMessage::ViewportResized(viewport) => self.controller.on_viewport_resized(viewport),
            SnapMessage::Snap { window, zone } => {
                if let Err(err) = self.controller.snap_to_zone(window, &zone) {
                    tracing::debug!(window, %zone, error = %err, "snap: snap command failed");
                }
            }
            SnapMessage::ToggleMaximize { window } => {
                if let Err(err) = self.controller.toggle_maximize(window) {
                    tracing::debug!(window, error = %err, "snap: toggle command failed");
                }
            }
            SnapMessage::Restore { window } => {
                if let Err(err) = self.controller.restore_app(window) {
                    tracing::debug!(window, error = %err, "snap: restore command failed");
                }
            }
            SnapMessage::Teardown => self.teardown(),
            other @ (SnapMessage::RestoreAll { .. } | SnapMessage::Shutdown) => {
                tracing::warn!(message = other.name(), "snap: loop-only message dispatched directly");
            }
        }
    }

    /// Take a window-position sample for the dragged window.
    pub fn poll_tick(&mut self) {
        let origin = self
            .tracker
            .active_window()
            .and_then(|window| self.controller.window_position(window));
        let output = self.tracker.handle_poll(origin, std::time::Instant::now());

        self.poll_deadline = self.tracker.is_dragging().then(|| Instant::now() + self.poll_interval);
        self.apply(output);
    }

    fn apply(&mut self, output: TrackerOutput) {
        for intent in output.intents {
            self.controller.apply_intent(intent);
        }
        if let Some(command) = output.poll {
            self.apply_poll(command);
        }
    }

    fn apply_poll(&mut self, command: PollCommand) {
        match command {
            PollCommand::Start(interval) | PollCommand::Restart(interval) => {
                tracing::trace!(?interval, "snap: poll interval set");
                self.poll_interval = interval;
                self.poll_deadline = Some(Instant::now() + interval);
            }
            PollCommand::Stop => {
                self.poll_deadline = None;
                self.poll_interval = INITIAL_INTERVAL;
            }
        }
    }
}

async fn wait_for_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

// ============================================================================
// Tests
// ============================================================================
