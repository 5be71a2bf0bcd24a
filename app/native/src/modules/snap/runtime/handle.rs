//! Handle for communicating with the snap runtime.
//!
//! The `SnapHandle` is the sink host listeners forward events into, and the
//! entry point for UI commands.

use tokio::sync::{mpsc, oneshot};

use super::messages::SnapMessage;
use crate::modules::snap::controller::RestoreSummary;
use crate::modules::snap::events::PointerEvent;

/// Error types for runtime communication.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// Failed to send message to the runtime.
    #[error("Failed to send message to snap runtime: channel closed")]
    SendFailed,

    /// Failed to receive a reply from the runtime.
    #[error("Failed to receive response from snap runtime: channel closed")]
    ReceiveFailed,
}

/// Handle for communicating with the snap runtime.
///
/// This handle is cheap to clone.
#[derive(Clone, Debug)]
pub struct SnapHandle {
    sender: mpsc::Sender<SnapMessage>,
}

impl SnapHandle {
    pub(crate) const fn new(sender: mpsc::Sender<SnapMessage>) -> Self { Self { sender } }

    /// Send a message without waiting for delivery.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed or full.
    pub fn send(&self, msg: SnapMessage) -> Result<(), ActorError> {
        self.sender.try_send(msg).map_err(|_| ActorError::SendFailed)
    }

    /// Send a message, waiting for buffer space.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed.
    pub async fn send_async(&self, msg: SnapMessage) -> Result<(), ActorError> {
        self.sender.send(msg).await.map_err(|_| ActorError::SendFailed)
    }

    /// Forward a pointer event.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed or full.
    pub fn pointer(&self, event: PointerEvent) -> Result<(), ActorError> {
        self.send(SnapMessage::Pointer(event))
    }

    /// Restore every snapped window and wait for the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed, or
    /// [`ActorError::ReceiveFailed`] if the runtime stopped before replying.
    pub async fn restore_all(&self) -> Result<RestoreSummary, ActorError> {
        let (tx, rx) = oneshot::channel();

        self.sender
            .send(SnapMessage::RestoreAll { respond_to: tx })
            .await
            .map_err(|_| ActorError::SendFailed)?;

        rx.await.map_err(|_| ActorError::ReceiveFailed)
    }

    /// Ask the runtime to stop.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the runtime already stopped.
    pub async fn shutdown(&self) -> Result<(), ActorError> {
        self.send_async(SnapMessage::Shutdown).await
    }
}
