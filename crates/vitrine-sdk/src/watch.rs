use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::Stream;
use tokio::sync::mpsc::UnboundedReceiver;

// Re-export the event type for convenient use in client code
pub use vitrine_runtime::SessionEvent;

/// Stream of change notifications from one browsing session.
///
/// Yields a [`SessionEvent`] whenever the display list, pagination status,
/// or detail state changes. Ends when the session is dropped.
pub struct LiveStream {
    receiver: UnboundedReceiver<SessionEvent>,
}

impl LiveStream {
    pub(crate) fn new(receiver: UnboundedReceiver<SessionEvent>) -> Self {
        Self { receiver }
    }

    /// Poll for the next event (non-blocking).
    ///
    /// Returns `None` if no event is available immediately.
    pub fn try_next(&mut self) -> Option<SessionEvent> {
        self.receiver.try_recv().ok()
    }
}

impl Stream for LiveStream {
    type Item = SessionEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
