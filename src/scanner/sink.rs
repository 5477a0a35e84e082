//! Where scan events go
//!
//! The aggregator only knows how to `emit`; whether that lands in a channel
//! drained by a `ScanStream` or in a caller's callback is up to the sink.

use tokio::sync::mpsc::UnboundedSender;

use crate::model::ScanEvent;

/// Receiver of scan events. Must tolerate calls from any task.
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: ScanEvent);
}

impl EventSink for UnboundedSender<ScanEvent> {
    fn emit(&self, event: ScanEvent) {
        // Consumer went away; nothing left to tell
        if self.send(event).is_err() {
            tracing::trace!("scan event dropped, receiver closed");
        }
    }
}

/// Callback-style sink
pub struct CallbackSink<F>(pub F);

impl<F> EventSink for CallbackSink<F>
where
    F: Fn(ScanEvent) + Send + Sync + 'static,
{
    fn emit(&self, event: ScanEvent) {
        (self.0)(event)
    }
}
