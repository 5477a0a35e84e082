use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use crate::model::{ScanEvent, ScanReport};

/// Pull side of a running scan.
///
/// Yields `Size` and `Error` events in completion order and ends after the
/// run's `Done` marker. Dropping the stream cancels the run.
pub struct ScanStream {
    rx: UnboundedReceiver<ScanEvent>,
    cancel: CancellationToken,
    closed: bool,
}

impl ScanStream {
    pub(crate) fn new(rx: UnboundedReceiver<ScanEvent>, cancel: CancellationToken) -> Self {
        Self {
            rx,
            cancel,
            closed: false,
        }
    }

    /// Next result or error, `None` once every target has resolved
    pub async fn next_event(&mut self) -> Option<ScanEvent> {
        if self.closed {
            return None;
        }
        let event = self.rx.recv().await;
        self.accept(event)
    }

    /// Stop the scan; unresolved targets report `Cancelled`
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Drain the stream into a report
    pub async fn into_report(mut self) -> ScanReport {
        let mut report = ScanReport::default();
        while let Some(event) = self.next_event().await {
            match event {
                ScanEvent::Size(result) => report.results.push(result),
                ScanEvent::Error(failure) => report.errors.push(failure),
                ScanEvent::Done => {}
            }
        }
        report
    }

    fn accept(&mut self, event: Option<ScanEvent>) -> Option<ScanEvent> {
        match event {
            Some(ScanEvent::Done) | None => {
                self.closed = true;
                None
            }
            Some(event) => Some(event),
        }
    }
}

impl Stream for ScanStream {
    type Item = ScanEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<ScanEvent>> {
        let this = self.get_mut();
        if this.closed {
            return Poll::Ready(None);
        }
        let event = ready!(this.rx.poll_recv(cx));
        Poll::Ready(this.accept(event))
    }
}

impl Drop for ScanStream {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
