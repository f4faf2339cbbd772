//! Debounced hover highlighting

use super::host::DocumentHost;
use super::sync::DocumentSync;
use super::types::HighlightItem;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Highlights the item under the pointer once it has stayed there for the
/// debounce interval. Scheduling a new item aborts the pending one if its
/// interval has not yet elapsed.
pub struct HoverHighlighter<H: DocumentHost + 'static> {
    sync: Arc<DocumentSync<H>>,
    debounce: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<H: DocumentHost + 'static> HoverHighlighter<H> {
    pub fn new(sync: Arc<DocumentSync<H>>, debounce: Duration) -> Self {
        Self {
            sync,
            debounce,
            pending: Mutex::new(None),
        }
    }

    /// Must be called from within a tokio runtime
    pub fn schedule(&self, item: HighlightItem) {
        let sync = Arc::clone(&self.sync);
        let debounce = self.debounce;

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            // Only the wait is abortable; a fired highlight runs to its final flush
            tokio::spawn(async move {
                if let Err(e) = sync.highlight(&item.text, item.color).await {
                    tracing::warn!(error = %e, "hover highlight failed");
                }
            });
        }));
    }

    /// Drop the pending highlight, if it has not fired yet
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<H: DocumentHost + 'static> Drop for HoverHighlighter<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
