//! Per-operation busy flags

use baymax_diagnostics::Operation;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Notify;

/// Set of operations currently outstanding
#[derive(Debug, Clone, Default)]
pub struct BusyFlags {
    active: Arc<Mutex<HashSet<Operation>>>,
    released: Arc<Notify>,
}

impl BusyFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `operation` as outstanding.
    ///
    /// Returns `None` if it already is. The flag is cleared when the returned
    /// guard is dropped, on every exit path.
    pub fn try_begin(&self, operation: Operation) -> Option<BusyGuard> {
        if !self.active.lock().insert(operation) {
            return None;
        }
        Some(BusyGuard {
            active: Arc::clone(&self.active),
            released: Arc::clone(&self.released),
            operation,
        })
    }

    /// Mark `operation` as outstanding, waiting for a current run to finish
    pub async fn begin_when_idle(&self, operation: Operation) -> BusyGuard {
        loop {
            let released = self.released.notified();
            tokio::pin!(released);
            released.as_mut().enable();
            if let Some(guard) = self.try_begin(operation) {
                return guard;
            }
            released.await;
        }
    }

    pub fn is_busy(&self, operation: Operation) -> bool {
        self.active.lock().contains(&operation)
    }
}

/// Clears its operation's busy flag on drop
#[derive(Debug)]
pub struct BusyGuard {
    active: Arc<Mutex<HashSet<Operation>>>,
    released: Arc<Notify>,
    operation: Operation,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.active.lock().remove(&self.operation);
        self.released.notify_waiters();
    }
}
