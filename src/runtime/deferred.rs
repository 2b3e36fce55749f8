//! Single-slot deferred work.

/// Holds at most one task to run after the current update cycle.
///
/// Scheduling while a task is pending replaces it (last write wins).
#[derive(Debug)]
pub struct DeferredSlot<T> {
    pending: Option<T>,
}

impl<T> Default for DeferredSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> DeferredSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a pending task was replaced.
    pub fn schedule(&mut self, task: T) -> bool {
        self.pending.replace(task).is_some()
    }

    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref()
    }
}
