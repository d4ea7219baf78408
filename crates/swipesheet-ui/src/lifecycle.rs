//! Mount and teardown side effects of the overlay.

use std::rc::Rc;

use swipesheet_core::{TaskHandle, TaskQueue};

use crate::scale::ScalePropagator;

/// Scale the ancestor returns to once the overlay is gone.
pub const UNSCALED: f32 = 1.0;

/// Applies the expanded scale shortly after mount and restores the ancestor
/// on teardown, however teardown happens. Dropping the controller counts as
/// teardown.
#[derive(Debug)]
pub struct LifecycleController {
    propagator: Rc<ScalePropagator>,
    tasks: TaskQueue,
    expanded_scale: f32,
    pending: Option<TaskHandle>,
    mounted: bool,
}

impl LifecycleController {
    pub fn new(propagator: Rc<ScalePropagator>, tasks: TaskQueue, expanded_scale: f32) -> Self {
        Self {
            propagator,
            tasks,
            expanded_scale,
            pending: None,
            mounted: false,
        }
    }

    /// Defers the expanded-scale delivery by one task-queue turn so the
    /// ancestor can finish its own mount first.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let propagator = Rc::clone(&self.propagator);
        let scale = self.expanded_scale;
        self.pending = Some(self.tasks.post(move || {
            if propagator.deliver(scale).is_err() {
                log::debug!("initial scale not applied");
            }
        }));
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn has_pending_delivery(&self) -> bool {
        self.pending.as_ref().is_some_and(TaskHandle::is_pending)
    }

    /// Cancels the deferred delivery if it has not run and delivers
    /// [`UNSCALED`] unconditionally.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        if let Some(pending) = self.pending.take() {
            if pending.cancel() {
                log::debug!("unmounted before initial scale delivery");
            }
        }
        if self.propagator.deliver(UNSCALED).is_err() {
            log::debug!("cleanup scale not applied");
        }
    }
}

impl Drop for LifecycleController {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "tests/lifecycle_tests.rs"]
mod tests;
