use crate::platform::RuntimeScheduler;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<FrameCallback>,
}

struct FrameCallbackQueue {
    scheduler: Arc<dyn RuntimeScheduler>,
    callbacks: RefCell<VecDeque<FrameCallbackEntry>>, // FUTURE(no_std): migrate to ring buffer.
    next_id: Cell<FrameCallbackId>,
}

impl FrameCallbackQueue {
    fn register(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.callbacks.borrow_mut().push_back(FrameCallbackEntry {
            id,
            callback: Some(callback),
        });
        self.scheduler.schedule_frame();
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        // Cancelling from inside a running callback must not panic; the
        // entry has already been taken out of the queue in that case.
        if let Ok(mut callbacks) = self.callbacks.try_borrow_mut() {
            if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
                callbacks.remove(index);
            }
        }
    }

    fn drain(&self, frame_time_nanos: u64) {
        // Callbacks registered while draining belong to the next frame.
        let pending: SmallVec<[FrameCallback; 4]> = {
            let mut callbacks = self.callbacks.borrow_mut();
            callbacks
                .drain(..)
                .filter_map(|mut entry| entry.callback.take())
                .collect()
        };
        for callback in pending {
            callback(frame_time_nanos);
        }
    }

    fn has_pending(&self) -> bool {
        !self.callbacks.borrow().is_empty()
    }
}

/// One-shot frame callbacks for a single execution context.
///
/// Each context (animation, logic) owns its own clock; the host calls
/// [`FrameClock::drain_frame_callbacks`] once per display frame.
#[derive(Clone)]
pub struct FrameClock {
    queue: Rc<FrameCallbackQueue>,
}

impl FrameClock {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            queue: Rc::new(FrameCallbackQueue {
                scheduler,
                callbacks: RefCell::new(VecDeque::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.queue.register(Box::new(callback));
        FrameCallbackRegistration {
            queue: Rc::downgrade(&self.queue),
            id: Some(id),
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| {
            let millis = nanos / 1_000_000;
            callback(millis);
        })
    }

    /// Runs every callback registered before this call with the given
    /// frame timestamp.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.queue.drain(frame_time_nanos);
    }

    pub fn has_pending_callbacks(&self) -> bool {
        self.queue.has_pending()
    }
}

impl fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameClock")
            .field("pending", &self.queue.callbacks.borrow().len())
            .finish()
    }
}

/// Keeps a frame callback alive. Dropping or cancelling it removes the
/// callback if it has not fired yet.
pub struct FrameCallbackRegistration {
    queue: Weak<FrameCallbackQueue>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(queue) = self.queue.upgrade() {
                queue.cancel(id);
            }
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for FrameCallbackRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameCallbackRegistration")
            .field("id", &self.id)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
