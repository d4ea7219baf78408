//! Zero-delay deferred tasks for the logic context.
//!
//! A posted task never runs inside the call that posted it; it runs on the
//! next [`TaskQueue::run_pending`], which gives whoever is mounting alongside
//! us a chance to finish first. Tasks can be cancelled until they run.

use crate::platform::RuntimeScheduler;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

type Task = Box<dyn FnOnce() + 'static>;

struct TaskEntry {
    id: u64,
    task: Task,
}

struct TaskQueueInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    tasks: RefCell<VecDeque<TaskEntry>>,
    next_id: Cell<u64>,
}

#[derive(Clone)]
pub struct TaskQueue {
    inner: Rc<TaskQueueInner>,
}

impl TaskQueue {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(TaskQueueInner {
                scheduler,
                tasks: RefCell::new(VecDeque::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    pub fn post(&self, task: impl FnOnce() + 'static) -> TaskHandle {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.tasks.borrow_mut().push_back(TaskEntry {
            id,
            task: Box::new(task),
        });
        self.inner.scheduler.schedule_frame();
        TaskHandle {
            id,
            queue: Rc::downgrade(&self.inner),
        }
    }

    /// Runs the tasks that were queued before this call. Tasks posted while
    /// running wait for the next call.
    pub fn run_pending(&self) -> usize {
        let batch: Vec<TaskEntry> = self.inner.tasks.borrow_mut().drain(..).collect();
        let count = batch.len();
        for entry in batch {
            (entry.task)();
        }
        count
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.tasks.borrow().is_empty()
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.inner.tasks.borrow().len())
            .finish()
    }
}

/// Handle to a posted task. Dropping the handle does not cancel the task.
#[derive(Debug)]
pub struct TaskHandle {
    id: u64,
    queue: Weak<TaskQueueInner>,
}

impl TaskHandle {
    /// Removes the task if it has not run yet. Returns whether it was removed.
    pub fn cancel(self) -> bool {
        let Some(queue) = self.queue.upgrade() else {
            return false;
        };
        let mut tasks = queue.tasks.borrow_mut();
        match tasks.iter().position(|entry| entry.id == self.id) {
            Some(index) => {
                tasks.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.queue
            .upgrade()
            .map(|queue| queue.tasks.borrow().iter().any(|entry| entry.id == self.id))
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "tests/task_queue_tests.rs"]
mod tests;
