//! One-directional message passing from the animation context to the logic
//! context.
//!
//! The animation context only ever holds a [`LogicDispatcher`]. Posting is
//! non-blocking and never waits for the logic context; the logic context
//! drains its [`LogicInbox`] whenever the host gives it a turn.

use crate::platform::RuntimeScheduler;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};

struct DispatcherInner<M> {
    scheduler: Arc<dyn RuntimeScheduler>,
    tx: mpsc::Sender<M>,
    pending: Arc<AtomicUsize>,
}

/// Sending half of the logic channel. Cheap to clone and `Send`.
pub struct LogicDispatcher<M> {
    inner: Arc<DispatcherInner<M>>,
}

/// Receiving half of the logic channel, owned by the logic context.
pub struct LogicInbox<M> {
    rx: mpsc::Receiver<M>,
    pending: Arc<AtomicUsize>,
}

/// Creates a connected dispatcher/inbox pair. Every post asks `scheduler`
/// for a frame so the host knows the logic context has work.
pub fn logic_channel<M: Send + 'static>(
    scheduler: Arc<dyn RuntimeScheduler>,
) -> (LogicDispatcher<M>, LogicInbox<M>) {
    let (tx, rx) = mpsc::channel();
    let pending = Arc::new(AtomicUsize::new(0));
    let dispatcher = LogicDispatcher {
        inner: Arc::new(DispatcherInner {
            scheduler,
            tx,
            pending: Arc::clone(&pending),
        }),
    };
    (dispatcher, LogicInbox { rx, pending })
}

impl<M: Send + 'static> LogicDispatcher<M> {
    /// Fire-and-forget post. Messages are delivered in the order they were
    /// posted from this dispatcher and its clones on one thread.
    ///
    /// Returns `false` when the logic context is gone; the message is dropped.
    pub fn post(&self, message: M) -> bool {
        self.inner.pending.fetch_add(1, Ordering::SeqCst);
        match self.inner.tx.send(message) {
            Ok(()) => {
                self.inner.scheduler.schedule_frame();
                true
            }
            Err(_) => {
                self.inner.pending.fetch_sub(1, Ordering::SeqCst);
                log::debug!("logic context closed; dropping message");
                false
            }
        }
    }

    pub fn has_pending(&self) -> bool {
        self.inner.pending.load(Ordering::SeqCst) > 0
    }
}

impl<M> Clone for LogicDispatcher<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M> fmt::Debug for LogicDispatcher<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogicDispatcher")
            .field("pending", &self.inner.pending.load(Ordering::SeqCst))
            .finish()
    }
}

struct PendingGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> Drop for PendingGuard<'a> {
    fn drop(&mut self) {
        let previous = self.counter.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous > 0, "logic inbox pending count underflowed");
    }
}

impl<M> LogicInbox<M> {
    /// Hands every queued message to `handler` in FIFO order and returns how
    /// many were processed. Messages posted by `handler` itself are picked up
    /// in the same call.
    pub fn drain(&mut self, mut handler: impl FnMut(M)) -> usize {
        let mut processed = 0;
        while let Ok(message) = self.rx.try_recv() {
            let _guard = PendingGuard {
                counter: &self.pending,
            };
            handler(message);
            processed += 1;
        }
        processed
    }

    pub fn has_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }
}

impl<M> fmt::Debug for LogicInbox<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogicInbox")
            .field("pending", &self.pending.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
