//! Idempotent close path for the overlay.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use swipesheet_core::{FrameCallbackRegistration, FrameClock};

use crate::haptics::HapticNotifier;

/// Host navigation stack.
pub trait Navigator {
    fn go_back(&self);
}

/// Guarantees at most one `go_back` per screen lifetime, no matter how many
/// paths ask to close.
pub struct NavigationGate {
    navigator: Rc<dyn Navigator>,
    haptics: HapticNotifier,
    clock: FrameClock,
    closing: Cell<bool>,
    navigated: Rc<Cell<bool>>,
    pending: RefCell<Option<FrameCallbackRegistration>>,
}

impl NavigationGate {
    pub fn new(navigator: Rc<dyn Navigator>, haptics: HapticNotifier, clock: FrameClock) -> Self {
        Self {
            navigator,
            haptics,
            clock,
            closing: Cell::new(false),
            navigated: Rc::new(Cell::new(false)),
            pending: RefCell::new(None),
        }
    }

    /// The first call pulses haptics and schedules `go_back` for the next
    /// frame of this context's clock. Later calls are no-ops and return
    /// `false`.
    pub fn request_close(&self) -> bool {
        if self.closing.replace(true) {
            log::debug!("close already requested; ignoring");
            return false;
        }

        let _ = self.haptics.pulse();

        let navigator = Rc::clone(&self.navigator);
        let navigated = Rc::clone(&self.navigated);
        let registration = self.clock.with_frame_nanos(move |_| {
            navigated.set(true);
            navigator.go_back();
        });
        *self.pending.borrow_mut() = Some(registration);
        true
    }

    pub fn is_closing(&self) -> bool {
        self.closing.get()
    }

    pub fn has_navigated(&self) -> bool {
        self.navigated.get()
    }
}

impl fmt::Debug for NavigationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationGate")
            .field("closing", &self.closing.get())
            .field("navigated", &self.navigated.get())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
