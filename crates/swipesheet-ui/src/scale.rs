//! Delivery of the ancestor scale across the context boundary.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::error::OverlayError;

/// Ancestor view that shrinks while the overlay is presented. Injected at
/// construction rather than reached through a global setter.
pub trait ScaleConsumer {
    fn set_scale(&self, value: f32) -> Result<(), OverlayError>;
}

/// Best-effort forwarder: a failing consumer is logged and skipped so the
/// overlay's own animation never notices.
pub struct ScalePropagator {
    consumer: Rc<dyn ScaleConsumer>,
    last_delivered: Cell<Option<f32>>,
    failures: Cell<usize>,
}

impl ScalePropagator {
    pub fn new(consumer: Rc<dyn ScaleConsumer>) -> Self {
        Self {
            consumer,
            last_delivered: Cell::new(None),
            failures: Cell::new(0),
        }
    }

    pub fn deliver(&self, value: f32) -> Result<(), OverlayError> {
        match self.consumer.set_scale(value) {
            Ok(()) => {
                self.last_delivered.set(Some(value));
                Ok(())
            }
            Err(err) => {
                self.failures.set(self.failures.get() + 1);
                log::warn!("scale delivery failed: {err}");
                Err(err)
            }
        }
    }

    /// Last value the consumer accepted.
    pub fn last_delivered(&self) -> Option<f32> {
        self.last_delivered.get()
    }

    pub fn failures(&self) -> usize {
        self.failures.get()
    }
}

impl fmt::Debug for ScalePropagator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalePropagator")
            .field("last_delivered", &self.last_delivered.get())
            .field("failures", &self.failures.get())
            .finish()
    }
}
