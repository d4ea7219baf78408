//! Best-effort haptic feedback.

use std::fmt;
use std::rc::Rc;

use crate::error::OverlayError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImpactStyle {
    Light,
    #[default]
    Medium,
    Heavy,
}

/// Host capability that produces a single tactile event.
pub trait HapticEngine {
    fn impact(&self, style: ImpactStyle) -> Result<(), OverlayError>;
}

/// Fire-and-forget pulse emitter. Failures are logged here; the returned
/// `Result` is informational and callers are free to drop it.
#[derive(Clone)]
pub struct HapticNotifier {
    engine: Rc<dyn HapticEngine>,
    style: ImpactStyle,
}

impl HapticNotifier {
    pub fn new(engine: Rc<dyn HapticEngine>) -> Self {
        Self::with_style(engine, ImpactStyle::default())
    }

    pub fn with_style(engine: Rc<dyn HapticEngine>, style: ImpactStyle) -> Self {
        Self { engine, style }
    }

    pub fn style(&self) -> ImpactStyle {
        self.style
    }

    pub fn pulse(&self) -> Result<(), OverlayError> {
        self.engine.impact(self.style).map_err(|err| {
            log::warn!("haptic pulse skipped: {err}");
            err
        })
    }
}

impl fmt::Debug for HapticNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HapticNotifier")
            .field("style", &self.style)
            .finish()
    }
}
